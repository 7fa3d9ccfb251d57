//! Text Normalization - Making Registry and Online Input Comparable
//!
//! Registry data was typed by operators over decades; online data is typed
//! by citizens. Both go through the same pipelines before any comparison.
//!
//! | Pipeline | Input | Output |
//! |----------|-------|--------|
//! | [Arabic names](arabic) | free-typed Arabic | diacritic/tatweel-free, folded letters |
//! | [Latin names](latin) | free-typed Latin | lowercase, accent-free |
//! | [Identifiers](identifiers) | phones, plates, documents | E.164 / uppercase canonical |
//!
//! Each pipeline is a sequence of small public steps so that every
//! substitution rule can be exercised on its own. All pipelines are
//! idempotent and return `None` when nothing comparable is left.
//!
//! # Example
//!
//! ```
//! use linkage_core::normalize::{normalize_arabic_name, normalize_latin_name, normalize_phone};
//!
//! assert_eq!(normalize_arabic_name("أحمـــد").unwrap().as_str(), "احمد");
//! assert_eq!(normalize_latin_name("Jean-François").unwrap().as_str(), "jean-francois");
//! assert_eq!(normalize_phone("03123456").as_deref(), Some("+9613123456"));
//! ```

pub mod arabic;
pub mod identifiers;
pub mod latin;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{LinkageError, Result};

pub use arabic::normalize_arabic_name;
pub use identifiers::{
    normalize_document_number, normalize_phone, normalize_phone_with,
    normalize_registration_number,
};
pub use latin::normalize_latin_name;

/// Script a normalized name was produced for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NameLanguage {
    Arabic,
    Latin,
}

impl NameLanguage {
    /// Guess the script of raw input: Arabic if any Arabic letter appears.
    pub fn detect(raw: &str) -> Self {
        if raw.chars().any(arabic::is_arabic_letter) {
            NameLanguage::Arabic
        } else {
            NameLanguage::Latin
        }
    }
}

/// A name that has been through one of the name pipelines.
///
/// Deserializing re-runs the pipeline for `language` and rejects values
/// that are empty or would change.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "NormalizedNameRepr")]
pub struct NormalizedName {
    language: NameLanguage,
    value: String,
}

#[derive(Deserialize)]
struct NormalizedNameRepr {
    language: NameLanguage,
    value: String,
}

impl TryFrom<NormalizedNameRepr> for NormalizedName {
    type Error = LinkageError;

    fn try_from(repr: NormalizedNameRepr) -> Result<Self> {
        let renormalized = match repr.language {
            NameLanguage::Arabic => normalize_arabic_name(&repr.value),
            NameLanguage::Latin => normalize_latin_name(&repr.value),
        };
        match renormalized {
            Some(name) if name.value == repr.value => Ok(name),
            Some(_) => Err(LinkageError::InvalidName {
                value: repr.value,
                reason: "not in normalized form",
            }),
            None => Err(LinkageError::InvalidName {
                value: repr.value,
                reason: "empty after normalization",
            }),
        }
    }
}

impl NormalizedName {
    fn new(language: NameLanguage, value: String) -> Option<Self> {
        if value.is_empty() {
            None
        } else {
            Some(Self { language, value })
        }
    }

    /// Normalize with the pipeline matching the detected script.
    pub fn detect(raw: &str) -> Option<Self> {
        match NameLanguage::detect(raw) {
            NameLanguage::Arabic => normalize_arabic_name(raw),
            NameLanguage::Latin => normalize_latin_name(raw),
        }
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.value
    }

    #[inline]
    pub fn language(&self) -> NameLanguage {
        self.language
    }

    pub fn into_string(self) -> String {
        self.value
    }
}

impl AsRef<str> for NormalizedName {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for NormalizedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

// ============================================================================
// Shared steps
// ============================================================================

/// Map Arabic-Indic (U+0660..U+0669) and Extended Arabic-Indic
/// (U+06F0..U+06F9) digits to ASCII digits.
///
/// ```
/// use linkage_core::normalize::fold_digits;
///
/// assert_eq!(fold_digits("٠١٢٣ ۴۵۶"), "0123 456");
/// ```
pub fn fold_digits(s: &str) -> String {
    s.chars().map(fold_digit).collect()
}

#[inline]
fn fold_digit(c: char) -> char {
    let offset = match c {
        '\u{0660}'..='\u{0669}' => c as u32 - 0x0660,
        '\u{06F0}'..='\u{06F9}' => c as u32 - 0x06F0,
        _ => return c,
    };
    char::from_digit(offset, 10).unwrap_or(c)
}

/// Drop everything except word characters, whitespace and hyphens.
pub fn strip_punctuation(s: &str) -> String {
    s.chars()
        .filter(|&c| c.is_alphanumeric() || c == '_' || c == '-' || c.is_whitespace())
        .collect()
}

/// Collapse whitespace runs to a single space and trim both ends.
pub fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// True for absent or whitespace-only input.
#[inline]
pub fn is_blank(s: Option<&str>) -> bool {
    s.map_or(true, |s| s.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fold_digits() {
        assert_eq!(fold_digits("٠١٢٣٤٥٦٧٨٩"), "0123456789");
        assert_eq!(fold_digits("۰۱۲۳۴۵۶۷۸۹"), "0123456789");
        assert_eq!(fold_digits("abc 42"), "abc 42");
    }

    #[test]
    fn test_strip_punctuation() {
        assert_eq!(strip_punctuation("o'neil, jr."), "oneil jr");
        assert_eq!(strip_punctuation("abi-khalil"), "abi-khalil");
        assert_eq!(strip_punctuation("ali_2"), "ali_2");
    }

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("  a \t b\n\nc  "), "a b c");
        assert_eq!(collapse_whitespace("   "), "");
    }

    #[test]
    fn test_is_blank() {
        assert!(is_blank(None));
        assert!(is_blank(Some(" \t ")));
        assert!(!is_blank(Some(" x ")));
    }

    #[test]
    fn test_detect_language() {
        assert_eq!(NameLanguage::detect("محمد"), NameLanguage::Arabic);
        assert_eq!(NameLanguage::detect("Mohamad"), NameLanguage::Latin);
        assert_eq!(NameLanguage::detect("123"), NameLanguage::Latin);

        let name = NormalizedName::detect(" إيمان ").unwrap();
        assert_eq!(name.language(), NameLanguage::Arabic);
        assert_eq!(name.as_str(), "ايمان");
        assert!(NormalizedName::detect("  ").is_none());
    }

    #[test]
    fn test_deserialize_checks_normal_form() {
        let name: NormalizedName =
            serde_json::from_str(r#"{"language":"latin","value":"zoe"}"#).unwrap();
        assert_eq!(name.as_str(), "zoe");
        assert_eq!(name.language(), NameLanguage::Latin);

        let json = serde_json::to_string(&NormalizedName::detect("أحمد").unwrap()).unwrap();
        let back: NormalizedName = serde_json::from_str(&json).unwrap();
        assert_eq!(back.as_str(), "احمد");

        for bad in [
            r#"{"language":"latin","value":"Zoé"}"#,
            r#"{"language":"latin","value":""}"#,
            r#"{"language":"arabic","value":"أحمد"}"#,
        ] {
            let err = serde_json::from_str::<NormalizedName>(bad).unwrap_err();
            assert!(err.to_string().contains("invalid normalized name"), "{bad}: {err}");
        }
    }
}
