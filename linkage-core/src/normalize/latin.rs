//! Latin name normalization
//!
//! Lowercases, removes accents by canonical decomposition (dropping the
//! combining marks, then recomposing the base letters), strips punctuation
//! and collapses whitespace.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use super::{collapse_whitespace, fold_digits, strip_punctuation, NameLanguage, NormalizedName};

/// Normalize a Latin-script name for comparison.
///
/// # Example
/// ```
/// use linkage_core::normalize::normalize_latin_name;
///
/// assert_eq!(normalize_latin_name("Jean-François").unwrap().as_str(), "jean-francois");
/// assert_eq!(normalize_latin_name("  ZOË   O'Hara ").unwrap().as_str(), "zoe ohara");
/// ```
pub fn normalize_latin_name(raw: &str) -> Option<NormalizedName> {
    if raw.trim().is_empty() {
        return None;
    }

    let s = fold_digits(raw);
    let s = s.to_lowercase();
    let s = strip_accents(&s);
    let s = strip_punctuation(&s);
    let s = collapse_whitespace(&s);

    NormalizedName::new(NameLanguage::Latin, s)
}

/// Remove combining marks after canonical decomposition.
///
/// Letters without a decomposition (`ø`, `ł`, `ß`) pass through unchanged.
pub fn strip_accents(s: &str) -> String {
    s.nfd().filter(|&c| !is_combining_mark(c)).nfc().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn norm(s: &str) -> String {
        normalize_latin_name(s)
            .map(NormalizedName::into_string)
            .unwrap_or_default()
    }

    #[test]
    fn test_strip_accents() {
        assert_eq!(strip_accents("élodie"), "elodie");
        assert_eq!(strip_accents("françois"), "francois");
        assert_eq!(strip_accents("łukasz"), "łukasz");
        assert_eq!(strip_accents("nguyễn"), "nguyen");
    }

    #[test]
    fn test_full_pipeline() {
        assert_eq!(norm("Jean-François"), "jean-francois");
        assert_eq!(norm("  MARIE   Thérèse "), "marie therese");
        assert_eq!(norm("Georges, Jr."), "georges jr");
        assert_eq!(norm("Elie ٣"), "elie 3");
    }

    #[test]
    fn test_blank_input() {
        assert!(normalize_latin_name("").is_none());
        assert!(normalize_latin_name("   ").is_none());
        assert!(normalize_latin_name("...").is_none());
    }

    #[test]
    fn test_idempotent() {
        for raw in ["Jean-François", "ÉLODIE  d'Arc", "Zoë", "İbrahim", "  Ma\u{0301}ria  "] {
            let once = norm(raw);
            assert_eq!(norm(&once), once, "not idempotent for {raw:?}");
        }
    }

    #[test]
    fn test_language_tag() {
        let name = normalize_latin_name("Rami").unwrap();
        assert_eq!(name.language(), NameLanguage::Latin);
        assert_eq!(name.to_string(), "rami");
    }
}
