//! Arabic name normalization
//!
//! Pipeline, in order:
//! 1. Arabic-Indic digits to ASCII
//! 2. Strip tatweel (ـ)
//! 3. Strip harakat and the stray small waw
//! 4. Alef variants (أ إ آ ٱ) to plain alef (ا)
//! 5. Alef maksura (ى) to ya (ي)
//! 6. Hamza carriers: ئ to ي, ؤ to و, standalone ء dropped
//! 7. Strip punctuation
//! 8. Collapse whitespace and trim
//!
//! Teh marbuta (ة) is NOT folded to ha (ه); the two stay distinct.

use super::{collapse_whitespace, fold_digits, strip_punctuation, NameLanguage, NormalizedName};

/// Tatweel (elongation) U+0640
pub const TATWEEL: char = '\u{0640}';

/// Harakat range U+064B (fathatan) to U+065F (wavy hamza below)
const HARAKAT: std::ops::RangeInclusive<char> = '\u{064B}'..='\u{065F}';

/// Marks outside the harakat block that still show up in typed names
const STRAY_MARKS: &[char] = &[
    '\u{0670}', // Superscript alef
    '\u{06E5}', // Small waw
];

/// Alef variants folded to plain alef (ا)
const ALEF_VARIANTS: &[char] = &[
    '\u{0623}', // Alef with hamza above (أ)
    '\u{0625}', // Alef with hamza below (إ)
    '\u{0622}', // Alef with madda (آ)
    '\u{0671}', // Alef wasla (ٱ)
];

const ALEF: char = '\u{0627}';
const ALEF_MAKSURA: char = '\u{0649}';
const YA: char = '\u{064A}';
const WAW: char = '\u{0648}';
const HAMZA: char = '\u{0621}';
const HAMZA_ON_YA: char = '\u{0626}';
const HAMZA_ON_WAW: char = '\u{0624}';

/// Normalize an Arabic name for comparison.
///
/// Returns `None` for blank input or when nothing survives the pipeline.
///
/// # Example
/// ```
/// use linkage_core::normalize::normalize_arabic_name;
///
/// assert_eq!(normalize_arabic_name("أحمـــد").unwrap().as_str(), "احمد");
/// assert_eq!(normalize_arabic_name("مُصْطَفَى").unwrap().as_str(), "مصطفي");
/// assert!(normalize_arabic_name("   ").is_none());
/// ```
pub fn normalize_arabic_name(raw: &str) -> Option<NormalizedName> {
    if raw.trim().is_empty() {
        return None;
    }

    let s = fold_digits(raw);
    let s = strip_tatweel(&s);
    let s = strip_diacritics(&s);
    let s = fold_alef(&s);
    let s = fold_alef_maksura(&s);
    let s = fold_hamza(&s);
    let s = strip_punctuation(&s);
    let s = collapse_whitespace(&s);

    NormalizedName::new(NameLanguage::Arabic, s)
}

/// Remove the tatweel elongation character.
pub fn strip_tatweel(s: &str) -> String {
    s.chars().filter(|&c| c != TATWEEL).collect()
}

/// Remove harakat (U+064B..U+065F), superscript alef and small waw.
pub fn strip_diacritics(s: &str) -> String {
    s.chars()
        .filter(|c| !HARAKAT.contains(c) && !STRAY_MARKS.contains(c))
        .collect()
}

/// Fold hamza-above, hamza-below, madda and wasla alefs to plain alef.
pub fn fold_alef(s: &str) -> String {
    s.chars()
        .map(|c| if ALEF_VARIANTS.contains(&c) { ALEF } else { c })
        .collect()
}

/// Fold alef maksura to ya.
pub fn fold_alef_maksura(s: &str) -> String {
    s.chars()
        .map(|c| if c == ALEF_MAKSURA { YA } else { c })
        .collect()
}

/// Fold hamza carriers to their bare letter and drop standalone hamza.
pub fn fold_hamza(s: &str) -> String {
    s.chars()
        .filter_map(|c| match c {
            HAMZA_ON_YA => Some(YA),
            HAMZA_ON_WAW => Some(WAW),
            HAMZA => None,
            _ => Some(c),
        })
        .collect()
}

/// Check if a character is an Arabic letter.
#[inline]
pub fn is_arabic_letter(c: char) -> bool {
    let code = c as u32;
    // Arabic, Arabic Supplement, Arabic Extended-A
    let in_block = (0x0600..=0x06FF).contains(&code)
        || (0x0750..=0x077F).contains(&code)
        || (0x08A0..=0x08FF).contains(&code);
    in_block && c.is_alphabetic()
}
