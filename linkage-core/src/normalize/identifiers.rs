//! Phone, registration and document number normalization.
//!
//! Phone numbers are rewritten to an E.164 shape using one country's
//! dialing convention: `00` and `+` mark an international number, a single
//! leading `0` is the national trunk prefix. Deployments in other locales
//! pass their own calling code to [`normalize_phone_with`].

use super::{collapse_whitespace, fold_digits};
use crate::config::DEFAULT_COUNTRY_CODE;

/// Normalize a phone number using the default country calling code (961).
///
/// # Example
/// ```
/// use linkage_core::normalize::normalize_phone;
///
/// assert_eq!(normalize_phone("03 123 456").as_deref(), Some("+9613123456"));
/// assert_eq!(normalize_phone("00961 3 123456").as_deref(), Some("+9613123456"));
/// assert_eq!(normalize_phone("n/a"), None);
/// ```
pub fn normalize_phone(raw: &str) -> Option<String> {
    normalize_phone_with(raw, DEFAULT_COUNTRY_CODE)
}

/// Normalize a phone number, prefixing `country_code` to national numbers.
pub fn normalize_phone_with(raw: &str, country_code: &str) -> Option<String> {
    let folded = fold_digits(raw.trim());
    let digits: String = folded.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }

    // "(00961) ..." and "[+33] ..." still carry an international prefix
    let lead = folded.trim_start_matches(|c: char| c.is_whitespace() || matches!(c, '(' | '['));

    let international = if lead.starts_with("00") {
        digits.get(2..).unwrap_or_default()
    } else if lead.starts_with('+') {
        digits.as_str()
    } else if digits.len() > 1 && digits.starts_with('0') {
        return Some(format!("+{}{}", country_code, &digits[1..]));
    } else if !digits.starts_with(country_code) {
        return Some(format!("+{}{}", country_code, digits));
    } else {
        digits.as_str()
    };

    if international.is_empty() {
        return None;
    }
    Some(format!("+{}", international))
}

/// Normalize a vehicle registration number.
///
/// Hyphens are kept and any whitespace around them is removed.
///
/// # Example
/// ```
/// use linkage_core::normalize::normalize_registration_number;
///
/// assert_eq!(normalize_registration_number(" b - 123 456 ").as_deref(), Some("B-123 456"));
/// ```
pub fn normalize_registration_number(raw: &str) -> Option<String> {
    let s = canonical_uppercase(raw, true);
    let s = tighten_hyphens(&s);
    let s = collapse_whitespace(&s);
    non_empty(s)
}

/// Normalize an identity document number (ID card, passport, license).
///
/// Hyphens are dropped and inner spaces kept, so `"LD-445"` becomes
/// `"LD445"` while `"LD 445"` stays `"LD 445"`.
///
/// # Example
/// ```
/// use linkage_core::normalize::normalize_document_number;
///
/// assert_eq!(normalize_document_number("rl-00.123/45").as_deref(), Some("RL0012345"));
/// ```
pub fn normalize_document_number(raw: &str) -> Option<String> {
    let s = canonical_uppercase(raw, false);
    let s = collapse_whitespace(&s);
    non_empty(s)
}

/// Digit-fold, uppercase and keep only `[A-Z0-9 ]` (plus `-` when asked).
fn canonical_uppercase(raw: &str, keep_hyphen: bool) -> String {
    fold_digits(raw)
        .to_uppercase()
        .chars()
        .map(|c| if c.is_whitespace() { ' ' } else { c })
        .filter(|&c| {
            c.is_ascii_uppercase() || c.is_ascii_digit() || c == ' ' || (keep_hyphen && c == '-')
        })
        .collect()
}

/// Remove spaces on either side of every hyphen (`"B - 12"` to `"B-12"`).
pub fn tighten_hyphens(s: &str) -> String {
    s.split('-')
        .map(str::trim)
        .collect::<Vec<_>>()
        .join("-")
}

fn non_empty(s: String) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}
