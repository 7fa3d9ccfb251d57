//! Arabic nickname variants
//!
//! Arabic nicknames reduplicate a one to three letter base (لولو, ميمي).
//! Variants keep the base verbatim and add a damma after the first
//! consonant of either copy, the way the nickname is often vocalized.

use std::ops::RangeInclusive;

use super::alias::AliasTable;
use super::{reduplicative_base, VariantList};
use crate::normalize::normalize_arabic_name;

/// Base syllable lengths tried, shortest first.
pub const ARABIC_BASE_LENGTHS: RangeInclusive<usize> = 1..=3;

/// Damma U+064F
pub const DAMMA: char = '\u{064F}';

/// Bare alef U+0627
const ALEF: char = '\u{0627}';

/// Insert a damma after the first consonant of `base`.
///
/// The leading letter is the first consonant; waw and ya open a word as
/// consonants. Only a leading bare alef is passed over. Returns `None`
/// when the base has no other letter.
pub fn insert_damma(base: &[char]) -> Option<String> {
    let idx = usize::from(base.first() == Some(&ALEF));
    if idx >= base.len() {
        return None;
    }
    let mut out: String = base[..=idx].iter().collect();
    out.push(DAMMA);
    out.extend(&base[idx + 1..]);
    Some(out)
}

/// Generate Arabic nickname variants for a first name.
pub(crate) fn expand(raw: &str, aliases: &AliasTable, cap: usize) -> Vec<String> {
    let Some(seed) = normalize_arabic_name(raw).map(|n| n.into_string()) else {
        return Vec::new();
    };
    let chars: Vec<char> = seed.chars().collect();

    let mut out = VariantList::new(cap);

    if let Some(base) = reduplicative_base(&chars, ARABIC_BASE_LENGTHS, |_| true) {
        let base_str: String = base.iter().collect();
        out.push(base_str.repeat(2));

        if let Some(voweled) = insert_damma(base) {
            out.push(format!("{voweled}{base_str}"));
            out.push(format!("{base_str}{voweled}"));
        }
        out.push(seed);
        return out.into_vec();
    }

    for alias in aliases.aliases_of(&seed) {
        out.push(alias.to_string());
    }
    out.into_vec()
}
