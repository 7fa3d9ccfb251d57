//! Latin nickname variants
//!
//! A reduplicated nickname ("lulu", "loulou", "mimi") is rebuilt from its
//! base syllable with every common spelling of the vowel nucleus:
//!
//! ```text
//!  seed "loulou" ──collapse ou/oo──▶ "lolo" ──base──▶ "lo"
//!                                                      │
//!            pre "l" · nucleus "o" · post ""  ◀────────┘
//!                           │
//!     o, ou, u, oo, a, e, i ┴──▶ lolo, loulou, lulu, looloo, lala, lele, lili
//! ```

use std::ops::RangeInclusive;

use super::alias::AliasTable;
use super::{reduplicative_base, VariantList};
use crate::normalize::normalize_latin_name;

/// Spellings of a rounded back vowel, tried in this order.
pub const OU_FAMILY: &[&str] = &["o", "ou", "u", "oo"];

/// Spellings of the remaining vowels, tried after the ou-family.
pub const AEI_FAMILY: &[&str] = &["a", "e", "i"];

/// Base syllable lengths tried, shortest first.
pub const LATIN_BASE_LENGTHS: RangeInclusive<usize> = 2..=4;

const VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u'];

#[inline]
pub fn is_vowel(c: char) -> bool {
    VOWELS.contains(&c)
}

/// Collapse the `ou` and `oo` digraphs to `o`.
///
/// ```
/// use linkage_core::hypocorism::latin::collapse_digraphs;
///
/// assert_eq!(collapse_digraphs("loulou"), "lolo");
/// assert_eq!(collapse_digraphs("looloo"), "lolo");
/// ```
pub fn collapse_digraphs(s: &str) -> String {
    s.to_lowercase().replace("ou", "o").replace("oo", "o")
}

/// Split a base syllable around its first maximal vowel run.
///
/// Returns `(pre-consonants, nucleus, post-consonants)`, or `None` when the
/// base has no vowel.
pub fn split_nucleus(base: &[char]) -> Option<(String, String, String)> {
    let start = base.iter().position(|&c| is_vowel(c))?;
    let len = base[start..].iter().take_while(|&&c| is_vowel(c)).count();
    let end = start + len;

    Some((
        base[..start].iter().collect(),
        base[start..end].iter().collect(),
        base[end..].iter().collect(),
    ))
}

/// Generate Latin nickname variants for a first name.
pub(crate) fn expand(raw: &str, aliases: &AliasTable, cap: usize) -> Vec<String> {
    let Some(seed) = normalize_latin_name(raw).map(|n| n.into_string()) else {
        return Vec::new();
    };
    let collapsed = collapse_digraphs(&seed);
    let chars: Vec<char> = collapsed.chars().collect();

    let mut out = VariantList::new(cap);

    if let Some(base) = reduplicative_base(&chars, LATIN_BASE_LENGTHS, is_vowel) {
        let base_str: String = base.iter().collect();
        out.push(seed);
        out.push(base_str.repeat(2));

        if let Some((pre, _nucleus, post)) = split_nucleus(base) {
            for spelling in OU_FAMILY.iter().chain(AEI_FAMILY) {
                out.push(format!("{pre}{spelling}{post}").repeat(2));
            }
        }
        return out.into_vec();
    }

    let mut found = aliases.aliases_of(&seed);
    if found.is_empty() {
        found = aliases.aliases_of(&collapsed);
    }
    for alias in found {
        if alias != seed {
            out.push(alias.to_string());
        }
    }
    out.into_vec()
}
