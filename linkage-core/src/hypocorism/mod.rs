//! Hypocorism Expansion - Nickname Variants for First Names
//!
//! Registry operators often typed the nickname a citizen is known by
//! ("Lulu", "Loulou", "Lolo") rather than the given name. Exact and
//! near-exact matching misses those, so the first name is widened into a
//! bounded set of spellings from the same nickname family.
//!
//! - `latin`: reduplicated-syllable detection with vowel-family respelling
//! - `arabic`: reduplicated-base detection with damma vocalization
//! - `alias`: fixed families of mutual aliases used when no reduplication
//!   is visible
//!
//! This is a heuristic, not a dictionary: any reduplicated-syllable name is
//! expanded, not just the ones listed in the alias table.
//!
//! # Example
//!
//! ```
//! use linkage_core::hypocorism::build_hypocorism_set;
//!
//! let set = build_hypocorism_set(None, Some("Lulu"));
//! assert!(set.applied());
//! assert!(set.latin_variants().iter().any(|v| v == "loulou"));
//! assert!(set.arabic_variants().is_empty());
//! ```

pub mod alias;
pub mod arabic;
pub mod latin;

use std::ops::RangeInclusive;
use std::sync::{Arc, LazyLock};

use serde::Serialize;
use tracing::trace;

use crate::config::{LinkageConfig, MAX_HYPOCORISM_VARIANTS};
use alias::{AliasTable, DEFAULT_LATIN_ALIASES};

pub use alias::LATIN_ALIAS_FAMILIES;
pub use latin::{AEI_FAMILY, OU_FAMILY};

static DEFAULT_EXPANDER: LazyLock<HypocorismExpander> = LazyLock::new(HypocorismExpander::new);

// ============================================================================
// Hypocorism Set
// ============================================================================

/// Nickname variants for one matching attempt.
///
/// Each list is ordered (earliest generated first), unique, and holds at
/// most 12 entries. Built once and never modified.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HypocorismSet {
    applied: bool,
    arabic_variants: Vec<String>,
    latin_variants: Vec<String>,
}

impl HypocorismSet {
    fn new(arabic_variants: Vec<String>, latin_variants: Vec<String>) -> Self {
        Self {
            applied: !arabic_variants.is_empty() || !latin_variants.is_empty(),
            arabic_variants,
            latin_variants,
        }
    }

    /// True if at least one language produced variants.
    #[inline]
    pub fn applied(&self) -> bool {
        self.applied
    }

    #[inline]
    pub fn arabic_variants(&self) -> &[String] {
        &self.arabic_variants
    }

    #[inline]
    pub fn latin_variants(&self) -> &[String] {
        &self.latin_variants
    }
}

// ============================================================================
// Expander
// ============================================================================

/// Nickname expander with its alias tables and variant cap.
#[derive(Debug, Clone)]
pub struct HypocorismExpander {
    latin_aliases: Arc<AliasTable>,
    arabic_aliases: Arc<AliasTable>,
    max_variants: usize,
}

impl Default for HypocorismExpander {
    fn default() -> Self {
        Self::new()
    }
}

impl HypocorismExpander {
    /// Expander with the built-in Latin aliases, no Arabic aliases and the
    /// 12-variant cap.
    pub fn new() -> Self {
        Self {
            latin_aliases: Arc::clone(&DEFAULT_LATIN_ALIASES),
            arabic_aliases: Arc::new(AliasTable::empty()),
            max_variants: MAX_HYPOCORISM_VARIANTS,
        }
    }

    /// Expander using the variant cap from `config`.
    pub fn from_config(config: &LinkageConfig) -> Self {
        Self::new().with_max_variants(config.max_hypocorism_variants)
    }

    /// Lower the per-language cap (clamped to 1..=12).
    pub fn with_max_variants(mut self, max_variants: usize) -> Self {
        self.max_variants = max_variants.clamp(1, MAX_HYPOCORISM_VARIANTS);
        self
    }

    /// Replace the Latin alias table.
    pub fn with_latin_aliases(mut self, aliases: AliasTable) -> Self {
        self.latin_aliases = Arc::new(aliases);
        self
    }

    /// Replace the Arabic alias table.
    pub fn with_arabic_aliases(mut self, aliases: AliasTable) -> Self {
        self.arabic_aliases = Arc::new(aliases);
        self
    }

    #[inline]
    pub fn max_variants(&self) -> usize {
        self.max_variants
    }

    /// Latin variants for a raw or normalized first name.
    pub fn expand_latin(&self, first_name: &str) -> Vec<String> {
        latin::expand(first_name, &self.latin_aliases, self.max_variants)
    }

    /// Arabic variants for a raw or normalized first name.
    pub fn expand_arabic(&self, first_name: &str) -> Vec<String> {
        arabic::expand(first_name, &self.arabic_aliases, self.max_variants)
    }

    /// Build the variant set for a citizen's first name in either script.
    pub fn build(&self, arabic_first: Option<&str>, latin_first: Option<&str>) -> HypocorismSet {
        let arabic_variants = arabic_first
            .map(|name| self.expand_arabic(name))
            .unwrap_or_default();
        let latin_variants = latin_first
            .map(|name| self.expand_latin(name))
            .unwrap_or_default();

        trace!(
            arabic = arabic_variants.len(),
            latin = latin_variants.len(),
            "Built hypocorism set"
        );

        HypocorismSet::new(arabic_variants, latin_variants)
    }
}

/// Build a hypocorism set with the default expander.
pub fn build_hypocorism_set(arabic_first: Option<&str>, latin_first: Option<&str>) -> HypocorismSet {
    DEFAULT_EXPANDER.build(arabic_first, latin_first)
}

// ============================================================================
// Shared helpers
// ============================================================================

/// Find a base such that `chars == base + base`, trying base lengths from
/// shortest to longest. The base must contain at least one character
/// accepted by `accept`.
pub(crate) fn reduplicative_base(
    chars: &[char],
    lengths: RangeInclusive<usize>,
    accept: impl Fn(char) -> bool,
) -> Option<&[char]> {
    lengths.into_iter().find_map(|len| {
        if len == 0 || chars.len() != len * 2 {
            return None;
        }
        let (left, right) = chars.split_at(len);
        (left == right && left.iter().any(|&c| accept(c))).then_some(left)
    })
}

/// Insertion-ordered, deduplicated, capped list of variants.
pub(crate) struct VariantList {
    items: Vec<String>,
    cap: usize,
}

impl VariantList {
    pub(crate) fn new(cap: usize) -> Self {
        Self {
            items: Vec::with_capacity(cap),
            cap,
        }
    }

    pub(crate) fn push(&mut self, variant: String) {
        if variant.is_empty() || self.items.len() >= self.cap || self.items.contains(&variant) {
            return;
        }
        self.items.push(variant);
    }

    pub(crate) fn into_vec(self) -> Vec<String> {
        self.items
    }
}
