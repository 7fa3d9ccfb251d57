//! Nickname Alias Families
//!
//! Some nicknames are spelled without a visible reduplication ("zizou",
//! "mimo") or collapse into one ("loulou" reads as "lolo"). Those are kept
//! as small families of mutual aliases: a seed found in a family yields the
//! other members.
//!
//! The built-in table is Latin only. Deployments can build an
//! [`AliasTable`] from their own families and hand it to the expander.

use std::collections::HashMap;
use std::sync::{Arc, LazyLock};

use tracing::{debug, warn};

use crate::normalize::NormalizedName;

/// Built-in Latin alias families. Every member is a lowercase,
/// accent-free spelling.
pub static LATIN_ALIAS_FAMILIES: &[&[&str]] = &[
    &["lulu", "loulou", "lolo"],
    &["zizou", "zizo", "zouzou"],
    &["mimo", "mimou", "mimmo"],
    &["nounou", "nono", "nunu"],
    &["titou", "tito"],
    &["fifi", "fefe"],
    &["jojo", "joujou"],
];

/// Pre-built default Latin alias lookup.
pub static DEFAULT_LATIN_ALIASES: LazyLock<Arc<AliasTable>> =
    LazyLock::new(|| Arc::new(AliasTable::from_families(LATIN_ALIAS_FAMILIES.iter().copied())));

/// Lookup from nickname to its alias family.
#[derive(Debug, Clone, Default)]
pub struct AliasTable {
    families: Vec<Vec<String>>,
    /// member -> index into `families`
    index: HashMap<String, usize>,
}

impl AliasTable {
    /// Empty table: no aliases are ever emitted.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build from families of mutual aliases.
    ///
    /// Members go through the name pipeline for their script, so they match
    /// normalized seeds. A spelling listed in two families stays with the
    /// first one.
    pub fn from_families<F, S>(families: impl IntoIterator<Item = F>) -> Self
    where
        F: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut table = Self::default();
        for family in families {
            let members: Vec<String> = family
                .into_iter()
                .filter_map(|s| NormalizedName::detect(s.as_ref()))
                .map(NormalizedName::into_string)
                .collect();
            if members.len() < 2 {
                continue;
            }

            let family_idx = table.families.len();
            for member in &members {
                if let Some(existing) = table.index.get(member) {
                    warn!(
                        alias = %member,
                        family = *existing,
                        "Alias listed in more than one family, keeping the first"
                    );
                    continue;
                }
                table.index.insert(member.clone(), family_idx);
            }
            table.families.push(members);
        }

        debug!(
            families = table.families.len(),
            spellings = table.index.len(),
            "Built alias table"
        );
        table
    }

    /// The other members of `seed`'s family, in table order.
    pub fn aliases_of(&self, seed: &str) -> Vec<&str> {
        match self.index.get(seed) {
            Some(&idx) => self.families[idx]
                .iter()
                .map(String::as_str)
                .filter(|m| *m != seed)
                .collect(),
            None => Vec::new(),
        }
    }

    #[inline]
    pub fn contains(&self, seed: &str) -> bool {
        self.index.contains_key(seed)
    }

    pub fn len(&self) -> usize {
        self.families.len()
    }

    pub fn is_empty(&self) -> bool {
        self.families.is_empty()
    }
}
