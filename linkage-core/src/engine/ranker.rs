//! Candidate Ranker - Online Record vs Registry Candidates
//!
//! Runs the full matching pass for one search:
//! 1. Normalize the online record and every registry candidate
//! 2. Expand the online first names into nickname variants
//! 3. Score each candidate (Arabic triplet, Latin pair, identifiers)
//! 4. Drop candidates under the threshold, sort by score, truncate
//!
//! Fetching candidates and persisting link decisions stay with the caller.

use serde::Serialize;
use tracing::debug;

use crate::config::LinkageConfig;
use crate::engine::confidence::RankedCandidate;
use crate::engine::record::{IdentityRecord, NormalizedRecord};
use crate::error::Result;
use crate::hypocorism::{HypocorismExpander, HypocorismSet};
use crate::session::QuerySessionId;

/// Result of one tagged search.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedSearch {
    pub session_id: QuerySessionId,
    pub hypocorisms: HypocorismSet,
    pub candidates: Vec<RankedCandidate>,
}

/// Ranks registry candidates against an online record.
///
/// # Usage
/// ```
/// use linkage_core::engine::{CandidateRanker, IdentityRecord};
/// use linkage_core::LinkageConfig;
///
/// let ranker = CandidateRanker::new(LinkageConfig::default());
/// let query = IdentityRecord::new("online").with_latin_names("Lulu", "Haddad");
/// let registry = vec![
///     IdentityRecord::new("r1").with_latin_names("Karim", "Saleh"),
///     IdentityRecord::new("r2").with_latin_names("Loulou", "Haddad"),
/// ];
///
/// let ranked = ranker.rank(&query, &registry);
/// assert_eq!(ranked[0].id, "r2");
/// assert!(ranked[0].hypocorism_used);
/// ```
#[derive(Debug, Clone)]
pub struct CandidateRanker {
    config: LinkageConfig,
    expander: HypocorismExpander,
}

impl Default for CandidateRanker {
    fn default() -> Self {
        Self::new(LinkageConfig::default())
    }
}

impl CandidateRanker {
    /// Create a ranker; the nickname cap comes from `config`.
    pub fn new(config: LinkageConfig) -> Self {
        let expander = HypocorismExpander::from_config(&config);
        Self { config, expander }
    }

    /// Use a custom expander (for deployment-specific alias tables).
    pub fn with_expander(mut self, expander: HypocorismExpander) -> Self {
        self.expander = expander;
        self
    }

    pub fn config(&self) -> &LinkageConfig {
        &self.config
    }

    /// Normalize a record with the configured country code.
    pub fn normalize(&self, record: &IdentityRecord) -> NormalizedRecord {
        record.normalized(&self.config.default_country_code)
    }

    /// Score and rank `candidates` against `query`.
    ///
    /// Sorted by score descending; equal scores keep the input order.
    pub fn rank(&self, query: &IdentityRecord, candidates: &[IdentityRecord]) -> Vec<RankedCandidate> {
        let query = self.normalize(query);
        let variants = self.expander.build(
            query.first_name_ar.as_deref(),
            query.first_name_en.as_deref(),
        );
        self.rank_normalized(&query, &variants, candidates)
    }

    /// Rank and tag the search with a fresh query session id.
    ///
    /// Fails only if no session id can be generated.
    pub fn search(&self, query: &IdentityRecord, candidates: &[IdentityRecord]) -> Result<RankedSearch> {
        let session_id = QuerySessionId::generate()?;

        let normalized = self.normalize(query);
        let hypocorisms = self.expander.build(
            normalized.first_name_ar.as_deref(),
            normalized.first_name_en.as_deref(),
        );
        let ranked = self.rank_normalized(&normalized, &hypocorisms, candidates);

        debug!(
            session = %session_id,
            query = %query.id,
            returned = ranked.len(),
            "Search ranked"
        );

        Ok(RankedSearch {
            session_id,
            hypocorisms,
            candidates: ranked,
        })
    }

    fn rank_normalized(
        &self,
        query: &NormalizedRecord,
        variants: &HypocorismSet,
        candidates: &[IdentityRecord],
    ) -> Vec<RankedCandidate> {
        let mut ranked: Vec<RankedCandidate> = candidates
            .iter()
            .map(|c| RankedCandidate::compute(query, variants, &self.normalize(c)))
            .filter(|r| r.is_confident(self.config.min_candidate_score))
            .collect();

        let kept = ranked.len();
        ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
        ranked.truncate(self.config.max_candidates);

        debug!(
            query = %query.id,
            candidates = candidates.len(),
            above_threshold = kept,
            returned = ranked.len(),
            nicknames = variants.applied(),
            "Ranked registry candidates"
        );

        ranked
    }
}
