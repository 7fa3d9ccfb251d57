//! Candidate Confidence Scoring
//!
//! Score of one registry candidate against one online query, combining:
//! - Arabic name triplet (first, father, last)
//! - Latin name pair (first, last)
//! - Nickname variants of the query's first name
//! - Exact identifier agreement (phone, document, date of birth)
//!
//! Identifier agreement is reported as flags, not folded into the score;
//! the decision layer applies its own rules to them.

use serde::{Deserialize, Serialize};

use crate::engine::record::NormalizedRecord;
use crate::hypocorism::HypocorismSet;
use crate::nlp::{date_equal, pair_score_latin, triplet_score_arabic};

// ============================================================================
// Ranked Candidate
// ============================================================================

/// Score breakdown for one candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedCandidate {
    /// Candidate id as supplied by the caller
    pub id: String,
    /// `max(arabic_score, latin_score)`
    pub score: f64,
    /// Best Arabic triplet score over the query first name and its variants
    pub arabic_score: f64,
    /// Best Latin pair score over the query first name and its variants
    pub latin_score: f64,
    /// A nickname variant scored higher than the first name as typed
    pub hypocorism_used: bool,
    pub phone_match: bool,
    pub document_match: bool,
    pub date_of_birth_match: bool,
}

impl RankedCandidate {
    /// Score `candidate` against `query`.
    ///
    /// `variants` must have been built from the query's first names.
    pub fn compute(
        query: &NormalizedRecord,
        variants: &HypocorismSet,
        candidate: &NormalizedRecord,
    ) -> Self {
        let arabic_for = |first_q: Option<&str>| {
            triplet_score_arabic(
                candidate.first_name_ar.as_deref(),
                candidate.father_name_ar.as_deref(),
                candidate.last_name_ar.as_deref(),
                first_q,
                query.father_name_ar.as_deref(),
                query.last_name_ar.as_deref(),
            )
        };
        let latin_for = |first_q: Option<&str>| {
            pair_score_latin(
                candidate.first_name_en.as_deref(),
                candidate.last_name_en.as_deref(),
                first_q,
                query.last_name_en.as_deref(),
            )
        };

        let (arabic_score, arabic_nick) = best_over_variants(
            arabic_for(query.first_name_ar.as_deref()),
            variants.arabic_variants(),
            arabic_for,
        );
        let (latin_score, latin_nick) = best_over_variants(
            latin_for(query.first_name_en.as_deref()),
            variants.latin_variants(),
            latin_for,
        );

        let dob_match = date_equal(
            query.date_of_birth.and_then(|d| d.and_hms_opt(0, 0, 0)),
            candidate.date_of_birth.and_then(|d| d.and_hms_opt(0, 0, 0)),
        );

        Self {
            id: candidate.id.clone(),
            score: arabic_score.max(latin_score),
            arabic_score,
            latin_score,
            hypocorism_used: arabic_nick || latin_nick,
            phone_match: same_identifier(&query.phone, &candidate.phone),
            document_match: same_identifier(&query.document_number, &candidate.document_number),
            date_of_birth_match: dob_match,
        }
    }

    /// Check if the composite score reaches `threshold`.
    #[inline]
    pub fn is_confident(&self, threshold: f64) -> bool {
        self.score >= threshold
    }
}

/// Best score over the typed first name and each variant; the flag is set
/// when a variant strictly beat the typed name.
fn best_over_variants(
    typed: f64,
    variants: &[String],
    score: impl Fn(Option<&str>) -> f64,
) -> (f64, bool) {
    variants
        .iter()
        .map(|v| score(Some(v.as_str())))
        .fold((typed, false), |(best, used), s| {
            if s > best {
                (s, true)
            } else {
                (best, used)
            }
        })
}

#[inline]
fn same_identifier(a: &Option<String>, b: &Option<String>) -> bool {
    matches!((a, b), (Some(x), Some(y)) if x == y)
}

// ============================================================================
// Tests
// ============================================================================
