//! Composite Identity Scores
//!
//! Multi-field averages of Jaro-Winkler sub-scores:
//! - Arabic triplet: first name, father's name, last name (1/3 each)
//! - Latin pair: first name, last name (1/2 each)
//!
//! A field that is blank on either side contributes 0 and the weights are
//! NOT renormalized over the present fields. A record with only two of
//! three Arabic names therefore tops out at 2/3. Callers that want
//! renormalized scores must do so themselves.

use chrono::NaiveDateTime;

use super::jaro::jaro_winkler_similarity;
use crate::normalize::is_blank;

const TRIPLET_WEIGHT: f64 = 1.0 / 3.0;
const PAIR_WEIGHT: f64 = 0.5;

/// Jaro-Winkler of one aligned field; 0.0 when either side is blank.
#[inline]
pub fn field_score(candidate: Option<&str>, query: Option<&str>) -> f64 {
    match (candidate, query) {
        (Some(c), Some(q)) if !is_blank(Some(c)) && !is_blank(Some(q)) => {
            jaro_winkler_similarity(c, q)
        }
        _ => 0.0,
    }
}

/// Arabic name triplet score.
///
/// # Example
/// ```
/// use linkage_core::nlp::composite::triplet_score_arabic;
///
/// let full = triplet_score_arabic(
///     Some("محمد"), Some("علي"), Some("حسن"),
///     Some("محمد"), Some("علي"), Some("حسن"),
/// );
/// assert_eq!(full, 1.0);
///
/// // Missing father's name on the query side caps the score at 2/3
/// let partial = triplet_score_arabic(
///     Some("محمد"), Some("علي"), Some("حسن"),
///     Some("محمد"), None, Some("حسن"),
/// );
/// assert!((partial - 2.0 / 3.0).abs() < 1e-9);
/// ```
pub fn triplet_score_arabic(
    first_c: Option<&str>,
    father_c: Option<&str>,
    last_c: Option<&str>,
    first_q: Option<&str>,
    father_q: Option<&str>,
    last_q: Option<&str>,
) -> f64 {
    TRIPLET_WEIGHT * field_score(first_c, first_q)
        + TRIPLET_WEIGHT * field_score(father_c, father_q)
        + TRIPLET_WEIGHT * field_score(last_c, last_q)
}

/// Latin first/last name pair score.
///
/// # Example
/// ```
/// use linkage_core::nlp::composite::pair_score_latin;
///
/// assert_eq!(pair_score_latin(Some("elie"), Some("haddad"), Some("elie"), Some("haddad")), 1.0);
/// assert_eq!(pair_score_latin(Some("elie"), None, Some("elie"), Some("haddad")), 0.5);
/// ```
pub fn pair_score_latin(
    first_c: Option<&str>,
    last_c: Option<&str>,
    first_q: Option<&str>,
    last_q: Option<&str>,
) -> f64 {
    PAIR_WEIGHT * field_score(first_c, first_q) + PAIR_WEIGHT * field_score(last_c, last_q)
}

/// True only when both timestamps are present and fall on the same
/// calendar date.
pub fn date_equal(d1: Option<NaiveDateTime>, d2: Option<NaiveDateTime>) -> bool {
    match (d1, d2) {
        (Some(a), Some(b)) => a.date() == b.date(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn test_field_score_blank() {
        assert_eq!(field_score(None, Some("ali")), 0.0);
        assert_eq!(field_score(Some(" "), Some("ali")), 0.0);
        assert_eq!(field_score(Some("ali"), Some("ali")), 1.0);
    }

    #[test]
    fn test_triplet_missing_fields_not_renormalized() {
        let one = triplet_score_arabic(Some("سامي"), None, None, Some("سامي"), None, None);
        assert!((one - 1.0 / 3.0).abs() < 1e-9);

        let none = triplet_score_arabic(None, None, None, None, None, None);
        assert_eq!(none, 0.0);
    }

    #[test]
    fn test_triplet_partial_similarity() {
        let score = triplet_score_arabic(
            Some("محمد"), Some("علي"), Some("حسن"),
            Some("محمود"), Some("علي"), Some("حسن"),
        );
        assert!(score > 0.9 && score < 1.0);
    }

    #[test]
    fn test_triplet_is_field_aligned() {
        // Swapping father and last name is not forgiven
        let aligned = triplet_score_arabic(
            Some("رامي"), Some("جورج"), Some("خوري"),
            Some("رامي"), Some("جورج"), Some("خوري"),
        );
        let swapped = triplet_score_arabic(
            Some("رامي"), Some("جورج"), Some("خوري"),
            Some("رامي"), Some("خوري"), Some("جورج"),
        );
        assert!(swapped < aligned);
    }

    #[test]
    fn test_pair_score() {
        let score = pair_score_latin(Some("georges"), Some("khoury"), Some("george"), Some("khouri"));
        assert!(score > 0.9);
        assert_eq!(pair_score_latin(None, None, Some("a"), Some("b")), 0.0);
    }

    #[test]
    fn test_date_equal() {
        assert!(date_equal(Some(at(1990, 5, 17, 0, 0)), Some(at(1990, 5, 17, 23, 59))));
        assert!(!date_equal(Some(at(1990, 5, 17, 0, 0)), Some(at(1990, 5, 18, 0, 0))));
        assert!(!date_equal(None, Some(at(1990, 5, 17, 0, 0))));
        assert!(!date_equal(None, None));
    }
}
