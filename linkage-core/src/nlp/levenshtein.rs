//! Levenshtein Distance (Edit Distance)
//!
//! Reference: Levenshtein, V. I. (1966). "Binary codes capable of correcting
//!            deletions, insertions, and reversals"
//!
//! # Time Complexity
//! O(m × n) where m, n are string lengths
//!
//! # Space Complexity
//! O(min(m, n)) with space optimization
//!
//! # Operations
//! - Insert: cost = 1
//! - Delete: cost = 1
//! - Substitute: cost = 1

/// Compute Levenshtein edit distance between two strings.
///
/// Wagner-Fischer dynamic program over Unicode scalar values, keeping two
/// rows sized by the shorter string.
///
/// # Example
/// ```
/// use linkage_core::nlp::levenshtein::levenshtein_distance;
///
/// assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
/// assert_eq!(levenshtein_distance("يوسف", "يوسيف"), 1);
/// ```
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    // Inner loop runs over the shorter string
    let (short, long) = if a_chars.len() <= b_chars.len() {
        (&a_chars, &b_chars)
    } else {
        (&b_chars, &a_chars)
    };
    let m = short.len();

    let mut prev: Vec<usize> = (0..=m).collect();
    let mut curr: Vec<usize> = vec![0; m + 1];

    for (j, lc) in long.iter().enumerate() {
        curr[0] = j + 1;

        for i in 1..=m {
            let cost = usize::from(short[i - 1] != *lc);

            curr[i] = (prev[i] + 1) // deletion
                .min(curr[i - 1] + 1) // insertion
                .min(prev[i - 1] + cost); // substitution
        }

        std::mem::swap(&mut prev, &mut curr);
    }

    prev[m]
}

/// Normalized Levenshtein similarity (0.0 to 1.0).
///
/// `similarity = 1.0 - distance / max_length`
///
/// Identical strings (including two empty strings) score 1.0; otherwise a
/// blank side scores 0.0.
///
/// # Example
/// ```
/// use linkage_core::nlp::levenshtein::levenshtein_similarity;
///
/// assert_eq!(levenshtein_similarity("rami", "rami"), 1.0);
/// assert_eq!(levenshtein_similarity("rami", "ramy"), 0.75);
/// assert_eq!(levenshtein_similarity("rami", " "), 0.0);
/// ```
pub fn levenshtein_similarity(a: &str, b: &str) -> f64 {
    if a == b {
        return 1.0;
    }
    if a.trim().is_empty() || b.trim().is_empty() {
        return 0.0;
    }

    let distance = levenshtein_distance(a, b);
    let max_len = a.chars().count().max(b.chars().count());

    1.0 - (distance as f64 / max_len as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levenshtein_distance() {
        // Empty strings
        assert_eq!(levenshtein_distance("", ""), 0);
        assert_eq!(levenshtein_distance("abc", ""), 3);
        assert_eq!(levenshtein_distance("", "xyz"), 3);

        // Single operations
        assert_eq!(levenshtein_distance("elie", "elias"), 2);
        assert_eq!(levenshtein_distance("nour", "nours"), 1); // insertion
        assert_eq!(levenshtein_distance("nours", "nour"), 1); // deletion
        assert_eq!(levenshtein_distance("rami", "ramy"), 1); // substitution

        // Classic examples
        assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
        assert_eq!(levenshtein_distance("saturday", "sunday"), 3);
    }

    #[test]
    fn test_levenshtein_counts_letters_not_bytes() {
        // Each Arabic letter is two UTF-8 bytes
        assert_eq!(levenshtein_distance("سمير", "سمر"), 1);
        assert_eq!(levenshtein_distance("josé", "jose"), 1);
    }

    #[test]
    fn test_levenshtein_similarity() {
        assert_eq!(levenshtein_similarity("", ""), 1.0);
        assert_eq!(levenshtein_similarity("hello", "hello"), 1.0);
        assert_eq!(levenshtein_similarity("", "abc"), 0.0);
        assert!((levenshtein_similarity("kitten", "sitting") - (1.0 - 3.0 / 7.0)).abs() < 1e-9);
        assert_eq!(levenshtein_similarity("abc", "xyz"), 0.0);
    }

    #[test]
    fn test_levenshtein_symmetry_and_bounds() {
        let words = ["", "a", "ab", "georges", "george", "جورج", "جرجس"];
        for a in words {
            for b in words {
                let s = levenshtein_similarity(a, b);
                assert_eq!(s, levenshtein_similarity(b, a));
                assert!((0.0..=1.0).contains(&s));
            }
        }
    }
}
