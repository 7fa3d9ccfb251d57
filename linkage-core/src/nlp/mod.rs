//! NLP Module - String Similarity for Identity Matching
//!
//! String-distance primitives and the multi-field composites built on them.
//!
//! # Algorithms
//!
//! | Algorithm | Reference | Complexity | Best For |
//! |-----------|-----------|------------|----------|
//! | [Levenshtein](levenshtein) | Levenshtein (1966) | O(m×n) | Typo detection |
//! | [Jaro-Winkler](jaro) | Winkler (1990) | O(m×w) | Name matching |
//! | [Composite](composite) | Field-aligned average | O(m×w) | Full-name records |
//!
//! All scores lie in `[0.0, 1.0]`. The primitives are symmetric in their two
//! arguments; the composites are aligned field by field.
//!
//! # Example
//!
//! ```
//! use linkage_core::nlp::{jaro_winkler_similarity, levenshtein_distance, pair_score_latin};
//!
//! let sim = jaro_winkler_similarity("martha", "marhta");
//! assert!(sim > 0.96);
//!
//! let dist = levenshtein_distance("kitten", "sitting");
//! assert_eq!(dist, 3);
//!
//! let pair = pair_score_latin(Some("rita"), Some("nassar"), Some("rita"), Some("nassar"));
//! assert_eq!(pair, 1.0);
//! ```

pub mod composite;
pub mod jaro;
pub mod levenshtein;

// Re-export main functions for convenience
pub use composite::{date_equal, field_score, pair_score_latin, triplet_score_arabic};
pub use jaro::{jaro_similarity, jaro_winkler_similarity};
pub use levenshtein::{levenshtein_distance, levenshtein_similarity};
