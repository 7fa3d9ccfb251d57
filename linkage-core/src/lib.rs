//! Linkage Core - Citizen identity record linkage
//!
//! Matches online registrations against civil-registry rows written in
//! Arabic and Latin script. The crate is pure computation:
//!
//! - **Normalization**: Arabic orthographic folding, Latin accent stripping,
//!   phone and document canonicalization
//! - **Similarity**: Jaro-Winkler and Levenshtein with weighted composites
//! - **Hypocorisms**: bounded nickname expansion of first names
//! - **Sessions**: time-ordered opaque query identifiers
//!
//! Storage, transport and the final link decision belong to the caller.

#![warn(clippy::clone_on_ref_ptr)]
#![warn(clippy::unnecessary_to_owned)]

pub mod config;
pub mod engine;
pub mod error;
pub mod hypocorism;
pub mod nlp;
pub mod normalize;
pub mod session;

pub use config::LinkageConfig;
pub use engine::{CandidateRanker, IdentityRecord, RankedCandidate, RankedSearch};
pub use error::{LinkageError, Result};
pub use hypocorism::{build_hypocorism_set, HypocorismExpander, HypocorismSet};
pub use nlp::{jaro_winkler_similarity, levenshtein_similarity};
pub use normalize::{NameLanguage, NormalizedName};
pub use session::{generate_query_session_id, QuerySessionId};
