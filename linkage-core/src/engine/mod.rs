//! Record Linkage Engine
//!
//! Ties normalization, nickname expansion and similarity scoring together:
//!
//! - `record`: identity records and their normalized form
//! - `confidence`: per-candidate score breakdown
//! - `ranker`: the `CandidateRanker` that scores and orders registry rows
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    CandidateRanker                              │
//! │  ┌──────────────┐  ┌──────────────┐  ┌──────────────────────┐  │
//! │  │ Normalize    │  │ Hypocorisms  │  │ Threshold / Sort /   │  │
//! │  │ AR + EN + ID │  │ AR + EN      │  │ Truncate             │  │
//! │  └──────────────┘  └──────────────┘  └──────────────────────┘  │
//! │                           │                                     │
//! │                    ┌──────┴──────┐                              │
//! │                    │ Confidence  │                              │
//! │                    │ JW triplet  │                              │
//! │                    └─────────────┘                              │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

pub mod confidence;
pub mod ranker;
pub mod record;

pub use confidence::RankedCandidate;
pub use ranker::{CandidateRanker, RankedSearch};
pub use record::{IdentityRecord, NormalizedRecord};
