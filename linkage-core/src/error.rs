//! Error types for linkage operations.
//!
//! Text handling never fails: blank or malformed names degrade to `None`
//! or a zero score. Only the session-id generator, configuration loading
//! and deserialization of already-normalized names produce errors.

use thiserror::Error;

/// Result type alias for linkage operations.
pub type Result<T> = std::result::Result<T, LinkageError>;

/// Core error types for the linkage core.
#[derive(Error, Debug)]
pub enum LinkageError {
    /// The OS random source could not supply bytes
    #[error("secure random source unavailable: {0}")]
    RandomSource(#[from] rand::Error),

    /// A configuration value could not be parsed or is out of range
    #[error("invalid config {key}={value:?}: {reason}")]
    InvalidConfig {
        key: &'static str,
        value: String,
        reason: &'static str,
    },

    /// A value claimed to be a normalized name but is not
    #[error("invalid normalized name {value:?}: {reason}")]
    InvalidName { value: String, reason: &'static str },
}

impl LinkageError {
    /// Returns true if the operation must be aborted rather than retried.
    #[inline]
    pub fn is_fatal(&self) -> bool {
        matches!(self, LinkageError::RandomSource(_))
    }
}
