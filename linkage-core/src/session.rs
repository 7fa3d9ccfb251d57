//! Query session identifiers.
//!
//! Each registry search is tagged with an opaque token so paginated
//! requests, retries and audit records can be correlated:
//!
//! ```text
//! q-01JAXR3V9K-7M2QH0Z8C4WTN6PB
//!   └─ ms ─┘ └──── 80 random bits ────┘
//! ```
//!
//! Both parts are Crockford base-32, left-zero-padded to a fixed width. The
//! timestamp prefix makes tokens roughly time-ordered; nothing downstream
//! parses them. Not a security token.
//!
//! Widths are fixed: 10 digits hold 50 bits of milliseconds (good until
//! the year 37648) and 16 digits hold exactly the 80 random bits. A value
//! wider than its field keeps only its low-order digits; this is not
//! checked.

use std::fmt;

use chrono::Utc;
use rand::rngs::OsRng;
use rand::RngCore;
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::error::Result;

/// Crockford base-32 alphabet (no I, L, O, U)
pub const CROCKFORD_ALPHABET: &[u8; 32] = b"0123456789ABCDEFGHJKMNPQRSTVWXYZ";

/// Digits used for the millisecond timestamp
pub const TIMESTAMP_WIDTH: usize = 10;

/// Digits used for the random part
pub const RANDOM_WIDTH: usize = 16;

/// Random bytes drawn per identifier
pub const RANDOM_BYTES: usize = 10;

const PREFIX: &str = "q-";

/// Opaque identifier for one search invocation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuerySessionId(String);

impl QuerySessionId {
    /// New identifier from the current time and the OS random source.
    ///
    /// Fails only if the OS cannot supply random bytes; callers should
    /// abort the search in that case.
    pub fn generate() -> Result<Self> {
        let now_ms = u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0);
        Self::generate_with(now_ms, &mut OsRng).inspect_err(|e| {
            error!(error = %e, "Secure random source failed");
        })
    }

    /// New identifier from an explicit timestamp and random source.
    pub fn generate_with<R: RngCore + ?Sized>(timestamp_ms: u64, rng: &mut R) -> Result<Self> {
        let mut random = [0u8; RANDOM_BYTES];
        rng.try_fill_bytes(&mut random)?;

        let ts = encode_crockford(&timestamp_ms.to_be_bytes(), TIMESTAMP_WIDTH);
        let rnd = encode_crockford(&random, RANDOM_WIDTH);

        Ok(Self(format!("{PREFIX}{ts}-{rnd}")))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The 10-digit encoded timestamp.
    pub fn timestamp_prefix(&self) -> &str {
        let start = PREFIX.len();
        self.0.get(start..start + TIMESTAMP_WIDTH).unwrap_or_default()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for QuerySessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for QuerySessionId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Generate a query session identifier as a plain string.
///
/// # Example
/// ```
/// use linkage_core::session::generate_query_session_id;
///
/// let id = generate_query_session_id().unwrap();
/// assert_eq!(id.len(), 2 + 10 + 1 + 16);
/// assert!(id.starts_with("q-"));
/// ```
pub fn generate_query_session_id() -> Result<String> {
    QuerySessionId::generate().map(QuerySessionId::into_string)
}

/// Encode a big-endian unsigned integer as exactly `width` Crockford
/// base-32 digits.
///
/// Digits are extracted by repeated long division of the byte buffer by 32.
/// Shorter values are left-padded with `0`; digits beyond `width` are
/// dropped.
///
/// # Example
/// ```
/// use linkage_core::session::encode_crockford;
///
/// assert_eq!(encode_crockford(&[0x01, 0x00], 4), "0080");
/// assert_eq!(encode_crockford(&[0xFF; 10], 16), "ZZZZZZZZZZZZZZZZ");
/// ```
pub fn encode_crockford(bytes: &[u8], width: usize) -> String {
    let mut value = bytes.to_vec();
    let mut digits = vec![b'0'; width];

    for slot in digits.iter_mut().rev() {
        let mut remainder: u32 = 0;
        for byte in value.iter_mut() {
            let acc = (remainder << 8) | u32::from(*byte);
            // acc < 32 * 256, so the quotient fits a byte
            *byte = (acc / 32) as u8;
            remainder = acc % 32;
        }
        *slot = CROCKFORD_ALPHABET[remainder as usize];
    }

    // Alphabet is ASCII
    digits.into_iter().map(char::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn is_crockford(s: &str) -> bool {
        s.bytes().all(|b| CROCKFORD_ALPHABET.contains(&b))
    }

    fn assert_shape(id: &str) {
        let parts: Vec<&str> = id.split('-').collect();
        assert_eq!(parts.len(), 3, "{id}");
        assert_eq!(parts[0], "q");
        assert_eq!(parts[1].len(), TIMESTAMP_WIDTH);
        assert_eq!(parts[2].len(), RANDOM_WIDTH);
        assert!(is_crockford(parts[1]) && is_crockford(parts[2]), "{id}");
    }

    /// RNG that always reports exhaustion.
    struct DrainedRng;

    impl RngCore for DrainedRng {
        fn next_u32(&mut self) -> u32 {
            0
        }
        fn next_u64(&mut self) -> u64 {
            0
        }
        fn fill_bytes(&mut self, _dest: &mut [u8]) {}
        fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> std::result::Result<(), rand::Error> {
            Err(rand::Error::new(std::io::Error::other("entropy pool drained")))
        }
    }

    #[test]
    fn test_encode_crockford_small_values() {
        assert_eq!(encode_crockford(&[], 3), "000");
        assert_eq!(encode_crockford(&[0], 2), "00");
        assert_eq!(encode_crockford(&[31], 2), "0Z");
        assert_eq!(encode_crockford(&[32], 2), "10");
        assert_eq!(encode_crockford(&1_000u64.to_be_bytes(), 4), "00Z8");
    }

    #[test]
    fn test_encode_crockford_truncates_overflow() {
        // 32^2 = 1024 needs three digits; only the low two are kept
        assert_eq!(encode_crockford(&1024u16.to_be_bytes(), 2), "00");
        assert_eq!(encode_crockford(&1025u16.to_be_bytes(), 2), "01");
    }

    #[test]
    fn test_encode_timestamp() {
        // 2024-01-01T00:00:00Z
        let ts = 1_704_067_200_000u64;
        let encoded = encode_crockford(&ts.to_be_bytes(), TIMESTAMP_WIDTH);
        assert_eq!(encoded.len(), TIMESTAMP_WIDTH);

        let decoded = encoded.bytes().fold(0u64, |acc, b| {
            let digit = CROCKFORD_ALPHABET.iter().position(|&a| a == b).unwrap() as u64;
            acc * 32 + digit
        });
        assert_eq!(decoded, ts);
    }

    #[test]
    fn test_generate_with_is_deterministic() {
        let a = QuerySessionId::generate_with(1_704_067_200_000, &mut StdRng::seed_from_u64(7)).unwrap();
        let b = QuerySessionId::generate_with(1_704_067_200_000, &mut StdRng::seed_from_u64(7)).unwrap();
        assert_eq!(a, b);
        assert_shape(a.as_str());
        assert_eq!(a.timestamp_prefix(), encode_crockford(&1_704_067_200_000u64.to_be_bytes(), 10));
    }

    #[test]
    fn test_timestamp_prefix_orders_by_time() {
        let mut rng = StdRng::seed_from_u64(1);
        let earlier = QuerySessionId::generate_with(1_704_067_200_000, &mut rng).unwrap();
        let later = QuerySessionId::generate_with(1_704_067_200_001, &mut rng).unwrap();
        assert!(earlier.timestamp_prefix() < later.timestamp_prefix());
    }

    #[test]
    fn test_generate_shape_and_uniqueness() {
        let first = generate_query_session_id().unwrap();
        let second = generate_query_session_id().unwrap();
        assert_shape(&first);
        assert_shape(&second);
        assert_ne!(first, second);
    }

    #[test]
    fn test_random_source_failure_is_fatal() {
        let err = QuerySessionId::generate_with(0, &mut DrainedRng).unwrap_err();
        assert!(err.is_fatal());
        assert!(err.to_string().contains("secure random source"));
    }
}
