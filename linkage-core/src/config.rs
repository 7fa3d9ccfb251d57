//! Linkage configuration.
//!
//! Deployment knobs are read from the environment once at startup and then
//! passed by value into the ranker. Everything else in the crate is a pure
//! function of its arguments.
//!
//! ```bash
//! # Dial prefix used when a phone number has no international prefix
//! LINKAGE_COUNTRY_CODE=961
//!
//! # Per-language cap on generated nickname variants
//! LINKAGE_MAX_VARIANTS=12
//!
//! # Ranked candidates below this score are dropped
//! LINKAGE_MIN_SCORE=0.75
//!
//! # Maximum ranked candidates returned per search
//! LINKAGE_MAX_CANDIDATES=50
//! ```

use std::env;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{LinkageError, Result};

/// Environment variable for the default country calling code
pub const ENV_COUNTRY_CODE: &str = "LINKAGE_COUNTRY_CODE";

/// Environment variable for the hypocorism variant cap
pub const ENV_MAX_VARIANTS: &str = "LINKAGE_MAX_VARIANTS";

/// Environment variable for the minimum ranked score
pub const ENV_MIN_SCORE: &str = "LINKAGE_MIN_SCORE";

/// Environment variable for the ranked candidate limit
pub const ENV_MAX_CANDIDATES: &str = "LINKAGE_MAX_CANDIDATES";

/// Country calling code used when none is configured (Lebanon).
pub const DEFAULT_COUNTRY_CODE: &str = "961";

/// Upper bound on nickname variants per language.
pub const MAX_HYPOCORISM_VARIANTS: usize = 12;

/// Configuration for candidate ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkageConfig {
    /// Country calling code without `+` (default: 961)
    pub default_country_code: String,
    /// Nickname variants kept per language (default: 12, at most 12)
    pub max_hypocorism_variants: usize,
    /// Minimum composite score for a ranked candidate (default: 0.0)
    pub min_candidate_score: f64,
    /// Maximum ranked candidates returned (default: 50)
    pub max_candidates: usize,
}

impl Default for LinkageConfig {
    fn default() -> Self {
        Self {
            default_country_code: DEFAULT_COUNTRY_CODE.to_string(),
            max_hypocorism_variants: MAX_HYPOCORISM_VARIANTS,
            min_candidate_score: 0.0,
            max_candidates: 50,
        }
    }
}

impl LinkageConfig {
    /// Build config from the environment, keeping defaults for values that
    /// are missing or invalid.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let config = Self {
            default_country_code: read_or_default(
                ENV_COUNTRY_CODE,
                parse_country_code,
                defaults.default_country_code,
            ),
            max_hypocorism_variants: read_or_default(
                ENV_MAX_VARIANTS,
                parse_variant_cap,
                defaults.max_hypocorism_variants,
            ),
            min_candidate_score: read_or_default(
                ENV_MIN_SCORE,
                parse_score,
                defaults.min_candidate_score,
            ),
            max_candidates: read_or_default(
                ENV_MAX_CANDIDATES,
                parse_candidate_limit,
                defaults.max_candidates,
            ),
        };

        info!(
            country_code = %config.default_country_code,
            max_variants = config.max_hypocorism_variants,
            min_score = config.min_candidate_score,
            max_candidates = config.max_candidates,
            "Loaded linkage config"
        );

        config
    }

    /// Build config from the environment, failing on the first invalid value.
    pub fn try_from_env() -> Result<Self> {
        let mut config = Self::default();
        if let Ok(raw) = env::var(ENV_COUNTRY_CODE) {
            config.default_country_code = parse_country_code(ENV_COUNTRY_CODE, &raw)?;
        }
        if let Ok(raw) = env::var(ENV_MAX_VARIANTS) {
            config.max_hypocorism_variants = parse_variant_cap(ENV_MAX_VARIANTS, &raw)?;
        }
        if let Ok(raw) = env::var(ENV_MIN_SCORE) {
            config.min_candidate_score = parse_score(ENV_MIN_SCORE, &raw)?;
        }
        if let Ok(raw) = env::var(ENV_MAX_CANDIDATES) {
            config.max_candidates = parse_candidate_limit(ENV_MAX_CANDIDATES, &raw)?;
        }
        Ok(config)
    }

    /// Check a hand-built config against the same rules the env loader uses.
    pub fn validate(&self) -> Result<()> {
        check_country_code(ENV_COUNTRY_CODE, &self.default_country_code)?;
        check_variant_cap(ENV_MAX_VARIANTS, self.max_hypocorism_variants)?;
        check_score(ENV_MIN_SCORE, self.min_candidate_score)?;
        check_candidate_limit(ENV_MAX_CANDIDATES, self.max_candidates)?;
        Ok(())
    }
}

fn read_or_default<T>(
    key: &'static str,
    parse: fn(&'static str, &str) -> Result<T>,
    default: T,
) -> T {
    match env::var(key) {
        Ok(raw) => match parse(key, &raw) {
            Ok(value) => value,
            Err(e) => {
                warn!(error = %e, "Ignoring invalid config value");
                default
            }
        },
        Err(_) => default,
    }
}

fn invalid(key: &'static str, raw: &str, reason: &'static str) -> LinkageError {
    LinkageError::InvalidConfig {
        key,
        value: raw.to_string(),
        reason,
    }
}

const COUNTRY_CODE_REASON: &str = "expected 1-3 digits";
const VARIANT_CAP_REASON: &str = "expected an integer between 1 and 12";
const SCORE_REASON: &str = "expected a number between 0.0 and 1.0";
const CANDIDATE_LIMIT_REASON: &str = "expected a positive integer";

fn parse_country_code(key: &'static str, raw: &str) -> Result<String> {
    let code = raw.trim().trim_start_matches('+');
    check_country_code(key, code)?;
    Ok(code.to_string())
}

fn check_country_code(key: &'static str, code: &str) -> Result<()> {
    if code.is_empty() || code.len() > 3 || !code.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid(key, code, COUNTRY_CODE_REASON));
    }
    if code.starts_with('0') {
        return Err(invalid(key, code, "calling codes never start with 0"));
    }
    Ok(())
}

fn parse_variant_cap(key: &'static str, raw: &str) -> Result<usize> {
    let n = raw
        .trim()
        .parse::<usize>()
        .map_err(|_| invalid(key, raw, VARIANT_CAP_REASON))?;
    check_variant_cap(key, n)?;
    Ok(n)
}

fn check_variant_cap(key: &'static str, n: usize) -> Result<()> {
    if (1..=MAX_HYPOCORISM_VARIANTS).contains(&n) {
        Ok(())
    } else {
        Err(invalid(key, &n.to_string(), VARIANT_CAP_REASON))
    }
}

fn parse_score(key: &'static str, raw: &str) -> Result<f64> {
    let score = raw
        .trim()
        .parse::<f64>()
        .map_err(|_| invalid(key, raw, SCORE_REASON))?;
    check_score(key, score)?;
    Ok(score)
}

fn check_score(key: &'static str, score: f64) -> Result<()> {
    // NaN fails the range check
    if (0.0..=1.0).contains(&score) {
        Ok(())
    } else {
        Err(invalid(key, &score.to_string(), SCORE_REASON))
    }
}

fn parse_candidate_limit(key: &'static str, raw: &str) -> Result<usize> {
    let n = raw
        .trim()
        .parse::<usize>()
        .map_err(|_| invalid(key, raw, CANDIDATE_LIMIT_REASON))?;
    check_candidate_limit(key, n)?;
    Ok(n)
}

fn check_candidate_limit(key: &'static str, n: usize) -> Result<()> {
    if n > 0 {
        Ok(())
    } else {
        Err(invalid(key, &n.to_string(), CANDIDATE_LIMIT_REASON))
    }
}
