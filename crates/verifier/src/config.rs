//! Verifier configuration and environment parsing.
//!
//! The only tunable is the batch capacity: the fixed number of claim slots
//! every batch must fill (with padding beyond `num_claims`). It is set at
//! verifier construction time and never varies between runs of the same
//! verifier.
//!
//! # Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `RECLAIM_MAX_CLAIMS` | Batch capacity (positive integer) | `10` |
//!
//! # Example
//!
//! ```rust
//! use reclaim_verifier::config::BatchCapacity;
//!
//! let capacity: BatchCapacity = "16".parse().unwrap();
//! assert_eq!(capacity.get(), 16);
//!
//! assert_eq!(BatchCapacity::default().get(), 10);
//! ```

use std::{env, fmt, str::FromStr};
use thiserror::Error;

/// Environment variable name for the batch capacity.
pub const ENV_MAX_CLAIMS: &str = "RECLAIM_MAX_CLAIMS";

/// Default batch capacity when none is configured.
pub const DEFAULT_MAX_CLAIMS: usize = 10;

/// The number of claim slots in every batch.
///
/// Always positive: a zero-capacity verifier could never accept a batch,
/// since batches must carry at least one active claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BatchCapacity(usize);

impl BatchCapacity {
    /// Create a batch capacity. Returns `None` for zero.
    pub const fn new(capacity: usize) -> Option<Self> {
        if capacity == 0 { None } else { Some(Self(capacity)) }
    }

    /// Returns the capacity as a plain count.
    pub const fn get(self) -> usize {
        self.0
    }

    /// Load the batch capacity from the environment.
    ///
    /// Reads `RECLAIM_MAX_CLAIMS`, falling back to the default of 10 when
    /// the variable is unset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidCapacity`] if the value is set but is
    /// not a positive integer.
    pub fn from_env() -> Result<Self, ConfigError> {
        match env::var(ENV_MAX_CLAIMS) {
            Ok(value) => value.parse(),
            Err(_) => Ok(Self::default()),
        }
    }
}

impl Default for BatchCapacity {
    fn default() -> Self {
        Self(DEFAULT_MAX_CLAIMS)
    }
}

impl FromStr for BatchCapacity {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<usize>()
            .ok()
            .and_then(Self::new)
            .ok_or_else(|| ConfigError::InvalidCapacity(s.to_owned()))
    }
}

impl fmt::Display for BatchCapacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The capacity value is not a positive integer.
    #[error("invalid batch capacity: {0} (expected a positive integer)")]
    InvalidCapacity(String),
}
