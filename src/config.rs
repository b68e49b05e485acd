//! Configuration Module
//!
//! Handles loading settings from `ELECTION_API_`-prefixed environment
//! variables.

use std::env;
use std::time::Duration;

use tracing::warn;

use crate::cache::DEFAULT_TTL_SECONDS;

/// Prefix shared by every recognized environment variable.
pub const ENV_PREFIX: &str = "ELECTION_API_";

const DEFAULT_LOG_LEVEL: &str = "ma_election_cache=info";

/// Service configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Lifetime of cached results in seconds, always positive
    pub cache_ttl_seconds: u64,
    /// Tracing filter used when `RUST_LOG` is unset
    pub log_level: String,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `ELECTION_API_CACHE_TTL_SECONDS` - Cache TTL in seconds (default: 3600)
    /// - `ELECTION_API_LOG_LEVEL` - Default log filter (default: `ma_election_cache=info`)
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds a Config from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let ttl_var = format!("{ENV_PREFIX}CACHE_TTL_SECONDS");
        let cache_ttl_seconds = match lookup(&ttl_var) {
            None => DEFAULT_TTL_SECONDS,
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(ttl) if ttl > 0 => ttl,
                _ => {
                    warn!(
                        "{} must be a positive integer, got {:?}; using {}",
                        ttl_var, raw, DEFAULT_TTL_SECONDS
                    );
                    DEFAULT_TTL_SECONDS
                }
            },
        };

        Self {
            cache_ttl_seconds,
            log_level: log_level_from(&lookup),
        }
    }

    /// Cache TTL as a Duration.
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_seconds)
    }
}

/// Reads only the log filter, so tracing can be installed before the rest
/// of the configuration is parsed and validated.
pub fn log_level_from_env() -> String {
    log_level_from(&|name: &str| env::var(name).ok())
}

fn log_level_from<F>(lookup: &F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    lookup(&format!("{ENV_PREFIX}LOG_LEVEL"))
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string())
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_ttl_seconds: DEFAULT_TTL_SECONDS,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}
