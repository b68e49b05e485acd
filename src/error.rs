//! Error types for the election results service
//!
//! Provides unified error handling using thiserror. The cache itself never
//! fails; these errors come from key derivation and result sources.

use thiserror::Error;

// == Election Error Enum ==
/// Unified error type for result lookups.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ElectionError {
    /// Cache key could not be derived from the request parameters
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    /// Source has no results for the requested election
    #[error("Election not found: {0}")]
    NotFound(String),

    /// Source failed while fetching results
    #[error("Upstream error: {0}")]
    Upstream(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ElectionError {
    /// Whether retrying the same request later could succeed.
    pub fn is_transient(&self) -> bool {
        matches!(self, ElectionError::Upstream(_))
    }
}

// == Result Type Alias ==
/// Convenience Result type for the election results service.
pub type Result<T> = std::result::Result<T, ElectionError>;
