//! Data models for election results
//!
//! This module defines the DTOs (Data Transfer Objects) returned by result
//! sources and stored in the cache.

pub mod election;

// Re-export commonly used types
pub use election::{CandidateResult, ElectionResult};
