//! MA Election Cache - expiring in-memory cache for election data lookups
//!
//! Provides a TTL cache with lazy expiration and the read-through service
//! that puts it in front of election result sources.

pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod service;

pub use cache::ExpiringCache;
pub use config::Config;
pub use error::{ElectionError, Result};
pub use service::{ElectionService, ResultCache};
