//! Cache Module
//!
//! Provides an in-memory, string-keyed cache with a single shared TTL and
//! lazy expiration.

mod clock;
mod entry;
mod stats;
mod store;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use clock::{Clock, ManualClock, MonotonicClock};
pub use entry::CacheEntry;
pub use stats::CacheStats;
pub use store::ExpiringCache;

// == Public Constants ==
/// TTL applied when no other value is configured (one hour)
pub const DEFAULT_TTL_SECONDS: u64 = 3600;
