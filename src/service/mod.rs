//! Service Module
//!
//! The request-handling layer that sits in front of the cache.
//!
//! # Components
//! - `cache_key` - deterministic key derivation from request parameters
//! - `ResultSource` - where fresh election results come from
//! - `ElectionService` - read-through lookups over an injected cache

mod key;
mod results;
mod source;

pub use key::cache_key;
pub use results::{ElectionService, ResultCache, RESULTS_NAMESPACE};
pub use source::{ResultSource, SampleResultSource};
