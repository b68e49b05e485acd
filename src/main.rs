//! MA Election Cache - command-line lookup of election results
//!
//! Looks up each election id given on the command line through the cached
//! results service and prints the results as JSON, one document per line.

use std::sync::Arc;

use anyhow::{bail, Context};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ma_election_cache::config::{self, Config};
use ma_election_cache::service::SampleResultSource;
use ma_election_cache::{ElectionService, ExpiringCache};

/// Main entry point.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Create the one cache instance for the process
/// 4. Hand it to the results service
/// 5. Resolve every requested election id
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // RUST_LOG wins over ELECTION_API_LOG_LEVEL
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config::log_level_from_env().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let ids: Vec<String> = std::env::args().skip(1).collect();
    if ids.is_empty() {
        bail!("usage: ma_election_cache <election-id> [<election-id>...]");
    }

    let config = Config::from_env();
    info!("Configuration loaded: cache_ttl={}s", config.cache_ttl_seconds);

    let cache = Arc::new(ExpiringCache::new(config.cache_ttl()));
    let service = ElectionService::new(Arc::clone(&cache), SampleResultSource);

    let mut failures = 0usize;
    for id in &ids {
        match service.results(id).await {
            Ok(result) => {
                let json = serde_json::to_string(result.as_ref())
                    .context("failed to serialize election result")?;
                println!("{json}");
            }
            Err(err) => {
                error!(election_id = %id, "lookup failed: {}", err);
                failures += 1;
            }
        }
    }

    let stats = service.cache_stats();
    info!(
        "Cache stats: hits={}, misses={}, expirations={}, entries={}, hit_rate={:.2}",
        stats.hits,
        stats.misses,
        stats.expirations,
        stats.total_entries,
        stats.hit_rate()
    );

    if failures > 0 {
        bail!("{} of {} lookups failed", failures, ids.len());
    }
    Ok(())
}
