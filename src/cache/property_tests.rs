//! Property-Based Tests for Cache Module
//!
//! Uses proptest to check the cache against a simple model under arbitrary
//! operation sequences and simulated time.

use proptest::prelude::*;
use std::collections::HashMap;
use std::time::Duration;

use crate::cache::{ExpiringCache, ManualClock};

// == Test Configuration ==
const TEST_TTL_MS: u64 = 1_000;

// == Strategies ==
/// Generates cache keys from a small alphabet so operations collide often
fn key_strategy() -> impl Strategy<Value = String> {
    "[a-d]{1,2}"
}

fn value_strategy() -> impl Strategy<Value = u32> {
    any::<u32>()
}

/// A single step against the cache
#[derive(Debug, Clone)]
enum CacheOp {
    Set { key: String, value: u32 },
    Get { key: String },
    Advance { millis: u64 },
    Clear,
}

fn cache_op_strategy() -> impl Strategy<Value = CacheOp> {
    prop_oneof![
        4 => (key_strategy(), value_strategy())
            .prop_map(|(key, value)| CacheOp::Set { key, value }),
        4 => key_strategy().prop_map(|key| CacheOp::Get { key }),
        2 => (0u64..1_500).prop_map(|millis| CacheOp::Advance { millis }),
        1 => Just(CacheOp::Clear),
    ]
}

fn new_cache() -> (ExpiringCache<u32, ManualClock>, ManualClock) {
    let clock = ManualClock::new();
    let cache = ExpiringCache::with_clock(Duration::from_millis(TEST_TTL_MS), clock.clone());
    (cache, clock)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    // After set(k, v), an immediate get(k) returns v.
    #[test]
    fn prop_roundtrip_storage(key in key_strategy(), value in value_strategy()) {
        let (cache, _clock) = new_cache();

        cache.set(key.clone(), value);

        prop_assert_eq!(cache.get(&key), Some(value));
    }

    // A get before any set is always a miss.
    #[test]
    fn prop_unset_key_is_absent(key in key_strategy(), other in key_strategy(), value in value_strategy()) {
        prop_assume!(key != other);
        let (cache, _clock) = new_cache();

        cache.set(other, value);

        prop_assert_eq!(cache.get(&key), None);
    }

    // A read at elapsed t returns the value iff t < ttl; an expired read
    // drops the entry.
    #[test]
    fn prop_ttl_boundary(key in key_strategy(), value in value_strategy(), elapsed_ms in 0u64..3_000) {
        let (cache, clock) = new_cache();

        cache.set(key.clone(), value);
        clock.advance(Duration::from_millis(elapsed_ms));

        if elapsed_ms < TEST_TTL_MS {
            prop_assert_eq!(cache.get(&key), Some(value));
            prop_assert_eq!(cache.len(), 1);
        } else {
            prop_assert_eq!(cache.get(&key), None);
            prop_assert_eq!(cache.len(), 0, "Expired entry should be released");
            prop_assert_eq!(cache.get(&key), None);
        }
    }

    // The second set wins and restarts the TTL.
    #[test]
    fn prop_overwrite_semantics(
        key in key_strategy(),
        value1 in value_strategy(),
        value2 in value_strategy(),
        gap_ms in 0u64..TEST_TTL_MS,
    ) {
        let (cache, clock) = new_cache();

        cache.set(key.clone(), value1);
        clock.advance(Duration::from_millis(gap_ms));
        cache.set(key.clone(), value2);
        clock.advance(Duration::from_millis(TEST_TTL_MS - 1));

        prop_assert_eq!(cache.get(&key), Some(value2));
        prop_assert_eq!(cache.len(), 1);
    }

    // Any operation sequence agrees with a model map of (value, inserted_at),
    // and the counters add up.
    #[test]
    fn prop_matches_model(ops in prop::collection::vec(cache_op_strategy(), 1..80)) {
        let (cache, clock) = new_cache();
        let mut model: HashMap<String, (u32, u64)> = HashMap::new();
        let mut now_ms: u64 = 0;
        let mut reads: u64 = 0;

        for op in ops {
            match op {
                CacheOp::Set { key, value } => {
                    cache.set(key.clone(), value);
                    model.insert(key, (value, now_ms));
                }
                CacheOp::Get { key } => {
                    reads += 1;
                    let expected = match model.get(&key) {
                        Some(&(value, at)) if now_ms - at < TEST_TTL_MS => Some(value),
                        Some(_) => {
                            model.remove(&key);
                            None
                        }
                        None => None,
                    };
                    prop_assert_eq!(cache.get(&key), expected);
                }
                CacheOp::Advance { millis } => {
                    clock.advance(Duration::from_millis(millis));
                    now_ms += millis;
                }
                CacheOp::Clear => {
                    cache.clear();
                    model.clear();
                }
            }
            prop_assert_eq!(cache.len(), model.len());
        }

        let stats = cache.stats();
        prop_assert_eq!(stats.hits + stats.misses, reads, "Every read is a hit or a miss");
        prop_assert!(stats.expirations <= stats.misses);
        prop_assert_eq!(stats.total_entries, model.len());
    }

    // clear() empties the cache regardless of entry ages.
    #[test]
    fn prop_clear_removes_everything(
        entries in prop::collection::vec((key_strategy(), value_strategy()), 1..20),
        elapsed_ms in 0u64..2_000,
    ) {
        let (cache, clock) = new_cache();

        for (key, value) in &entries {
            cache.set(key.clone(), *value);
        }
        clock.advance(Duration::from_millis(elapsed_ms));
        cache.clear();

        prop_assert!(cache.is_empty());
        for (key, _) in &entries {
            prop_assert_eq!(cache.get(key), None);
        }
    }
}
