//! Property-Based Tests for Cache Module
//!
//! Uses proptest to check the eviction contracts shared by every policy.

use proptest::prelude::*;
use std::collections::HashSet;

use crate::cache::{CacheStrategy, CityKey, StrategyKind, CACHE_CAPACITY};

// == Strategies ==
/// Generates city names with mixed casing
fn city_name_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z]{1,12}".prop_map(|s| s)
}

fn region_strategy() -> impl Strategy<Value = String> {
    "[A-Z]{2}".prop_map(|s| s)
}

fn value_strategy() -> impl Strategy<Value = String> {
    "[0-9]{1,8}".prop_map(|s| s)
}

fn kind_strategy() -> impl Strategy<Value = StrategyKind> {
    prop::sample::select(StrategyKind::ALL.to_vec())
}

#[derive(Debug, Clone)]
enum CacheOp {
    Put {
        region: String,
        name: String,
        value: String,
    },
    Get {
        region: String,
        name: String,
    },
}

fn cache_op_strategy() -> impl Strategy<Value = CacheOp> {
    prop_oneof![
        (region_strategy(), city_name_strategy(), value_strategy())
            .prop_map(|(region, name, value)| CacheOp::Put { region, name, value }),
        (region_strategy(), city_name_strategy())
            .prop_map(|(region, name)| CacheOp::Get { region, name }),
    ]
}

/// Distinct keys, compared the way the cache compares them.
fn distinct_names(names: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    names
        .into_iter()
        .filter(|n| seen.insert(CityKey::new("US", n)))
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Size never exceeds capacity and a put evicts at most one key.
    #[test]
    fn prop_capacity_enforcement(
        kind in kind_strategy(),
        seed in any::<u64>(),
        ops in prop::collection::vec(cache_op_strategy(), 1..200)
    ) {
        let mut cache = CacheStrategy::seeded(kind, seed);

        for op in ops {
            match op {
                CacheOp::Put { region, name, value } => {
                    let before = cache.len();
                    let was_present = cache.contains(&region, &name);
                    let evicted = cache.put(&region, &name, &value);

                    if let Some(victim) = &evicted {
                        prop_assert!(!was_present, "{} evicted on an update", cache.name());
                        prop_assert_eq!(before, CACHE_CAPACITY);
                        prop_assert_ne!(victim, &CityKey::new(region.clone(), &name));
                        prop_assert!(!cache.contains(victim.region_code(), victim.name()));
                    }
                    prop_assert!(cache.contains(&region, &name));
                }
                CacheOp::Get { region, name } => {
                    let present = cache.contains(&region, &name);
                    prop_assert_eq!(cache.get(&region, &name).is_some(), present);
                }
            }
            prop_assert!(cache.len() <= CACHE_CAPACITY);
            prop_assert_eq!(cache.keys().len(), cache.len());
        }
    }

    // put(k, v) then get(k) returns v, under any casing of the name.
    #[test]
    fn prop_roundtrip_storage(
        kind in kind_strategy(),
        region in region_strategy(),
        name in city_name_strategy(),
        value in value_strategy()
    ) {
        let mut cache = CacheStrategy::seeded(kind, 0);
        cache.put(&region, &name, &value);

        prop_assert_eq!(cache.get(&region, &name.to_uppercase()), Some(value));
    }

    // Overwriting replaces the value without growing the cache.
    #[test]
    fn prop_overwrite_semantics(
        kind in kind_strategy(),
        name in city_name_strategy(),
        value1 in value_strategy(),
        value2 in value_strategy()
    ) {
        let mut cache = CacheStrategy::seeded(kind, 0);
        cache.put("US", &name, &value1);
        cache.put("US", &name, &value2);

        prop_assert_eq!(cache.get("US", &name), Some(value2));
        prop_assert_eq!(cache.len(), 1);
    }

    // After capacity + 1 distinct puts the deterministic policies drop the
    // first key and Random drops one of the earlier keys.
    #[test]
    fn prop_overflow_evicts_expected_key(
        kind in kind_strategy(),
        seed in any::<u64>(),
        names in prop::collection::vec(city_name_strategy(), 20..40)
    ) {
        let names = distinct_names(names);
        prop_assume!(names.len() > CACHE_CAPACITY);
        let names = &names[..=CACHE_CAPACITY];

        let mut cache = CacheStrategy::seeded(kind, seed);
        let mut evicted = Vec::new();
        for name in names {
            evicted.extend(cache.put("US", name, "v"));
        }

        prop_assert_eq!(cache.len(), CACHE_CAPACITY);
        prop_assert_eq!(evicted.len(), 1);
        let victim = &evicted[0];
        let newest = CityKey::new("US", &names[CACHE_CAPACITY]);
        prop_assert_ne!(victim, &newest);

        match kind {
            StrategyKind::Random => {
                prop_assert!(names[..CACHE_CAPACITY]
                    .iter()
                    .any(|n| CityKey::new("US", n) == *victim));
            }
            _ => prop_assert_eq!(victim, &CityKey::new("US", &names[0])),
        }
    }

    // A key read just before the overflow survives under LRU; the next
    // oldest is evicted instead.
    #[test]
    fn prop_lru_access_tracking(
        names in prop::collection::vec(city_name_strategy(), 20..40),
        access_index in 0usize..CACHE_CAPACITY
    ) {
        let names = distinct_names(names);
        prop_assume!(names.len() > CACHE_CAPACITY);

        let mut cache = CacheStrategy::new(StrategyKind::Lru);
        for name in &names[..CACHE_CAPACITY] {
            cache.put("US", name, "v");
        }

        let touched = &names[access_index];
        cache.get("US", touched);
        let evicted = cache.put("US", &names[CACHE_CAPACITY], "v");

        prop_assert!(cache.contains("US", touched));
        let expected = if access_index == 0 { &names[1] } else { &names[0] };
        prop_assert_eq!(evicted, Some(CityKey::new("US", expected)));
    }

    // A key read three times outlives every key read only once.
    #[test]
    fn prop_lfu_frequency_protection(
        names in prop::collection::vec(city_name_strategy(), 20..40)
    ) {
        let names = distinct_names(names);
        prop_assume!(names.len() > CACHE_CAPACITY);

        let mut cache = CacheStrategy::new(StrategyKind::Lfu);
        let hot = &names[0];
        cache.put("US", hot, "hot");
        for _ in 0..3 {
            cache.get("US", hot);
        }

        for name in &names[1..=CACHE_CAPACITY] {
            cache.put("US", name, "cold");
        }

        prop_assert!(cache.contains("US", hot));
        prop_assert!(!cache.contains("US", &names[1]));
    }
}
