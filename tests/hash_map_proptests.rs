// HashMap property tests against the public API.
//
// Property 1: round-trip with distinct keys.
//  - Invariant: after setting each key once, get(k) returns its value and
//    len() equals the number of keys; keys()/items() follow set order.
//
// Property 2: overwrite keeps shape.
//  - Invariant: setting an existing key again returns the old value, leaves
//    len(), capacity() and key order unchanged, and get(k) sees the new value.
//
// Property 3: capacity bounds.
//  - Invariant: after any sequence of inserts and deletes, capacity() is a
//    power of two, at least MIN_CAPACITY, and the load factor after the last
//    structural change is below 2 * GROW_LOAD_FACTOR.
use chain_hashmap::{HashMap, LookupError, GROW_LOAD_FACTOR, MIN_CAPACITY};
use proptest::prelude::*;
use std::collections::BTreeSet;

proptest! {
    #[test]
    fn prop_round_trip_distinct_keys(keys in proptest::collection::btree_set(any::<u32>(), 0..200)) {
        // Descending insertion order, so set order differs from sorted order.
        let keys: Vec<u32> = keys.into_iter().rev().collect();
        let mut m = HashMap::new();
        for &k in &keys {
            prop_assert_eq!(m.set(k, u64::from(k) * 2), None);
        }

        prop_assert_eq!(m.len(), keys.len());
        for &k in &keys {
            prop_assert_eq!(m.get(&k), Ok(&(u64::from(k) * 2)));
            prop_assert!(m.contains(&k));
        }
        prop_assert_eq!(m.keys().collect::<Vec<_>>(), keys.clone());
        let items: Vec<(u32, u64)> = m.items().collect();
        let expected: Vec<(u32, u64)> = keys.iter().map(|&k| (k, u64::from(k) * 2)).collect();
        prop_assert_eq!(items, expected);
    }
}

proptest! {
    #[test]
    fn prop_overwrite_keeps_shape(
        keys in proptest::collection::vec("[a-z]{1,6}", 1..40),
        pick in any::<proptest::sample::Index>(),
        v in any::<i64>(),
    ) {
        let mut m = HashMap::new();
        for (i, k) in keys.iter().enumerate() {
            m.set(k.clone(), i as i64);
        }
        let len = m.len();
        let capacity = m.capacity();
        let order: Vec<String> = m.keys().collect();

        let k = &keys[pick.index(keys.len())];
        let old = *m.get(k.as_str()).expect("key was set");
        prop_assert_eq!(m.set(k.clone(), v), Some(old));
        prop_assert_eq!(m.get(k.as_str()), Ok(&v));
        prop_assert_eq!(m.len(), len);
        prop_assert_eq!(m.capacity(), capacity);
        prop_assert_eq!(m.keys().collect::<Vec<_>>(), order);
    }
}

proptest! {
    #[test]
    fn prop_capacity_bounds(ops in proptest::collection::vec((any::<bool>(), 0u16..64), 1..300)) {
        let mut m: HashMap<u16, ()> = HashMap::new();
        let mut live = BTreeSet::new();
        for (insert, k) in ops {
            if insert {
                m.set(k, ());
                live.insert(k);
            } else {
                match m.delete(&k) {
                    Ok(_) => prop_assert!(live.remove(&k)),
                    Err(LookupError::KeyNotFound) => prop_assert!(!live.contains(&k)),
                }
            }
            let cap = m.capacity();
            prop_assert!(cap >= MIN_CAPACITY);
            prop_assert!(cap.is_power_of_two());
            prop_assert!(m.load_factor() < 2.0 * GROW_LOAD_FACTOR);
            prop_assert_eq!(m.len(), live.len());
        }
    }
}
