#![cfg(test)]

// Property tests for HashMap kept inside the crate so they can check the
// bucket index directly through `assert_invariants`.

use crate::hash_map::test_hashers::ConstBuildHasher;
use crate::hash_map::{HashMap, LookupError};
use core::hash::BuildHasher;
use proptest::prelude::*;
use proptest::test_runner::TestCaseError;
use std::collections::HashMap as StdHashMap;
use std::fmt;

// Key newtype with Borrow<str> to exercise borrowed lookup.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
struct Key(String);
impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
impl std::borrow::Borrow<str> for Key {
    fn borrow(&self) -> &str {
        &self.0
    }
}

// Pool-indexed operations to improve shrinking: indices shrink to earlier keys,
// pool length shrinks, and op lists shrink in length.
#[derive(Clone, Debug)]
enum OpI {
    Set(usize, i32),
    Get(usize),
    GetOr(usize, i32),
    Delete(usize),
    Contains(String),
    Mutate(usize, i32),
    Iterate,
}

fn key_from(pool: &[String], i: usize) -> Key {
    Key(pool[i].clone())
}

fn arb_scenario() -> impl Strategy<Value = (Vec<String>, Vec<OpI>)> {
    proptest::collection::vec("[a-z]{0,5}", 1..=24).prop_flat_map(|pool| {
        let idxs: Vec<usize> = (0..pool.len()).collect();
        let idx = proptest::sample::select(idxs);
        let contains_pool = proptest::sample::select(pool.clone());
        let op = prop_oneof![
            3 => (idx.clone(), any::<i32>()).prop_map(|(i, v)| OpI::Set(i, v)),
            1 => idx.clone().prop_map(OpI::Get),
            1 => (idx.clone(), any::<i32>()).prop_map(|(i, d)| OpI::GetOr(i, d)),
            2 => idx.clone().prop_map(OpI::Delete),
            1 => prop_oneof![
                contains_pool.prop_map(|s: String| s),
                "[a-z]{0,5}".prop_map(|s| s)
            ]
            .prop_map(OpI::Contains),
            1 => (idx.clone(), any::<i32>()).prop_map(|(i, d)| OpI::Mutate(i, d)),
            1 => Just(OpI::Iterate),
        ];
        proptest::collection::vec(op, 1..80).prop_map(move |ops| (pool.clone(), ops))
    })
}

// Capacity after a structural change, computed with integer math.
fn model_capacity(len: usize, capacity: usize) -> usize {
    if len * 4 >= capacity * 3 {
        capacity * 2
    } else if capacity > 8 {
        capacity / 2
    } else {
        capacity
    }
}

// Drive `sut` and a model (std HashMap for contents, Vec for insertion
// order, usize for capacity) through `ops`, comparing after every step.
fn run_state_machine<S: BuildHasher>(
    mut sut: HashMap<Key, i32, S>,
    pool: Vec<String>,
    ops: Vec<OpI>,
) -> Result<(), TestCaseError> {
    let mut model: StdHashMap<Key, i32> = StdHashMap::new();
    let mut order: Vec<Key> = Vec::new();
    let mut capacity = 8usize;

    for op in ops {
        match op {
            OpI::Set(i, v) => {
                let k = key_from(&pool, i);
                let prev = sut.set(k.clone(), v);
                prop_assert_eq!(prev, model.insert(k.clone(), v));
                if prev.is_none() {
                    order.push(k);
                    capacity = model_capacity(model.len(), capacity);
                }
            }
            OpI::Get(i) => {
                let k = key_from(&pool, i);
                match model.get(&k) {
                    Some(v) => prop_assert_eq!(sut.get(&k), Ok(v)),
                    None => prop_assert_eq!(sut.get(&k), Err(LookupError::KeyNotFound)),
                }
            }
            OpI::GetOr(i, d) => {
                let k = key_from(&pool, i);
                let expected = *model.get(&k).unwrap_or(&d);
                prop_assert_eq!(*sut.get_or(k.0.as_str(), &d), expected);
            }
            OpI::Delete(i) => {
                let k = key_from(&pool, i);
                match model.remove(&k) {
                    Some(mv) => {
                        let (kk, vv) = sut.delete(&k).expect("present in model");
                        prop_assert!(kk == k);
                        prop_assert_eq!(vv, mv);
                        order.retain(|o| *o != k);
                        capacity = model_capacity(model.len(), capacity);
                    }
                    None => {
                        prop_assert_eq!(sut.delete(&k), Err(LookupError::KeyNotFound));
                    }
                }
            }
            OpI::Contains(s) => {
                let has = sut.contains(s.as_str());
                let has_model = model.keys().any(|k| k.0 == s);
                prop_assert_eq!(has, has_model);
            }
            OpI::Mutate(i, d) => {
                let k = key_from(&pool, i);
                match (sut.get_mut(&k), model.get_mut(&k)) {
                    (Ok(vr), Some(mv)) => {
                        *vr = vr.saturating_add(d);
                        *mv = mv.saturating_add(d);
                    }
                    (Err(LookupError::KeyNotFound), None) => {}
                    (s, m) => prop_assert!(false, "presence mismatch: {:?} vs {:?}", s, m),
                }
            }
            OpI::Iterate => {
                let keys: Vec<Key> = sut.keys().collect();
                prop_assert_eq!(&keys, &order);
                let items: Vec<(Key, i32)> = sut.items().collect();
                let expected: Vec<(Key, i32)> =
                    order.iter().map(|k| (k.clone(), model[k])).collect();
                prop_assert_eq!(items, expected);
            }
        }

        // Post-conditions after each op
        sut.assert_invariants();
        prop_assert_eq!(sut.len(), model.len());
        prop_assert_eq!(sut.is_empty(), model.is_empty());
        prop_assert_eq!(sut.capacity(), capacity);
    }
    Ok(())
}

// Property: State-machine equivalence against std::collections::HashMap.
// Invariants exercised across random operation sequences:
// - `set` overwrites in place and reports the previous value; new keys append.
// - `get`/`get_or`/`contains` parity with the model; misses yield KeyNotFound.
// - `delete` returns the owned `(K, V)` matching the model.
// - Traversals follow first-insertion order.
// - Index invariants hold and capacity follows the resize policy after each op.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine((pool, ops) in arb_scenario()) {
        run_state_machine(HashMap::new(), pool, ops)?;
    }
}

// Property: Same state-machine invariants as above, under worst-case
// collision behavior (constant hasher). Every entry shares one chain, so
// this stresses equality resolution and chain rebuilds after deletes.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine_with_collisions((pool, ops) in arb_scenario()) {
        run_state_machine(HashMap::with_hasher(ConstBuildHasher), pool, ops)?;
    }
}
