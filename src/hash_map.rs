//! HashMap: public layer tying the entry log, the bucket index and the resize policy together.

use crate::bucket_index::BucketIndex;
use crate::entry_log::EntryLog;
use crate::iter::{Items, Iter, Keys, Values};
use crate::resize::{self, MIN_CAPACITY};
use core::borrow::Borrow;
use core::fmt;
use core::hash::{BuildHasher, Hash};
use hashbrown::DefaultHashBuilder;
use thiserror::Error;

/// Error for lookups that require the key to be present.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("key not found")]
    KeyNotFound,
}

/// An insertion-ordered hash map with chained buckets.
///
/// Entries live in a dense log in the order their keys were first set.
/// A separate index of `capacity` buckets maps each key's hash to the log
/// positions that may hold it. Capacity starts at [`MIN_CAPACITY`], doubles
/// once the load factor reaches [`GROW_LOAD_FACTOR`], and otherwise halves
/// after every structural change while above the floor.
///
/// Keys must hash consistently with `Eq`. A key type that breaks this gets
/// unspecified (but memory-safe) results.
///
/// [`GROW_LOAD_FACTOR`]: crate::GROW_LOAD_FACTOR
#[derive(Clone)]
pub struct HashMap<K, V, S = DefaultHashBuilder> {
    hasher: S,
    index: BucketIndex,
    entries: EntryLog<K, V>,
}

impl<K, V> HashMap<K, V>
where
    K: Eq + Hash,
{
    pub fn new() -> Self {
        Self::with_hasher(Default::default())
    }
}

impl<K, V> Default for HashMap<K, V>
where
    K: Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, S> HashMap<K, V, S> {
    pub fn len(&self) -> usize {
        self.entries.len()
    }
    pub fn is_empty(&self) -> bool {
        self.entries.len() == 0
    }

    /// Current number of buckets.
    pub fn capacity(&self) -> usize {
        self.index.capacity()
    }

    pub fn load_factor(&self) -> f64 {
        resize::load_factor(self.len(), self.capacity())
    }

    /// Borrowing traversal of `(&K, &V)` in insertion order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(self.entries.iter())
    }

    /// Snapshot of the keys in insertion order.
    pub fn keys(&self) -> Keys<K>
    where
        K: Clone,
    {
        Keys::new(self.entries.iter().map(|e| e.key.clone()).collect())
    }

    /// Snapshot of the values in insertion order.
    pub fn values(&self) -> Values<V>
    where
        V: Clone,
    {
        Values::new(self.entries.iter().map(|e| e.value.clone()).collect())
    }

    /// Snapshot of the `(key, value)` pairs in insertion order.
    pub fn items(&self) -> Items<K, V>
    where
        K: Clone,
        V: Clone,
    {
        Items::new(
            self.entries
                .iter()
                .map(|e| (e.key.clone(), e.value.clone()))
                .collect(),
        )
    }
}

impl<K, V, S> HashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    pub fn with_hasher(hasher: S) -> Self {
        Self {
            hasher,
            index: BucketIndex::with_capacity(MIN_CAPACITY),
            entries: EntryLog::new(),
        }
    }

    fn make_hash<Q>(&self, q: &Q) -> u64
    where
        Q: ?Sized + Hash,
    {
        self.hasher.hash_one(q)
    }

    /// Log position of the entry whose key equals `q`, scanning only its chain.
    fn position_of<Q>(&self, hash: u64, q: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: ?Sized + Eq,
    {
        self.index.chain(hash).iter().copied().find(|&pos| {
            self.entries
                .get(pos)
                .map(|e| e.hash == hash && e.key.borrow() == q)
                .unwrap_or(false)
        })
    }

    /// Insert `key -> value`, or overwrite the value of an existing key in
    /// place. Returns the previous value on overwrite.
    ///
    /// Overwriting leaves the entry's position and the capacity untouched.
    pub fn set(&mut self, key: K, value: V) -> Option<V> {
        let hash = self.make_hash(&key);
        if let Some(entry) = self
            .position_of(hash, &key)
            .and_then(|pos| self.entries.get_mut(pos))
        {
            return Some(core::mem::replace(&mut entry.value, value));
        }

        let pos = self.entries.push(key, value, hash);
        self.index.link(hash, pos);
        self.apply_resize_policy(false);
        None
    }

    pub fn get<Q>(&self, q: &Q) -> Result<&V, LookupError>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let hash = self.make_hash(q);
        self.position_of(hash, q)
            .and_then(|pos| self.entries.get(pos))
            .map(|e| &e.value)
            .ok_or(LookupError::KeyNotFound)
    }

    /// Like [`get`](Self::get), falling back to `default` when the key is absent.
    pub fn get_or<'a, Q>(&'a self, q: &Q, default: &'a V) -> &'a V
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.get(q).unwrap_or(default)
    }

    pub fn get_mut<Q>(&mut self, q: &Q) -> Result<&mut V, LookupError>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let hash = self.make_hash(q);
        self.position_of(hash, q)
            .and_then(|pos| self.entries.get_mut(pos))
            .map(|e| &mut e.value)
            .ok_or(LookupError::KeyNotFound)
    }

    pub fn contains<Q>(&self, q: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let hash = self.make_hash(q);
        self.position_of(hash, q).is_some()
    }

    /// Remove the entry for `q` and return it.
    ///
    /// Every later entry shifts down one position, so the whole bucket index
    /// is rebuilt afterwards whether or not capacity changes. Cost is linear
    /// in `len()`.
    pub fn delete<Q>(&mut self, q: &Q) -> Result<(K, V), LookupError>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let hash = self.make_hash(q);
        let pos = self
            .position_of(hash, q)
            .ok_or(LookupError::KeyNotFound)?;
        let entry = self.entries.remove(pos);
        log::trace!(
            "deleted entry at position {}, {} remain",
            pos,
            self.entries.len()
        );
        self.apply_resize_policy(true);
        Ok((entry.key, entry.value))
    }

    /// Run the resize policy after a structural change. The index is rebuilt
    /// when capacity changes or when `stale` says positions have shifted.
    fn apply_resize_policy(&mut self, stale: bool) {
        let old = self.index.capacity();
        let new = resize::next_capacity(self.entries.len(), old);
        if new != old {
            log::debug!(
                "resizing bucket index {} -> {} at len {}",
                old,
                new,
                self.entries.len()
            );
        }
        if new != old || stale {
            log::trace!(
                "rebuilding bucket index: {} entries into {} buckets",
                self.entries.len(),
                new
            );
            self.index.rebuild(new, self.entries.hashes());
        }
    }

    /// Check I1/I2/I4 against the current state; panics on violation.
    #[cfg(test)]
    pub(crate) fn assert_invariants(&self) {
        let capacity = self.index.capacity();
        assert!(capacity >= MIN_CAPACITY, "capacity {} below floor", capacity);
        assert!(capacity.is_power_of_two(), "capacity {} not a power of two", capacity);

        let mut seen = vec![0usize; self.entries.len()];
        for (slot, bucket) in self.index.buckets().iter().enumerate() {
            for &pos in bucket.chain() {
                let e = self
                    .entries
                    .get(pos)
                    .unwrap_or_else(|| panic!("bucket {} links dead position {}", slot, pos));
                assert_eq!(e.hash, self.make_hash(&e.key), "stale cached hash at {}", pos);
                assert_eq!(self.index.slot(e.hash), slot, "position {} in wrong bucket", pos);
                seen[pos] += 1;
            }
        }
        for (pos, n) in seen.into_iter().enumerate() {
            assert_eq!(n, 1, "position {} linked {} times", pos, n);
        }
    }
}

impl<K, V, S> fmt::Debug for HashMap<K, V, S>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// `{key: value, ...}` in insertion order; keys use `Debug` so strings come
/// out quoted and numbers bare, values use `Display`.
impl<K, V, S> fmt::Display for HashMap<K, V, S>
where
    K: fmt::Debug,
    V: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (k, v)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{:?}: {}", k, v)?;
        }
        f.write_str("}")
    }
}

/// Default iteration yields the keys, like [`HashMap::keys`].
impl<'a, K, V, S> IntoIterator for &'a HashMap<K, V, S>
where
    K: Clone,
{
    type Item = K;
    type IntoIter = Keys<K>;

    fn into_iter(self) -> Self::IntoIter {
        self.keys()
    }
}

impl<K, V, S> Extend<(K, V)> for HashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.set(k, v);
        }
    }
}

impl<K, V, S> FromIterator<(K, V)> for HashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut m = Self::with_hasher(S::default());
        m.extend(iter);
        m
    }
}
