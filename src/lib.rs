//! chain-hashmap: an insertion-ordered hash map with chained buckets and
//! load-factor driven resizing.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: keep each piece of the map small enough to reason about on its
//!   own, with all derived state rebuildable from one source of truth.
//! - Layers:
//!   - EntryLog<K, V>: dense `Vec` of entries in insertion order. The only
//!     owner of keys and values, and the source of truth for rebuilds.
//!   - BucketIndex: `capacity` buckets, each `Empty` or `Occupied` with a
//!     chain of entry-log positions. Knows hashes and positions only.
//!   - resize: pure capacity policy (`next_capacity`).
//!   - HashMap<K, V, S>: public API; hashes keys, scans chains, compares
//!     with `K: Eq`, applies the policy after structural changes.
//!
//! Constraints
//! - Single-threaded: mutation takes `&mut self`; sharing across threads
//!   is the caller's business.
//! - Keys are unique. `set` on an existing key overwrites in place and
//!   keeps the entry's position.
//! - Capacity is a power of two and never below `MIN_CAPACITY`.
//!
//! Index invariants
//! - Every live log position appears in exactly one chain.
//! - A position in bucket `b` has `hash % capacity == b`.
//! - The index is rebuilt wholesale after every capacity change and every
//!   deletion. A plain insert that keeps capacity links one position.
//!
//! Resize policy
//! - After each insert of a new key or delete: if `len / capacity` is at
//!   least `GROW_LOAD_FACTOR`, capacity doubles; otherwise, if capacity is
//!   above `MIN_CAPACITY`, it halves. Overwrites never resize.
//! - The halving branch does not look at the load, so a table that just
//!   grew shrinks again on the next insert.
//!
//! Hasher and rehashing invariants
//! - Each entry stores its precomputed `u64` hash; rebuilds use the stored
//!   hash and never call `K: Hash` again. A `u64` hash needs no sign
//!   normalization before the modulo.
//!
//! Deletion
//! - Removal is physical: later entries shift down, which invalidates the
//!   positions stored in the index, hence the full rebuild. Deletion is
//!   linear in `len()`.
//!
//! Traversals
//! - `keys()`, `values()` and `items()` return owned snapshots taken at
//!   call time; later mutation of the map does not show up in them. Each
//!   is one-shot and fused. `&map` iterates like `keys()`; `iter()` borrows.
//!
//! Notes and non-goals
//! - No thread-safety, persistence or tombstoning.
//! - Logging goes through the `log` facade: capacity changes at `debug`,
//!   rebuilds and deletions at `trace`. The crate never installs a logger.

#[cfg(feature = "bench_internal")]
pub mod bucket_index;
#[cfg(not(feature = "bench_internal"))]
mod bucket_index;
mod entry_log;
mod hash_map;
mod hash_map_proptest;
pub mod iter;
mod resize;

// Public surface
pub use hash_map::{HashMap, LookupError};
pub use resize::{GROW_LOAD_FACTOR, MIN_CAPACITY};
