//! Load-factor driven capacity policy.

/// Capacity of a fresh map and the floor for shrinking.
pub const MIN_CAPACITY: usize = 8;

/// Load factor at or above which capacity doubles.
pub const GROW_LOAD_FACTOR: f64 = 0.75;

#[inline]
pub(crate) fn load_factor(len: usize, capacity: usize) -> f64 {
    len as f64 / capacity as f64
}

/// Capacity to use after a structural change leaves `len` entries in a
/// table of `capacity` buckets.
///
/// Grows by doubling at `GROW_LOAD_FACTOR`. Otherwise any capacity above
/// `MIN_CAPACITY` halves, whatever the load, so a single call never both
/// grows and shrinks.
pub(crate) fn next_capacity(len: usize, capacity: usize) -> usize {
    if load_factor(len, capacity) >= GROW_LOAD_FACTOR {
        capacity * 2
    } else if capacity > MIN_CAPACITY {
        capacity / 2
    } else {
        capacity
    }
}
