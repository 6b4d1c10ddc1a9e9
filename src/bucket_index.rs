//! BucketIndex: the collision-chain layer mapping hashes to entry-log positions.
//!
//! The index never looks at keys. Callers hand it the cached `u64` hash of
//! an entry together with the entry's log position; equality checks on the
//! candidates of a chain happen one layer up.

/// One slot of the index.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Bucket {
    #[default]
    Empty,
    /// Entry-log positions in the order they were linked.
    Occupied(Vec<usize>),
}

impl Bucket {
    /// Positions linked into this bucket; empty for `Bucket::Empty`.
    #[inline]
    pub fn chain(&self) -> &[usize] {
        match self {
            Bucket::Empty => &[],
            Bucket::Occupied(chain) => chain,
        }
    }

    fn link(&mut self, pos: usize) {
        match self {
            Bucket::Empty => *self = Bucket::Occupied(vec![pos]),
            Bucket::Occupied(chain) => chain.push(pos),
        }
    }
}

#[derive(Clone, Debug)]
pub struct BucketIndex {
    buckets: Vec<Bucket>,
}

impl BucketIndex {
    /// Create an index of `capacity` empty buckets.
    pub fn with_capacity(capacity: usize) -> Self {
        assert!(capacity > 0, "bucket index needs at least one bucket");
        let mut buckets = Vec::with_capacity(capacity);
        buckets.resize_with(capacity, Bucket::default);
        Self { buckets }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Bucket number for `hash` under the current capacity.
    #[inline]
    pub fn slot(&self, hash: u64) -> usize {
        (hash % self.buckets.len() as u64) as usize
    }

    /// Candidate positions for `hash`.
    #[inline]
    pub fn chain(&self, hash: u64) -> &[usize] {
        self.buckets[self.slot(hash)].chain()
    }

    /// Append `pos` to the chain of `hash`'s bucket.
    pub fn link(&mut self, hash: u64, pos: usize) {
        let slot = self.slot(hash);
        self.buckets[slot].link(pos);
    }

    /// Discard every chain and relink from scratch at `capacity` buckets.
    ///
    /// `hashes` yields the cached hash of each entry in log order; the n-th
    /// item is linked as position n.
    pub fn rebuild<I>(&mut self, capacity: usize, hashes: I)
    where
        I: IntoIterator<Item = u64>,
    {
        assert!(capacity > 0, "bucket index needs at least one bucket");
        self.buckets.clear();
        self.buckets.resize_with(capacity, Bucket::default);
        for (pos, hash) in hashes.into_iter().enumerate() {
            self.link(hash, pos);
        }
    }

    #[cfg(test)]
    pub(crate) fn buckets(&self) -> &[Bucket] {
        &self.buckets
    }
}
