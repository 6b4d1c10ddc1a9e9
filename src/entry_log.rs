//! EntryLog: dense, insertion-ordered storage of key/value pairs.

#[derive(Clone, Debug)]
pub(crate) struct Entry<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
    pub(crate) hash: u64,
}

/// Positions are plain indexes into the log. They stay valid until a
/// removal, which shifts every later entry down by one.
#[derive(Clone, Debug)]
pub(crate) struct EntryLog<K, V> {
    entries: Vec<Entry<K, V>>,
}

impl<K, V> EntryLog<K, V> {
    pub(crate) const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub(crate) fn get(&self, pos: usize) -> Option<&Entry<K, V>> {
        self.entries.get(pos)
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, pos: usize) -> Option<&mut Entry<K, V>> {
        self.entries.get_mut(pos)
    }

    /// Append and return the new entry's position.
    pub(crate) fn push(&mut self, key: K, value: V, hash: u64) -> usize {
        let pos = self.entries.len();
        self.entries.push(Entry { key, value, hash });
        pos
    }

    /// Physically remove the entry at `pos`; later positions shift down.
    pub(crate) fn remove(&mut self, pos: usize) -> Entry<K, V> {
        self.entries.remove(pos)
    }

    pub(crate) fn hashes(&self) -> impl Iterator<Item = u64> + '_ {
        self.entries.iter().map(|e| e.hash)
    }

    pub(crate) fn iter(&self) -> core::slice::Iter<'_, Entry<K, V>> {
        self.entries.iter()
    }
}
