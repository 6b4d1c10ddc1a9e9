//! Traversals over a `HashMap` in insertion order.
//!
//! `Keys`, `Values` and `Items` own a copy of what they yield, taken when
//! the traversal is created. They are one-shot: once exhausted they keep
//! returning `None`, and a fresh pass needs a new traversal from the map.
//! `Iter` borrows the map instead and yields references.

use crate::entry_log::Entry;
use core::iter::FusedIterator;

/// Snapshot of the keys.
#[derive(Clone, Debug)]
pub struct Keys<K> {
    it: std::vec::IntoIter<K>,
}

impl<K> Keys<K> {
    pub(crate) fn new(keys: Vec<K>) -> Self {
        Self {
            it: keys.into_iter(),
        }
    }
}

impl<K> Iterator for Keys<K> {
    type Item = K;
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.it.next()
    }
    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.it.size_hint()
    }
}

impl<K> ExactSizeIterator for Keys<K> {}
impl<K> FusedIterator for Keys<K> {}

/// Snapshot of the values.
#[derive(Clone, Debug)]
pub struct Values<V> {
    it: std::vec::IntoIter<V>,
}

impl<V> Values<V> {
    pub(crate) fn new(values: Vec<V>) -> Self {
        Self {
            it: values.into_iter(),
        }
    }
}

impl<V> Iterator for Values<V> {
    type Item = V;
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.it.next()
    }
    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.it.size_hint()
    }
}

impl<V> ExactSizeIterator for Values<V> {}
impl<V> FusedIterator for Values<V> {}

/// Snapshot of the `(key, value)` pairs.
#[derive(Clone, Debug)]
pub struct Items<K, V> {
    it: std::vec::IntoIter<(K, V)>,
}

impl<K, V> Items<K, V> {
    pub(crate) fn new(items: Vec<(K, V)>) -> Self {
        Self {
            it: items.into_iter(),
        }
    }
}

impl<K, V> Iterator for Items<K, V> {
    type Item = (K, V);
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.it.next()
    }
    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.it.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Items<K, V> {}
impl<K, V> FusedIterator for Items<K, V> {}

/// Borrowing iterator over `(&K, &V)`.
pub struct Iter<'a, K, V> {
    it: core::slice::Iter<'a, Entry<K, V>>,
}

impl<'a, K, V> Iter<'a, K, V> {
    pub(crate) fn new(it: core::slice::Iter<'a, Entry<K, V>>) -> Self {
        Self { it }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.it.next().map(|e| (&e.key, &e.value))
    }
    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.it.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}
impl<K, V> FusedIterator for Iter<'_, K, V> {}
