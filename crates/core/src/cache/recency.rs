//! Fixed-capacity recency cache.
//!
//! Entries live in a `Vec` ordered by recency: index 0 is the most recently
//! used, the last index is the next to be evicted.
//!
//! While the cache has room, a fresh insert is appended at the back. Once it
//! is full, an insert evicts the tail and the newcomer takes the front. Only
//! `get` promotes an existing entry. A burst of never-repeated keys therefore
//! evicts earlier fill-phase entries from the back first.

use std::num::NonZeroUsize;

/// Default number of pages kept in memory.
pub const DEFAULT_CAPACITY: usize = 5;

#[derive(Debug, Clone)]
struct CacheEntry<K, V> {
    key: K,
    value: V,
}

/// Bounded cache evicting the least-recently-used entry.
#[derive(Debug, Clone)]
pub struct RecencyCache<K, V> {
    entries: Vec<CacheEntry<K, V>>,
    capacity: NonZeroUsize,
}

impl<K: PartialEq, V> RecencyCache<K, V> {
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self { entries: Vec::with_capacity(capacity.get()), capacity }
    }

    /// Whether `key` is cached. Does not change recency.
    pub fn contains(&self, key: &K) -> bool {
        self.position(key).is_some()
    }

    /// Fetch `key` and make it the most recently used entry.
    ///
    /// Returns `None` for an absent key and leaves the order untouched.
    pub fn get(&mut self, key: &K) -> Option<&V> {
        let index = self.position(key)?;
        self.promote(index);
        self.entries.first().map(|entry| &entry.value)
    }

    /// Cache `value` under `key`, returning the evicted entry if one had to go.
    ///
    /// Re-inserting a cached key replaces its value and promotes it; nothing
    /// is evicted in that case.
    pub fn insert(&mut self, key: K, value: V) -> Option<(K, V)> {
        if let Some(index) = self.position(&key) {
            self.entries[index].value = value;
            self.promote(index);
            return None;
        }

        let entry = CacheEntry { key, value };
        if self.entries.len() < self.capacity.get() {
            self.entries.push(entry);
            return None;
        }

        let tail = self.entries.len() - 1;
        let evicted = std::mem::replace(&mut self.entries[tail], entry);
        self.promote(tail);
        Some((evicted.key, evicted.value))
    }

    /// Move the entry at `index` to the front, shifting everything ahead of
    /// it back by one slot.
    fn promote(&mut self, index: usize) {
        self.entries[..=index].rotate_right(1);
    }

    fn position(&self, key: &K) -> Option<usize> {
        self.entries.iter().position(|entry| entry.key == *key)
    }

    /// Keys from most to least recently used.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.iter().map(|entry| &entry.key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.entries.len() == self.capacity.get()
    }

    pub fn capacity(&self) -> usize {
        self.capacity.get()
    }
}

impl<K: PartialEq, V> Default for RecencyCache<K, V> {
    fn default() -> Self {
        Self::new(NonZeroUsize::new(DEFAULT_CAPACITY).unwrap_or(NonZeroUsize::MIN))
    }
}
