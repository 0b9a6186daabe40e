//! Unbounded memo cache
//!
//! Keys map straight to stored results. Entries are only ever added; there is
//! no eviction, so a key that was stored stays until `clear`.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::hash::Hash;
use ahash::RandomState;

/// Argument-to-result map owned by a single wrapper
pub struct MemoCache<K, V> {
    map: HashMap<K, V, RandomState>,
}

impl<K, V> MemoCache<K, V>
where
    K: Hash + Eq,
    V: Clone,
{
    /// Create an empty cache with room for `capacity` results
    ///
    /// The capacity is a sizing hint only; the cache grows past it.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            map: HashMap::with_capacity_and_hasher(capacity, RandomState::new()),
        }
    }

    /// Get a clone of the stored result for `key`
    pub fn get(&self, key: &K) -> Option<V> {
        self.map.get(key).cloned()
    }

    /// Store the result for `key`
    ///
    /// Returns `false` if a result was already stored, in which case the
    /// existing result is kept.
    pub fn insert(&mut self, key: K, value: V) -> bool {
        match self.map.entry(key) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(value);
                true
            }
        }
    }

    /// Check whether a result is stored for `key`
    pub fn contains(&self, key: &K) -> bool {
        self.map.contains_key(key)
    }

    /// Number of stored results
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Check if nothing is stored
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Drop every stored result
    pub fn clear(&mut self) {
        self.map.clear();
    }
}
