//! LRU (Least Recently Used) cache implementation
//!
//! A hash index from key to slot, plus a slab-backed recency list. Both
//! `add` and `get` are O(1).

use std::collections::HashMap;
use std::fmt;
use std::num::NonZeroUsize;

use ahash::RandomState;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::list::{Iter, RecencyList};
use crate::stats::Stats;

/// Most slots reserved up front; larger caches grow on demand
const PREALLOC_LIMIT: usize = 4096;

/// String-keyed LRU cache with fixed capacity
///
/// Not synchronized. Callers sharing a cache across threads wrap it in a
/// lock of their choice.
pub struct Lru<T> {
    map: HashMap<String, usize, RandomState>,
    list: RecencyList<T>,
    capacity: NonZeroUsize,
    stats: Stats,
}

impl<T> Lru<T> {
    /// Create a new cache holding at most `capacity` entries
    ///
    /// # Errors
    /// * `Error::InvalidCapacity` - `capacity` is zero
    ///
    /// Callers holding a signed capacity validate it with
    /// [`LruConfig::capacity`](crate::LruConfig::capacity), which also
    /// rejects negative values.
    pub fn new(capacity: usize) -> Result<Self> {
        NonZeroUsize::new(capacity)
            .map(Self::with_capacity)
            .ok_or(Error::InvalidCapacity(0))
    }

    /// Create a new cache from an already validated capacity
    pub fn with_capacity(capacity: NonZeroUsize) -> Self {
        let reserve = capacity.get().min(PREALLOC_LIMIT);
        Self {
            map: HashMap::with_capacity_and_hasher(reserve, RandomState::new()),
            list: RecencyList::with_capacity(reserve),
            capacity,
            stats: Stats::new(),
        }
    }

    /// Insert or update `key`, returning whether an entry was evicted
    ///
    /// Updating an existing key never evicts. Inserting a new key into a
    /// full cache drops the least recently used entry first.
    pub fn add(&mut self, key: impl Into<String>, value: T) -> bool {
        self.push(key, value).is_some()
    }

    /// Like [`Lru::add`], but hands back the evicted entry
    pub fn push(&mut self, key: impl Into<String>, value: T) -> Option<(String, T)> {
        let key = key.into();

        if let Some(&idx) = self.map.get(&key) {
            self.list.replace(idx, value);
            self.list.move_to_front(idx);
            self.stats.record_update();
            return None;
        }

        let evicted = if self.map.len() >= self.capacity.get() {
            self.evict()
        } else {
            None
        };

        let idx = self.list.push_front(key.clone(), value);
        self.map.insert(key, idx);
        self.stats.record_insert();

        evicted
    }

    /// Look up `key` and mark it most recently used
    pub fn get(&mut self, key: &str) -> Option<&T> {
        let idx = self.touch(key)?;
        self.list.value(idx)
    }

    /// Mutable lookup, with the same promotion as [`Lru::get`]
    pub fn get_mut(&mut self, key: &str) -> Option<&mut T> {
        let idx = self.touch(key)?;
        self.list.value_mut(idx)
    }

    /// Look up `key` without changing its recency
    pub fn peek(&self, key: &str) -> Option<&T> {
        self.map.get(key).and_then(|&idx| self.list.value(idx))
    }

    /// Check for `key` without changing its recency
    pub fn contains(&self, key: &str) -> bool {
        self.map.contains_key(key)
    }

    /// Remove `key`, returning its value
    pub fn remove(&mut self, key: &str) -> Option<T> {
        let idx = self.map.remove(key)?;
        self.list.remove(idx).map(|(_, value)| value)
    }

    /// Remove and return the least recently used entry
    pub fn pop_lru(&mut self) -> Option<(String, T)> {
        let (key, value) = self.list.pop_back()?;
        self.map.remove(&key);
        Some((key, value))
    }

    /// The entry that the next eviction would drop
    pub fn peek_lru(&self) -> Option<(&str, &T)> {
        self.list.back().and_then(|idx| self.list.entry(idx))
    }

    /// Get the current number of entries
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Check if the cache is empty
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Maximum number of entries
    pub fn capacity(&self) -> NonZeroUsize {
        self.capacity
    }

    /// Drop every entry; stats are kept
    pub fn clear(&mut self) {
        debug!(len = self.map.len(), "clearing cache");
        self.map.clear();
        self.list.clear();
    }

    /// Entries from most to least recently used, without promotion
    pub fn iter(&self) -> Iter<'_, T> {
        self.list.iter()
    }

    /// Keys from most to least recently used
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.list.iter().map(|(key, _)| key)
    }

    /// Get cache statistics
    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    /// Reset hit/miss/eviction counters
    pub fn reset_stats(&mut self) {
        self.stats.reset();
    }

    fn touch(&mut self, key: &str) -> Option<usize> {
        match self.map.get(key) {
            Some(&idx) => {
                self.list.move_to_front(idx);
                self.stats.record_hit();
                Some(idx)
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    fn evict(&mut self) -> Option<(String, T)> {
        // Unreachable while index and list agree
        let Some((key, value)) = self.list.pop_back() else {
            warn!(
                index_len = self.map.len(),
                list_len = self.list.len(),
                capacity = self.capacity.get(),
                "cache full but recency list has no tail, skipping eviction"
            );
            return None;
        };

        self.map.remove(&key);
        self.stats.record_eviction();
        debug!(key = %key, "evicted least recently used entry");

        Some((key, value))
    }
}

impl<T: fmt::Debug> fmt::Debug for Lru<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<'a, T> IntoIterator for &'a Lru<T> {
    type Item = (&'a str, &'a T);
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
