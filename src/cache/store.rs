//! Response Cache Module
//!
//! Bounded cache of transformed texts with lazy TTL expiry and FIFO eviction.

use std::collections::HashMap;

use tracing::debug;

use crate::cache::entry::current_timestamp_ms;
use crate::cache::{CacheEntry, CacheStats, InsertionOrder, DEFAULT_MAX_ENTRIES, DEFAULT_TTL_SECS};

// == Response Cache ==
/// Memoizes upstream transformations, bounded by both age and count.
///
/// Eviction is strictly by insertion order: a lookup hit never moves an
/// entry, only a fresh `put` does. Expired entries are removed when they are
/// read; entries that are never read again stay resident until capacity
/// pushes them out.
#[derive(Debug)]
pub struct ResponseCache {
    /// Key -> entry lookup index
    entries: HashMap<String, CacheEntry>,
    /// Insertion order for eviction
    order: InsertionOrder,
    /// Performance statistics
    stats: CacheStats,
    /// Maximum number of resident entries, never zero
    max_entries: usize,
    /// Entry lifetime in milliseconds
    ttl_ms: u64,
}

impl ResponseCache {
    // == Constructor ==
    /// Creates a cache holding at most `max_entries` entries for `ttl_secs`
    /// seconds each. A capacity of zero is raised to one.
    pub fn new(max_entries: usize, ttl_secs: u64) -> Self {
        Self {
            entries: HashMap::new(),
            order: InsertionOrder::new(),
            stats: CacheStats::new(),
            max_entries: max_entries.max(1),
            ttl_ms: ttl_secs.saturating_mul(1000),
        }
    }

    // == Get ==
    /// Looks up `key` against the current wall clock.
    pub fn get(&mut self, key: &str) -> Option<String> {
        self.get_at(key, current_timestamp_ms())
    }

    /// Looks up `key` as of `now_ms`.
    ///
    /// An expired entry is removed and reported as absent.
    pub fn get_at(&mut self, key: &str, now_ms: u64) -> Option<String> {
        let Some(entry) = self.entries.get(key) else {
            self.stats.record_miss();
            return None;
        };

        if entry.is_expired(now_ms, self.ttl_ms) {
            debug!(age_ms = entry.age_ms(now_ms), "cache entry expired");
            self.remove(key);
            self.stats.record_expiration();
            return None;
        }

        let value = entry.value.clone();
        self.stats.record_hit();
        Some(value)
    }

    // == Put ==
    /// Stores `value` under `key` stamped with the current wall clock.
    pub fn put(&mut self, key: String, value: String) {
        self.put_at(key, value, current_timestamp_ms());
    }

    /// Stores `value` under `key` stamped `now_ms`.
    ///
    /// Writing an existing key replaces it and moves it to the newest
    /// position. Writing a new key into a full cache first evicts the oldest
    /// inserted entry.
    pub fn put_at(&mut self, key: String, value: String, now_ms: u64) {
        if let Some(previous) = self.entries.remove(&key) {
            self.order.remove(previous.seq);
        } else if self.entries.len() >= self.max_entries {
            self.evict_oldest();
        }

        let seq = self.order.push(&key);
        self.entries
            .insert(key.clone(), CacheEntry::new(key, value, now_ms, seq));
        self.stats.set_total_entries(self.entries.len());
    }

    fn evict_oldest(&mut self) {
        if let Some(oldest) = self.order.pop_oldest() {
            self.entries.remove(&oldest);
            self.stats.record_eviction();
            debug!(remaining = self.entries.len(), "evicted oldest cache entry");
        }
    }

    // == Remove ==
    /// Removes `key`, returning whether it was resident.
    pub fn remove(&mut self, key: &str) -> bool {
        match self.entries.remove(key) {
            Some(entry) => {
                self.order.remove(entry.seq);
                self.stats.set_total_entries(self.entries.len());
                true
            }
            None => false,
        }
    }

    // == Clear ==
    /// Drops every entry. Counters other than the entry count are kept.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
        self.stats.set_total_entries(0);
    }

    // == Contains ==
    /// Whether `key` is physically resident, without an expiry check.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    // == Stats ==
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    /// Resident keys from oldest to newest insertion.
    pub fn keys(&self) -> Vec<String> {
        self.order.keys().map(str::to_string).collect()
    }

    pub fn capacity(&self) -> usize {
        self.max_entries
    }

    pub fn ttl_secs(&self) -> u64 {
        self.ttl_ms / 1000
    }

    // == Length ==
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ResponseCache {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ENTRIES, DEFAULT_TTL_SECS)
    }
}
