use crate::entry::{CacheStats, CachedBody};
use crate::key::CacheKey;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

struct Slot {
    body: Arc<CachedBody>,
    last_used: u64,
}

/// Single-shard store: a count-bounded map with approximate LRU eviction.
///
/// Recency is a monotonic tick; eviction removes the slot with the smallest
/// tick. For a client-side cache of a few hundred entries per shard, the
/// O(n) scan on eviction is cheaper than maintaining an intrusive list, and
/// exact recency order buys nothing under concurrent access anyway.
///
/// All methods take `&mut self` — thread safety is handled by the sharded
/// wrapper in [`crate::cache`].
pub struct LruShard {
    slots: HashMap<CacheKey, Slot>,
    tick: u64,
    capacity: usize,
    hits: u64,
    misses: u64,
    evictions: u64,
}

impl LruShard {
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "shard capacity must be > 0");
        Self {
            slots: HashMap::with_capacity(capacity),
            tick: 0,
            capacity,
            hits: 0,
            misses: 0,
            evictions: 0,
        }
    }

    /// Look up a key under a caller-supplied TTL.
    ///
    /// Absent and stale both read as a miss. A stale entry is left in place:
    /// expiry is evaluated lazily at read time, and the slot waits for an
    /// overwrite or for the eviction scan rather than being reaped here.
    pub fn get(&mut self, key: &CacheKey, ttl: Duration) -> Option<Arc<CachedBody>> {
        match self.slots.get_mut(key) {
            Some(slot) if slot.body.is_fresh(ttl) => {
                self.tick += 1;
                slot.last_used = self.tick;
                self.hits += 1;
                Some(Arc::clone(&slot.body))
            }
            _ => {
                self.misses += 1;
                None
            }
        }
    }

    /// Insert or replace. Replacement is last-write-wins: the old entry is
    /// dropped wholesale, never mutated, so concurrent readers that already
    /// cloned the `Arc` keep a consistent view.
    pub fn insert(&mut self, key: CacheKey, body: CachedBody) {
        if !self.slots.contains_key(&key) {
            while self.slots.len() >= self.capacity {
                if !self.evict_one() {
                    break;
                }
            }
        }
        self.tick += 1;
        self.slots.insert(
            key,
            Slot {
                body: Arc::new(body),
                last_used: self.tick,
            },
        );
    }

    /// Remove a key explicitly.
    pub fn remove(&mut self, key: &CacheKey) -> bool {
        self.slots.remove(key).is_some()
    }

    fn evict_one(&mut self) -> bool {
        let victim = self
            .slots
            .iter()
            .min_by_key(|(_, slot)| slot.last_used)
            .map(|(key, _)| key.clone());
        match victim {
            Some(key) => {
                self.slots.remove(&key);
                self.evictions += 1;
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits,
            misses: self.misses,
            evictions: self.evictions,
            current_size: self.slots.len(),
            capacity: self.capacity,
        }
    }
}
