use crate::entry::{CacheStats, CachedBody};
use crate::key::{CacheKey, RequestParts};
use crate::lru::LruShard;
use bytes::Bytes;
use parking_lot::RwLock;
use std::time::Duration;

/// Number of shards. Must be a power of two for bitmask selection.
const NUM_SHARDS: usize = 16;
const SHARD_MASK: u64 = (NUM_SHARDS as u64) - 1;

/// Default total entry count for [`ResponseCache::default`].
pub const DEFAULT_CAPACITY: usize = 512;

/// Concurrency-safe TTL response cache.
///
/// Keys are distributed across 16 independent shards, each its own
/// `RwLock<LruShard>`, selected by a fixed-seed `ahash` of the derived
/// [`CacheKey`]. Both lookup and store take a write lock on a single shard
/// (a hit bumps recency, which needs `&mut`); the other 15 shards stay
/// uncontested. No operation blocks on I/O or suspends.
///
/// Both operations are total: "never stored" and "stored but expired" are
/// the same ordinary miss, and eviction under memory pressure degrades
/// silently to a future miss. The cache decides nothing about cacheability —
/// whether a response should be stored at all is the dispatcher's call.
pub struct ResponseCache {
    shards: Box<[RwLock<LruShard>; NUM_SHARDS]>,
    hash_builder: ahash::RandomState,
}

impl ResponseCache {
    /// Create a cache bounded to roughly `capacity` entries in total, split
    /// evenly across shards (minimum one entry per shard).
    pub fn new(capacity: usize) -> Self {
        let per_shard = (capacity / NUM_SHARDS).max(1);
        let shards: Vec<RwLock<LruShard>> = (0..NUM_SHARDS)
            .map(|_| RwLock::new(LruShard::new(per_shard)))
            .collect();
        let shards: Box<[RwLock<LruShard>; NUM_SHARDS]> = shards
            .into_boxed_slice()
            .try_into()
            .unwrap_or_else(|_| unreachable!());

        Self {
            shards,
            // Fixed seeds: shard selection must be stable for the lifetime
            // of the cache, not per-HashMap random.
            hash_builder: ahash::RandomState::with_seeds(1, 2, 3, 4),
        }
    }

    #[inline]
    fn shard(&self, key: &CacheKey) -> &RwLock<LruShard> {
        let hash = self.hash_builder.hash_one(key);
        &self.shards[(hash & SHARD_MASK) as usize]
    }

    /// Look up the response stored for this request, if one exists and is
    /// still fresh under `ttl`. Derives the key internally.
    pub fn lookup(&self, parts: &RequestParts, ttl: Duration) -> Option<Bytes> {
        self.lookup_key(&CacheKey::derive(parts), ttl)
    }

    /// Look up with a pre-derived key.
    pub fn lookup_key(&self, key: &CacheKey, ttl: Duration) -> Option<Bytes> {
        let body = self.shard(key).write().get(key, ttl)?;
        Some(body.payload.clone())
    }

    /// Store a response body for this request, timestamped now.
    ///
    /// Unconditional: status codes and cache-control semantics are the
    /// caller's concern. A store for an existing key replaces the entry
    /// wholesale (last-write-wins).
    pub fn store(&self, parts: &RequestParts, payload: Bytes) {
        self.store_key(CacheKey::derive(parts), payload);
    }

    /// Store with a pre-derived key.
    pub fn store_key(&self, key: CacheKey, payload: Bytes) {
        let shard = self.shard(&key);
        shard.write().insert(key, CachedBody::new(payload));
    }

    /// Drop the entry for this request, if any. Returns whether an entry
    /// was present.
    pub fn remove(&self, parts: &RequestParts) -> bool {
        let key = CacheKey::derive(parts);
        self.shard(&key).write().remove(&key)
    }

    /// Total number of entries across all shards, stale included.
    pub fn len(&self) -> usize {
        self.shards.iter().map(|s| s.read().len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.shards.iter().all(|s| s.read().is_empty())
    }

    /// Total capacity across all shards.
    pub fn capacity(&self) -> usize {
        self.shards.iter().map(|s| s.read().capacity()).sum()
    }

    /// Aggregate counters across all shards.
    pub fn stats(&self) -> CacheStats {
        let mut total = CacheStats::default();
        for shard in self.shards.iter() {
            let s = shard.read().stats();
            total.hits += s.hits;
            total.misses += s.misses;
            total.evictions += s.evictions;
            total.current_size += s.current_size;
            total.capacity += s.capacity;
        }
        total
    }
}

impl Default for ResponseCache {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
