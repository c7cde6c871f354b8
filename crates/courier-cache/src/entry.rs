use bytes::Bytes;
use std::time::{Duration, SystemTime};

/// A stored response body and the wall-clock instant it was captured.
///
/// Entries are immutable after creation: a re-store for the same key swaps a
/// whole new entry into the table rather than mutating this one in place, so
/// a reader holding the `Arc` can never observe a partial write. The TTL is
/// deliberately not part of the entry — it is supplied by the caller on
/// every lookup, so the same entry can be fresh under one endpoint's policy
/// and stale under another's.
#[derive(Debug, Clone)]
pub struct CachedBody {
    pub payload: Bytes,
    pub stored_at: SystemTime,
}

impl CachedBody {
    pub fn new(payload: Bytes) -> Self {
        Self {
            payload,
            stored_at: SystemTime::now(),
        }
    }

    /// Age of the entry, as an absolute value: if the wall clock moved
    /// backwards since the store, the skew reads as age instead of making
    /// the entry fresh forever.
    pub fn age(&self) -> Duration {
        match SystemTime::now().duration_since(self.stored_at) {
            Ok(elapsed) => elapsed,
            Err(skew) => skew.duration(),
        }
    }

    /// Freshness under a caller-supplied TTL.
    pub fn is_fresh(&self, ttl: Duration) -> bool {
        self.age() < ttl
    }
}

/// Snapshot of cache counters.
#[derive(Clone, Debug, Default)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
    pub current_size: usize,
    pub capacity: usize,
}
