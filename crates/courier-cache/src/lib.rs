//! In-memory TTL response cache for HTTP clients.
//!
//! The cache maps a request's identity — method, absolute URL, and a small
//! allow-list of headers — to a previously seen response body, and serves it
//! back for as long as the caller's TTL says it is fresh. It never performs
//! I/O, never inspects status codes, and never fails: every outcome is a hit
//! or a miss.
//!
//! ```
//! use bytes::Bytes;
//! use courier_cache::{RequestParts, ResponseCache};
//! use std::time::Duration;
//!
//! let cache = ResponseCache::default();
//! let parts = RequestParts {
//!     method: Some("GET".to_string()),
//!     url: "https://api.example.com/items".to_string(),
//!     headers: Default::default(),
//! };
//!
//! cache.store(&parts, Bytes::from_static(b"{\"items\":[]}"));
//! assert!(cache.lookup(&parts, Duration::from_secs(60)).is_some());
//! ```

pub mod cache;
pub mod entry;
pub mod key;
pub mod lru;

pub use cache::ResponseCache;
pub use entry::{CacheStats, CachedBody};
pub use key::{CacheKey, RequestParts};
