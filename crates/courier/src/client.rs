use crate::config::Config;
use crate::endpoint::Endpoint;
use crate::error::Error;
use crate::policy::CachePolicy;
use crate::validate::validate_status;
use bytes::Bytes;
use courier_cache::{CacheStats, ResponseCache};
use serde::de::DeserializeOwned;
use tracing::debug;

/// Request dispatcher: builds requests from endpoint descriptions, consults
/// the response cache, executes over the HTTP executor, validates the status
/// code, and decodes JSON bodies.
///
/// One client owns one cache. The client is cheap to share behind an `Arc`
/// and safe to drive from many concurrent tasks; overlapping requests for
/// the same endpoint race last-write-wins on the cache.
pub struct Client {
    config: Config,
    cache: ResponseCache,
}

impl Client {
    pub fn new(config: Config) -> Self {
        let cache = ResponseCache::new(config.cache_capacity);
        Self { config, cache }
    }

    /// Send the request described by `endpoint` and decode the JSON body
    /// into `T`. Served from the cache when the endpoint's policy allows and
    /// a fresh entry exists.
    pub async fn send<T: DeserializeOwned>(&self, endpoint: &Endpoint) -> Result<T, Error> {
        let bytes = self.send_raw(endpoint).await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Send the request and return the raw body bytes, cached or live.
    pub async fn send_raw(&self, endpoint: &Endpoint) -> Result<Bytes, Error> {
        let (parts, body) = endpoint.to_parts(&self.config.base_url)?;

        if let CachePolicy::Enabled { ttl } = endpoint.cache {
            if let Some(cached) = self.cache.lookup(&parts, ttl) {
                debug!(method = %endpoint.method, url = %parts.url, "serving cached response");
                return Ok(cached);
            }
        }

        let mut request = self
            .config
            .http
            .request(endpoint.method.into(), parts.url.as_str());
        for (name, value) in &parts.headers {
            request = request.header(name, value);
        }
        if let Some(body) = body {
            request = request.body(body);
        }

        debug!(method = %endpoint.method, url = %parts.url, "dispatching request");
        let response = request.send().await?;
        let status = response.status().as_u16();
        validate_status(status)?;

        let bytes = response.bytes().await?;

        // The store is unconditional from the cache's point of view; the
        // cacheability decision (2xx + enabled policy) happens right here.
        if matches!(endpoint.cache, CachePolicy::Enabled { .. }) {
            self.cache.store(&parts, bytes.clone());
            debug!(url = %parts.url, bytes = bytes.len(), "stored response in cache");
        }

        Ok(bytes)
    }

    /// Drop any cached entry for this endpoint. Returns whether one was
    /// present.
    pub fn invalidate(&self, endpoint: &Endpoint) -> Result<bool, Error> {
        let (parts, _) = endpoint.to_parts(&self.config.base_url)?;
        Ok(self.cache.remove(&parts))
    }

    /// Counters from the underlying response cache.
    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }
}
