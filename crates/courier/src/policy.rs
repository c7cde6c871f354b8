use std::time::Duration;

/// Per-endpoint caching signal.
///
/// Read by the dispatcher to decide whether to consult the response cache at
/// all, and with what freshness window. The cache itself has no notion of
/// policy — it only ever sees the TTL passed at lookup time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CachePolicy {
    #[default]
    Disabled,
    Enabled { ttl: Duration },
}

impl CachePolicy {
    pub fn ttl(self) -> Option<Duration> {
        match self {
            CachePolicy::Enabled { ttl } => Some(ttl),
            CachePolicy::Disabled => None,
        }
    }
}
