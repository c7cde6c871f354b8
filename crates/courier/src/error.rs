use thiserror::Error;

/// Failures surfaced by the client layer.
///
/// The cache contributes nothing here: absent and expired entries are
/// ordinary misses, and eviction degrades silently to a future miss.
#[derive(Debug, Error)]
pub enum Error {
    /// Base URL and path could not be combined into a valid absolute URL.
    #[error("cannot build request URL")]
    CannotBuildUrl,

    /// The server answered outside the 2xx range.
    #[error("unexpected status code {0}")]
    Status(u16),

    /// Transport-level failure from the HTTP executor.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// A request or response body could not be serialized or decoded as JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
