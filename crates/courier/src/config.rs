use crate::error::Error;
use reqwest::Url;

/// Default total entry count for the client's response cache.
pub const DEFAULT_CACHE_CAPACITY: usize = 512;

/// Client configuration: base URL, HTTP executor, and cache sizing.
#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: Url,
    pub http: reqwest::Client,
    pub cache_capacity: usize,
}

impl Config {
    /// Build a configuration from a base URL string. The URL must be
    /// absolute with a non-empty host.
    pub fn new(base_url: &str) -> Result<Self, Error> {
        let base_url = Url::parse(base_url).map_err(|_| Error::CannotBuildUrl)?;
        if base_url.host_str().map_or(true, str::is_empty) {
            return Err(Error::CannotBuildUrl);
        }
        Ok(Self {
            base_url,
            http: reqwest::Client::new(),
            cache_capacity: DEFAULT_CACHE_CAPACITY,
        })
    }

    /// Replace the HTTP executor, e.g. to set timeouts or a proxy.
    pub fn with_client(mut self, http: reqwest::Client) -> Self {
        self.http = http;
        self
    }

    pub fn with_cache_capacity(mut self, capacity: usize) -> Self {
        self.cache_capacity = capacity;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_valid_base_url() {
        let config = Config::new("https://api.example.com").unwrap();
        assert_eq!(config.base_url.as_str(), "https://api.example.com/");
        assert_eq!(config.cache_capacity, DEFAULT_CACHE_CAPACITY);
    }

    #[test]
    fn rejects_a_relative_url() {
        assert!(matches!(
            Config::new("invalid-url"),
            Err(Error::CannotBuildUrl)
        ));
    }

    #[test]
    fn rejects_a_hostless_url() {
        assert!(matches!(
            Config::new("file:///tmp/x"),
            Err(Error::CannotBuildUrl)
        ));
    }

    #[test]
    fn cache_capacity_override() {
        let config = Config::new("https://api.example.com")
            .unwrap()
            .with_cache_capacity(64);
        assert_eq!(config.cache_capacity, 64);
    }
}
