use std::collections::HashMap;

/// Header names permitted to influence cache identity. Everything else
/// (Authorization, request ids, timestamps) is volatile and stripped before
/// the key is computed.
pub const ALLOWED_HEADERS: [&str; 3] = ["Accept", "Content-Type", "Accept-Language"];

/// Normalized description of an outgoing request, produced by the
/// request-building layer. The cache borrows it for the duration of a lookup
/// or store and never retains it.
#[derive(Debug, Clone, Default)]
pub struct RequestParts {
    /// HTTP method token. `None` reads as GET at key derivation.
    pub method: Option<String>,
    /// Absolute URL, taken verbatim. No normalization: two syntactically
    /// different URLs are different keys even when they name the same
    /// resource (query order, casing, trailing slash all matter).
    pub url: String,
    /// Full header map exactly as supplied by the caller, case-sensitive.
    pub headers: HashMap<String, String>,
}

/// Stable identity of a request for caching purposes.
///
/// Headers are filtered to [`ALLOWED_HEADERS`] and sorted by name once, at
/// derivation time, so the derived `Eq` and `Hash` agree with each other
/// regardless of the source map's iteration order. The full header set is
/// never retained on the key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    method: String,
    url: String,
    headers: Vec<(String, String)>,
}

impl CacheKey {
    /// Derive a key from request parts. Pure and total: a missing method
    /// defaults to GET, and an empty URL is a legitimate (if useless) key —
    /// URL validity is the request builder's concern, not the cache's.
    pub fn derive(parts: &RequestParts) -> Self {
        let mut headers: Vec<(String, String)> = parts
            .headers
            .iter()
            .filter(|(name, _)| ALLOWED_HEADERS.contains(&name.as_str()))
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect();
        headers.sort();

        Self {
            method: parts.method.clone().unwrap_or_else(|| "GET".to_string()),
            url: parts.url.clone(),
            headers,
        }
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Allow-listed headers that survived derivation, sorted by name.
    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn parts(method: Option<&str>, url: &str, headers: &[(&str, &str)]) -> RequestParts {
        RequestParts {
            method: method.map(String::from),
            url: url.to_string(),
            headers: headers
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    fn hash_of(key: &CacheKey) -> u64 {
        let mut hasher = DefaultHasher::new();
        key.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn identical_requests_derive_equal_keys() {
        let a = CacheKey::derive(&parts(Some("GET"), "https://api.example.com/test", &[]));
        let b = CacheKey::derive(&parts(Some("GET"), "https://api.example.com/test", &[]));
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn different_urls_derive_different_keys() {
        let a = CacheKey::derive(&parts(None, "https://api.example.com/one", &[]));
        let b = CacheKey::derive(&parts(None, "https://api.example.com/two", &[]));
        assert_ne!(a, b);
    }

    #[test]
    fn different_methods_derive_different_keys() {
        let a = CacheKey::derive(&parts(Some("GET"), "https://api.example.com/test", &[]));
        let b = CacheKey::derive(&parts(Some("POST"), "https://api.example.com/test", &[]));
        assert_ne!(a, b);
    }

    #[test]
    fn missing_method_defaults_to_get() {
        let explicit = CacheKey::derive(&parts(Some("GET"), "https://api.example.com/test", &[]));
        let implicit = CacheKey::derive(&parts(None, "https://api.example.com/test", &[]));
        assert_eq!(explicit, implicit);
        assert_eq!(implicit.method(), "GET");
    }

    #[test]
    fn volatile_headers_are_ignored() {
        let a = CacheKey::derive(&parts(
            None,
            "https://api.example.com/test",
            &[("Authorization", "Bearer token1")],
        ));
        let b = CacheKey::derive(&parts(
            None,
            "https://api.example.com/test",
            &[("Authorization", "Bearer token2")],
        ));
        let c = CacheKey::derive(&parts(None, "https://api.example.com/test", &[]));
        assert_eq!(a, b);
        assert_eq!(a, c);
        assert!(a.headers().is_empty());
    }

    #[test]
    fn allow_listed_headers_distinguish_keys() {
        let json = CacheKey::derive(&parts(
            None,
            "https://api.example.com/test",
            &[("Content-Type", "application/json")],
        ));
        let xml = CacheKey::derive(&parts(
            None,
            "https://api.example.com/test",
            &[("Content-Type", "application/xml")],
        ));
        assert_ne!(json, xml);
    }

    #[test]
    fn header_order_does_not_matter() {
        // HashMap iteration order is unspecified; build the maps in opposite
        // insertion order and check both equality and hash.
        let a = CacheKey::derive(&parts(
            None,
            "https://api.example.com/test",
            &[("Accept", "application/json"), ("Accept-Language", "it")],
        ));
        let b = CacheKey::derive(&parts(
            None,
            "https://api.example.com/test",
            &[("Accept-Language", "it"), ("Accept", "application/json")],
        ));
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn empty_url_is_a_valid_key() {
        let a = CacheKey::derive(&parts(None, "", &[]));
        let b = CacheKey::derive(&parts(None, "", &[]));
        assert_eq!(a, b);
        assert_eq!(a.url(), "");
    }

    #[test]
    fn urls_are_not_normalized() {
        let plain = CacheKey::derive(&parts(None, "https://api.example.com/a?x=1&y=2", &[]));
        let reordered = CacheKey::derive(&parts(None, "https://api.example.com/a?y=2&x=1", &[]));
        let trailing = CacheKey::derive(&parts(None, "https://api.example.com/a/?x=1&y=2", &[]));
        assert_ne!(plain, reordered);
        assert_ne!(plain, trailing);
    }
}
