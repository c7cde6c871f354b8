use crate::error::Error;
use crate::method::Method;
use crate::policy::CachePolicy;
use courier_cache::RequestParts;
use reqwest::Url;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use std::time::Duration;

/// Declarative description of a single API call: path relative to the
/// client's base URL, method, query, headers, optional JSON body, and the
/// cache policy the dispatcher should apply.
#[derive(Debug, Clone, Default)]
pub struct Endpoint {
    pub path: String,
    pub method: Method,
    pub query: Vec<(String, String)>,
    pub headers: HashMap<String, String>,
    pub body: Option<Value>,
    pub cache: CachePolicy,
}

impl Endpoint {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            method,
            ..Default::default()
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::Post, path)
    }

    pub fn query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((name.into(), value.into()));
        self
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Attach a JSON body. The request will carry
    /// `Content-Type: application/json` unless a header overrides it.
    pub fn json<T: Serialize>(mut self, body: &T) -> Result<Self, Error> {
        self.body = Some(serde_json::to_value(body)?);
        Ok(self)
    }

    /// Enable caching for this endpoint with the given freshness window.
    pub fn cache_for(mut self, ttl: Duration) -> Self {
        self.cache = CachePolicy::Enabled { ttl };
        self
    }

    /// Assemble the absolute URL and normalized request parts, plus the
    /// serialized body if one is attached.
    ///
    /// The joined URL must have a scheme and a host; anything else is
    /// [`Error::CannotBuildUrl`]. Explicit headers win over the implied
    /// `Content-Type` of a JSON body.
    pub fn to_parts(&self, base: &Url) -> Result<(RequestParts, Option<Vec<u8>>), Error> {
        let joined = if self.path.is_empty() {
            base.as_str().to_string()
        } else {
            format!(
                "{}/{}",
                base.as_str().trim_end_matches('/'),
                self.path.trim_start_matches('/')
            )
        };
        let mut url = Url::parse(&joined).map_err(|_| Error::CannotBuildUrl)?;

        if !self.query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (name, value) in &self.query {
                pairs.append_pair(name, value);
            }
        }

        if url.host_str().map_or(true, str::is_empty) {
            return Err(Error::CannotBuildUrl);
        }

        let mut headers = HashMap::new();
        let body = match &self.body {
            Some(value) => {
                headers.insert("Content-Type".to_string(), "application/json".to_string());
                Some(serde_json::to_vec(value)?)
            }
            None => None,
        };
        headers.extend(self.headers.clone());

        Ok((
            RequestParts {
                method: Some(self.method.as_str().to_string()),
                url: url.to_string(),
                headers,
            },
            body,
        ))
    }
}
