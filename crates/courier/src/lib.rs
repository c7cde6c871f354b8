//! courier — a declarative async HTTP client with TTL response caching.
//!
//! Requests are described as [`Endpoint`] values (path, method, query,
//! headers, optional JSON body, cache policy) and dispatched by a [`Client`]
//! configured with a base URL. Successful 2xx responses for cache-enabled
//! endpoints are stored in a sharded in-memory cache and served back while
//! still fresh under the endpoint's TTL; identity ignores volatile headers
//! such as `Authorization`.
//!
//! ```no_run
//! use courier::{Client, Config, Endpoint};
//! use serde::Deserialize;
//! use std::time::Duration;
//!
//! #[derive(Deserialize)]
//! struct Team {
//!     name: String,
//! }
//!
//! # async fn run() -> Result<(), courier::Error> {
//! let client = Client::new(Config::new("https://api.example.com")?);
//! let endpoint = Endpoint::get("/teams/napoli").cache_for(Duration::from_secs(60));
//!
//! let team: Team = client.send(&endpoint).await?;
//! println!("{}", team.name);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod method;
pub mod policy;
pub mod validate;

pub use client::Client;
pub use config::Config;
pub use endpoint::Endpoint;
pub use error::Error;
pub use method::Method;
pub use policy::CachePolicy;

pub use courier_cache::{CacheKey, CacheStats, RequestParts, ResponseCache};
