//! Port trait definitions (Hexagonal Architecture)
//!
//! This module defines async trait interfaces that infrastructure adapters must implement:
//! - HttpTransport: performs catalog GET requests and parses the JSON body
//! - ResultCache: key/value store for serialized results with per-entry TTL
//!
//! The agent only sees these traits, so transports and caches can be
//! swapped (or stubbed in tests) at construction time.

pub mod http_transport;
pub mod null_cache;
pub mod result_cache;

pub use http_transport::HttpTransport;
pub use null_cache::NullResultCache;
pub use result_cache::ResultCache;
