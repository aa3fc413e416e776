//! In-memory caching layer for catalog results.
//!
//! Uses `moka` for concurrent caching with a per-entry TTL, so each
//! result expires after the TTL that was in force when it was stored.

pub mod moka_result_cache;

pub use moka_result_cache::MokaResultCache;
