//! Domain layer for the catalog agent
//!
//! This module contains the request-building rules, data models and the
//! port traits that transport and cache adapters implement.

pub mod errors;
pub mod models;
pub mod ports;

// Re-export error types for convenient access
pub use errors::{AgentError, AgentResult};
