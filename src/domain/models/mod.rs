//! Domain models for catalog requests and results.

pub mod config;
pub mod media;
pub mod params;
pub mod request;
pub mod search_result;

pub use config::{Config, ConfigOverrides, HttpConfig, LoggingConfig, FALLBACK_LIMIT};
pub use media::{MediaArg, MediaCall, MediaType};
pub use params::{ParamValue, ParameterSet};
pub use request::{RequestBuilder, RequestDescriptor, RequestType};
pub use search_result::SearchResult;
