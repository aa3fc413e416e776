//! Infrastructure layer module
//!
//! This module contains the ambient concerns around the agent:
//! - Configuration management
//! - Logging infrastructure

pub mod config;
pub mod logging;
