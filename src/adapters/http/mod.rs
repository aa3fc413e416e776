//! HTTP transport for the catalog API.

pub mod reqwest_transport;

pub use reqwest_transport::ReqwestTransport;
