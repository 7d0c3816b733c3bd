//! HTTP transport used by the connection layer.

mod config;
mod http_client;

// export public structs
pub use config::{HttpConfig, HttpConfigError};
pub use http_client::{HttpClient, HttpClientError, HttpClientUreq};

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
