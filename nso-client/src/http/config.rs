//! # HTTP transport configuration.

use std::str::FromStr;
use std::time::Duration;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use http::header::{AUTHORIZATION, InvalidHeaderName, InvalidHeaderValue};
use http::{HeaderMap, HeaderName, HeaderValue};

use crate::ServerConfig;

/// Default client timeout is 30 seconds
const DEFAULT_CLIENT_TIMEOUT: Duration = Duration::from_secs(30);

/// A struct representing the configuration for the internal HTTP client.
///
/// # Examples
///
/// Creating a new `HttpConfig` with Basic credentials:
///
/// ```rust
/// use nso_client::http::HttpConfig;
///
/// let config = HttpConfig::new().with_basic_auth("admin", "admin").unwrap();
/// ```
///
/// Adding custom headers to the configuration:
///
/// ```rust
/// use nso_client::http::HttpConfig;
///
/// let config = HttpConfig::new()
///     .with_headers(vec![("X-Request-Source", "nfvo")])
///     .unwrap();
/// ```
///
/// Setting a custom timeout in the configuration:
///
/// ```rust
/// use std::time::Duration;
/// use nso_client::http::HttpConfig;
///
/// let config = HttpConfig::new().with_timeout(Duration::from_secs(5));
/// ```
#[derive(Debug, Clone)]
pub struct HttpConfig {
    pub(super) headers: HeaderMap,
    pub(super) timeout: Duration,
}

/// An enumeration of potential errors related to the HTTP configuration.
#[derive(thiserror::Error, Debug)]
pub enum HttpConfigError {
    /// HTTP client with an invalid header value.
    #[error("`{0}`")]
    InvalidHeader(#[from] InvalidHeaderValue),
    /// HTTP client with an invalid header name.
    #[error("`{0}`")]
    InvalidHeaderName(#[from] InvalidHeaderName),
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            headers: HeaderMap::new(),
            timeout: DEFAULT_CLIENT_TIMEOUT,
        }
    }
}

impl HttpConfig {
    /// Construct a new `HttpConfig` with no default headers and the default timeout.
    pub fn new() -> Self {
        Self::default()
    }

    /// Optionally include custom headers into the HTTP requests.
    ///
    /// Custom headers can be added using an input iterator that provides key-value pairs.
    ///
    /// If the key already exists in the current header map, the new value will overwrite the old one.
    ///
    /// # Errors
    ///
    /// This function will return an error if the provided key or value is not valid.
    pub fn with_headers<I, K, V>(mut self, headers: I) -> Result<Self, HttpConfigError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        for (ref key, ref val) in headers {
            let _ = self
                .headers
                .insert(HeaderName::from_str(key.as_ref())?, val.as_ref().parse()?);
        }
        Ok(self)
    }

    /// Send Basic credentials with every request.
    ///
    /// # Errors
    ///
    /// This function will return an error if the credentials do not form a valid header value.
    pub fn with_basic_auth(
        mut self,
        username: &str,
        password: &str,
    ) -> Result<Self, HttpConfigError> {
        let token = STANDARD.encode(format!("{username}:{password}"));
        let mut value = HeaderValue::from_str(&format!("Basic {token}"))?;
        value.set_sensitive(true);
        self.headers.insert(AUTHORIZATION, value);
        Ok(self)
    }

    /// Define a custom timeout for the http client.
    pub fn with_timeout(self, timeout: Duration) -> Self {
        Self { timeout, ..self }
    }
}

impl TryFrom<&ServerConfig> for HttpConfig {
    type Error = HttpConfigError;

    fn try_from(value: &ServerConfig) -> Result<Self, Self::Error> {
        HttpConfig::new().with_basic_auth(&value.username, &value.password)
    }
}
