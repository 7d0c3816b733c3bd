//! # NSO server configuration.

use std::fmt::{Debug, Formatter};

use serde::Deserialize;
use thiserror::Error;
use url::Url;

/// Default port of the NSO northbound HTTP interface.
pub const DEFAULT_PORT: u16 = 8080;

const HOST_VAR: &str = "NSO_HOST";
const PORT_VAR: &str = "NSO_PORT";
const SSL_VAR: &str = "NSO_SSL";
const USERNAME_VAR: &str = "NSO_USERNAME";
const PASSWORD_VAR: &str = "NSO_PASSWORD";

/// An enumeration of potential errors while loading a [`ServerConfig`].
#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    /// A required environment variable is not set.
    #[error("missing environment variable `{0}`")]
    MissingVar(&'static str),
    /// An environment variable holds a value that cannot be parsed.
    #[error("invalid value `{value}` for environment variable `{var}`")]
    InvalidVar {
        /// Name of the variable.
        var: &'static str,
        /// Offending value.
        value: String,
    },
}

/// Address and credentials of an NSO server.
///
/// # Examples
///
/// ```rust
/// use nso_client::ServerConfig;
///
/// let config = ServerConfig::new("192.168.23.2", "admin", "admin")
///     .with_port(8888)
///     .with_ssl(true);
/// assert_eq!(config.api_url().unwrap().as_str(), "https://192.168.23.2:8888/api");
/// ```
#[derive(Clone, Deserialize, PartialEq)]
pub struct ServerConfig {
    /// Host name or IP address.
    pub host: String,
    /// TCP port.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Use HTTPS instead of HTTP.
    #[serde(default)]
    pub ssl: bool,
    /// Basic authentication user.
    pub username: String,
    /// Basic authentication password.
    pub password: String,
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

impl ServerConfig {
    /// Plain HTTP on the default port.
    pub fn new(
        host: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            host: host.into(),
            port: DEFAULT_PORT,
            ssl: false,
            username: username.into(),
            password: password.into(),
        }
    }

    /// Use a custom port.
    pub fn with_port(self, port: u16) -> Self {
        Self { port, ..self }
    }

    /// Enable or disable HTTPS.
    pub fn with_ssl(self, ssl: bool) -> Self {
        Self { ssl, ..self }
    }

    /// Reads the configuration from `NSO_HOST`, `NSO_PORT`, `NSO_SSL`,
    /// `NSO_USERNAME` and `NSO_PASSWORD`. Port and TLS flag are optional.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Same as [`ServerConfig::from_env`], resolving variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |var: &'static str| lookup(var).ok_or(ConfigError::MissingVar(var));

        let port = match lookup(PORT_VAR) {
            Some(value) => value.parse().map_err(|_| ConfigError::InvalidVar {
                var: PORT_VAR,
                value,
            })?,
            None => DEFAULT_PORT,
        };
        let ssl = match lookup(SSL_VAR) {
            Some(value) => parse_flag(&value).ok_or(ConfigError::InvalidVar {
                var: SSL_VAR,
                value,
            })?,
            None => false,
        };

        Ok(Self {
            host: required(HOST_VAR)?,
            port,
            ssl,
            username: required(USERNAME_VAR)?,
            password: required(PASSWORD_VAR)?,
        })
    }

    /// Root of the REST API, `scheme://host:port/api`.
    pub fn api_url(&self) -> Result<Url, url::ParseError> {
        let scheme = if self.ssl { "https" } else { "http" };
        // IPv6 literals need brackets in the authority
        let host = if self.host.contains(':') && !self.host.starts_with('[') {
            format!("[{}]", self.host)
        } else {
            self.host.clone()
        };
        Url::parse(&format!("{scheme}://{host}:{}/api", self.port))
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

// Keeps the password out of logs.
impl Debug for ServerConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("ssl", &self.ssl)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}
