//! Error and result types of the NFVO facade.

use std::io;
use std::path::PathBuf;

use nso_client::ClientError;
use thiserror::Error;

/// Errors while loading an [`crate::NfvoConfig`].
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("reading config file `{path}`: `{source}`")]
    Io {
        /// File that was read.
        path: PathBuf,
        /// Underlying error.
        source: io::Error,
    },
    /// The configuration file is not valid YAML for an `NfvoConfig`.
    #[error("parsing config file `{path}`: `{source}`")]
    Yaml {
        /// File that was parsed.
        path: PathBuf,
        /// Underlying error.
        source: serde_yaml::Error,
    },
    /// The server configuration could not be read from the environment.
    #[error("`{0}`")]
    Env(#[from] nso_client::config::ConfigError),
}

/// Represents the errors returned by [`crate::Nfvo`] operations.
#[derive(Error, Debug)]
pub enum NfvoError {
    /// Represents an NSO client error.
    #[error("`{0}`")]
    Client(#[from] ClientError),
    /// The payload file is missing or unreadable. Nothing was sent.
    #[error("reading payload `{path}`: `{source}`")]
    PayloadRead {
        /// Payload file.
        path: PathBuf,
        /// Underlying error.
        source: io::Error,
    },
    /// The payload file is not valid JSON. Nothing was sent.
    #[error("parsing payload `{path}`: `{source}`")]
    PayloadParse {
        /// Payload file.
        path: PathBuf,
        /// Underlying error.
        source: serde_json::Error,
    },
    /// An expected member is absent from the response.
    #[error("response has no `{0}` member")]
    MissingField(&'static str),
    /// Represents a configuration error.
    #[error("`{0}`")]
    Config(#[from] ConfigError),
}

/// A type alias for results from NFVO operations.
pub type NfvoResult<T> = Result<T, NfvoError>;
