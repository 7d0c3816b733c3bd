//! This module defines the error and result types of the connection and client layers.

use thiserror::Error;
use url::ParseError;

use crate::http::{HttpClientError, HttpConfigError};

/// Represents the errors that can occur while exchanging a request with NSO.
#[derive(Error, Debug)]
pub enum ConnectionError {
    /// The server answered with a status outside of the 2xx range.
    #[error("Status code: `{status}` Body: `{body}`")]
    UnsuccessfulResponse {
        /// HTTP status code.
        status: u16,
        /// Response body as sent by the server.
        body: String,
    },
    /// Represents a transport error.
    #[error("`{0}`")]
    HttpClient(#[from] HttpClientError),
    /// The request URL could not be built.
    #[error("`{0}`")]
    InvalidUrl(#[from] ParseError),
    /// The request could not be built.
    #[error("`{0}`")]
    InvalidRequest(#[from] http::Error),
    /// The request body could not be serialized.
    #[error("serializing request body: `{0}`")]
    Serialize(#[source] serde_json::Error),
    /// The response body is not valid JSON.
    #[error("invalid JSON response: `{0}`")]
    InvalidJson(#[source] serde_json::Error),
    /// The response body is not valid UTF-8 text.
    #[error("`{0}`")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
}

/// Represents the errors returned by [`crate::NsoClient`] operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Represents a connection error.
    #[error("`{0}`")]
    Connection(#[from] ConnectionError),
    /// The transport could not be configured.
    #[error("`{0}`")]
    HttpConfig(#[from] HttpConfigError),
    /// An expected member is absent from the response.
    #[error("response has no `{0}` member")]
    MissingField(&'static str),
}

/// A type alias for results from connection requests.
pub type ConnectionResult<T> = Result<T, ConnectionError>;

/// A type alias for results from client operations.
pub type ClientResult<T> = Result<T, ClientError>;
