//! Mock transport and response helpers for tests of code built on [`HttpClient`].
//!
//! Available to this crate's tests and, through the `test-utils` feature, to
//! dependent crates.

use std::collections::HashMap;

use http::{Request, Response, StatusCode, response::Builder};
use mockall::mock;

use super::{HttpClient, HttpClientError};

// Define a struct to represent the mock client
mock! {
    /// Mock of [`HttpClient`].
    pub HttpClientMockall {}

    impl HttpClient for HttpClientMockall {
        fn send(&self, request: Request<Vec<u8>>) -> Result<Response<Vec<u8>>, HttpClientError>;
    }
}

impl MockHttpClientMockall {
    /// Expects one request, answered with `response`.
    pub fn should_send(&mut self, response: Response<Vec<u8>>) {
        self.expect_send().once().return_once(move |_| Ok(response));
    }

    /// Expects one request matching `matcher`, answered with `status` and `body`.
    pub fn should_send_when<F>(&mut self, matcher: F, status: StatusCode, body: &str)
    where
        F: Fn(&Request<Vec<u8>>) -> bool + Send + 'static,
    {
        let response = response_from_body(
            body,
            ResponseParts {
                status,
                ..Default::default()
            },
        );
        self.expect_send()
            .once()
            .withf(matcher)
            .return_once(move |_| Ok(response));
    }

    /// Expects one request, failing with `error`.
    pub fn should_not_send(&mut self, error: HttpClientError) {
        self.expect_send().once().return_once(move |_| Err(error));
    }
}

/// Status and headers of a canned response.
pub struct ResponseParts {
    /// Response status.
    pub status: StatusCode,
    /// Response headers.
    pub headers: HashMap<String, String>,
}

impl Default for ResponseParts {
    fn default() -> Self {
        ResponseParts {
            status: StatusCode::OK,
            headers: HashMap::new(),
        }
    }
}

/// Creates a response carrying the given body.
///
/// # Panics
///
/// Panics if a header in `response_parts` is not valid.
pub fn response_from_body(
    body: impl Into<Vec<u8>>,
    response_parts: ResponseParts,
) -> Response<Vec<u8>> {
    let mut response_builder = Builder::new();
    for (k, v) in response_parts.headers {
        response_builder = response_builder.header(k, v);
    }

    response_builder
        .status(response_parts.status)
        .body(body.into())
        .expect("valid canned response")
}
