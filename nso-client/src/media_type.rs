//! Vendor media types and the headers that carry them.

use std::fmt::{Display, Formatter};

use http::HeaderName;
use http::header::{ACCEPT, CONTENT_TYPE};

/// Shape of the JSON resource exchanged with NSO.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaType {
    /// The API root resource.
    Api,
    /// A whole datastore.
    Datastore,
    /// A single data node and its children.
    Data,
    /// A list of data nodes.
    Collection,
    /// An action or rpc invocation.
    Operation,
}

impl MediaType {
    /// MIME string sent in the `Accept` or `Content-Type` header.
    pub const fn mime(&self) -> &'static str {
        match self {
            MediaType::Api => "application/vnd.yang.api+json",
            MediaType::Datastore => "application/vnd.yang.datastore+json",
            MediaType::Data => "application/vnd.yang.data+json",
            MediaType::Collection => "application/vnd.yang.collection+json",
            MediaType::Operation => "application/vnd.yang.operation+json",
        }
    }
}

impl Display for MediaType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.mime())
    }
}

/// Header that carries the [`MediaType`] of a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaHeader {
    /// Media type expected in the response.
    Accept,
    /// Media type of the request body.
    ContentType,
}

impl MediaHeader {
    /// The HTTP header name.
    pub fn header_name(&self) -> HeaderName {
        match self {
            MediaHeader::Accept => ACCEPT,
            MediaHeader::ContentType => CONTENT_TYPE,
        }
    }
}
