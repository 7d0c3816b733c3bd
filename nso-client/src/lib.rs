//! NSO REST API client library.
//!
//! The crate is split in three layers:
//!
//! * [`http`] holds the transport seam ([`http::HttpClient`]) and its
//!   blocking `ureq` implementation.
//! * [`connection`] turns a datastore, a media type and a resource path into a
//!   single HTTP request and decodes the JSON answer.
//! * [`client`] exposes one method per NSO operation on top of the connection.
//!
//! ```no_run
//! use nso_client::{DatastoreType, MediaHeader, MediaType, NsoClient, Params, ServerConfig};
//!
//! let config = ServerConfig::new("192.168.23.2", "admin", "admin");
//! let client = NsoClient::new(config).unwrap();
//!
//! let devices = client
//!     .get_data(
//!         DatastoreType::Running,
//!         &["devices", "device"].into(),
//!         MediaHeader::Accept,
//!         MediaType::Collection,
//!         &Params::new().flag("deep"),
//!     )
//!     .unwrap();
//! println!("{devices}");
//! ```

#![warn(missing_docs)]

pub mod client;
pub mod config;
pub mod connection;
pub mod datastore;
pub mod error;
pub mod http;
pub mod media_type;
pub mod path;

pub use client::NsoClient;
pub use config::ServerConfig;
pub use datastore::DatastoreType;
pub use error::{ClientError, ClientResult, ConnectionError, ConnectionResult};
pub use media_type::{MediaHeader, MediaType};
pub use path::{DataPath, Params};
