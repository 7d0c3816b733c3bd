//! NFVO operations on top of the NSO REST API.
//!
//! [`Nfvo`] manages two resource families of the NFVO model:
//!
//! * VNF deployment records (VNFR), keyed by a [`DeploymentKey`];
//! * VNF descriptors (VNFD), keyed by name.
//!
//! Creation uploads JSON payload files read from the directories set in
//! [`NfvoConfig`].

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod facade;
pub mod key;

pub use config::NfvoConfig;
pub use error::{NfvoError, NfvoResult};
pub use facade::Nfvo;
pub use key::DeploymentKey;
