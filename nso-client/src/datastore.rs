//! NSO datastores addressable through the REST API.

use std::fmt::{Display, Formatter};

/// A configuration view exposed by NSO under `/api/<datastore>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DatastoreType {
    /// Configuration-only view of the running datastore.
    Config,
    /// Running configuration.
    Running,
    /// Configuration plus operational state.
    Operational,
    /// Startup configuration.
    Startup,
    /// Candidate configuration, when the device model supports it.
    Candidate,
    /// Stored rollback files.
    Rollbacks,
}

impl DatastoreType {
    /// URL segment placed right after `/api` to address this datastore.
    pub const fn as_str(&self) -> &'static str {
        match self {
            DatastoreType::Config => "config",
            DatastoreType::Running => "running",
            DatastoreType::Operational => "operational",
            DatastoreType::Startup => "startup",
            DatastoreType::Candidate => "candidate",
            DatastoreType::Rollbacks => "rollbacks",
        }
    }
}

impl Display for DatastoreType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
