//! Key of a VNF deployment record.

use std::fmt::{Display, Formatter};

/// Identifies a VNF deployment: tenant, deployment name and the ESC managing it.
///
/// NSO keys the `vnf-deployment` list on the three leaves at once, so the
/// key is rendered as a single comma-separated path segment.
///
/// ```
/// use nfvo::DeploymentKey;
///
/// let key = DeploymentKey::new("t1", "dep1", "esc1");
/// assert_eq!(key.to_string(), "t1,dep1,esc1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DeploymentKey {
    /// Tenant owning the deployment.
    pub tenant: String,
    /// Deployment name.
    pub deployment: String,
    /// ESC instance managing the deployment.
    pub esc: String,
}

impl DeploymentKey {
    /// Builds a key from its three leaves.
    pub fn new(
        tenant: impl Into<String>,
        deployment: impl Into<String>,
        esc: impl Into<String>,
    ) -> Self {
        Self {
            tenant: tenant.into(),
            deployment: deployment.into(),
            esc: esc.into(),
        }
    }
}

impl Display for DeploymentKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{},{}", self.tenant, self.deployment, self.esc)
    }
}

impl From<DeploymentKey> for String {
    fn from(val: DeploymentKey) -> Self {
        val.to_string()
    }
}
