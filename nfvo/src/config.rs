//! # NFVO facade configuration.

use std::path::{Path, PathBuf};

use nso_client::ServerConfig;
use serde::Deserialize;

use crate::error::ConfigError;

/// Default directory holding VNFR payload files.
pub const DEFAULT_VNFR_DIR: &str = "/root/demo/nso/vnfr/";
/// Default directory holding VNFD payload files.
pub const DEFAULT_VNFD_DIR: &str = "/root/demo/nso/vnfd/";

const VNFR_DIR_VAR: &str = "NFVO_VNFR_DIR";
const VNFD_DIR_VAR: &str = "NFVO_VNFD_DIR";

/// NSO server plus the local directories payload files are read from.
///
/// # Examples
///
/// ```rust
/// use nfvo::NfvoConfig;
///
/// let config: NfvoConfig = serde_yaml::from_str(
///     r#"
/// server:
///   host: 192.168.23.2
///   username: admin
///   password: admin
/// vnfd_dir: /srv/nfvo/vnfd
/// "#,
/// )
/// .unwrap();
/// assert_eq!(config.server.port, 8080);
/// assert_eq!(config.vnfr_dir.to_str(), Some("/root/demo/nso/vnfr/"));
/// ```
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct NfvoConfig {
    /// NSO server address and credentials.
    pub server: ServerConfig,
    /// Directory of VNFR payload files.
    #[serde(default = "default_vnfr_dir")]
    pub vnfr_dir: PathBuf,
    /// Directory of VNFD payload files.
    #[serde(default = "default_vnfd_dir")]
    pub vnfd_dir: PathBuf,
}

fn default_vnfr_dir() -> PathBuf {
    PathBuf::from(DEFAULT_VNFR_DIR)
}

fn default_vnfd_dir() -> PathBuf {
    PathBuf::from(DEFAULT_VNFD_DIR)
}

impl NfvoConfig {
    /// Uses the default payload directories.
    pub fn new(server: ServerConfig) -> Self {
        Self {
            server,
            vnfr_dir: default_vnfr_dir(),
            vnfd_dir: default_vnfd_dir(),
        }
    }

    /// Read VNFR payloads from `dir`.
    pub fn with_vnfr_dir(self, dir: impl Into<PathBuf>) -> Self {
        Self {
            vnfr_dir: dir.into(),
            ..self
        }
    }

    /// Read VNFD payloads from `dir`.
    pub fn with_vnfd_dir(self, dir: impl Into<PathBuf>) -> Self {
        Self {
            vnfd_dir: dir.into(),
            ..self
        }
    }

    /// Loads the configuration from a YAML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_yaml::from_str(&content).map_err(|source| ConfigError::Yaml {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Loads the configuration from the `NSO_*` variables read by
    /// [`ServerConfig::from_env`], plus the optional `NFVO_VNFR_DIR` and
    /// `NFVO_VNFD_DIR`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::new(ServerConfig::from_lookup(&lookup)?);
        if let Some(dir) = lookup(VNFR_DIR_VAR) {
            config.vnfr_dir = dir.into();
        }
        if let Some(dir) = lookup(VNFD_DIR_VAR) {
            config.vnfd_dir = dir.into();
        }
        Ok(config)
    }
}
