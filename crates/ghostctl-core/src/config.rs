//! Configuration management for ghostctl
//!
//! A small TOML-backed configuration describing how to reach the
//! wrapped VPN client.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default client binary name.
pub const DEFAULT_BINARY: &str = "cyberghostvpn";

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// VPN client binary name or path
    pub binary: String,

    /// Prefix privileged commands (connect/disconnect) with sudo
    pub use_sudo: bool,

    /// Country code the connect command may use to skip the menu
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_country: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            binary: DEFAULT_BINARY.to_string(),
            use_sudo: true,
            default_country: None,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|_| Error::ConfigNotFound {
            path: path.display().to_string(),
        })?;
        Self::from_toml(&content)
    }

    /// Parse configuration from a TOML string
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(Error::from)
    }

    /// Serialize to a TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(Error::from)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.binary.trim().is_empty() {
            return Err(Error::Config("binary must not be empty".to_string()));
        }

        if let Some(ref code) = self.default_country {
            if code.len() != 2 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
                return Err(Error::Config(format!(
                    "default_country must be a two-letter code, got '{code}'"
                )));
            }
        }

        Ok(())
    }
}
