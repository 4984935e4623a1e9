//! Application settings loaded via OrthoConfig.
//!
//! Values come from `CMS_*` environment variables, command-line flags and
//! an optional configuration file, in OrthoConfig's usual precedence.

use std::net::SocketAddr;
use std::path::PathBuf;

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:4567";

/// Paths and listener settings for the server.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "CMS")]
pub struct CmsSettings {
    /// Use the test document root and credential file unless overridden.
    #[ortho_config(default = false)]
    pub test_mode: bool,
    /// Directory holding the documents.
    pub data_dir: Option<PathBuf>,
    /// YAML file mapping usernames to bcrypt hashes.
    pub users_file: Option<PathBuf>,
    /// Listener address, `host:port`.
    pub bind_addr: Option<String>,
}

/// Settings that do not form a usable configuration.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SettingsError {
    /// `bind_addr` is not a socket address.
    #[error("invalid bind address '{value}': {message}")]
    InvalidBindAddr {
        /// Rejected value.
        value: String,
        /// Parser message.
        message: String,
    },
}

impl CmsSettings {
    /// Document root: explicit, else `tests/data` in test mode, else `data`.
    #[must_use]
    pub fn data_dir(&self) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(|| {
            if self.test_mode {
                PathBuf::from("tests").join("data")
            } else {
                PathBuf::from("data")
            }
        })
    }

    /// Credential file: explicit, else `tests/users.yml` in test mode, else
    /// `users.yml`.
    #[must_use]
    pub fn users_file(&self) -> PathBuf {
        self.users_file.clone().unwrap_or_else(|| {
            if self.test_mode {
                PathBuf::from("tests").join("users.yml")
            } else {
                PathBuf::from("users.yml")
            }
        })
    }

    /// Parsed listener address, defaulting to `0.0.0.0:4567`.
    ///
    /// # Errors
    /// [`SettingsError::InvalidBindAddr`] when the value does not parse.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let value = self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR);
        value
            .parse()
            .map_err(|error: std::net::AddrParseError| SettingsError::InvalidBindAddr {
                value: value.to_owned(),
                message: error.to_string(),
            })
    }
}
