//! Credential store backed by a YAML file of bcrypt hashes.
//!
//! The file is a flat mapping:
//!
//! ```yaml
//! admin: $2a$10$...
//! ```
//!
//! It is read once at startup and kept in memory for the process lifetime.
//! Hash comparison uses bcrypt's own verifier on the blocking pool because it
//! is deliberately slow.

use std::collections::HashMap;
use std::path::Path;

use async_trait::async_trait;
use cap_std::{ambient_authority, fs::Dir};
use tracing::{info, warn};
use zeroize::Zeroizing;

use crate::domain::LoginCredentials;
use crate::domain::ports::{CredentialStore, CredentialStoreError};

/// Username to bcrypt hash mapping loaded from YAML.
#[derive(Debug, Clone, Default)]
pub struct YamlCredentialStore {
    hashes: HashMap<String, String>,
}

impl YamlCredentialStore {
    /// Read and parse the credential file at `path`.
    ///
    /// # Errors
    /// [`CredentialStoreError::Read`] when the file cannot be read,
    /// [`CredentialStoreError::Parse`] when it is not a mapping of strings.
    pub fn load(path: &Path) -> Result<Self, CredentialStoreError> {
        let label = path.display().to_string();
        let parent = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let file_name = path
            .file_name()
            .ok_or_else(|| CredentialStoreError::read(label.as_str(), "path must name a file"))?;
        let dir = Dir::open_ambient_dir(parent, ambient_authority())
            .map_err(|error| CredentialStoreError::read(label.as_str(), error.to_string()))?;
        let source = dir
            .read_to_string(Path::new(file_name))
            .map_err(|error| CredentialStoreError::read(label.as_str(), error.to_string()))?;
        let store = Self::from_yaml(&label, &source)?;
        info!(path = %label, users = store.len(), "credentials loaded");
        Ok(store)
    }

    /// Parse credentials from YAML text; `label` names the source in errors.
    ///
    /// An empty document yields an empty store.
    ///
    /// # Errors
    /// [`CredentialStoreError::Parse`] when the text is not a mapping of
    /// strings.
    pub fn from_yaml(label: &str, source: &str) -> Result<Self, CredentialStoreError> {
        if source.trim().is_empty() {
            return Ok(Self::default());
        }
        let hashes: HashMap<String, String> = serde_yaml_ng::from_str(source)
            .map_err(|error| CredentialStoreError::parse(label, error.to_string()))?;
        Ok(Self { hashes })
    }

    /// Number of known users.
    #[must_use]
    pub fn len(&self) -> usize {
        self.hashes.len()
    }

    /// True when no users are configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hashes.is_empty()
    }
}

#[async_trait]
impl CredentialStore for YamlCredentialStore {
    async fn verify(&self, credentials: &LoginCredentials) -> bool {
        let username = credentials.username().as_str();
        let Some(hash) = self.hashes.get(username).cloned() else {
            return false;
        };
        let password = Zeroizing::new(credentials.password().to_owned());
        match tokio::task::spawn_blocking(move || bcrypt::verify(password.as_str(), &hash)).await {
            Ok(Ok(matches)) => matches,
            Ok(Err(error)) => {
                warn!(%username, %error, "stored password hash is malformed");
                false
            }
            Err(error) => {
                warn!(%username, %error, "password verification task failed");
                false
            }
        }
    }
}
