//! Driven port for checking sign-in credentials.
//!
//! Inbound adapters ask the store whether a username/password pair is valid
//! without knowing how passwords are hashed or where they are kept. Unknown
//! users are a plain `false`, never an error.

use async_trait::async_trait;

use super::define_port_error;
use crate::domain::LoginCredentials;

define_port_error! {
    /// Errors raised while loading a credential store.
    pub enum CredentialStoreError {
        /// The credential file could not be read.
        Read { path: String, message: String } =>
            [InternalError] "failed to read credentials at {path}: {message}",
        /// The credential file is not a mapping of username to hash.
        Parse { path: String, message: String } =>
            [InternalError] "failed to parse credentials at {path}: {message}",
    }
}

/// Port answering "do these credentials belong to a known user?".
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// True only when the user exists and the password matches its hash.
    async fn verify(&self, credentials: &LoginCredentials) -> bool;
}

/// Development store accepting `admin` / `secret` only.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureCredentialStore;

#[async_trait]
impl CredentialStore for FixtureCredentialStore {
    async fn verify(&self, credentials: &LoginCredentials) -> bool {
        credentials.username().as_str() == "admin" && credentials.password() == "secret"
    }
}
