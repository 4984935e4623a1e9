//! Driving port for document mutations.

use async_trait::async_trait;

use crate::domain::{DocumentName, Error};

/// Write-side document operations used by inbound adapters.
///
/// Every operation returns the name it acted on so callers can report it.
#[async_trait]
pub trait DocumentCommand: Send + Sync {
    /// Create an empty document. The name is lower-cased, then validated.
    async fn create(&self, raw_name: &str) -> Result<DocumentName, Error>;

    /// Replace a document's content, creating it when absent.
    async fn update(&self, name: &str, content: &str) -> Result<DocumentName, Error>;

    /// Remove a document.
    async fn delete(&self, name: &str) -> Result<DocumentName, Error>;

    /// Copy a document under the next free `(<n>)` name.
    async fn duplicate(&self, name: &str) -> Result<DocumentName, Error>;
}
