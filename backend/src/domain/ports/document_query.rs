//! Driving port for read-only document use-cases.

use async_trait::async_trait;

use crate::domain::{DocumentName, EditableDocument, Error, RenderedDocument};

/// Read-side document operations used by inbound adapters.
#[async_trait]
pub trait DocumentQuery: Send + Sync {
    /// Names of every stored document, sorted.
    async fn list(&self) -> Result<Vec<DocumentName>, Error>;

    /// Load a document and render it for display.
    ///
    /// Missing documents fail with [`crate::domain::ErrorCode::NotFound`] and
    /// the message `<name> does not exist.`.
    async fn view(&self, name: &str) -> Result<RenderedDocument, Error>;

    /// Load a document's raw content for editing.
    async fn load_for_edit(&self, name: &str) -> Result<EditableDocument, Error>;
}
