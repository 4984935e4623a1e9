//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{CredentialStore, DocumentCommand, DocumentQuery};

use super::views::Views;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Read side of the document use-cases.
    pub documents: Arc<dyn DocumentQuery>,
    /// Write side of the document use-cases.
    pub documents_command: Arc<dyn DocumentCommand>,
    /// Sign-in verification.
    pub credentials: Arc<dyn CredentialStore>,
    /// Compiled page templates.
    pub views: Arc<Views>,
}

impl HttpState {
    /// Bundle the ports and views.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use cms::domain::DocumentService;
    /// use cms::domain::ports::{FixtureCredentialStore, InMemoryDocumentRepository};
    /// use cms::inbound::http::state::HttpState;
    /// use cms::inbound::http::views::Views;
    ///
    /// let service = Arc::new(DocumentService::new(Arc::new(InMemoryDocumentRepository::new())));
    /// let state = HttpState::new(
    ///     service.clone(),
    ///     service,
    ///     Arc::new(FixtureCredentialStore),
    ///     Arc::new(Views::new().expect("templates compile")),
    /// );
    /// let _views = state.views.clone();
    /// ```
    pub fn new(
        documents: Arc<dyn DocumentQuery>,
        documents_command: Arc<dyn DocumentCommand>,
        credentials: Arc<dyn CredentialStore>,
        views: Arc<Views>,
    ) -> Self {
        Self {
            documents,
            documents_command,
            credentials,
            views,
        }
    }
}
