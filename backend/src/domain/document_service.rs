//! Document use-cases.
//!
//! [`DocumentService`] implements both document driving ports on top of any
//! [`DocumentRepository`], applying the naming rules and rendering markdown.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::domain::ports::{DocumentCommand, DocumentQuery, DocumentRepository};
use crate::domain::{
    DocumentBody, DocumentKind, DocumentName, DuplicateNameError, EditableDocument, Error,
    RenderedDocument, duplicate_name, render_markdown,
};

/// Parse the name of a document that should already exist.
///
/// A name that cannot be stored cannot exist either, so it is reported the
/// same way as a missing document.
fn existing_name(raw: &str) -> Result<DocumentName, Error> {
    DocumentName::new(raw).map_err(|_| Error::not_found(format!("{raw} does not exist.")))
}

fn map_duplicate_error(error: DuplicateNameError) -> Error {
    match error {
        DuplicateNameError::MalformedSource { .. } => Error::invalid_request(error.to_string()),
    }
}

/// Service implementing [`DocumentQuery`] and [`DocumentCommand`].
#[derive(Clone)]
pub struct DocumentService<R> {
    repository: Arc<R>,
}

impl<R> DocumentService<R> {
    /// Create a service over the given repository.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

impl<R> DocumentService<R>
where
    R: DocumentRepository,
{
    /// First generated copy name not already taken in the repository.
    async fn free_duplicate_name(&self, source: &str) -> Result<DocumentName, Error> {
        let mut candidate = duplicate_name(source).map_err(map_duplicate_error)?;
        loop {
            let name = DocumentName::new(candidate.as_str())
                .map_err(|err| Error::invalid_request(err.to_string()))?;
            if !self.repository.exists(&name).await? {
                return Ok(name);
            }
            candidate = duplicate_name(&candidate).map_err(map_duplicate_error)?;
        }
    }
}

#[async_trait]
impl<R> DocumentQuery for DocumentService<R>
where
    R: DocumentRepository,
{
    async fn list(&self) -> Result<Vec<DocumentName>, Error> {
        Ok(self.repository.list().await?)
    }

    async fn view(&self, name: &str) -> Result<RenderedDocument, Error> {
        let name = existing_name(name)?;
        let content = self.repository.read(&name).await?;
        let kind = name.kind();
        let body = match kind {
            DocumentKind::Markdown => {
                DocumentBody::Html(render_markdown(&String::from_utf8_lossy(&content)))
            }
            DocumentKind::Text | DocumentKind::Other => DocumentBody::Raw(content),
        };
        Ok(RenderedDocument { name, kind, body })
    }

    async fn load_for_edit(&self, name: &str) -> Result<EditableDocument, Error> {
        let name = existing_name(name)?;
        let content = self.repository.read(&name).await?;
        Ok(EditableDocument {
            name,
            content: String::from_utf8_lossy(&content).into_owned(),
        })
    }
}

#[async_trait]
impl<R> DocumentCommand for DocumentService<R>
where
    R: DocumentRepository,
{
    async fn create(&self, raw_name: &str) -> Result<DocumentName, Error> {
        let name = DocumentName::for_new_document(raw_name.to_lowercase())
            .map_err(|err| Error::invalid_request(err.to_string()))?;
        self.repository.write(&name, b"").await?;
        info!(document = %name, "document created");
        Ok(name)
    }

    async fn update(&self, name: &str, content: &str) -> Result<DocumentName, Error> {
        let name =
            DocumentName::new(name).map_err(|err| Error::invalid_request(err.to_string()))?;
        self.repository.write(&name, content.as_bytes()).await?;
        info!(document = %name, bytes = content.len(), "document updated");
        Ok(name)
    }

    async fn delete(&self, name: &str) -> Result<DocumentName, Error> {
        let name = existing_name(name)?;
        self.repository.delete(&name).await?;
        info!(document = %name, "document deleted");
        Ok(name)
    }

    async fn duplicate(&self, name: &str) -> Result<DocumentName, Error> {
        let source = existing_name(name)?;
        let content = self.repository.read(&source).await?;
        let target = self
            .free_duplicate_name(&source.as_str().to_lowercase())
            .await?;
        self.repository.write(&target, &content).await?;
        info!(source = %source, document = %target, bytes = content.len(), "document duplicated");
        Ok(target)
    }
}

#[cfg(test)]
#[path = "document_service_tests.rs"]
mod tests;
