//! Driven port for document storage.
//!
//! Documents are addressed by [`DocumentName`] only, so the store behaves like
//! a key-value map from name to bytes. The filesystem adapter lives in
//! `outbound::fs`; [`InMemoryDocumentRepository`] backs tests and fixtures.

use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;

use super::define_port_error;
use crate::domain::DocumentName;

define_port_error! {
    /// Errors raised by document repositories.
    pub enum DocumentRepositoryError {
        /// No document is stored under the name.
        NotFound { name: String } => [NotFound] "{name} does not exist.",
        /// The backing store refused the name.
        InvalidName { name: String } =>
            [InvalidRequest] "{name} is not a valid document name.",
        /// Storage I/O failed.
        Io { message: String } => [InternalError] "document storage failed: {message}",
    }
}

/// Port for listing, reading, writing and deleting documents.
#[async_trait]
pub trait DocumentRepository: Send + Sync {
    /// Names of all stored documents in lexicographic order.
    async fn list(&self) -> Result<Vec<DocumentName>, DocumentRepositoryError>;

    /// Whether a document is stored under `name`.
    async fn exists(&self, name: &DocumentName) -> Result<bool, DocumentRepositoryError>;

    /// Content of the document, or [`DocumentRepositoryError::NotFound`].
    async fn read(&self, name: &DocumentName) -> Result<Vec<u8>, DocumentRepositoryError>;

    /// Create or overwrite a document.
    async fn write(
        &self,
        name: &DocumentName,
        content: &[u8],
    ) -> Result<(), DocumentRepositoryError>;

    /// Remove a document, or fail with [`DocumentRepositoryError::NotFound`].
    async fn delete(&self, name: &DocumentName) -> Result<(), DocumentRepositoryError>;
}

/// Repository holding documents in memory.
#[derive(Debug, Default)]
pub struct InMemoryDocumentRepository {
    documents: Mutex<BTreeMap<DocumentName, Vec<u8>>>,
}

impl InMemoryDocumentRepository {
    /// Create an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository pre-populated with `(name, content)` pairs.
    ///
    /// # Errors
    /// Fails with [`DocumentRepositoryError::InvalidName`] when a name is not
    /// a single path component.
    pub fn with_documents<'a>(
        documents: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Result<Self, DocumentRepositoryError> {
        let documents = documents
            .into_iter()
            .map(|(name, content)| {
                DocumentName::new(name)
                    .map(|name| (name, content.as_bytes().to_vec()))
                    .map_err(|_| DocumentRepositoryError::invalid_name(name))
            })
            .collect::<Result<BTreeMap<_, _>, _>>()?;
        Ok(Self {
            documents: Mutex::new(documents),
        })
    }

    fn locked<T>(
        &self,
        f: impl FnOnce(&mut BTreeMap<DocumentName, Vec<u8>>) -> Result<T, DocumentRepositoryError>,
    ) -> Result<T, DocumentRepositoryError> {
        let mut guard = self
            .documents
            .lock()
            .map_err(|_| DocumentRepositoryError::io("document map lock poisoned"))?;
        f(&mut guard)
    }
}

#[async_trait]
impl DocumentRepository for InMemoryDocumentRepository {
    async fn list(&self) -> Result<Vec<DocumentName>, DocumentRepositoryError> {
        self.locked(|documents| Ok(documents.keys().cloned().collect()))
    }

    async fn exists(&self, name: &DocumentName) -> Result<bool, DocumentRepositoryError> {
        self.locked(|documents| Ok(documents.contains_key(name)))
    }

    async fn read(&self, name: &DocumentName) -> Result<Vec<u8>, DocumentRepositoryError> {
        self.locked(|documents| {
            documents
                .get(name)
                .cloned()
                .ok_or_else(|| DocumentRepositoryError::not_found(name.as_str()))
        })
    }

    async fn write(
        &self,
        name: &DocumentName,
        content: &[u8],
    ) -> Result<(), DocumentRepositoryError> {
        self.locked(|documents| {
            documents.insert(name.clone(), content.to_vec());
            Ok(())
        })
    }

    async fn delete(&self, name: &DocumentName) -> Result<(), DocumentRepositoryError> {
        self.locked(|documents| {
            documents
                .remove(name)
                .map(|_| ())
                .ok_or_else(|| DocumentRepositoryError::not_found(name.as_str()))
        })
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use crate::domain::ErrorCode;
    use rstest::{fixture, rstest};

    fn name(raw: &str) -> DocumentName {
        DocumentName::new(raw).expect("valid fixture name")
    }

    #[fixture]
    fn repository() -> InMemoryDocumentRepository {
        InMemoryDocumentRepository::new()
    }

    #[rstest]
    #[tokio::test]
    async fn write_then_read_returns_content(repository: InMemoryDocumentRepository) {
        repository.write(&name("x.txt"), b"hi").await.expect("write");
        assert_eq!(repository.read(&name("x.txt")).await.expect("read"), b"hi");
    }

    #[rstest]
    #[tokio::test]
    async fn delete_then_read_is_not_found(repository: InMemoryDocumentRepository) {
        repository.write(&name("x.txt"), b"hi").await.expect("write");
        repository.delete(&name("x.txt")).await.expect("delete");
        let err = repository.read(&name("x.txt")).await.expect_err("deleted");
        assert_eq!(err, DocumentRepositoryError::not_found("x.txt"));
        assert_eq!(err.code(), ErrorCode::NotFound);
    }

    #[rstest]
    #[tokio::test]
    async fn delete_missing_is_not_found(repository: InMemoryDocumentRepository) {
        let err = repository.delete(&name("ghost.md")).await.expect_err("missing");
        assert_eq!(err.to_string(), "ghost.md does not exist.");
    }

    #[rstest]
    #[tokio::test]
    async fn list_is_sorted() {
        let repository =
            InMemoryDocumentRepository::with_documents([("changes.md", ""), ("about.txt", "")])
                .expect("fixture documents");
        let names: Vec<String> = repository
            .list()
            .await
            .expect("list")
            .into_iter()
            .map(String::from)
            .collect();
        assert_eq!(names, ["about.txt", "changes.md"]);
    }

    #[rstest]
    fn seeding_rejects_traversal_names() {
        let err = InMemoryDocumentRepository::with_documents([("../x.txt", "")])
            .expect_err("invalid name");
        assert_eq!(err, DocumentRepositoryError::invalid_name("../x.txt"));
    }
}
