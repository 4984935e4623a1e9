//! Filesystem-backed document repository.
//!
//! All access goes through a `cap_std` directory handle opened once at
//! startup, so a document name can never resolve outside the document root
//! even if it slipped past [`DocumentName`] validation. File I/O is blocking
//! and runs on tokio's blocking pool.

use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use cap_std::{ambient_authority, fs::Dir};
use tracing::{debug, warn};

use crate::domain::ports::{DocumentRepository, DocumentRepositoryError};
use crate::domain::{DocumentName, TraceId};

fn map_io_error(name: &DocumentName, error: &io::Error) -> DocumentRepositoryError {
    match error.kind() {
        io::ErrorKind::NotFound => DocumentRepositoryError::not_found(name.as_str()),
        _ => DocumentRepositoryError::io(format!("{name}: {error}")),
    }
}

/// Document repository storing one file per document in a root directory.
#[derive(Clone)]
pub struct FsDocumentRepository {
    root: Arc<Dir>,
    path: PathBuf,
}

impl std::fmt::Debug for FsDocumentRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FsDocumentRepository")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

impl FsDocumentRepository {
    /// Open the document root, creating it if it does not exist yet.
    ///
    /// # Errors
    /// Returns [`DocumentRepositoryError::Io`] when the directory cannot be
    /// created or opened.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, DocumentRepositoryError> {
        let path = path.as_ref();
        Dir::create_ambient_dir_all(path, ambient_authority()).map_err(|error| {
            DocumentRepositoryError::io(format!("create {}: {error}", path.display()))
        })?;
        let root = Dir::open_ambient_dir(path, ambient_authority()).map_err(|error| {
            DocumentRepositoryError::io(format!("open {}: {error}", path.display()))
        })?;
        debug!(path = %path.display(), "document root opened");
        Ok(Self {
            root: Arc::new(root),
            path: path.to_path_buf(),
        })
    }

    /// Directory the repository was opened on.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn blocking<T, F>(&self, op: F) -> Result<T, DocumentRepositoryError>
    where
        F: FnOnce(&Dir) -> Result<T, DocumentRepositoryError> + Send + 'static,
        T: Send + 'static,
    {
        let root = Arc::clone(&self.root);
        let trace_id = TraceId::current();
        tokio::task::spawn_blocking(move || match trace_id {
            Some(id) => TraceId::sync_scope(id, || op(&root)),
            None => op(&root),
        })
        .await
        .map_err(|error| DocumentRepositoryError::io(format!("blocking task failed: {error}")))?
    }
}

fn list_entries(root: &Dir) -> Result<Vec<DocumentName>, DocumentRepositoryError> {
    let entries = root
        .entries()
        .map_err(|error| DocumentRepositoryError::io(format!("list documents: {error}")))?;
    let mut names = Vec::new();
    for entry in entries {
        let entry =
            entry.map_err(|error| DocumentRepositoryError::io(format!("list documents: {error}")))?;
        let is_file = entry
            .file_type()
            .map(|kind| kind.is_file())
            .map_err(|error| DocumentRepositoryError::io(format!("list documents: {error}")))?;
        if !is_file {
            continue;
        }
        match entry.file_name().into_string() {
            Ok(raw) => match DocumentName::new(raw) {
                Ok(name) => names.push(name),
                Err(error) => warn!(%error, "skipping unaddressable document"),
            },
            Err(raw) => warn!(name = ?raw, "skipping non UTF-8 document name"),
        }
    }
    names.sort();
    Ok(names)
}

#[async_trait]
impl DocumentRepository for FsDocumentRepository {
    async fn list(&self) -> Result<Vec<DocumentName>, DocumentRepositoryError> {
        self.blocking(list_entries).await
    }

    async fn exists(&self, name: &DocumentName) -> Result<bool, DocumentRepositoryError> {
        let name = name.clone();
        self.blocking(move |root| match root.metadata(name.as_str()) {
            Ok(metadata) => Ok(metadata.is_file()),
            Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(error) => Err(map_io_error(&name, &error)),
        })
        .await
    }

    async fn read(&self, name: &DocumentName) -> Result<Vec<u8>, DocumentRepositoryError> {
        let name = name.clone();
        self.blocking(move |root| {
            root.read(name.as_str())
                .map_err(|error| map_io_error(&name, &error))
        })
        .await
    }

    async fn write(
        &self,
        name: &DocumentName,
        content: &[u8],
    ) -> Result<(), DocumentRepositoryError> {
        let name = name.clone();
        let content = content.to_vec();
        self.blocking(move |root| {
            root.write(name.as_str(), content)
                .map_err(|error| map_io_error(&name, &error))
        })
        .await
    }

    async fn delete(&self, name: &DocumentName) -> Result<(), DocumentRepositoryError> {
        let name = name.clone();
        self.blocking(move |root| {
            root.remove_file(name.as_str())
                .map_err(|error| map_io_error(&name, &error))
        })
        .await
    }
}
