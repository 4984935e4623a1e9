//! Document naming rules.
//!
//! Documents are plain files, so their names double as storage keys. This
//! module owns the two checks every name goes through:
//!
//! - [`validate_new_name`] applies the extension rules used when a document is
//!   created.
//! - [`DocumentName`] guarantees a name is a single path component before it
//!   reaches a repository, which closes path traversal for every route.

use std::fmt;

/// Extension of markdown documents.
pub const MARKDOWN_EXTENSION: &str = ".md";
/// Extension of plain text documents.
pub const TEXT_EXTENSION: &str = ".txt";

/// Reasons a document name is rejected.
///
/// The display text is shown to users verbatim as a flash message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum NameValidationError {
    /// The name was empty.
    #[error("A name is required.")]
    EmptyName,
    /// The name ends in neither `.md` nor `.txt`.
    #[error("File name must end in .txt or .md")]
    InvalidExtension,
    /// The name is not a single path component.
    #[error("File name must not contain path separators.")]
    InvalidCharacters,
}

/// Check a candidate name for a new document.
///
/// Callers lower-case the name first; the comparison itself is exact.
///
/// # Examples
/// ```
/// use cms::domain::{validate_new_name, NameValidationError};
///
/// assert!(validate_new_name("notes.md").is_ok());
/// assert_eq!(validate_new_name(""), Err(NameValidationError::EmptyName));
/// assert_eq!(validate_new_name("notes"), Err(NameValidationError::InvalidExtension));
/// ```
pub fn validate_new_name(name: &str) -> Result<(), NameValidationError> {
    if name.is_empty() {
        return Err(NameValidationError::EmptyName);
    }
    if !name.ends_with(MARKDOWN_EXTENSION) && !name.ends_with(TEXT_EXTENSION) {
        return Err(NameValidationError::InvalidExtension);
    }
    Ok(())
}

/// How a document's content is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    /// Markdown source rendered to HTML.
    Markdown,
    /// Plain text served as-is.
    Text,
    /// Any other file found in the document directory; served as text.
    Other,
}

impl DocumentKind {
    /// Classify a document by its extension.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        if name.ends_with(MARKDOWN_EXTENSION) {
            Self::Markdown
        } else if name.ends_with(TEXT_EXTENSION) {
            Self::Text
        } else {
            Self::Other
        }
    }
}

/// Name of a stored document.
///
/// ## Invariants
/// - Non-empty, not `.` or `..`.
/// - Contains no `/`, `\` or NUL, so it always names an entry directly inside
///   the document root.
///
/// Extension rules are not part of the invariant: existing files and
/// duplicates keep whatever name they already have.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DocumentName(String);

impl DocumentName {
    /// Validate a name that refers to an existing (or overwritten) document.
    pub fn new(raw: impl Into<String>) -> Result<Self, NameValidationError> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(NameValidationError::EmptyName);
        }
        if raw == "." || raw == ".." || raw.contains(['/', '\\', '\0']) {
            return Err(NameValidationError::InvalidCharacters);
        }
        Ok(Self(raw))
    }

    /// Validate the name of a document about to be created.
    ///
    /// Applies [`validate_new_name`] first so users see the extension message
    /// before the path-component one.
    pub fn for_new_document(raw: impl Into<String>) -> Result<Self, NameValidationError> {
        let raw = raw.into();
        validate_new_name(&raw)?;
        Self::new(raw)
    }

    /// Presentation kind derived from the extension.
    #[must_use]
    pub fn kind(&self) -> DocumentKind {
        DocumentKind::from_name(&self.0)
    }

    /// Borrow the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for DocumentName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for DocumentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<DocumentName> for String {
    fn from(value: DocumentName) -> Self {
        value.0
    }
}
