//! Read models returned by the document use-cases.

use super::{DocumentKind, DocumentName};

/// Body of a document prepared for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentBody {
    /// HTML fragment rendered from markdown.
    Html(String),
    /// Stored bytes, served unchanged.
    Raw(Vec<u8>),
}

/// A document prepared for display.
///
/// [`DocumentKind::Markdown`] documents carry a [`DocumentBody::Html`] body;
/// every other kind keeps its stored bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDocument {
    /// Document name.
    pub name: DocumentName,
    /// Presentation kind.
    pub kind: DocumentKind,
    /// Rendered body.
    pub body: DocumentBody,
}

/// Document content loaded into the edit form.
///
/// Bytes that are not UTF-8 are replaced with U+FFFD.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditableDocument {
    /// Document name.
    pub name: DocumentName,
    /// Stored content, decoded for the textarea.
    pub content: String,
}
