//! Domain primitives, services and ports.
//!
//! Purpose: hold the document naming rules, markdown rendering and use-cases
//! independently of HTTP and the filesystem.
//!
//! Public surface:
//! - [`Error`] / [`ErrorCode`]: transport-agnostic failure payload.
//! - [`DocumentName`], [`validate_new_name`], [`duplicate_name`]: naming rules.
//! - [`render_markdown`]: markdown to HTML.
//! - [`DocumentService`]: document use-cases over a repository port.
//! - [`LoginCredentials`] / [`Username`]: sign-in values.

pub mod auth;
pub mod document;
pub mod document_name;
pub mod document_service;
pub mod duplicate_name;
pub mod error;
pub mod markdown;
pub mod ports;
pub mod trace_id;

pub use self::auth::{LoginCredentials, LoginValidationError, Username};
pub use self::document::{DocumentBody, EditableDocument, RenderedDocument};
pub use self::document_name::{
    DocumentKind, DocumentName, NameValidationError, validate_new_name,
};
pub use self::document_service::DocumentService;
pub use self::duplicate_name::{DuplicateNameError, duplicate_name};
pub use self::error::{Error, ErrorCode, ErrorValidationError, TRACE_ID_HEADER};
pub use self::markdown::render_markdown;
pub use self::trace_id::TraceId;
