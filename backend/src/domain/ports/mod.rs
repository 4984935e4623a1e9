//! Domain ports: traits at the boundary between the domain and adapters.
//!
//! Driving ports ([`DocumentQuery`], [`DocumentCommand`]) are called by inbound
//! adapters; driven ports ([`DocumentRepository`], [`CredentialStore`]) are
//! implemented by outbound adapters in `crate::outbound`. Each driven port
//! ships an in-memory or fixture implementation for tests.

mod macros;

mod credential_store;
mod document_command;
mod document_query;
mod document_repository;

pub(crate) use macros::define_port_error;

pub use credential_store::{CredentialStore, CredentialStoreError, FixtureCredentialStore};
pub use document_command::DocumentCommand;
pub use document_query::DocumentQuery;
pub use document_repository::{
    DocumentRepository, DocumentRepositoryError, InMemoryDocumentRepository,
};
