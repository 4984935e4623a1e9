//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **fs**: document repository over a capability-scoped directory.
//! - **credentials**: YAML credential file with bcrypt password hashes.
//!
//! Adapters translate between domain types and infrastructure
//! representations. They contain no business logic.

pub mod credentials;
pub mod fs;
