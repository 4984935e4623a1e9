//! A small content management system.
//!
//! Documents are `.md` and `.txt` files in one directory. Anyone may list and
//! read them; signed-in users may create, edit, duplicate and delete them.
//!
//! - [`domain`]: naming rules, markdown rendering and the document use-cases.
//! - [`inbound::http`]: actix-web pages, forms and session handling.
//! - [`outbound`]: filesystem repository and YAML credential store.
//! - [`config`]: application settings.

pub mod config;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

pub use domain::TraceId;
pub use middleware::Trace;
