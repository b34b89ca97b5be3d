//! Blog backend: post listings, post detail with comments, and a session
//! read-later list, served over Actix Web.
//!
//! - [`domain`]: entities, the comment form, ports and services.
//! - [`inbound`]: HTTP handlers, DTOs and session plumbing.
//! - [`outbound`]: PostgreSQL and in-process repository adapters.
//! - [`sample_content`]: startup posts for the in-process store.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod sample_content;
pub mod settings;

pub use doc::ApiDoc;
pub use middleware::Trace;
