//! The session-level catalog service.
//!
//! [`Catalog`] is the single coordinator between a presentation surface and
//! the core/storage crates: it owns the in-memory collection, the selection
//! set, and the injected persistence and notification collaborators. All
//! mutations flow through it, persistence-first, so the collection only
//! ever reflects completed store operations.
//!
//! # Modules
//!
//! - [`error`]: CatalogError, the unified caller-visible failure type
//! - [`notify`]: the Notify collaborator trait and the tracing-backed impl
//! - [`catalog`]: the Catalog service itself

pub mod catalog;
pub mod error;
pub mod notify;

// Re-export key types for ergonomic use.
pub use catalog::Catalog;
pub use error::CatalogError;
pub use notify::{Notify, Severity, TracingNotifier};
