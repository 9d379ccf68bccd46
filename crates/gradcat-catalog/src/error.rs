//! The unified caller-visible error type for catalog operations.
//!
//! Every failure is recovered at the catalog boundary and surfaced as a
//! [`CatalogError`] plus a notification; nothing propagates uncaught into
//! the presentation layer, and every failure leaves the in-memory
//! collection in its last-known-good state.

use gradcat_core::{CoreError, ProgramId};
use gradcat_storage::StorageError;
use thiserror::Error;

/// Errors produced by catalog operations.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A draft failed validation; no store mutation or persistence call was
    /// attempted.
    #[error(transparent)]
    Validation(#[from] CoreError),

    /// The referenced record does not exist (e.g. deleted concurrently).
    #[error("no program with id {0}")]
    NotFound(ProgramId),

    /// The persistence backend failed; in-memory state is unchanged.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// Comparison requested with nothing selected.
    #[error("no programs selected for comparison")]
    EmptySelection,
}
