//! Storage error types for gradcat-storage.
//!
//! [`StorageError`] covers all anticipated failure modes in the storage
//! layer: database errors, schema migration failures, record-not-found, and
//! corrupt stored values.

use gradcat_core::ProgramId;
use thiserror::Error;

/// Errors produced by storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// A SQLite operation failed.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Applying schema migrations failed.
    #[error("migration error: {0}")]
    Migration(String),

    /// No record with the given ID exists.
    #[error("program not found: {0}")]
    ProgramNotFound(ProgramId),

    /// A stored value could not be decoded back into a record field.
    #[error("corrupt stored value in column {column}: {reason}")]
    CorruptValue { column: &'static str, reason: String },

    /// Backend-specific failure that fits no other variant (e.g. a remote
    /// table service rejecting a call).
    #[error("backend error: {0}")]
    Backend(String),
}
