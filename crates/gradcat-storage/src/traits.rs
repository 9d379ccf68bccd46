//! The [`ProgramStore`] trait defining the persistence contract for program
//! records.
//!
//! All backends (MemoryStore, SqliteStore, etc.) implement this trait,
//! ensuring they are fully swappable without changing catalog logic. The
//! trait is synchronous (not async): all mutations originate from serialized
//! user-triggered events in a single-threaded session, so there is nothing
//! to overlap with.
//!
//! Identity assignment happens here: `insert` allocates the [`ProgramId`]
//! and stamps `date_added`, so callers never fabricate either.

use gradcat_core::{Program, ProgramDraft, ProgramId};

use crate::error::StorageError;

/// The persistence contract for program records.
pub trait ProgramStore {
    /// Lists every stored record, in insertion order.
    fn list_all(&self) -> Result<Vec<Program>, StorageError>;

    /// Persists a new record from a draft.
    ///
    /// Assigns a fresh [`ProgramId`] and the creation timestamp, and returns
    /// the complete stored record.
    fn insert(&mut self, draft: &ProgramDraft) -> Result<Program, StorageError>;

    /// Replaces every field of an existing record except `id` and
    /// `date_added`.
    ///
    /// Returns [`StorageError::ProgramNotFound`] if no record with the given
    /// ID exists.
    fn update(&mut self, id: ProgramId, draft: &ProgramDraft) -> Result<Program, StorageError>;

    /// Deletes the record with the given ID.
    ///
    /// Deleting a missing ID is a reported [`StorageError::ProgramNotFound`],
    /// not a silent success; both backends apply this policy.
    fn delete(&mut self, id: ProgramId) -> Result<(), StorageError>;
}
