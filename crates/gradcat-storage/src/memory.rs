//! In-memory implementation of [`ProgramStore`].
//!
//! [`MemoryStore`] is a first-class backend for tests, ephemeral sessions,
//! and anywhere persistence isn't needed. Records live in an `IndexMap`
//! keyed by id, so listing order is insertion order -- identical semantics
//! to the SQLite backend.

use chrono::Utc;
use indexmap::IndexMap;

use gradcat_core::{Program, ProgramDraft, ProgramId};

use crate::error::StorageError;
use crate::traits::ProgramStore;

/// In-memory implementation of [`ProgramStore`].
#[derive(Debug, Default)]
pub struct MemoryStore {
    programs: IndexMap<ProgramId, Program>,
}

impl MemoryStore {
    /// Creates a new empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.programs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.programs.is_empty()
    }
}

impl ProgramStore for MemoryStore {
    fn list_all(&self) -> Result<Vec<Program>, StorageError> {
        Ok(self.programs.values().cloned().collect())
    }

    fn insert(&mut self, draft: &ProgramDraft) -> Result<Program, StorageError> {
        let program = Program::from_draft(ProgramId::new(), Utc::now(), draft.clone());
        self.programs.insert(program.id, program.clone());
        Ok(program)
    }

    fn update(&mut self, id: ProgramId, draft: &ProgramDraft) -> Result<Program, StorageError> {
        let stored = self
            .programs
            .get_mut(&id)
            .ok_or(StorageError::ProgramNotFound(id))?;
        stored.apply_draft(draft.clone());
        Ok(stored.clone())
    }

    fn delete(&mut self, id: ProgramId) -> Result<(), StorageError> {
        // shift_remove keeps the insertion order of the survivors.
        self.programs
            .shift_remove(&id)
            .ok_or(StorageError::ProgramNotFound(id))?;
        Ok(())
    }
}
