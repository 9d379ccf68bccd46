//! SQLite implementation of [`ProgramStore`].
//!
//! [`SqliteStore`] persists program records in a single `programs` table
//! with WAL mode and automatic schema migrations. Each record field maps to
//! its own column; optional fields are NULL when absent, so `None` and `0`
//! stay distinct across a round trip.

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, Row};
use uuid::Uuid;

use gradcat_core::{Program, ProgramDraft, ProgramId};

use crate::error::StorageError;
use crate::traits::ProgramStore;

/// SQLite-backed implementation of [`ProgramStore`].
pub struct SqliteStore {
    conn: Connection,
}

const SELECT_COLUMNS: &str = "id, academic_field, university_name, university_location, \
     university_overall_ranking, university_subject_ranking, program_name, program_link, \
     program_duration, admission_requirements, total_credits, annual_tuition_fee, date_added";

impl SqliteStore {
    /// Opens (or creates) a SQLite database at `path`.
    pub fn new(path: &str) -> Result<Self, StorageError> {
        let conn = crate::schema::open_database(path)?;
        Ok(SqliteStore { conn })
    }

    /// Opens an in-memory SQLite database (for testing).
    pub fn in_memory() -> Result<Self, StorageError> {
        let conn = crate::schema::open_in_memory()?;
        Ok(SqliteStore { conn })
    }

    // -----------------------------------------------------------------------
    // Internal helpers
    // -----------------------------------------------------------------------

    /// Raw column values as SQLite hands them back, before id/timestamp
    /// decoding.
    fn read_raw(row: &Row<'_>) -> rusqlite::Result<RawProgramRow> {
        Ok(RawProgramRow {
            id: row.get(0)?,
            academic_field: row.get(1)?,
            university_name: row.get(2)?,
            university_location: row.get(3)?,
            university_overall_ranking: row.get(4)?,
            university_subject_ranking: row.get(5)?,
            program_name: row.get(6)?,
            program_link: row.get(7)?,
            program_duration: row.get(8)?,
            admission_requirements: row.get(9)?,
            total_credits: row.get(10)?,
            annual_tuition_fee: row.get(11)?,
            date_added: row.get(12)?,
        })
    }

    fn decode(raw: RawProgramRow) -> Result<Program, StorageError> {
        let id = Uuid::parse_str(&raw.id).map_err(|e| StorageError::CorruptValue {
            column: "id",
            reason: e.to_string(),
        })?;
        let date_added = DateTime::parse_from_rfc3339(&raw.date_added)
            .map_err(|e| StorageError::CorruptValue {
                column: "date_added",
                reason: e.to_string(),
            })?
            .with_timezone(&Utc);

        Ok(Program {
            id: ProgramId(id),
            academic_field: raw.academic_field,
            university_name: raw.university_name,
            university_location: raw.university_location,
            university_overall_ranking: raw.university_overall_ranking,
            university_subject_ranking: raw.university_subject_ranking,
            program_name: raw.program_name,
            program_link: raw.program_link,
            program_duration: raw.program_duration,
            admission_requirements: raw.admission_requirements,
            total_credits: raw.total_credits,
            annual_tuition_fee: raw.annual_tuition_fee,
            date_added,
        })
    }
}

struct RawProgramRow {
    id: String,
    academic_field: String,
    university_name: String,
    university_location: Option<String>,
    university_overall_ranking: Option<u32>,
    university_subject_ranking: Option<u32>,
    program_name: String,
    program_link: Option<String>,
    program_duration: Option<String>,
    admission_requirements: Option<String>,
    total_credits: u32,
    annual_tuition_fee: u32,
    date_added: String,
}

impl ProgramStore for SqliteStore {
    fn list_all(&self) -> Result<Vec<Program>, StorageError> {
        let mut stmt = self.conn.prepare_cached(&format!(
            "SELECT {} FROM programs ORDER BY rowid",
            SELECT_COLUMNS
        ))?;
        let raws = stmt
            .query_map([], Self::read_raw)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        raws.into_iter().map(Self::decode).collect()
    }

    fn insert(&mut self, draft: &ProgramDraft) -> Result<Program, StorageError> {
        let program = Program::from_draft(ProgramId::new(), Utc::now(), draft.clone());
        let mut stmt = self.conn.prepare_cached(
            "INSERT INTO programs (id, academic_field, university_name, university_location, \
             university_overall_ranking, university_subject_ranking, program_name, program_link, \
             program_duration, admission_requirements, total_credits, annual_tuition_fee, date_added) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)",
        )?;
        stmt.execute(params![
            program.id.to_string(),
            program.academic_field,
            program.university_name,
            program.university_location,
            program.university_overall_ranking,
            program.university_subject_ranking,
            program.program_name,
            program.program_link,
            program.program_duration,
            program.admission_requirements,
            program.total_credits,
            program.annual_tuition_fee,
            program.date_added.to_rfc3339(),
        ])?;
        Ok(program)
    }

    fn update(&mut self, id: ProgramId, draft: &ProgramDraft) -> Result<Program, StorageError> {
        // Read-then-write in a transaction so the preserved date_added and
        // the replacement are a single atomic step.
        let tx = self.conn.transaction()?;

        let raw = {
            let mut stmt = tx.prepare_cached(&format!(
                "SELECT {} FROM programs WHERE id = ?1",
                SELECT_COLUMNS
            ))?;
            let mut rows = stmt.query_map(params![id.to_string()], Self::read_raw)?;
            match rows.next() {
                Some(row) => row?,
                None => return Err(StorageError::ProgramNotFound(id)),
            }
        };
        let existing = Self::decode(raw)?;
        let updated = Program::from_draft(existing.id, existing.date_added, draft.clone());

        tx.execute(
            "UPDATE programs SET academic_field = ?2, university_name = ?3, \
             university_location = ?4, university_overall_ranking = ?5, \
             university_subject_ranking = ?6, program_name = ?7, program_link = ?8, \
             program_duration = ?9, admission_requirements = ?10, total_credits = ?11, \
             annual_tuition_fee = ?12 WHERE id = ?1",
            params![
                updated.id.to_string(),
                updated.academic_field,
                updated.university_name,
                updated.university_location,
                updated.university_overall_ranking,
                updated.university_subject_ranking,
                updated.program_name,
                updated.program_link,
                updated.program_duration,
                updated.admission_requirements,
                updated.total_credits,
                updated.annual_tuition_fee,
            ],
        )?;
        tx.commit()?;

        Ok(updated)
    }

    fn delete(&mut self, id: ProgramId) -> Result<(), StorageError> {
        let affected = self
            .conn
            .execute("DELETE FROM programs WHERE id = ?1", params![id.to_string()])?;
        if affected == 0 {
            return Err(StorageError::ProgramNotFound(id));
        }
        Ok(())
    }
}
