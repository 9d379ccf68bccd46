//! Schema migrations for the SQLite backend.
//!
//! The `programs` table schema is embedded at compile time via
//! `include_str!` and applied through `rusqlite_migration`, which tracks
//! the applied version in SQLite's `user_version` pragma. Reopening an
//! existing database re-runs `to_latest` as a no-op.

use rusqlite::Connection;
use rusqlite_migration::{Migrations, M};

use crate::error::StorageError;

/// The migration list, in application order. Schema changes append a new
/// `M::up(...)` entry; existing entries are never edited.
fn migrations() -> Migrations<'static> {
    Migrations::new(vec![M::up(include_str!(
        "migrations/001_initial_schema.sql"
    ))])
}

/// Opens (or creates) the catalog database at `path` and brings it to the
/// latest schema version.
pub fn open_database(path: &str) -> Result<Connection, StorageError> {
    let mut conn = Connection::open(path)?;
    configure_and_migrate(&mut conn)?;
    Ok(conn)
}

/// Opens a fresh in-memory catalog database at the latest schema version
/// (for testing).
pub fn open_in_memory() -> Result<Connection, StorageError> {
    let mut conn = Connection::open_in_memory()?;
    configure_and_migrate(&mut conn)?;
    Ok(conn)
}

fn configure_and_migrate(conn: &mut Connection) -> Result<(), StorageError> {
    // WAL keeps a reader (the catalog loading at session start) from
    // blocking on a concurrent writer process.
    conn.pragma_update(None, "journal_mode", "WAL")?;
    // NORMAL is durable enough under WAL and avoids an fsync per write.
    conn.pragma_update(None, "synchronous", "NORMAL")?;

    migrations()
        .to_latest(conn)
        .map_err(|e| StorageError::Migration(e.to_string()))?;

    Ok(())
}
