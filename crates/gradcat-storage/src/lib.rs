//! Storage abstraction for gradcat program records.
//!
//! Provides the [`ProgramStore`] trait defining the persistence contract
//! that all backends implement, plus [`MemoryStore`] and [`SqliteStore`] as
//! first-class backends.
//!
//! Identity and creation time are assigned here, at the store boundary: a
//! draft goes in, a complete [`gradcat_core::Program`] comes back.
//!
//! # Modules
//!
//! - [`error`]: StorageError enum with all failure modes
//! - [`traits`]: ProgramStore trait definition
//! - [`memory`]: MemoryStore implementation
//! - [`schema`]: SQL schema constants and migration setup
//! - [`sqlite`]: SqliteStore implementation

pub mod error;
pub mod memory;
pub mod schema;
pub mod sqlite;
pub mod traits;

// Re-export key types for ergonomic use.
pub use error::StorageError;
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;
pub use traits::ProgramStore;
