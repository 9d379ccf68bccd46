pub mod error;
pub mod filter;
pub mod model;
pub mod segment;
pub mod validate;

// Re-export commonly used types
pub use error::CoreError;
pub use filter::{visible, SelectionSet, Tab};
pub use model::{Program, ProgramDraft, ProgramId};
pub use segment::{segment, Requirements};
pub use validate::validate;
