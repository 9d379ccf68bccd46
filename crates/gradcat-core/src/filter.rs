//! The filter/selection engine.
//!
//! [`visible`] is a pure function of the program list, the active tab and a
//! free-text query, producing the visible subset in stable order.
//! [`SelectionSet`] tracks the program ids marked for comparison,
//! independently of what is currently visible.

use indexmap::IndexSet;

use crate::model::{Program, ProgramId};

/// The active tab: all programs, or one academic field.
///
/// Field tabs match `academic_field` exactly (case- and whitespace-
/// sensitive), so two records differing only in case form distinct tabs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tab {
    All,
    Field(String),
}

/// Computes the visible subset of `programs` for a tab and query.
///
/// The base subset is every program for [`Tab::All`], or the exact-field
/// subset otherwise. A non-empty query then restricts to programs whose
/// `program_name`, `university_name`, or present `university_location`
/// contains the query, case-insensitively. An absent location never matches
/// a non-empty query. Order of the input is preserved.
pub fn visible<'a>(programs: &'a [Program], tab: &Tab, query: &str) -> Vec<&'a Program> {
    programs
        .iter()
        .filter(|p| match tab {
            Tab::All => true,
            Tab::Field(field) => p.academic_field == *field,
        })
        .filter(|p| query.is_empty() || matches_query(p, query))
        .collect()
}

fn matches_query(program: &Program, query: &str) -> bool {
    let query = query.to_lowercase();
    program.program_name.to_lowercase().contains(&query)
        || program.university_name.to_lowercase().contains(&query)
        || program
            .university_location
            .as_deref()
            .is_some_and(|loc| loc.to_lowercase().contains(&query))
}

/// The set of program ids currently marked for comparison.
///
/// Insertion order is preserved so the comparison view lays programs out in
/// the order they were selected. Select and deselect are idempotent.
#[derive(Debug, Clone, Default)]
pub struct SelectionSet {
    ids: IndexSet<ProgramId>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an id. Returns `true` if it was newly selected.
    pub fn select(&mut self, id: ProgramId) -> bool {
        self.ids.insert(id)
    }

    /// Removes an id. Returns `true` if it was present.
    pub fn deselect(&mut self, id: ProgramId) -> bool {
        self.ids.shift_remove(&id)
    }

    pub fn contains(&self, id: ProgramId) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Selected ids in selection order.
    pub fn iter(&self) -> impl Iterator<Item = ProgramId> + '_ {
        self.ids.iter().copied()
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }
}
