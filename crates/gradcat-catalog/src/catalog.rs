//! The [`Catalog`] service: in-memory collection, derived views, lifecycle
//! operations, and the selection set.
//!
//! One `Catalog` is constructed per session with its persistence and
//! notification collaborators injected, which keeps every operation
//! testable against doubles. Mutations are persistence-first: the
//! collection is touched only after the store call succeeds, so derived
//! views never show a record whose persistence is still pending or failed.

use std::collections::BTreeMap;

use gradcat_core::{validate, visible, Program, ProgramDraft, ProgramId, SelectionSet, Tab};
use gradcat_storage::ProgramStore;

use crate::error::CatalogError;
use crate::notify::{Notify, Severity};

/// The session-level program catalog.
pub struct Catalog {
    programs: Vec<Program>,
    selection: SelectionSet,
    store: Box<dyn ProgramStore>,
    notifier: Box<dyn Notify>,
}

impl Catalog {
    /// Builds a catalog over the given store, loading all persisted records.
    pub fn new(
        store: Box<dyn ProgramStore>,
        notifier: Box<dyn Notify>,
    ) -> Result<Self, CatalogError> {
        let programs = store.list_all()?;
        Ok(Catalog {
            programs,
            selection: SelectionSet::new(),
            store,
            notifier,
        })
    }

    // -----------------------------------------------------------------------
    // Read access
    // -----------------------------------------------------------------------

    /// All records, in store order.
    pub fn programs(&self) -> &[Program] {
        &self.programs
    }

    pub fn len(&self) -> usize {
        self.programs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.programs.is_empty()
    }

    /// Looks up one record by id.
    pub fn get(&self, id: ProgramId) -> Option<&Program> {
        self.programs.iter().find(|p| p.id == id)
    }

    // -----------------------------------------------------------------------
    // Lifecycle operations
    // -----------------------------------------------------------------------

    /// Validates and persists a new record, then appends it to the
    /// collection.
    ///
    /// On any failure the collection is unchanged, an error notification is
    /// emitted, and the error is returned to the caller.
    pub fn add(&mut self, draft: ProgramDraft) -> Result<Program, CatalogError> {
        if let Err(e) = validate(&draft) {
            self.notifier
                .notify(Severity::Error, &format!("Cannot add program: {}", e));
            return Err(e.into());
        }

        let program = match self.store.insert(&draft) {
            Ok(p) => p,
            Err(e) => {
                self.notifier
                    .notify(Severity::Error, &format!("Failed to save program: {}", e));
                return Err(e.into());
            }
        };

        self.programs.push(program.clone());
        self.notifier.notify(
            Severity::Info,
            &format!(
                "Added {} at {}",
                program.program_name, program.university_name
            ),
        );
        Ok(program)
    }

    /// Validates and persists a full-field replacement of an existing
    /// record, keeping its position, id, and creation time.
    pub fn edit(&mut self, id: ProgramId, draft: ProgramDraft) -> Result<Program, CatalogError> {
        if let Err(e) = validate(&draft) {
            self.notifier
                .notify(Severity::Error, &format!("Cannot edit program: {}", e));
            return Err(e.into());
        }

        let Some(index) = self.programs.iter().position(|p| p.id == id) else {
            self.notifier
                .notify(Severity::Error, &format!("No program with id {}", id));
            return Err(CatalogError::NotFound(id));
        };

        let updated = match self.store.update(id, &draft) {
            Ok(p) => p,
            Err(e) => {
                self.notifier
                    .notify(Severity::Error, &format!("Failed to save program: {}", e));
                return Err(e.into());
            }
        };

        self.programs[index] = updated.clone();
        self.notifier
            .notify(Severity::Info, &format!("Updated {}", updated.program_name));
        Ok(updated)
    }

    /// Deletes a record, evicting it from the collection and the selection
    /// set in one user-visible step.
    ///
    /// Deleting an id that is not present is a reported
    /// [`CatalogError::NotFound`], matching the store policy.
    pub fn delete(&mut self, id: ProgramId) -> Result<(), CatalogError> {
        let Some(index) = self.programs.iter().position(|p| p.id == id) else {
            self.notifier
                .notify(Severity::Error, &format!("No program with id {}", id));
            return Err(CatalogError::NotFound(id));
        };

        if let Err(e) = self.store.delete(id) {
            self.notifier
                .notify(Severity::Error, &format!("Failed to delete program: {}", e));
            return Err(e.into());
        }

        let removed = self.programs.remove(index);
        self.selection.deselect(id);
        self.notifier
            .notify(Severity::Info, &format!("Deleted {}", removed.program_name));
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Derived views
    // -----------------------------------------------------------------------

    /// Distinct `academic_field` values, sorted lexicographically.
    /// Recomputed from current state on every call.
    pub fn unique_fields(&self) -> Vec<String> {
        let mut fields: Vec<String> = self
            .programs
            .iter()
            .map(|p| p.academic_field.clone())
            .collect();
        fields.sort();
        fields.dedup();
        fields
    }

    /// Record count per distinct `academic_field` value.
    pub fn field_counts(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for program in &self.programs {
            *counts.entry(program.academic_field.clone()).or_insert(0) += 1;
        }
        counts
    }

    /// Records whose `academic_field` equals `field` exactly (case- and
    /// whitespace-sensitive), in collection order.
    pub fn by_field(&self, field: &str) -> Vec<&Program> {
        self.programs
            .iter()
            .filter(|p| p.academic_field == field)
            .collect()
    }

    /// The visible subset for a tab and query (see [`gradcat_core::visible`]).
    pub fn visible(&self, tab: &Tab, query: &str) -> Vec<&Program> {
        visible(&self.programs, tab, query)
    }

    // -----------------------------------------------------------------------
    // Selection and comparison
    // -----------------------------------------------------------------------

    /// Marks a record for comparison. Idempotent; unknown ids are rejected.
    pub fn select(&mut self, id: ProgramId) -> Result<(), CatalogError> {
        if self.get(id).is_none() {
            return Err(CatalogError::NotFound(id));
        }
        self.selection.select(id);
        Ok(())
    }

    /// Unmarks a record. Idempotent; deselecting an unselected id is a
    /// no-op.
    pub fn deselect(&mut self, id: ProgramId) {
        self.selection.deselect(id);
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    /// The records currently selected for comparison, in selection order.
    ///
    /// An empty selection is a blocked operation: the caller gets
    /// [`CatalogError::EmptySelection`] and the user gets an error
    /// notification, never a silently empty view.
    pub fn comparison(&self) -> Result<Vec<&Program>, CatalogError> {
        if self.selection.is_empty() {
            self.notifier.notify(
                Severity::Error,
                "Please select at least one program to compare",
            );
            return Err(CatalogError::EmptySelection);
        }
        Ok(self
            .selection
            .iter()
            .filter_map(|id| self.get(id))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use gradcat_core::CoreError;
    use gradcat_storage::{MemoryStore, StorageError};

    use super::*;

    /// Notifier double that records every message for assertions.
    #[derive(Default, Clone)]
    struct Recorder {
        messages: Arc<Mutex<Vec<(Severity, String)>>>,
    }

    impl Recorder {
        fn messages(&self) -> Vec<(Severity, String)> {
            self.messages.lock().unwrap().clone()
        }

        fn last(&self) -> Option<(Severity, String)> {
            self.messages.lock().unwrap().last().cloned()
        }
    }

    impl Notify for Recorder {
        fn notify(&self, severity: Severity, message: &str) {
            self.messages
                .lock()
                .unwrap()
                .push((severity, message.to_string()));
        }
    }

    /// Store double whose mutations always fail.
    struct FailingStore;

    impl ProgramStore for FailingStore {
        fn list_all(&self) -> Result<Vec<Program>, StorageError> {
            Ok(Vec::new())
        }
        fn insert(&mut self, _draft: &ProgramDraft) -> Result<Program, StorageError> {
            Err(StorageError::Backend("injected failure".to_string()))
        }
        fn update(
            &mut self,
            _id: ProgramId,
            _draft: &ProgramDraft,
        ) -> Result<Program, StorageError> {
            Err(StorageError::Backend("injected failure".to_string()))
        }
        fn delete(&mut self, _id: ProgramId) -> Result<(), StorageError> {
            Err(StorageError::Backend("injected failure".to_string()))
        }
    }

    fn draft(field: &str, university: &str, name: &str) -> ProgramDraft {
        ProgramDraft {
            academic_field: field.to_string(),
            university_name: university.to_string(),
            university_location: None,
            university_overall_ranking: None,
            university_subject_ranking: None,
            program_name: name.to_string(),
            program_link: None,
            program_duration: None,
            admission_requirements: None,
            total_credits: 0,
            annual_tuition_fee: 0,
        }
    }

    fn catalog() -> (Catalog, Recorder) {
        let recorder = Recorder::default();
        let catalog = Catalog::new(
            Box::new(MemoryStore::new()),
            Box::new(recorder.clone()),
        )
        .unwrap();
        (catalog, recorder)
    }

    #[test]
    fn end_to_end_derived_views() {
        let (mut catalog, _) = catalog();
        let a = catalog.add(draft("CS", "Stanford", "MSCS")).unwrap();
        let b = catalog.add(draft("CS", "MIT", "MEng")).unwrap();
        let c = catalog.add(draft("EE", "ETH", "MSc")).unwrap();

        assert_eq!(catalog.unique_fields(), vec!["CS", "EE"]);

        let counts = catalog.field_counts();
        assert_eq!(counts.get("CS"), Some(&2));
        assert_eq!(counts.get("EE"), Some(&1));
        assert_eq!(counts.values().sum::<usize>(), catalog.len());

        let cs = catalog.by_field("CS");
        assert_eq!(
            cs.iter().map(|p| p.id).collect::<Vec<_>>(),
            vec![a.id, b.id]
        );
        let _ = c;
    }

    #[test]
    fn field_grouping_is_exact_match() {
        let (mut catalog, _) = catalog();
        catalog.add(draft("CS", "Stanford", "MSCS")).unwrap();
        catalog.add(draft("cs", "MIT", "MEng")).unwrap();
        catalog.add(draft("CS ", "ETH", "MSc")).unwrap();

        // Case and whitespace variants form distinct groups.
        assert_eq!(catalog.unique_fields(), vec!["CS", "CS ", "cs"]);
        assert_eq!(catalog.by_field("CS").len(), 1);
    }

    #[test]
    fn add_with_missing_name_mutates_nothing() {
        let (mut catalog, recorder) = catalog();
        let result = catalog.add(draft("CS", "Stanford", ""));

        assert!(matches!(
            result,
            Err(CatalogError::Validation(CoreError::MissingField {
                field: "programName"
            }))
        ));
        assert_eq!(catalog.len(), 0);
        assert_eq!(recorder.last().unwrap().0, Severity::Error);
    }

    #[test]
    fn add_persistence_failure_leaves_collection_unchanged() {
        let recorder = Recorder::default();
        let mut catalog =
            Catalog::new(Box::new(FailingStore), Box::new(recorder.clone())).unwrap();

        let result = catalog.add(draft("CS", "Stanford", "MSCS"));
        assert!(matches!(result, Err(CatalogError::Storage(_))));
        assert_eq!(catalog.len(), 0);

        let (severity, message) = recorder.last().unwrap();
        assert_eq!(severity, Severity::Error);
        assert!(message.contains("Failed to save"));
    }

    #[test]
    fn add_success_notifies_info() {
        let (mut catalog, recorder) = catalog();
        catalog.add(draft("CS", "Stanford", "MSCS")).unwrap();

        let (severity, message) = recorder.last().unwrap();
        assert_eq!(severity, Severity::Info);
        assert!(message.contains("MSCS"));
    }

    #[test]
    fn edit_replaces_in_place() {
        let (mut catalog, _) = catalog();
        let first = catalog.add(draft("CS", "Stanford", "MSCS")).unwrap();
        let second = catalog.add(draft("EE", "ETH", "MSc")).unwrap();

        let mut edited = first.to_draft();
        edited.program_name = "MS in AI".to_string();
        let updated = catalog.edit(first.id, edited).unwrap();

        assert_eq!(updated.id, first.id);
        assert_eq!(updated.date_added, first.date_added);
        assert_eq!(catalog.programs()[0].program_name, "MS in AI");
        assert_eq!(catalog.programs()[1].id, second.id);
    }

    #[test]
    fn edit_of_vanished_id_is_not_found() {
        let (mut catalog, _) = catalog();
        catalog.add(draft("CS", "Stanford", "MSCS")).unwrap();

        let ghost = ProgramId::new();
        let result = catalog.edit(ghost, draft("CS", "Stanford", "Renamed"));
        assert!(matches!(result, Err(CatalogError::NotFound(id)) if id == ghost));
        assert_eq!(catalog.programs()[0].program_name, "MSCS");
    }

    #[test]
    fn delete_evicts_from_collection_and_selection_atomically() {
        let (mut catalog, _) = catalog();
        let a = catalog.add(draft("CS", "Stanford", "MSCS")).unwrap();
        let b = catalog.add(draft("EE", "ETH", "MSc")).unwrap();
        catalog.select(a.id).unwrap();
        catalog.select(b.id).unwrap();

        catalog.delete(a.id).unwrap();

        assert!(catalog.get(a.id).is_none());
        assert!(!catalog.selection().contains(a.id));
        assert!(catalog.selection().contains(b.id));
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn delete_of_missing_id_is_not_found() {
        let (mut catalog, recorder) = catalog();
        let ghost = ProgramId::new();

        assert!(matches!(
            catalog.delete(ghost),
            Err(CatalogError::NotFound(id)) if id == ghost
        ));
        assert_eq!(recorder.last().unwrap().0, Severity::Error);
    }

    #[test]
    fn selection_is_idempotent_and_rejects_unknown_ids() {
        let (mut catalog, _) = catalog();
        let a = catalog.add(draft("CS", "Stanford", "MSCS")).unwrap();

        catalog.select(a.id).unwrap();
        catalog.select(a.id).unwrap();
        assert_eq!(catalog.selection().len(), 1);

        catalog.deselect(a.id);
        catalog.deselect(a.id);
        assert!(catalog.selection().is_empty());

        assert!(matches!(
            catalog.select(ProgramId::new()),
            Err(CatalogError::NotFound(_))
        ));
    }

    #[test]
    fn comparison_returns_selected_records_in_selection_order() {
        let (mut catalog, _) = catalog();
        let a = catalog.add(draft("CS", "Stanford", "MSCS")).unwrap();
        let b = catalog.add(draft("EE", "ETH", "MSc")).unwrap();
        catalog.select(b.id).unwrap();
        catalog.select(a.id).unwrap();

        let compared = catalog.comparison().unwrap();
        assert_eq!(
            compared.iter().map(|p| p.id).collect::<Vec<_>>(),
            vec![b.id, a.id]
        );
    }

    #[test]
    fn comparison_with_empty_selection_is_blocked() {
        let (catalog, recorder) = catalog();

        assert!(matches!(
            catalog.comparison(),
            Err(CatalogError::EmptySelection)
        ));
        let (severity, message) = recorder.last().unwrap();
        assert_eq!(severity, Severity::Error);
        assert!(message.contains("select at least one"));
    }

    #[test]
    fn visible_filters_by_tab_and_query() {
        let (mut catalog, _) = catalog();
        let mut stanford = draft("CS", "Stanford University", "MS in Computer Science");
        stanford.university_location = Some("Stanford, CA, USA".to_string());
        catalog.add(stanford).unwrap();
        catalog.add(draft("CS", "MIT", "MEng in EECS")).unwrap();

        let hits = catalog.visible(&Tab::All, "stanford");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].university_name, "Stanford University");

        let cs = catalog.visible(&Tab::Field("CS".to_string()), "");
        assert_eq!(cs.len(), 2);
    }

    #[test]
    fn new_catalog_loads_persisted_records() {
        let mut store = MemoryStore::new();
        store.insert(&draft("CS", "Stanford", "MSCS")).unwrap();
        store.insert(&draft("EE", "ETH", "MSc")).unwrap();

        let catalog =
            Catalog::new(Box::new(store), Box::new(Recorder::default())).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.unique_fields(), vec!["CS", "EE"]);
    }

    #[test]
    fn notifications_accumulate_in_order() {
        let (mut catalog, recorder) = catalog();
        let a = catalog.add(draft("CS", "Stanford", "MSCS")).unwrap();
        catalog.delete(a.id).unwrap();

        let messages = recorder.messages();
        assert_eq!(messages.len(), 2);
        assert!(messages[0].1.contains("Added"));
        assert!(messages[1].1.contains("Deleted"));
    }
}
