//! The program record data model.
//!
//! [`Program`] is the sole entity in the catalog: one university-program
//! record with admissions, tuition, and ranking metadata. [`ProgramDraft`]
//! is the writable projection (everything except identity and creation
//! time), used for both create and edit.
//!
//! Field presence rules:
//! - `academic_field`, `university_name`, `program_name` are required
//!   non-empty strings (enforced by [`crate::validate`]).
//! - The remaining text fields are `Option<String>`; `None` means the value
//!   is not available.
//! - Rankings are `Option<u32>` and must be positive when present; `None`
//!   is distinct from zero.
//! - `total_credits` and `annual_tuition_fee` are plain `u32`. Zero is a
//!   genuine value; the convention that zero renders as "N/A" belongs to
//!   the presentation layer, not the model.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable program identifier, assigned when a record is first persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProgramId(pub Uuid);

impl ProgramId {
    /// Allocates a fresh random identifier.
    pub fn new() -> Self {
        ProgramId(Uuid::new_v4())
    }
}

impl Default for ProgramId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ProgramId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ProgramId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ProgramId(Uuid::parse_str(s)?))
    }
}

/// One university-program record.
///
/// `id` and `date_added` are set once at the store boundary and never
/// mutated; edits replace every other field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Program {
    pub id: ProgramId,
    /// Free-text grouping key. Used verbatim (case- and whitespace-
    /// sensitive) when partitioning programs into field tabs.
    pub academic_field: String,
    pub university_name: String,
    pub university_location: Option<String>,
    pub university_overall_ranking: Option<u32>,
    pub university_subject_ranking: Option<u32>,
    pub program_name: String,
    pub program_link: Option<String>,
    pub program_duration: Option<String>,
    pub admission_requirements: Option<String>,
    pub total_credits: u32,
    pub annual_tuition_fee: u32,
    pub date_added: DateTime<Utc>,
}

/// The writable projection of [`Program`]: everything except `id` and
/// `date_added`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgramDraft {
    pub academic_field: String,
    pub university_name: String,
    pub university_location: Option<String>,
    pub university_overall_ranking: Option<u32>,
    pub university_subject_ranking: Option<u32>,
    pub program_name: String,
    pub program_link: Option<String>,
    pub program_duration: Option<String>,
    pub admission_requirements: Option<String>,
    pub total_credits: u32,
    pub annual_tuition_fee: u32,
}

impl Program {
    /// Materializes a record from a draft, with identity and creation time
    /// assigned by the caller (the store boundary).
    pub fn from_draft(id: ProgramId, date_added: DateTime<Utc>, draft: ProgramDraft) -> Self {
        Program {
            id,
            academic_field: draft.academic_field,
            university_name: draft.university_name,
            university_location: draft.university_location,
            university_overall_ranking: draft.university_overall_ranking,
            university_subject_ranking: draft.university_subject_ranking,
            program_name: draft.program_name,
            program_link: draft.program_link,
            program_duration: draft.program_duration,
            admission_requirements: draft.admission_requirements,
            total_credits: draft.total_credits,
            annual_tuition_fee: draft.annual_tuition_fee,
            date_added,
        }
    }

    /// Projects the record back to its writable fields, for edit flows that
    /// start from the current values.
    pub fn to_draft(&self) -> ProgramDraft {
        ProgramDraft {
            academic_field: self.academic_field.clone(),
            university_name: self.university_name.clone(),
            university_location: self.university_location.clone(),
            university_overall_ranking: self.university_overall_ranking,
            university_subject_ranking: self.university_subject_ranking,
            program_name: self.program_name.clone(),
            program_link: self.program_link.clone(),
            program_duration: self.program_duration.clone(),
            admission_requirements: self.admission_requirements.clone(),
            total_credits: self.total_credits,
            annual_tuition_fee: self.annual_tuition_fee,
        }
    }

    /// Applies a draft in place, preserving `id` and `date_added`.
    pub fn apply_draft(&mut self, draft: ProgramDraft) {
        let id = self.id;
        let date_added = self.date_added;
        *self = Program::from_draft(id, date_added, draft);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_draft(field: &str, university: &str, name: &str) -> ProgramDraft {
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

    #[test]
    fn program_id_display_and_parse_roundtrip() {
        let id = ProgramId::new();
        let parsed: ProgramId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn from_draft_preserves_all_fields() {
        let mut draft = sample_draft("CS", "Stanford University", "MSCS");
        draft.university_location = Some("Stanford, CA, USA".to_string());
        draft.university_overall_ranking = Some(3);
        draft.total_credits = 45;

        let id = ProgramId::new();
        let now = Utc::now();
        let program = Program::from_draft(id, now, draft.clone());

        assert_eq!(program.id, id);
        assert_eq!(program.date_added, now);
        assert_eq!(program.to_draft(), draft);
    }

    #[test]
    fn apply_draft_keeps_id_and_date_added() {
        let id = ProgramId::new();
        let now = Utc::now();
        let mut program = Program::from_draft(id, now, sample_draft("CS", "MIT", "MEng"));

        let mut edited = program.to_draft();
        edited.program_name = "MEng EECS".to_string();
        edited.annual_tuition_fee = 60_000;
        program.apply_draft(edited);

        assert_eq!(program.id, id);
        assert_eq!(program.date_added, now);
        assert_eq!(program.program_name, "MEng EECS");
        assert_eq!(program.annual_tuition_fee, 60_000);
    }

    #[test]
    fn serde_uses_camel_case_and_roundtrips() {
        let program = Program::from_draft(
            ProgramId::new(),
            Utc::now(),
            sample_draft("EE", "ETH Zurich", "MSc EE"),
        );

        let json = serde_json::to_value(&program).unwrap();
        assert!(json.get("academicField").is_some());
        assert!(json.get("universityName").is_some());
        assert!(json.get("dateAdded").is_some());
        // Absent optionals serialize as null, distinct from zero numerics.
        assert!(json.get("universityOverallRanking").unwrap().is_null());
        assert_eq!(json.get("totalCredits").unwrap(), 0);

        let back: Program = serde_json::from_value(json).unwrap();
        assert_eq!(back, program);
    }
}
