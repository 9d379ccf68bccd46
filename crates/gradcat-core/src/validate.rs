//! Draft validation, applied before any store mutation or persistence call.
//!
//! A draft that fails validation must cause no side effects anywhere: the
//! catalog rejects it without touching its collection or the backend.

use crate::error::CoreError;
use crate::model::ProgramDraft;

/// Checks a draft against the required-field and ranking rules.
///
/// `academic_field`, `university_name` and `program_name` must be non-empty.
/// The check is on the raw string: a whitespace-only value passes, since the
/// field is used verbatim as a grouping key and is never trimmed.
///
/// Rankings, when present, must be positive; `None` means "not ranked" and
/// is always fine.
pub fn validate(draft: &ProgramDraft) -> Result<(), CoreError> {
    if draft.academic_field.is_empty() {
        return Err(CoreError::MissingField {
            field: "academicField",
        });
    }
    if draft.university_name.is_empty() {
        return Err(CoreError::MissingField {
            field: "universityName",
        });
    }
    if draft.program_name.is_empty() {
        return Err(CoreError::MissingField {
            field: "programName",
        });
    }
    if draft.university_overall_ranking == Some(0) {
        return Err(CoreError::InvalidRanking {
            field: "universityOverallRanking",
        });
    }
    if draft.university_subject_ranking == Some(0) {
        return Err(CoreError::InvalidRanking {
            field: "universitySubjectRanking",
        });
    }
    Ok(())
}
