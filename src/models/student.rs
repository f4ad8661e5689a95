//! Student record matching the `students/` wire format.

use serde::{Deserialize, Serialize};

use super::{require_all, RecordId, Resource};
use crate::errors::ApiError;

/// A student record as served by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub student_id: RecordId,
    pub name: String,
    pub branch: String,
}

/// Draft for the add-student form; the backend assigns the id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NewStudent {
    pub name: String,
    pub branch: String,
}

impl Resource for Student {
    type Draft = NewStudent;

    const ENDPOINT: &'static str = "students/";
    const NOUN: &'static str = "student";

    fn id(&self) -> RecordId {
        self.student_id
    }

    fn display_name(&self) -> &str {
        &self.name
    }

    fn validate_draft(draft: &NewStudent) -> Result<(), ApiError> {
        require_all(&[&draft.name, &draft.branch])
    }

    fn validate(&self) -> Result<(), ApiError> {
        require_all(&[&self.name, &self.branch])
    }
}
