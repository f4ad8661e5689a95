//! Employee record matching the `employees/` wire format.

use serde::{Deserialize, Serialize};

use super::{require_all, RecordId, Resource};
use crate::errors::ApiError;

/// An employee record as served by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub emp_id: RecordId,
    pub emp_name: String,
    pub emp_role: String,
}

/// Draft for the add-employee form; the backend assigns the id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NewEmployee {
    pub emp_name: String,
    pub emp_role: String,
}

impl Resource for Employee {
    type Draft = NewEmployee;

    const ENDPOINT: &'static str = "employees/";
    const NOUN: &'static str = "employee";

    fn id(&self) -> RecordId {
        self.emp_id
    }

    fn display_name(&self) -> &str {
        &self.emp_name
    }

    fn validate_draft(draft: &NewEmployee) -> Result<(), ApiError> {
        require_all(&[&draft.emp_name, &draft.emp_role])
    }

    fn validate(&self) -> Result<(), ApiError> {
        require_all(&[&self.emp_name, &self.emp_role])
    }
}
