//! Data models for the campus records portal.
//!
//! Each record struct matches the backend's JSON wire format exactly (field
//! names included), so no serde renames are needed.

mod blog;
mod employee;
mod student;

pub use blog::*;
pub use employee::*;
pub use student::*;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::errors::ApiError;

/// Backend-assigned record identifier. The client never invents one.
pub type RecordId = i64;

/// Contract binding a record type to its REST collection.
///
/// Implemented once per resource kind; everything above the models (client,
/// store, pages) is generic over this trait.
pub trait Resource: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// New-record draft submitted by the add form. Never carries an id.
    type Draft: Serialize + Default + Clone + Send + Sync + 'static;

    /// Collection path under the API root, with trailing slash.
    const ENDPOINT: &'static str;

    /// Human-readable noun used in notification copy.
    const NOUN: &'static str;

    fn id(&self) -> RecordId;

    /// Field the client-side search matches against.
    fn display_name(&self) -> &str;

    /// Presence check for the add-form draft; runs before any network call.
    fn validate_draft(draft: &Self::Draft) -> Result<(), ApiError>;

    /// Presence check for an edited record, before it is saved.
    fn validate(&self) -> Result<(), ApiError>;
}

/// Require every listed string field to be non-blank.
pub(crate) fn require_all(fields: &[&str]) -> Result<(), ApiError> {
    if fields.iter().any(|f| f.trim().is_empty()) {
        return Err(ApiError::Validation(
            "Please fill in all fields.".to_string(),
        ));
    }
    Ok(())
}
