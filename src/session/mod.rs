//! Selection/editing context for the single-record modal.
//!
//! One tagged union instead of separate open/editing booleans, so the three
//! states cannot drift apart. The held record is always an independently
//! fetched snapshot, never a reference into the collection store.

/// Modal state over one record.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Modal<R> {
    #[default]
    Closed,
    Viewing(R),
    Editing(R),
}

impl<R> Modal<R> {
    pub fn is_open(&self) -> bool {
        !matches!(self, Modal::Closed)
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, Modal::Editing(_))
    }

    /// Dismiss the modal, dropping any unsaved local edits.
    pub fn close(&mut self) {
        *self = Modal::Closed;
    }

    pub fn viewing(&self) -> Option<&R> {
        match self {
            Modal::Viewing(record) => Some(record),
            _ => None,
        }
    }

    pub fn editing(&self) -> Option<&R> {
        match self {
            Modal::Editing(record) => Some(record),
            _ => None,
        }
    }

    /// Field-level access to the edit snapshot. Edits stay invisible to the
    /// collection store until a save succeeds.
    pub fn editing_mut(&mut self) -> Option<&mut R> {
        match self {
            Modal::Editing(record) => Some(record),
            _ => None,
        }
    }

}
