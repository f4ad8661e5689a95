//! In-memory collection snapshot for one resource kind.
//!
//! The store holds whatever the backend last returned, in server order. It is
//! replaced wholesale after every successful mutation and never merged or
//! patched incrementally; the nested blog/comment design depends on that.

use crate::client::ResourceClient;
use crate::errors::ApiError;
use crate::models::{RecordId, Resource};

/// Last-fetched collection plus a loading flag.
#[derive(Debug)]
pub struct CollectionStore<R: Resource> {
    items: Vec<R>,
    loading: bool,
}

impl<R: Resource> CollectionStore<R> {
    /// Create an empty store; populated by the first `reload`.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            loading: false,
        }
    }

    /// Replace the snapshot with a fresh listing.
    ///
    /// On failure `items` keeps its previous value and the page stays usable
    /// with stale (or empty) state. The loading flag clears either way.
    pub async fn reload(&mut self, client: &ResourceClient<R>) -> Result<(), ApiError> {
        self.loading = true;
        let result = client.list().await;
        self.loading = false;
        self.items = result?;
        Ok(())
    }

    /// Case-insensitive substring match on the display name.
    ///
    /// Pure and recomputed per render; an empty term yields every item in
    /// server order.
    pub fn filter(&self, term: &str) -> Vec<&R> {
        let needle = term.to_lowercase();
        self.items
            .iter()
            .filter(|r| r.display_name().to_lowercase().contains(&needle))
            .collect()
    }

    pub fn items(&self) -> &[R] {
        &self.items
    }

    pub fn find(&self, id: RecordId) -> Option<&R> {
        self.items.iter().find(|r| r.id() == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }
}

impl<R: Resource> Default for CollectionStore<R> {
    fn default() -> Self {
        Self::new()
    }
}
