//! Page state and the mutation protocol.
//!
//! `ResourcePage` aggregates everything one page owns: the resource client,
//! the collection store, the modal context, the add-form draft, and the
//! search term. Every mutating action runs the same four steps: validate
//! locally, invoke the backend, notify the user, and on success reload the
//! whole collection. Failed mutations leave every piece of local state
//! exactly as it was.

mod blogs;

pub use blogs::BlogPage;

use std::sync::Arc;

use crate::client::ResourceClient;
use crate::models::{RecordId, Resource};
use crate::notify::{Confirm, Notifier};
use crate::session::Modal;
use crate::store::CollectionStore;

/// One resource page: store, modal, draft, and search term.
pub struct ResourcePage<R: Resource> {
    client: ResourceClient<R>,
    store: CollectionStore<R>,
    modal: Modal<R>,
    draft: R::Draft,
    search_term: String,
    notifier: Arc<dyn Notifier>,
    confirm: Arc<dyn Confirm>,
}

impl<R: Resource> ResourcePage<R> {
    pub fn new(
        http: reqwest::Client,
        api_root: &str,
        notifier: Arc<dyn Notifier>,
        confirm: Arc<dyn Confirm>,
    ) -> Self {
        Self {
            client: ResourceClient::new(http, api_root),
            store: CollectionStore::new(),
            modal: Modal::Closed,
            draft: R::Draft::default(),
            search_term: String::new(),
            notifier,
            confirm,
        }
    }

    /// Initial fetch on page mount.
    pub async fn load(&mut self) {
        if let Err(err) = self.store.reload(&self.client).await {
            tracing::error!("Error fetching {} data: {}", R::NOUN, err);
            self.notifier
                .error(&format!("Failed to fetch {} data.", R::NOUN));
        }
    }

    pub fn store(&self) -> &CollectionStore<R> {
        &self.store
    }

    pub fn modal(&self) -> &Modal<R> {
        &self.modal
    }

    pub fn draft(&self) -> &R::Draft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut R::Draft {
        &mut self.draft
    }

    /// Field-level access to the edit snapshot, if edit mode is active.
    pub fn editing_mut(&mut self) -> Option<&mut R> {
        self.modal.editing_mut()
    }

    pub fn set_search(&mut self, term: &str) {
        self.search_term = term.to_string();
    }

    /// Records currently on display: the store filtered by the search term.
    pub fn visible(&self) -> Vec<&R> {
        self.store.filter(&self.search_term)
    }

    /// Submit the add form.
    pub async fn submit_draft(&mut self) {
        if let Err(err) = R::validate_draft(&self.draft) {
            self.notifier.warn(&err.message());
            return;
        }
        match self.client.create(&self.draft).await {
            Ok(()) => {
                self.notifier
                    .success(&format!("{} added successfully!", capitalize(R::NOUN)));
                self.draft = R::Draft::default();
                self.refresh().await;
            }
            Err(err) => {
                tracing::error!("Error adding {}: {}", R::NOUN, err);
                self.notifier.error(&format!("Failed to add {}.", R::NOUN));
            }
        }
    }

    /// Open the modal in view mode on a fresh single-record snapshot.
    pub async fn open_view(&mut self, id: RecordId) {
        if let Some(record) = self.fetch_details(id).await {
            self.modal = Modal::Viewing(record);
        }
    }

    /// Open the modal in edit mode. Edit always starts from server truth,
    /// never from a possibly-stale store or view snapshot.
    pub async fn open_edit(&mut self, id: RecordId) {
        if let Some(record) = self.fetch_details(id).await {
            self.modal = Modal::Editing(record);
        }
    }

    async fn fetch_details(&mut self, id: RecordId) -> Option<R> {
        match self.client.get_one(id).await {
            Ok(record) => Some(record),
            Err(err) => {
                tracing::error!("Error fetching {} details: {}", R::NOUN, err);
                self.notifier
                    .error(&format!("Could not fetch {} details.", R::NOUN));
                None
            }
        }
    }

    /// Save the edit snapshot back to the backend.
    pub async fn save(&mut self) {
        let record = match self.modal.editing() {
            Some(record) => record.clone(),
            None => return,
        };
        if let Err(err) = record.validate() {
            self.notifier.warn(&err.message());
            return;
        }
        match self.client.update(record.id(), &record).await {
            Ok(()) => {
                self.notifier
                    .success(&format!("{} updated successfully!", capitalize(R::NOUN)));
                self.modal.close();
                self.refresh().await;
            }
            Err(err) => {
                tracing::error!("Error updating {}: {}", R::NOUN, err);
                self.notifier
                    .error(&format!("Failed to update {}.", R::NOUN));
            }
        }
    }

    /// Delete one record, after an explicit confirmation.
    ///
    /// Declining aborts with no side effects and no notification.
    pub async fn delete(&mut self, id: RecordId) {
        let prompt = format!("Are you sure you want to delete this {}?", R::NOUN);
        if !self.confirm.confirm(&prompt) {
            return;
        }
        match self.client.delete(id).await {
            Ok(()) => {
                self.notifier.info(&format!("{} deleted.", capitalize(R::NOUN)));
                self.refresh().await;
            }
            Err(err) => {
                tracing::error!("Error deleting {}: {}", R::NOUN, err);
                self.notifier
                    .error(&format!("Failed to delete {}.", R::NOUN));
            }
        }
    }

    /// Dismiss the modal without saving.
    pub fn dismiss(&mut self) {
        self.modal.close();
    }

    /// Post-mutation reload of the whole collection.
    ///
    /// Unconditional and full; a reload failure is reported but does not undo
    /// the mutation that already happened remotely.
    pub(crate) async fn refresh(&mut self) {
        if let Err(err) = self.store.reload(&self.client).await {
            tracing::error!("Error refreshing {} data: {}", R::NOUN, err);
            self.notifier
                .error(&format!("Failed to fetch {} data.", R::NOUN));
        }
    }

    pub(crate) fn notifier(&self) -> &Arc<dyn Notifier> {
        &self.notifier
    }

    pub(crate) fn confirmer(&self) -> &Arc<dyn Confirm> {
        &self.confirm
    }
}

/// Uppercase the first letter for sentence-position nouns.
fn capitalize(noun: &str) -> String {
    let mut chars = noun.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
