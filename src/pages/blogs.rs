//! Blog page: top-level blog CRUD plus the nested comment section.
//!
//! Comment mutations go through the comment client but never get a store of
//! their own. The only comment state the page holds is whatever the blog
//! snapshot embeds, so every successful comment mutation reloads the blog
//! collection. That refetches all blogs and all comments for a single comment
//! change; the payoff is that the displayed comment list is always consistent
//! with the backend immediately afterwards.

use std::sync::Arc;

use super::ResourcePage;
use crate::client::ResourceClient;
use crate::models::{Blog, Comment, NewComment, RecordId, Resource};
use crate::notify::{Confirm, Notifier};
use crate::session::Modal;

/// The blogs page with its comment section.
pub struct BlogPage {
    page: ResourcePage<Blog>,
    comments: ResourceClient<Comment>,
    comment_modal: Modal<Comment>,
    comment_draft: String,
}

impl BlogPage {
    pub fn new(
        http: reqwest::Client,
        api_root: &str,
        notifier: Arc<dyn Notifier>,
        confirm: Arc<dyn Confirm>,
    ) -> Self {
        // The comment client shares the blog page's connection pool
        let comments = ResourceClient::new(http.clone(), api_root);
        Self {
            page: ResourcePage::new(http, api_root, notifier, confirm),
            comments,
            comment_modal: Modal::Closed,
            comment_draft: String::new(),
        }
    }

    /// The underlying blog page; blog-level CRUD goes through here.
    pub fn page(&self) -> &ResourcePage<Blog> {
        &self.page
    }

    pub fn page_mut(&mut self) -> &mut ResourcePage<Blog> {
        &mut self.page
    }

    pub fn comment_modal(&self) -> &Modal<Comment> {
        &self.comment_modal
    }

    pub fn comment_draft(&self) -> &str {
        &self.comment_draft
    }

    pub fn set_comment_draft(&mut self, text: &str) {
        self.comment_draft = text.to_string();
    }

    /// Field-level access to the comment edit snapshot.
    pub fn editing_comment_mut(&mut self) -> Option<&mut Comment> {
        self.comment_modal.editing_mut()
    }

    /// Post the comment draft under one blog.
    pub async fn add_comment(&mut self, blog_id: RecordId) {
        let draft = NewComment {
            comment: self.comment_draft.clone(),
            blog: blog_id,
        };
        if let Err(err) = Comment::validate_draft(&draft) {
            self.page.notifier().warn(&err.message());
            return;
        }
        match self.comments.create(&draft).await {
            Ok(()) => {
                self.page.notifier().success("Comment added!");
                self.comment_draft.clear();
                self.page.refresh().await;
            }
            Err(err) => {
                tracing::error!("Error adding comment: {}", err);
                self.page.notifier().error("Failed to add comment.");
            }
        }
    }

    /// Open the comment modal in edit mode on a fresh snapshot.
    pub async fn open_edit_comment(&mut self, id: RecordId) {
        match self.comments.get_one(id).await {
            Ok(comment) => self.comment_modal = Modal::Editing(comment),
            Err(err) => {
                tracing::error!("Error fetching comment details: {}", err);
                self.page.notifier().error("Could not fetch comment details.");
            }
        }
    }

    /// Save the edited comment back to the backend.
    pub async fn save_comment(&mut self) {
        let comment = match self.comment_modal.editing() {
            Some(comment) => comment.clone(),
            None => return,
        };
        if let Err(err) = comment.validate() {
            self.page.notifier().warn(&err.message());
            return;
        }
        match self.comments.update(comment.id, &comment).await {
            Ok(()) => {
                self.page.notifier().success("Comment updated!");
                self.comment_modal.close();
                self.page.refresh().await;
            }
            Err(err) => {
                tracing::error!("Error updating comment: {}", err);
                self.page.notifier().error("Failed to update comment.");
            }
        }
    }

    /// Delete one comment, after confirmation.
    pub async fn delete_comment(&mut self, id: RecordId) {
        if !self
            .page
            .confirmer()
            .confirm("Are you sure you want to delete this comment?")
        {
            return;
        }
        match self.comments.delete(id).await {
            Ok(()) => {
                self.page.notifier().info("Comment deleted.");
                self.page.refresh().await;
            }
            Err(err) => {
                tracing::error!("Error deleting comment: {}", err);
                self.page.notifier().error("Failed to delete comment.");
            }
        }
    }

    /// Dismiss the comment modal without saving.
    pub fn dismiss_comment(&mut self) {
        self.comment_modal.close();
    }
}
