//! Blog and comment records matching the `blogs/` and `comments/` wire formats.
//!
//! Comments travel two ways on the wire: embedded inside their parent blog on
//! every `blogs/` read, and individually addressable under `comments/` for
//! mutations. There is no standalone comment collection on the client; the
//! embedded copy is the only one ever displayed.

use serde::{Deserialize, Serialize};

use super::{require_all, RecordId, Resource};
use crate::errors::ApiError;

/// A blog post with its materialized comment snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blog {
    pub id: RecordId,
    pub blog_title: String,
    pub blog_body: String,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

/// Draft for the create-blog form; comments start empty server-side.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NewBlog {
    pub blog_title: String,
    pub blog_body: String,
}

/// A comment, carrying a back-reference to its owning blog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: RecordId,
    pub comment: String,
    pub blog: RecordId,
}

/// Draft for posting a comment under one blog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NewComment {
    pub comment: String,
    pub blog: RecordId,
}

impl Resource for Blog {
    type Draft = NewBlog;

    const ENDPOINT: &'static str = "blogs/";
    const NOUN: &'static str = "blog";

    fn id(&self) -> RecordId {
        self.id
    }

    fn display_name(&self) -> &str {
        &self.blog_title
    }

    fn validate_draft(draft: &NewBlog) -> Result<(), ApiError> {
        if draft.blog_title.trim().is_empty() || draft.blog_body.trim().is_empty() {
            return Err(ApiError::Validation(
                "Please fill in all blog fields.".to_string(),
            ));
        }
        Ok(())
    }

    fn validate(&self) -> Result<(), ApiError> {
        require_all(&[&self.blog_title, &self.blog_body])
    }
}

impl Resource for Comment {
    type Draft = NewComment;

    const ENDPOINT: &'static str = "comments/";
    const NOUN: &'static str = "comment";

    fn id(&self) -> RecordId {
        self.id
    }

    fn display_name(&self) -> &str {
        &self.comment
    }

    fn validate_draft(draft: &NewComment) -> Result<(), ApiError> {
        if draft.comment.trim().is_empty() {
            return Err(ApiError::Validation("Comment cannot be empty.".to_string()));
        }
        Ok(())
    }

    fn validate(&self) -> Result<(), ApiError> {
        Self::validate_draft(&NewComment {
            comment: self.comment.clone(),
            blog: self.blog,
        })
    }
}
