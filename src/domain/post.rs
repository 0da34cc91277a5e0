//! The post entity and its validated write model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::PostId;
use crate::error::ServiceError;

/// A stored post, as returned by every read and write operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Post {
    /// Datastore-assigned primary key.
    pub id: PostId,
    /// Post title.
    pub title: String,
    /// Post body.
    pub content: String,
    /// Whether the post is publicly visible.
    pub published: bool,
    /// Insert timestamp, assigned by the datastore.
    pub created_at: DateTime<Utc>,
}

/// Field values for inserting or fully replacing a post.
///
/// Only constructible through [`NewPost::new`], so every value that
/// reaches a [`crate::persistence::PostStore`] has non-empty text fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    title: String,
    content: String,
    published: bool,
}

impl NewPost {
    /// Validates and builds a write model.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::InvalidRequest`] if `title` or `content` is
    /// empty or whitespace-only.
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        published: bool,
    ) -> Result<Self, ServiceError> {
        let title = title.into();
        let content = content.into();
        require_text("title", &title)?;
        require_text("content", &content)?;
        Ok(Self {
            title,
            content,
            published,
        })
    }

    /// Post title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Post body.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Publish flag.
    #[must_use]
    pub const fn published(&self) -> bool {
        self.published
    }
}

fn require_text(field: &str, value: &str) -> Result<(), ServiceError> {
    if value.trim().is_empty() {
        return Err(ServiceError::InvalidRequest(format!(
            "field `{field}` must not be empty"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_non_empty_fields() {
        let post = NewPost::new("T", "C", true);
        assert!(post.is_ok());
        let Ok(post) = post else { return };
        assert_eq!(post.title(), "T");
        assert_eq!(post.content(), "C");
        assert!(post.published());
    }

    #[test]
    fn rejects_empty_title() {
        let err = NewPost::new("", "C", true);
        assert!(matches!(err, Err(ServiceError::InvalidRequest(msg)) if msg.contains("title")));
    }

    #[test]
    fn rejects_whitespace_content() {
        let err = NewPost::new("T", "   ", false);
        assert!(matches!(err, Err(ServiceError::InvalidRequest(msg)) if msg.contains("content")));
    }
}
