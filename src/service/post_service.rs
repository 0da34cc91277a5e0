//! Post service: orchestrates post operations over a [`PostStore`].

use std::sync::Arc;

use crate::domain::{NewPost, Post, PostId};
use crate::error::ServiceError;
use crate::persistence::PostStore;

/// Orchestration layer for all post operations.
///
/// Stateless coordinator: owns a shared handle to whichever [`PostStore`]
/// was chosen at startup. Every method is a single call into the store
/// with "row missing" translated into [`ServiceError::PostNotFound`].
#[derive(Debug, Clone)]
pub struct PostService {
    store: Arc<dyn PostStore>,
}

impl PostService {
    /// Creates a new `PostService`.
    #[must_use]
    pub fn new(store: Arc<dyn PostStore>) -> Self {
        Self { store }
    }

    /// Returns all posts in creation order.
    ///
    /// # Errors
    ///
    /// Returns a [`ServiceError`] if the store fails.
    pub async fn list_posts(&self) -> Result<Vec<Post>, ServiceError> {
        self.store.list().await
    }

    /// Stores a new post.
    ///
    /// # Errors
    ///
    /// Returns a [`ServiceError`] if the store fails.
    pub async fn create_post(&self, post: &NewPost) -> Result<Post, ServiceError> {
        let created = self.store.insert(post).await?;
        tracing::info!(post_id = %created.id, "post created");
        Ok(created)
    }

    /// Returns the most recently created post, or `None` if there are none.
    ///
    /// # Errors
    ///
    /// Returns a [`ServiceError`] if the store fails.
    pub async fn latest_post(&self) -> Result<Option<Post>, ServiceError> {
        self.store.latest().await
    }

    /// Returns a single post.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::PostNotFound`] if no post has this ID.
    pub async fn get_post(&self, id: PostId) -> Result<Post, ServiceError> {
        self.store
            .find(id)
            .await?
            .ok_or(ServiceError::PostNotFound(id))
    }

    /// Replaces the fields of an existing post.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::PostNotFound`] if no post has this ID.
    pub async fn update_post(&self, id: PostId, post: &NewPost) -> Result<Post, ServiceError> {
        let updated = self
            .store
            .update(id, post)
            .await?
            .ok_or(ServiceError::PostNotFound(id))?;
        tracing::info!(post_id = %id, "post updated");
        Ok(updated)
    }

    /// Deletes a post.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::PostNotFound`] if no post has this ID.
    pub async fn delete_post(&self, id: PostId) -> Result<(), ServiceError> {
        if !self.store.delete(id).await? {
            return Err(ServiceError::PostNotFound(id));
        }
        tracing::info!(post_id = %id, "post deleted");
        Ok(())
    }
}
