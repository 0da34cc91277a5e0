//! Persistence layer: the `posts` table behind a storage trait.
//!
//! Provides the [`PostStore`] trait for durable storage of posts. Request
//! handling depends only on the trait; the concrete backend is picked at
//! startup:
//!
//! - [`PostgresPostStore`] issues raw SQL through a pooled `sqlx::PgPool`.
//! - [`InMemoryPostStore`] keeps rows in process memory.

pub mod memory;
pub mod models;
pub mod postgres;
pub mod retry;

use async_trait::async_trait;

use crate::domain::{NewPost, Post, PostId};
use crate::error::ServiceError;

pub use memory::InMemoryPostStore;
pub use postgres::PostgresPostStore;
pub use retry::RetryPolicy;

/// Storage operations over the `posts` table.
///
/// Lookups by ID report a missing row as `None` (or `false` for
/// [`PostStore::delete`]) rather than as an error; callers decide how a
/// missing row is surfaced.
#[async_trait]
pub trait PostStore: Send + Sync + std::fmt::Debug {
    /// Returns every post in ascending ID order.
    async fn list(&self) -> Result<Vec<Post>, ServiceError>;

    /// Returns the post with the highest ID, if any.
    async fn latest(&self) -> Result<Option<Post>, ServiceError>;

    /// Returns the post with the given ID, if it exists.
    async fn find(&self, id: PostId) -> Result<Option<Post>, ServiceError>;

    /// Stores a new post and returns it with its assigned ID.
    async fn insert(&self, post: &NewPost) -> Result<Post, ServiceError>;

    /// Replaces title, content, and publish flag of an existing post.
    async fn update(&self, id: PostId, post: &NewPost) -> Result<Option<Post>, ServiceError>;

    /// Hard-deletes a post. Returns `false` if no row matched.
    async fn delete(&self, id: PostId) -> Result<bool, ServiceError>;
}
