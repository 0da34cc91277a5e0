//! PostgreSQL implementation of the persistence layer.

use std::time::Duration;

use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use super::models::{CREATE_POSTS_TABLE, PostRow};
use super::retry::RetryPolicy;
use super::PostStore;
use crate::config::DatabaseConfig;
use crate::domain::{NewPost, Post, PostId};
use crate::error::{ServiceError, StartupError};

/// PostgreSQL-backed post store using `sqlx::PgPool`.
///
/// Every query borrows a pooled connection for its own duration only; the
/// pool returns it on success and on error alike.
#[derive(Debug, Clone)]
pub struct PostgresPostStore {
    pool: PgPool,
}

impl PostgresPostStore {
    /// Creates a new store with the given connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Opens a connection pool, retrying per `policy` until the database
    /// answers or the attempt budget runs out, then ensures the schema.
    ///
    /// # Errors
    ///
    /// Returns [`StartupError::DatabaseUnavailable`] when every attempt
    /// fails, or [`StartupError::Schema`] if the table cannot be created.
    pub async fn connect(
        config: &DatabaseConfig,
        policy: &RetryPolicy,
    ) -> Result<Self, StartupError> {
        let options = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(Duration::from_secs(config.connect_timeout_secs));

        let pool = policy
            .run("database connection", || {
                options.clone().connect(&config.url)
            })
            .await
            .map_err(|(attempts, source)| StartupError::DatabaseUnavailable { attempts, source })?;
        tracing::info!("database connection established");

        let store = Self::new(pool);
        store.ensure_schema().await.map_err(StartupError::Schema)?;
        Ok(store)
    }

    /// Creates the `posts` table if it does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`sqlx::Error`] on database failure.
    pub async fn ensure_schema(&self) -> Result<(), sqlx::Error> {
        sqlx::query(CREATE_POSTS_TABLE).execute(&self.pool).await?;
        tracing::debug!("posts table ready");
        Ok(())
    }
}

#[async_trait]
impl PostStore for PostgresPostStore {
    async fn list(&self) -> Result<Vec<Post>, ServiceError> {
        let rows = sqlx::query_as::<_, PostRow>(
            "SELECT id, title, content, published, created_at FROM posts ORDER BY id ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Post::from).collect())
    }

    async fn latest(&self) -> Result<Option<Post>, ServiceError> {
        let row = sqlx::query_as::<_, PostRow>(
            "SELECT id, title, content, published, created_at FROM posts \
             ORDER BY id DESC LIMIT 1",
        )
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Post::from))
    }

    async fn find(&self, id: PostId) -> Result<Option<Post>, ServiceError> {
        let row = sqlx::query_as::<_, PostRow>(
            "SELECT id, title, content, published, created_at FROM posts WHERE id = $1",
        )
        .bind(id.get())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Post::from))
    }

    async fn insert(&self, post: &NewPost) -> Result<Post, ServiceError> {
        let row = sqlx::query_as::<_, PostRow>(
            "INSERT INTO posts (title, content, published) VALUES ($1, $2, $3) \
             RETURNING id, title, content, published, created_at",
        )
        .bind(post.title())
        .bind(post.content())
        .bind(post.published())
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    async fn update(&self, id: PostId, post: &NewPost) -> Result<Option<Post>, ServiceError> {
        let row = sqlx::query_as::<_, PostRow>(
            "UPDATE posts SET title = $1, content = $2, published = $3 WHERE id = $4 \
             RETURNING id, title, content, published, created_at",
        )
        .bind(post.title())
        .bind(post.content())
        .bind(post.published())
        .bind(id.get())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Post::from))
    }

    async fn delete(&self, id: PostId) -> Result<bool, ServiceError> {
        let result = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(id.get())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    // Run with: DATABASE_URL=postgres://... cargo test -- --ignored

    async fn connect_store() -> PostgresPostStore {
        let Ok(url) = std::env::var("DATABASE_URL") else {
            panic!("DATABASE_URL required");
        };
        let Ok(pool) = PgPoolOptions::new().max_connections(2).connect(&url).await else {
            panic!("pool creation failed");
        };
        let store = PostgresPostStore::new(pool);
        if store.ensure_schema().await.is_err() {
            panic!("schema setup failed");
        }
        store
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn insert_find_update_delete() {
        let store = connect_store().await;
        let Ok(new_post) = NewPost::new("pg title", "pg content", true) else {
            panic!("valid post");
        };
        let Ok(created) = store.insert(&new_post).await else {
            panic!("insert failed");
        };
        assert!(created.published);

        let found = store.find(created.id).await.ok().flatten();
        assert_eq!(found.as_ref(), Some(&created));

        let Ok(replacement) = NewPost::new("new title", "new content", false) else {
            panic!("valid post");
        };
        let Ok(Some(updated)) = store.update(created.id, &replacement).await else {
            panic!("update failed");
        };
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.title, "new title");
        assert!(!updated.published);
        assert_eq!(updated.created_at, created.created_at);

        assert!(matches!(store.delete(created.id).await, Ok(true)));
        assert!(matches!(store.find(created.id).await, Ok(None)));
        assert!(matches!(store.delete(created.id).await, Ok(false)));
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn latest_returns_highest_id() {
        let store = connect_store().await;
        let Ok(new_post) = NewPost::new("first", "body", true) else {
            panic!("valid post");
        };
        let _ = store.insert(&new_post).await;
        let Ok(second) = store.insert(&new_post).await else {
            panic!("insert failed");
        };

        let Ok(Some(latest)) = store.latest().await else {
            panic!("latest failed");
        };
        assert_eq!(latest.id, second.id);
    }
}
