//! In-process post storage.
//!
//! [`InMemoryPostStore`] keeps rows in a `BTreeMap` keyed by [`PostId`]
//! behind a [`tokio::sync::RwLock`], so iteration order is ascending ID
//! order and the last entry is always the latest post. IDs come from a
//! counter that only moves forward, so deleted IDs are never reused.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use super::PostStore;
use crate::domain::{NewPost, Post, PostId};
use crate::error::ServiceError;

#[derive(Debug)]
struct Table {
    rows: BTreeMap<PostId, Post>,
    next_id: i64,
}

/// Post store that lives and dies with the process.
///
/// # Concurrency
///
/// - Reads run concurrently.
/// - Writes are serialized by the table lock; the last writer wins.
#[derive(Debug)]
pub struct InMemoryPostStore {
    table: RwLock<Table>,
}

impl InMemoryPostStore {
    /// Creates an empty store whose first assigned ID is `1`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            table: RwLock::new(Table {
                rows: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }

    /// Returns the number of stored posts.
    pub async fn len(&self) -> usize {
        self.table.read().await.rows.len()
    }

    /// Returns `true` if the store holds no posts.
    pub async fn is_empty(&self) -> bool {
        self.table.read().await.rows.is_empty()
    }
}

impl Default for InMemoryPostStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostStore for InMemoryPostStore {
    async fn list(&self) -> Result<Vec<Post>, ServiceError> {
        let table = self.table.read().await;
        Ok(table.rows.values().cloned().collect())
    }

    async fn latest(&self) -> Result<Option<Post>, ServiceError> {
        let table = self.table.read().await;
        Ok(table.rows.values().next_back().cloned())
    }

    async fn find(&self, id: PostId) -> Result<Option<Post>, ServiceError> {
        let table = self.table.read().await;
        Ok(table.rows.get(&id).cloned())
    }

    async fn insert(&self, post: &NewPost) -> Result<Post, ServiceError> {
        let mut table = self.table.write().await;
        let id = PostId::new(table.next_id);
        table.next_id = table
            .next_id
            .checked_add(1)
            .ok_or_else(|| ServiceError::Internal("post id space exhausted".to_string()))?;

        let stored = Post {
            id,
            title: post.title().to_string(),
            content: post.content().to_string(),
            published: post.published(),
            created_at: Utc::now(),
        };
        table.rows.insert(id, stored.clone());
        Ok(stored)
    }

    async fn update(&self, id: PostId, post: &NewPost) -> Result<Option<Post>, ServiceError> {
        let mut table = self.table.write().await;
        let Some(existing) = table.rows.get_mut(&id) else {
            return Ok(None);
        };
        existing.title = post.title().to_string();
        existing.content = post.content().to_string();
        existing.published = post.published();
        Ok(Some(existing.clone()))
    }

    async fn delete(&self, id: PostId) -> Result<bool, ServiceError> {
        let mut table = self.table.write().await;
        Ok(table.rows.remove(&id).is_some())
    }
}
