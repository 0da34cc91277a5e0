//! Database row model for the `posts` table.

use chrono::{DateTime, Utc};

use crate::domain::{Post, PostId};

/// DDL for the `posts` table, applied at startup.
pub const CREATE_POSTS_TABLE: &str = "CREATE TABLE IF NOT EXISTS posts (\
     id BIGSERIAL PRIMARY KEY, \
     title TEXT NOT NULL, \
     content TEXT NOT NULL, \
     published BOOLEAN NOT NULL DEFAULT TRUE, \
     created_at TIMESTAMPTZ NOT NULL DEFAULT now())";

/// A row from the `posts` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PostRow {
    /// `BIGSERIAL` primary key.
    pub id: i64,
    /// Post title.
    pub title: String,
    /// Post body.
    pub content: String,
    /// Publish flag.
    pub published: bool,
    /// Server-side insert timestamp.
    pub created_at: DateTime<Utc>,
}

impl From<PostRow> for Post {
    fn from(row: PostRow) -> Self {
        Self {
            id: PostId::new(row.id),
            title: row.title,
            content: row.content,
            published: row.published,
            created_at: row.created_at,
        }
    }
}
