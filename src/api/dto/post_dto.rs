//! Post DTOs for create, read, update, and list operations.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{NewPost, Post};
use crate::error::ServiceError;

/// Request body for `POST /posts` and `PUT /posts/{id}`.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct PostRequest {
    /// Post title (non-empty).
    pub title: String,
    /// Post body (non-empty).
    pub content: String,
    /// Publish flag. Defaults to `true`.
    #[serde(default = "default_published")]
    pub published: bool,
}

fn default_published() -> bool {
    true
}

impl TryFrom<PostRequest> for NewPost {
    type Error = ServiceError;

    fn try_from(req: PostRequest) -> Result<Self, Self::Error> {
        Self::new(req.title, req.content, req.published)
    }
}

/// Response body for `POST /posts` (201) and `PUT /posts/{id}` (202).
#[derive(Debug, Serialize, ToSchema)]
pub struct PostResponse {
    /// The stored post.
    pub data: Post,
}

/// Response body for `GET /posts`.
#[derive(Debug, Serialize, ToSchema)]
pub struct PostListResponse {
    /// All posts in creation order.
    pub data: Vec<Post>,
}

/// Response body for `GET /posts/{id}`.
#[derive(Debug, Serialize, ToSchema)]
pub struct PostDetailResponse {
    /// The requested post.
    pub post_detail: Post,
}

/// Response body for `GET /posts/latest`.
#[derive(Debug, Serialize, ToSchema)]
pub struct LatestPostResponse {
    /// Most recently created post, `null` when there are none.
    #[serde(rename = "latest post")]
    pub latest_post: Option<Post>,
}
