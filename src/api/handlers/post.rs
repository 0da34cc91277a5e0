//! Post CRUD handlers: list, create, latest, get, update, delete.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use crate::api::dto::{
    LatestPostResponse, PostDetailResponse, PostListResponse, PostRequest, PostResponse,
};
use crate::api::extract::{PostIdPath, ValidPost};
use crate::app_state::AppState;
use crate::error::{ErrorResponse, ServiceError};

/// `GET /posts` — List all posts.
///
/// # Errors
///
/// Returns [`ServiceError`] on storage failures.
#[utoipa::path(
    get,
    path = "/posts",
    tag = "Posts",
    summary = "List posts",
    description = "Returns every stored post in creation order.",
    responses(
        (status = 200, description = "All posts", body = PostListResponse),
    )
)]
pub async fn list_posts(State(state): State<AppState>) -> Result<impl IntoResponse, ServiceError> {
    let data = state.post_service.list_posts().await?;
    Ok(Json(PostListResponse { data }))
}

/// `POST /posts` — Create a post.
///
/// # Errors
///
/// Returns [`ServiceError::InvalidRequest`] on a malformed body.
#[utoipa::path(
    post,
    path = "/posts",
    tag = "Posts",
    summary = "Create a post",
    description = "Stores a new post. `published` defaults to `true` when omitted.",
    request_body = PostRequest,
    responses(
        (status = 201, description = "Post created", body = PostResponse),
        (status = 422, description = "Malformed body", body = ErrorResponse),
    )
)]
pub async fn create_post(
    State(state): State<AppState>,
    ValidPost(post): ValidPost,
) -> Result<impl IntoResponse, ServiceError> {
    let data = state.post_service.create_post(&post).await?;
    Ok((StatusCode::CREATED, Json(PostResponse { data })))
}

/// `GET /posts/latest` — Most recently created post.
///
/// # Errors
///
/// Returns [`ServiceError`] on storage failures.
#[utoipa::path(
    get,
    path = "/posts/latest",
    tag = "Posts",
    summary = "Get the latest post",
    description = "Returns the post with the highest ID, or `null` when there are no posts.",
    responses(
        (status = 200, description = "Latest post or null", body = LatestPostResponse),
    )
)]
pub async fn latest_post(State(state): State<AppState>) -> Result<impl IntoResponse, ServiceError> {
    let latest_post = state.post_service.latest_post().await?;
    Ok(Json(LatestPostResponse { latest_post }))
}

/// `GET /posts/{id}` — Get a single post.
///
/// # Errors
///
/// Returns [`ServiceError::PostNotFound`] if the post does not exist.
#[utoipa::path(
    get,
    path = "/posts/{id}",
    tag = "Posts",
    summary = "Get a post",
    params(
        ("id" = i64, Path, description = "Post ID"),
    ),
    responses(
        (status = 200, description = "Post details", body = PostDetailResponse),
        (status = 404, description = "Post not found", body = ErrorResponse),
    )
)]
pub async fn get_post(
    State(state): State<AppState>,
    PostIdPath(id): PostIdPath,
) -> Result<impl IntoResponse, ServiceError> {
    let post_detail = state.post_service.get_post(id).await?;
    Ok(Json(PostDetailResponse { post_detail }))
}

/// `PUT /posts/{id}` — Replace a post.
///
/// # Errors
///
/// Returns [`ServiceError::PostNotFound`] if the post does not exist, or
/// [`ServiceError::InvalidRequest`] on a malformed body.
#[utoipa::path(
    put,
    path = "/posts/{id}",
    tag = "Posts",
    summary = "Update a post",
    description = "Replaces title, content, and publish flag. The ID is preserved.",
    params(
        ("id" = i64, Path, description = "Post ID"),
    ),
    request_body = PostRequest,
    responses(
        (status = 202, description = "Post updated", body = PostResponse),
        (status = 404, description = "Post not found", body = ErrorResponse),
        (status = 422, description = "Malformed body", body = ErrorResponse),
    )
)]
pub async fn update_post(
    State(state): State<AppState>,
    PostIdPath(id): PostIdPath,
    ValidPost(post): ValidPost,
) -> Result<impl IntoResponse, ServiceError> {
    let data = state.post_service.update_post(id, &post).await?;
    Ok((StatusCode::ACCEPTED, Json(PostResponse { data })))
}

/// `DELETE /posts/{id}` — Delete a post.
///
/// # Errors
///
/// Returns [`ServiceError::PostNotFound`] if the post does not exist.
#[utoipa::path(
    delete,
    path = "/posts/{id}",
    tag = "Posts",
    summary = "Delete a post",
    params(
        ("id" = i64, Path, description = "Post ID"),
    ),
    responses(
        (status = 204, description = "Post deleted"),
        (status = 404, description = "Post not found", body = ErrorResponse),
    )
)]
pub async fn delete_post(
    State(state): State<AppState>,
    PostIdPath(id): PostIdPath,
) -> Result<impl IntoResponse, ServiceError> {
    state.post_service.delete_post(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Post resource routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/posts", get(list_posts).post(create_post))
        .route("/posts/latest", get(latest_post))
        .route(
            "/posts/{id}",
            get(get_post).put(update_post).delete(delete_post),
        )
}
