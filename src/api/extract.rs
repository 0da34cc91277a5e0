//! Custom Axum extractors.
//!
//! Both extractors reject with [`ServiceError::InvalidRequest`] so that
//! every structural problem with a request surfaces as a 422 with the
//! standard error body, before any storage call.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;

use super::dto::PostRequest;
use crate::domain::{NewPost, PostId};
use crate::error::ServiceError;

/// Extract and validate a post payload from a JSON body.
#[derive(Debug)]
pub struct ValidPost(pub NewPost);

impl<S> FromRequest<S> for ValidPost
where
    S: Send + Sync,
{
    type Rejection = ServiceError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(body) = Json::<PostRequest>::from_request(req, state)
            .await
            .map_err(|e: JsonRejection| ServiceError::InvalidRequest(e.body_text()))?;

        Ok(Self(NewPost::try_from(body)?))
    }
}

/// Extract a post ID from the `{id}` path segment.
#[derive(Debug, Clone, Copy)]
pub struct PostIdPath(pub PostId);

impl<S> FromRequestParts<S> for PostIdPath
where
    S: Send + Sync,
{
    type Rejection = ServiceError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i64>::from_request_parts(parts, state)
            .await
            .map_err(|e: PathRejection| ServiceError::InvalidRequest(e.body_text()))?;

        Ok(Self(PostId::new(id)))
    }
}
