//! OpenAPI document for the REST surface.

use utoipa::OpenApi;

use super::dto::{
    LatestPostResponse, PostDetailResponse, PostListResponse, PostRequest, PostResponse,
};
use super::handlers::system::{HealthResponse, WelcomeResponse};
use crate::domain::{Post, PostId};
use crate::error::{ErrorBody, ErrorResponse};

/// Generated OpenAPI specification, served at `/api-docs/openapi.json`
/// when the `swagger-ui` feature is enabled.
#[derive(Debug, OpenApi)]
#[openapi(
    info(title = "posts-api", description = "CRUD API for blog posts"),
    paths(
        super::handlers::system::root_handler,
        super::handlers::system::health_handler,
        super::handlers::post::list_posts,
        super::handlers::post::create_post,
        super::handlers::post::latest_post,
        super::handlers::post::get_post,
        super::handlers::post::update_post,
        super::handlers::post::delete_post,
    ),
    components(schemas(
        Post,
        PostId,
        PostRequest,
        PostResponse,
        PostListResponse,
        PostDetailResponse,
        LatestPostResponse,
        WelcomeResponse,
        HealthResponse,
        ErrorResponse,
        ErrorBody,
    )),
    tags(
        (name = "Posts", description = "Post management"),
        (name = "System", description = "Service metadata"),
    )
)]
pub struct ApiDoc;
