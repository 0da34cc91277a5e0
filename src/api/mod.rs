//! REST API layer: route handlers, DTOs, extractors, and router composition.

pub mod dto;
pub mod extract;
pub mod handlers;
pub mod openapi;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::app_state::AppState;

/// Builds the complete API router with all REST endpoints.
pub fn build_router() -> Router<AppState> {
    let router = Router::new().merge(handlers::routes());

    #[cfg(feature = "swagger-ui")]
    let router = {
        use utoipa::OpenApi;
        router.merge(
            utoipa_swagger_ui::SwaggerUi::new("/swagger-ui")
                .url("/api-docs/openapi.json", openapi::ApiDoc::openapi()),
        )
    };

    router
}

/// Builds the fully-layered application with state attached.
pub fn build_app(state: AppState) -> Router {
    build_router()
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use std::sync::Arc;

    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode};
    use axum::response::Response;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use super::*;
    use crate::persistence::InMemoryPostStore;

    fn app() -> Router {
        build_app(AppState::new(Arc::new(InMemoryPostStore::new())))
    }

    async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> Response {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(json.to_string())),
            None => builder.body(Body::empty()),
        };
        let Ok(request) = request else {
            panic!("invalid request");
        };
        match app.clone().oneshot(request).await {
            Ok(response) => response,
            Err(never) => match never {},
        }
    }

    async fn json_body(response: Response) -> Value {
        let Ok(bytes) = to_bytes(response.into_body(), usize::MAX).await else {
            panic!("body read failed");
        };
        let Ok(value) = serde_json::from_slice(&bytes) else {
            panic!("body is not JSON");
        };
        value
    }

    async fn create(app: &Router, title: &str, content: &str) -> Value {
        let response = send(
            app,
            "POST",
            "/posts",
            Some(json!({ "title": title, "content": content })),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
        json_body(response).await["data"].clone()
    }

    #[tokio::test]
    async fn root_returns_welcome() {
        let app = app();
        let response = send(&app, "GET", "/", None).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            json_body(response).await,
            json!({ "message": "Welcome to her API" })
        );
    }

    #[tokio::test]
    async fn health_is_ok() {
        let app = app();
        let response = send(&app, "GET", "/health", None).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["status"], "healthy");
    }

    #[tokio::test]
    async fn create_defaults_published_and_assigns_id() {
        let app = app();
        let post = create(&app, "T", "C").await;
        assert_eq!(post["published"], true);
        assert_eq!(post["title"], "T");
        assert_eq!(post["content"], "C");
        assert!(post["id"].is_i64());
    }

    #[tokio::test]
    async fn get_after_create_matches() {
        let app = app();
        let post = create(&app, "T", "C").await;
        let uri = format!("/posts/{}", post["id"]);

        let first = send(&app, "GET", &uri, None).await;
        assert_eq!(first.status(), StatusCode::OK);
        let first = json_body(first).await;
        assert_eq!(first["post_detail"], post);

        let second = json_body(send(&app, "GET", &uri, None).await).await;
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn delete_then_get_is_404() {
        let app = app();
        let post = create(&app, "T", "C").await;
        let uri = format!("/posts/{}", post["id"]);

        let response = send(&app, "DELETE", &uri, None).await;
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let response = send(&app, "GET", &uri, None).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = json_body(response).await;
        assert_eq!(
            body,
            json!({
                "error": {
                    "code": 2001,
                    "message": format!("Post with id = {} was not found", post["id"]),
                }
            })
        );

        let response = send(&app, "DELETE", &uri, None).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn update_replaces_fields_under_same_id() {
        let app = app();
        let post = create(&app, "T", "C").await;
        let uri = format!("/posts/{}", post["id"]);

        let response = send(
            &app,
            "PUT",
            &uri,
            Some(json!({ "title": "T2", "content": "C2", "published": false })),
        )
        .await;
        assert_eq!(response.status(), StatusCode::ACCEPTED);
        let updated = json_body(response).await["data"].clone();
        assert_eq!(updated["id"], post["id"]);

        let fetched = json_body(send(&app, "GET", &uri, None).await).await;
        let fetched = &fetched["post_detail"];
        assert_eq!(fetched["id"], post["id"]);
        assert_eq!(fetched["title"], "T2");
        assert_eq!(fetched["content"], "C2");
        assert_eq!(fetched["published"], false);
    }

    #[tokio::test]
    async fn update_with_missing_content_is_422_and_leaves_row() {
        let app = app();
        let post = create(&app, "T", "C").await;
        let uri = format!("/posts/{}", post["id"]);

        let response = send(&app, "PUT", &uri, Some(json!({ "title": "X" }))).await;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(json_body(response).await["error"]["code"], 1001);

        let fetched = json_body(send(&app, "GET", &uri, None).await).await;
        assert_eq!(fetched["post_detail"], post);
    }

    #[tokio::test]
    async fn update_without_published_resets_it_to_true() {
        let app = app();
        let response = send(
            &app,
            "POST",
            "/posts",
            Some(json!({ "title": "T", "content": "C", "published": false })),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
        let post = json_body(response).await["data"].clone();
        assert_eq!(post["published"], false);
        let uri = format!("/posts/{}", post["id"]);

        let response = send(
            &app,
            "PUT",
            &uri,
            Some(json!({ "title": "T2", "content": "C2" })),
        )
        .await;
        assert_eq!(response.status(), StatusCode::ACCEPTED);
        assert_eq!(json_body(response).await["data"]["published"], true);

        let fetched = json_body(send(&app, "GET", &uri, None).await).await;
        assert_eq!(fetched["post_detail"]["published"], true);
        assert_eq!(fetched["post_detail"]["id"], post["id"]);
    }

    #[tokio::test]
    async fn update_missing_is_404() {
        let app = app();
        let response = send(
            &app,
            "PUT",
            "/posts/42",
            Some(json!({ "title": "T", "content": "C" })),
        )
        .await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn latest_is_null_then_last_created() {
        let app = app();
        let empty = json_body(send(&app, "GET", "/posts/latest", None).await).await;
        assert_eq!(empty, json!({ "latest post": null }));

        let _ = create(&app, "first", "C").await;
        let last = create(&app, "second", "C").await;

        let response = send(&app, "GET", "/posts/latest", None).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["latest post"], last);
    }

    #[tokio::test]
    async fn missing_content_is_422_and_creates_nothing() {
        let app = app();
        let _ = create(&app, "kept", "C").await;

        let response = send(&app, "POST", "/posts", Some(json!({ "title": "T" }))).await;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(json_body(response).await["error"]["code"], 1001);

        let list = json_body(send(&app, "GET", "/posts", None).await).await;
        let Some(posts) = list["data"].as_array() else {
            panic!("data should be an array");
        };
        assert_eq!(posts.len(), 1);
    }

    #[tokio::test]
    async fn wrong_type_and_empty_text_are_422() {
        let app = app();
        let response = send(
            &app,
            "POST",
            "/posts",
            Some(json!({ "title": "T", "content": "C", "published": "yes" })),
        )
        .await;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let response = send(
            &app,
            "POST",
            "/posts",
            Some(json!({ "title": "", "content": "C" })),
        )
        .await;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn non_integer_id_is_422() {
        let app = app();
        let response = send(&app, "GET", "/posts/abc", None).await;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn list_returns_posts_in_creation_order() {
        let app = app();
        let a = create(&app, "a", "C").await;
        let b = create(&app, "b", "C").await;

        let response = send(&app, "GET", "/posts", None).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await, json!({ "data": [a, b] }));
    }
}
