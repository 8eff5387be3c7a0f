// src/presentation/http/routes.rs
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{articles, categories, tags},
    middleware::require_api_key,
    openapi,
    response::StatusResponse,
};
use axum::{
    Extension, Json, Router,
    http::{HeaderValue, Method},
    middleware::from_fn,
    routing::{get, post, put},
};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

/// Builds the full application router.
///
/// `allowed_origins` containing `*` allows any origin.
pub fn build_router(state: HttpState, allowed_origins: &[String]) -> Router {
    Router::new()
        .merge(public_routes())
        .merge(protected_routes())
        .route("/health", get(health))
        .route("/api/openapi.json", get(openapi::openapi_json))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors_layer(allowed_origins)),
        )
        .layer(Extension(state))
}

fn public_routes() -> Router {
    Router::new()
        .route("/api/articles", get(articles::list_articles))
        .route("/api/articles/{id}", get(articles::get_article))
        .route(
            "/api/articles/slug/{slug}",
            get(articles::get_article_by_slug),
        )
        .route("/api/categories", get(categories::list_categories))
        .route("/api/categories/{id}", get(categories::get_category))
        .route(
            "/api/categories/slug/{slug}",
            get(categories::get_category_by_slug),
        )
        .route(
            "/api/categories/{id}/hierarchy",
            get(categories::category_hierarchy),
        )
        .route(
            "/api/categories/{id}/children",
            get(categories::category_children),
        )
        .route("/api/tags", get(tags::list_tags))
        .route("/api/tags/{id}", get(tags::get_tag))
        .route("/api/tags/slug/{slug}", get(tags::get_tag_by_slug))
        .route(
            "/api/tags/article/{article_id}",
            get(tags::tags_for_article),
        )
}

fn protected_routes() -> Router {
    Router::new()
        .route("/api/articles", post(articles::create_article))
        .route(
            "/api/articles/{id}",
            put(articles::update_article).delete(articles::delete_article),
        )
        .route(
            "/api/articles/{id}/publish",
            post(articles::publish_article),
        )
        .route(
            "/api/articles/{id}/unpublish",
            post(articles::unpublish_article),
        )
        .route("/api/categories", post(categories::create_category))
        .route(
            "/api/categories/{id}",
            put(categories::update_category).delete(categories::delete_category),
        )
        .route("/api/tags", post(tags::create_tag))
        .route(
            "/api/tags/{id}",
            put(tags::update_tag).delete(tags::delete_tag),
        )
        .route_layer(from_fn(require_api_key))
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any)
        .max_age(Duration::from_secs(3600));

    if allowed_origins.is_empty() || allowed_origins.iter().any(|origin| origin == "*") {
        return cors.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    cors.allow_origin(AllowOrigin::list(origins))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = StatusResponse)
    ),
    tag = "System"
)]
pub async fn health() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ok".into(),
    })
}
