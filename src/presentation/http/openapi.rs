// src/presentation/http/openapi.rs
use axum::Json;
use utoipa::openapi::{
    Components,
    security::{ApiKey, ApiKeyValue, SecurityScheme},
};
use utoipa::{Modify, OpenApi};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::articles::list_articles,
        crate::presentation::http::controllers::articles::get_article,
        crate::presentation::http::controllers::articles::get_article_by_slug,
        crate::presentation::http::controllers::articles::create_article,
        crate::presentation::http::controllers::articles::update_article,
        crate::presentation::http::controllers::articles::delete_article,
        crate::presentation::http::controllers::articles::publish_article,
        crate::presentation::http::controllers::articles::unpublish_article,
        crate::presentation::http::controllers::categories::list_categories,
        crate::presentation::http::controllers::categories::get_category,
        crate::presentation::http::controllers::categories::get_category_by_slug,
        crate::presentation::http::controllers::categories::category_hierarchy,
        crate::presentation::http::controllers::categories::category_children,
        crate::presentation::http::controllers::categories::create_category,
        crate::presentation::http::controllers::categories::update_category,
        crate::presentation::http::controllers::categories::delete_category,
        crate::presentation::http::controllers::tags::list_tags,
        crate::presentation::http::controllers::tags::get_tag,
        crate::presentation::http::controllers::tags::get_tag_by_slug,
        crate::presentation::http::controllers::tags::tags_for_article,
        crate::presentation::http::controllers::tags::create_tag,
        crate::presentation::http::controllers::tags::update_tag,
        crate::presentation::http::controllers::tags::delete_tag,
        super::routes::health
    ),
    components(
        schemas(
            crate::presentation::http::response::StatusResponse,
            crate::presentation::http::response::MessageResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::articles::CreateArticleRequest,
            crate::presentation::http::controllers::articles::UpdateArticleRequest,
            crate::presentation::http::controllers::categories::CategoryRequest,
            crate::presentation::http::controllers::tags::TagRequest,
            crate::application::dto::ArticleDto,
            crate::application::dto::CategoryDto,
            crate::application::dto::TagDto,
            crate::application::dto::PageMetadata
        )
    ),
    tags(
        (name = "Articles", description = "Article management endpoints"),
        (name = "Categories", description = "Category tree endpoints"),
        (name = "Tags", description = "Tag management endpoints"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&ApiKeySecurity),
    info(
        title = "Quillpress API",
        description = "Content backend for articles, categories and tags",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct ApiKeySecurity;

impl Modify for ApiKeySecurity {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Components::default);
        components.add_security_scheme(
            "apiKey",
            SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new("X-API-Key"))),
        );
    }
}

/// GET /api/openapi.json
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
