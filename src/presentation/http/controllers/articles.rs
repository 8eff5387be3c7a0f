// src/presentation/http/controllers/articles.rs
use crate::application::{
    commands::articles::{CreateArticleCommand, DeleteArticleCommand, UpdateArticleCommand},
    dto::{ArticleDto, Paginated},
    queries::articles::{GetArticleByIdQuery, GetArticleBySlugQuery, ListArticlesQuery},
};
use crate::domain::errors::EntityKind;
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{ApiJson, ApiPath, ApiQuery};
use crate::presentation::http::response::{self, DataResponse, MessageResponse};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, http::StatusCode};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ArticleListParams {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    /// Case-insensitive substring of title or content.
    pub keyword: Option<String>,
    pub category_id: Option<i64>,
    pub tag_id: Option<i64>,
    pub published: Option<bool>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateArticleRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub category_ids: Vec<i64>,
    #[serde(default)]
    pub tag_ids: Vec<i64>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateArticleRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub slug: Option<String>,
    /// RFC 3339 timestamp, not in the future.
    #[serde(default)]
    pub published_at: Option<String>,
    /// Empty leaves the stored categories untouched.
    #[serde(default)]
    pub category_ids: Vec<i64>,
    /// Empty leaves the stored tags untouched.
    #[serde(default)]
    pub tag_ids: Vec<i64>,
    #[serde(default)]
    pub clear_categories: bool,
    #[serde(default)]
    pub clear_tags: bool,
}

#[utoipa::path(
    get,
    path = "/api/articles",
    params(ArticleListParams),
    responses(
        (status = 200, description = "Page of articles, newest first.", body = DataResponse<Paginated<ArticleDto>>),
        (status = 422, description = "Invalid filter.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn list_articles(
    Extension(state): Extension<HttpState>,
    ApiQuery(params): ApiQuery<ArticleListParams>,
) -> HttpResult<Json<DataResponse<Paginated<ArticleDto>>>> {
    let query = ListArticlesQuery {
        page: params.page,
        limit: params.limit,
        keyword: params.keyword,
        category_id: params.category_id,
        tag_id: params.tag_id,
        published: params.published,
    };

    state
        .services
        .article_queries
        .list_articles(query)
        .await
        .into_http()
        .map(response::ok)
}

#[utoipa::path(
    get,
    path = "/api/articles/{id}",
    params(("id" = i64, Path, description = "Article id")),
    responses(
        (status = 200, body = DataResponse<ArticleDto>),
        (status = 404, body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn get_article(
    Extension(state): Extension<HttpState>,
    ApiPath(id): ApiPath<i64>,
) -> HttpResult<Json<DataResponse<ArticleDto>>> {
    state
        .services
        .article_queries
        .get_article_by_id(GetArticleByIdQuery { id })
        .await
        .into_http()
        .map(response::ok)
}

#[utoipa::path(
    get,
    path = "/api/articles/slug/{slug}",
    params(("slug" = String, Path, description = "Article slug")),
    responses(
        (status = 200, body = DataResponse<ArticleDto>),
        (status = 404, body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn get_article_by_slug(
    Extension(state): Extension<HttpState>,
    ApiPath(slug): ApiPath<String>,
) -> HttpResult<Json<DataResponse<ArticleDto>>> {
    state
        .services
        .article_queries
        .get_article_by_slug(GetArticleBySlugQuery { slug })
        .await
        .into_http()
        .map(response::ok)
}

#[utoipa::path(
    post,
    path = "/api/articles",
    request_body = CreateArticleRequest,
    responses(
        (status = 201, body = DataResponse<ArticleDto>),
        (status = 401, body = ErrorResponse),
        (status = 422, body = ErrorResponse)
    ),
    security(("apiKey" = [])),
    tag = "Articles"
)]
pub async fn create_article(
    Extension(state): Extension<HttpState>,
    ApiJson(payload): ApiJson<CreateArticleRequest>,
) -> HttpResult<(StatusCode, Json<DataResponse<ArticleDto>>)> {
    let command = CreateArticleCommand {
        title: payload.title,
        content: payload.content,
        slug: payload.slug,
        category_ids: payload.category_ids,
        tag_ids: payload.tag_ids,
    };

    state
        .services
        .article_commands
        .create_article(command)
        .await
        .into_http()
        .map(response::created)
}

#[utoipa::path(
    put,
    path = "/api/articles/{id}",
    params(("id" = i64, Path, description = "Article id")),
    request_body = UpdateArticleRequest,
    responses(
        (status = 200, body = DataResponse<ArticleDto>),
        (status = 401, body = ErrorResponse),
        (status = 404, body = ErrorResponse),
        (status = 422, body = ErrorResponse)
    ),
    security(("apiKey" = [])),
    tag = "Articles"
)]
pub async fn update_article(
    Extension(state): Extension<HttpState>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(payload): ApiJson<UpdateArticleRequest>,
) -> HttpResult<Json<DataResponse<ArticleDto>>> {
    let command = UpdateArticleCommand {
        id,
        title: payload.title,
        content: payload.content,
        slug: payload.slug,
        published_at: payload.published_at,
        category_ids: payload.category_ids,
        tag_ids: payload.tag_ids,
        clear_categories: payload.clear_categories,
        clear_tags: payload.clear_tags,
    };

    state
        .services
        .article_commands
        .update_article(command)
        .await
        .into_http()
        .map(response::ok)
}

#[utoipa::path(
    delete,
    path = "/api/articles/{id}",
    params(("id" = i64, Path, description = "Article id")),
    responses(
        (status = 200, body = MessageResponse),
        (status = 401, body = ErrorResponse),
        (status = 404, body = ErrorResponse)
    ),
    security(("apiKey" = [])),
    tag = "Articles"
)]
pub async fn delete_article(
    Extension(state): Extension<HttpState>,
    ApiPath(id): ApiPath<i64>,
) -> HttpResult<Json<MessageResponse>> {
    state
        .services
        .article_commands
        .delete_article(DeleteArticleCommand { id })
        .await
        .into_http()?;

    Ok(response::done(EntityKind::Article, "deleted"))
}

#[utoipa::path(
    post,
    path = "/api/articles/{id}/publish",
    params(("id" = i64, Path, description = "Article id")),
    responses(
        (status = 200, body = MessageResponse),
        (status = 400, description = "Article has no content.", body = ErrorResponse),
        (status = 401, body = ErrorResponse),
        (status = 404, body = ErrorResponse)
    ),
    security(("apiKey" = [])),
    tag = "Articles"
)]
pub async fn publish_article(
    Extension(state): Extension<HttpState>,
    ApiPath(id): ApiPath<i64>,
) -> HttpResult<Json<MessageResponse>> {
    state
        .services
        .article_commands
        .publish_article(id)
        .await
        .into_http()?;

    Ok(response::done(EntityKind::Article, "published"))
}

#[utoipa::path(
    post,
    path = "/api/articles/{id}/unpublish",
    params(("id" = i64, Path, description = "Article id")),
    responses(
        (status = 200, body = MessageResponse),
        (status = 401, body = ErrorResponse),
        (status = 404, body = ErrorResponse)
    ),
    security(("apiKey" = [])),
    tag = "Articles"
)]
pub async fn unpublish_article(
    Extension(state): Extension<HttpState>,
    ApiPath(id): ApiPath<i64>,
) -> HttpResult<Json<MessageResponse>> {
    state
        .services
        .article_commands
        .unpublish_article(id)
        .await
        .into_http()?;

    Ok(response::done(EntityKind::Article, "unpublished"))
}
