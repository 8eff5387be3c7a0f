// src/presentation/http/controllers/tags.rs
use crate::application::{
    commands::tags::{CreateTagCommand, DeleteTagCommand, UpdateTagCommand},
    dto::{Paginated, TagDto},
    queries::tags::{GetTagByIdQuery, GetTagBySlugQuery, ListTagsQuery},
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
pub struct TagListParams {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub keyword: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TagRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub slug: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/tags",
    params(TagListParams),
    responses((status = 200, body = DataResponse<Paginated<TagDto>>)),
    tag = "Tags"
)]
pub async fn list_tags(
    Extension(state): Extension<HttpState>,
    ApiQuery(params): ApiQuery<TagListParams>,
) -> HttpResult<Json<DataResponse<Paginated<TagDto>>>> {
    let query = ListTagsQuery {
        page: params.page,
        limit: params.limit,
        keyword: params.keyword,
    };

    state
        .services
        .tag_queries
        .list_tags(query)
        .await
        .into_http()
        .map(response::ok)
}

#[utoipa::path(
    get,
    path = "/api/tags/{id}",
    params(("id" = i64, Path, description = "Tag id")),
    responses(
        (status = 200, body = DataResponse<TagDto>),
        (status = 404, body = ErrorResponse)
    ),
    tag = "Tags"
)]
pub async fn get_tag(
    Extension(state): Extension<HttpState>,
    ApiPath(id): ApiPath<i64>,
) -> HttpResult<Json<DataResponse<TagDto>>> {
    state
        .services
        .tag_queries
        .get_tag_by_id(GetTagByIdQuery { id })
        .await
        .into_http()
        .map(response::ok)
}

#[utoipa::path(
    get,
    path = "/api/tags/slug/{slug}",
    params(("slug" = String, Path, description = "Tag slug")),
    responses(
        (status = 200, body = DataResponse<TagDto>),
        (status = 404, body = ErrorResponse)
    ),
    tag = "Tags"
)]
pub async fn get_tag_by_slug(
    Extension(state): Extension<HttpState>,
    ApiPath(slug): ApiPath<String>,
) -> HttpResult<Json<DataResponse<TagDto>>> {
    state
        .services
        .tag_queries
        .get_tag_by_slug(GetTagBySlugQuery { slug })
        .await
        .into_http()
        .map(response::ok)
}

#[utoipa::path(
    get,
    path = "/api/tags/article/{article_id}",
    params(("article_id" = i64, Path, description = "Article id")),
    responses(
        (status = 200, body = DataResponse<Vec<TagDto>>),
        (status = 404, description = "Article does not exist.", body = ErrorResponse)
    ),
    tag = "Tags"
)]
pub async fn tags_for_article(
    Extension(state): Extension<HttpState>,
    ApiPath(article_id): ApiPath<i64>,
) -> HttpResult<Json<DataResponse<Vec<TagDto>>>> {
    state
        .services
        .tag_queries
        .tags_for_article(article_id)
        .await
        .into_http()
        .map(response::ok)
}

#[utoipa::path(
    post,
    path = "/api/tags",
    request_body = TagRequest,
    responses(
        (status = 201, body = DataResponse<TagDto>),
        (status = 401, body = ErrorResponse),
        (status = 422, body = ErrorResponse)
    ),
    security(("apiKey" = [])),
    tag = "Tags"
)]
pub async fn create_tag(
    Extension(state): Extension<HttpState>,
    ApiJson(payload): ApiJson<TagRequest>,
) -> HttpResult<(StatusCode, Json<DataResponse<TagDto>>)> {
    let command = CreateTagCommand {
        name: payload.name,
        description: payload.description,
        slug: payload.slug,
    };

    state
        .services
        .tag_commands
        .create_tag(command)
        .await
        .into_http()
        .map(response::created)
}

#[utoipa::path(
    put,
    path = "/api/tags/{id}",
    params(("id" = i64, Path, description = "Tag id")),
    request_body = TagRequest,
    responses(
        (status = 200, body = DataResponse<TagDto>),
        (status = 401, body = ErrorResponse),
        (status = 404, body = ErrorResponse),
        (status = 422, body = ErrorResponse)
    ),
    security(("apiKey" = [])),
    tag = "Tags"
)]
pub async fn update_tag(
    Extension(state): Extension<HttpState>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(payload): ApiJson<TagRequest>,
) -> HttpResult<Json<DataResponse<TagDto>>> {
    let command = UpdateTagCommand {
        id,
        name: payload.name,
        description: payload.description,
        slug: payload.slug,
    };

    state
        .services
        .tag_commands
        .update_tag(command)
        .await
        .into_http()
        .map(response::ok)
}

#[utoipa::path(
    delete,
    path = "/api/tags/{id}",
    params(("id" = i64, Path, description = "Tag id")),
    responses(
        (status = 200, body = MessageResponse),
        (status = 401, body = ErrorResponse),
        (status = 404, body = ErrorResponse)
    ),
    security(("apiKey" = [])),
    tag = "Tags"
)]
pub async fn delete_tag(
    Extension(state): Extension<HttpState>,
    ApiPath(id): ApiPath<i64>,
) -> HttpResult<Json<MessageResponse>> {
    state
        .services
        .tag_commands
        .delete_tag(DeleteTagCommand { id })
        .await
        .into_http()?;

    Ok(response::done(EntityKind::Tag, "deleted"))
}
