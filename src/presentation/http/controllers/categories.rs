// src/presentation/http/controllers/categories.rs
use crate::application::{
    commands::categories::{CreateCategoryCommand, DeleteCategoryCommand, UpdateCategoryCommand},
    dto::{CategoryDto, Paginated},
    queries::categories::{GetCategoryByIdQuery, GetCategoryBySlugQuery, ListCategoriesQuery},
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
pub struct CategoryListParams {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub keyword: Option<String>,
    /// `0` lists root categories.
    pub parent_id: Option<i64>,
}

/// Body shared by create and update.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub slug: Option<String>,
    /// `null` or `0` makes the category a root.
    #[serde(default)]
    pub parent_id: Option<i64>,
}

#[utoipa::path(
    get,
    path = "/api/categories",
    params(CategoryListParams),
    responses(
        (status = 200, body = DataResponse<Paginated<CategoryDto>>),
        (status = 422, body = ErrorResponse)
    ),
    tag = "Categories"
)]
pub async fn list_categories(
    Extension(state): Extension<HttpState>,
    ApiQuery(params): ApiQuery<CategoryListParams>,
) -> HttpResult<Json<DataResponse<Paginated<CategoryDto>>>> {
    let query = ListCategoriesQuery {
        page: params.page,
        limit: params.limit,
        keyword: params.keyword,
        parent_id: params.parent_id,
    };

    state
        .services
        .category_queries
        .list_categories(query)
        .await
        .into_http()
        .map(response::ok)
}

#[utoipa::path(
    get,
    path = "/api/categories/{id}",
    params(("id" = i64, Path, description = "Category id")),
    responses(
        (status = 200, body = DataResponse<CategoryDto>),
        (status = 404, body = ErrorResponse)
    ),
    tag = "Categories"
)]
pub async fn get_category(
    Extension(state): Extension<HttpState>,
    ApiPath(id): ApiPath<i64>,
) -> HttpResult<Json<DataResponse<CategoryDto>>> {
    state
        .services
        .category_queries
        .get_category_by_id(GetCategoryByIdQuery { id })
        .await
        .into_http()
        .map(response::ok)
}

#[utoipa::path(
    get,
    path = "/api/categories/slug/{slug}",
    params(("slug" = String, Path, description = "Category slug")),
    responses(
        (status = 200, body = DataResponse<CategoryDto>),
        (status = 404, body = ErrorResponse)
    ),
    tag = "Categories"
)]
pub async fn get_category_by_slug(
    Extension(state): Extension<HttpState>,
    ApiPath(slug): ApiPath<String>,
) -> HttpResult<Json<DataResponse<CategoryDto>>> {
    state
        .services
        .category_queries
        .get_category_by_slug(GetCategoryBySlugQuery { slug })
        .await
        .into_http()
        .map(response::ok)
}

#[utoipa::path(
    get,
    path = "/api/categories/{id}/hierarchy",
    params(("id" = i64, Path, description = "Category id")),
    responses(
        (status = 200, description = "Ancestors from the root down to the category itself.", body = DataResponse<Vec<CategoryDto>>),
        (status = 404, body = ErrorResponse)
    ),
    tag = "Categories"
)]
pub async fn category_hierarchy(
    Extension(state): Extension<HttpState>,
    ApiPath(id): ApiPath<i64>,
) -> HttpResult<Json<DataResponse<Vec<CategoryDto>>>> {
    state
        .services
        .category_queries
        .hierarchy(id)
        .await
        .into_http()
        .map(response::ok)
}

#[utoipa::path(
    get,
    path = "/api/categories/{id}/children",
    params(("id" = i64, Path, description = "Parent category id")),
    responses(
        (status = 200, body = DataResponse<Vec<CategoryDto>>)
    ),
    tag = "Categories"
)]
pub async fn category_children(
    Extension(state): Extension<HttpState>,
    ApiPath(id): ApiPath<i64>,
) -> HttpResult<Json<DataResponse<Vec<CategoryDto>>>> {
    state
        .services
        .category_queries
        .list_children(id)
        .await
        .into_http()
        .map(response::ok)
}

#[utoipa::path(
    post,
    path = "/api/categories",
    request_body = CategoryRequest,
    responses(
        (status = 201, body = DataResponse<CategoryDto>),
        (status = 401, body = ErrorResponse),
        (status = 422, body = ErrorResponse)
    ),
    security(("apiKey" = [])),
    tag = "Categories"
)]
pub async fn create_category(
    Extension(state): Extension<HttpState>,
    ApiJson(payload): ApiJson<CategoryRequest>,
) -> HttpResult<(StatusCode, Json<DataResponse<CategoryDto>>)> {
    let command = CreateCategoryCommand {
        name: payload.name,
        description: payload.description,
        slug: payload.slug,
        parent_id: payload.parent_id,
    };

    state
        .services
        .category_commands
        .create_category(command)
        .await
        .into_http()
        .map(response::created)
}

#[utoipa::path(
    put,
    path = "/api/categories/{id}",
    params(("id" = i64, Path, description = "Category id")),
    request_body = CategoryRequest,
    responses(
        (status = 200, body = DataResponse<CategoryDto>),
        (status = 401, body = ErrorResponse),
        (status = 404, body = ErrorResponse),
        (status = 422, description = "Invalid fields, including a parent that would create a cycle.", body = ErrorResponse)
    ),
    security(("apiKey" = [])),
    tag = "Categories"
)]
pub async fn update_category(
    Extension(state): Extension<HttpState>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(payload): ApiJson<CategoryRequest>,
) -> HttpResult<Json<DataResponse<CategoryDto>>> {
    let command = UpdateCategoryCommand {
        id,
        name: payload.name,
        description: payload.description,
        slug: payload.slug,
        parent_id: payload.parent_id,
    };

    state
        .services
        .category_commands
        .update_category(command)
        .await
        .into_http()
        .map(response::ok)
}

#[utoipa::path(
    delete,
    path = "/api/categories/{id}",
    params(("id" = i64, Path, description = "Category id")),
    responses(
        (status = 200, body = MessageResponse),
        (status = 400, description = "Category still has children.", body = ErrorResponse),
        (status = 401, body = ErrorResponse),
        (status = 404, body = ErrorResponse)
    ),
    security(("apiKey" = [])),
    tag = "Categories"
)]
pub async fn delete_category(
    Extension(state): Extension<HttpState>,
    ApiPath(id): ApiPath<i64>,
) -> HttpResult<Json<MessageResponse>> {
    state
        .services
        .category_commands
        .delete_category(DeleteCategoryCommand { id })
        .await
        .into_http()?;

    Ok(response::done(EntityKind::Category, "deleted"))
}
