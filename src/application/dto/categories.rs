// src/application/dto/categories.rs
use crate::domain::category::Category;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_time;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDto {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub slug: String,
    #[serde(default)]
    pub parent_id: Option<i64>,
    /// Direct children only.
    #[serde(default)]
    #[schema(no_recursion)]
    pub children: Vec<CategoryDto>,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    pub updated_at: DateTime<Utc>,
}

impl From<Category> for CategoryDto {
    fn from(category: Category) -> Self {
        Self {
            id: category.id.into(),
            name: category.name.into_inner(),
            description: category.description,
            slug: category.slug.into_inner(),
            parent_id: category.parent_id.map(Into::into),
            children: category.children.into_iter().map(Into::into).collect(),
            created_at: category.created_at,
            updated_at: category.updated_at,
        }
    }
}
