// src/application/dto/articles.rs
use crate::domain::article::Article;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{CategoryDto, TagDto, serde_time};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArticleDto {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub slug: String,
    #[serde(default, with = "serde_time::option")]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub categories: Vec<CategoryDto>,
    #[serde(default)]
    pub tags: Vec<TagDto>,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    pub updated_at: DateTime<Utc>,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self {
            id: article.id.into(),
            title: article.title.into_inner(),
            content: article.content,
            slug: article.slug.into_inner(),
            published_at: article.published_at,
            categories: article.categories.into_iter().map(Into::into).collect(),
            tags: article.tags.into_iter().map(Into::into).collect(),
            created_at: article.created_at,
            updated_at: article.updated_at,
        }
    }
}
