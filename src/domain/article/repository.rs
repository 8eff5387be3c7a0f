// src/domain/article/repository.rs
use crate::domain::article::entity::{Article, ArticleUpdate, NewArticle};
use crate::domain::article::query::ArticleQuery;
use crate::domain::article::value_objects::ArticleId;
use crate::domain::errors::DomainResult;
use crate::domain::slug::Slug;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Article persistence, including the `article_categories` and `article_tags` rows.
#[async_trait]
pub trait ArticleRepository: Send + Sync {
    /// Loads the article with its categories and tags.
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Article>;
    /// Loads the article with its categories and tags.
    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Article>;
    /// Page ordered by `created_at` descending, associations loaded, plus the total count.
    async fn list(&self, query: &ArticleQuery) -> DomainResult<(Vec<Article>, u64)>;
    /// Inserts the row and its association rows as one unit. Rejects a taken slug.
    async fn insert(&self, article: NewArticle) -> DomainResult<ArticleId>;
    /// Rewrites the scalar fields; association sets marked `Replace` are swapped
    /// inside one transaction.
    async fn update(&self, update: ArticleUpdate) -> DomainResult<()>;
    async fn delete(&self, id: ArticleId) -> DomainResult<()>;
    /// Sets or clears `published_at`.
    async fn set_published_at(
        &self,
        id: ArticleId,
        published_at: Option<DateTime<Utc>>,
        updated_at: DateTime<Utc>,
    ) -> DomainResult<()>;
    async fn count_by_slug(&self, slug: &Slug, exclude: Option<ArticleId>) -> DomainResult<u64>;
}
