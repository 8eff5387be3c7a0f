// src/domain/tag/repository.rs
use crate::domain::article::ArticleId;
use crate::domain::errors::DomainResult;
use crate::domain::slug::Slug;
use crate::domain::tag::{NewTag, Tag, TagId, TagName, TagQuery, TagUpdate};
use async_trait::async_trait;

/// Tag persistence.
///
/// Implementations enforce slug and name uniqueness on `insert`/`update` and
/// remove the tag's `article_tags` rows in the same transaction as `delete`.
#[async_trait]
pub trait TagRepository: Send + Sync {
    async fn find_by_id(&self, id: TagId) -> DomainResult<Tag>;
    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Tag>;
    /// Returns the page and the total count under the same filter.
    async fn list(&self, query: &TagQuery) -> DomainResult<(Vec<Tag>, u64)>;
    /// Tags attached to an article, ordered by name.
    async fn find_by_article(&self, article_id: ArticleId) -> DomainResult<Vec<Tag>>;
    async fn insert(&self, tag: NewTag) -> DomainResult<TagId>;
    async fn update(&self, update: TagUpdate) -> DomainResult<()>;
    async fn delete(&self, id: TagId) -> DomainResult<()>;
    async fn count_by_slug(&self, slug: &Slug, exclude: Option<TagId>) -> DomainResult<u64>;
    async fn count_by_name(&self, name: &TagName, exclude: Option<TagId>) -> DomainResult<u64>;
}
