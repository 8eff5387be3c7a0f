// src/domain/category/repository.rs
use crate::domain::category::{Category, CategoryId, CategoryQuery, CategoryUpdate, NewCategory};
use crate::domain::errors::DomainResult;
use crate::domain::slug::Slug;
use async_trait::async_trait;

/// Category persistence with the forest invariants.
///
/// `insert` and `update` check slug uniqueness and the parent reference (see
/// [`super::hierarchy::ensure_valid_parent`]). `delete` refuses categories that
/// still have children and removes `article_categories` rows in the same
/// transaction as the category row.
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Loads the category with its direct children.
    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Category>;
    /// Loads the category with its direct children.
    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Category>;
    /// Page ordered by name, each entry with its direct children, plus the total count.
    async fn list(&self, query: &CategoryQuery) -> DomainResult<(Vec<Category>, u64)>;
    /// Direct children ordered by name.
    async fn find_children(&self, parent_id: CategoryId) -> DomainResult<Vec<Category>>;
    /// Ancestor chain `[root, .., parent, self]`.
    async fn hierarchy(&self, id: CategoryId) -> DomainResult<Vec<Category>>;
    async fn insert(&self, category: NewCategory) -> DomainResult<CategoryId>;
    async fn update(&self, update: CategoryUpdate) -> DomainResult<()>;
    async fn delete(&self, id: CategoryId) -> DomainResult<()>;
    async fn count_by_slug(&self, slug: &Slug, exclude: Option<CategoryId>) -> DomainResult<u64>;
}
