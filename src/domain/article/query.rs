// src/domain/article/query.rs
use crate::domain::category::CategoryId;
use crate::domain::pagination::PageRequest;
use crate::domain::tag::TagId;

/// Conjunctive article filter; every `None` leaves that dimension open.
#[derive(Debug, Clone, Default)]
pub struct ArticleQuery {
    pub page: PageRequest,
    /// Substring matched against `title` or `content`.
    pub keyword: Option<String>,
    pub category_id: Option<CategoryId>,
    pub tag_id: Option<TagId>,
    pub is_published: Option<bool>,
}
