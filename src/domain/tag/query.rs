// src/domain/tag/query.rs
use crate::domain::pagination::PageRequest;

#[derive(Debug, Clone, Default)]
pub struct TagQuery {
    pub page: PageRequest,
    /// Substring matched against `name` or `description`.
    pub keyword: Option<String>,
}
