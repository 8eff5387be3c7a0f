// src/domain/category/query.rs
use crate::domain::category::value_objects::CategoryId;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::pagination::PageRequest;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ParentFilter {
    #[default]
    Any,
    RootsOnly,
    ChildrenOf(CategoryId),
}

impl ParentFilter {
    /// `None` disables the filter, `0` selects roots, a positive id selects its children.
    pub fn from_raw(raw: Option<i64>) -> DomainResult<Self> {
        match raw {
            None => Ok(Self::Any),
            Some(0) => Ok(Self::RootsOnly),
            Some(id) if id > 0 => Ok(Self::ChildrenOf(CategoryId(id))),
            Some(_) => Err(DomainError::invalid_field(
                "parentId",
                "Parent ID must not be negative",
            )),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CategoryQuery {
    pub page: PageRequest,
    /// Substring matched against `name` or `description`.
    pub keyword: Option<String>,
    pub parent: ParentFilter,
}
