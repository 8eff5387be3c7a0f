// src/application/dto/pagination.rs
use crate::domain::pagination::PageRequest;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PageMetadata {
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    /// Number of entries on this page.
    pub count: usize,
    pub has_prev: bool,
    pub has_next: bool,
}

impl PageMetadata {
    pub fn new(request: &PageRequest, total: u64, count: usize) -> Self {
        let page = request.page();
        let limit = request.limit();
        Self {
            page,
            limit,
            total,
            count,
            has_prev: page > 1,
            has_next: u64::from(page) * u64::from(limit) < total,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(bound(
    serialize = "T: Serialize",
    deserialize = "T: serde::de::DeserializeOwned"
))]
pub struct Paginated<T> {
    pub metadata: PageMetadata,
    pub result: Vec<T>,
}

impl<T> Paginated<T> {
    pub fn new(result: Vec<T>, request: &PageRequest, total: u64) -> Self {
        Self {
            metadata: PageMetadata::new(request, total, result.len()),
            result,
        }
    }

    /// Converts domain records into their wire form.
    pub fn from_records<R>(records: Vec<R>, request: &PageRequest, total: u64) -> Self
    where
        R: Into<T>,
    {
        Self::new(records.into_iter().map(Into::into).collect(), request, total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn middle_page_has_both_neighbours() {
        let meta = PageMetadata::new(&PageRequest::new(Some(2), Some(10)), 25, 10);
        assert!(meta.has_prev);
        assert!(meta.has_next);
    }

    #[test]
    fn last_page_has_no_next() {
        let meta = PageMetadata::new(&PageRequest::new(Some(3), Some(10)), 25, 5);
        assert!(meta.has_prev);
        assert!(!meta.has_next);
        assert_eq!(meta.count, 5);
    }

    #[test]
    fn exact_fit_has_no_next() {
        let meta = PageMetadata::new(&PageRequest::new(Some(1), Some(10)), 10, 10);
        assert!(!meta.has_prev);
        assert!(!meta.has_next);
    }
}
