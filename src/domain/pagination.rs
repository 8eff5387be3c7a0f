// src/domain/pagination.rs

pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Page selection embedded by every list query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    limit: u32,
}

impl PageRequest {
    /// Missing or zero values fall back to page 1 and [`DEFAULT_PAGE_SIZE`].
    pub fn new(page: Option<u32>, limit: Option<u32>) -> Self {
        let page = page.unwrap_or(1).max(1);
        let limit = match limit {
            Some(0) | None => DEFAULT_PAGE_SIZE,
            Some(limit) => limit,
        };
        Self { page, limit }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    pub fn offset(&self) -> i64 {
        i64::from(self.page - 1) * i64::from(self.limit)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(None, None)
    }
}
