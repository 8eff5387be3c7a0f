use super::CategoryQueryService;
use crate::{
    application::{
        dto::{CategoryDto, Paginated},
        error::ApplicationResult,
        queries::normalize_keyword,
    },
    domain::{
        category::{CategoryQuery, ParentFilter},
        pagination::PageRequest,
    },
};

#[derive(Debug, Clone, Default)]
pub struct ListCategoriesQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub keyword: Option<String>,
    /// `None` any parent, `0` roots only, `n` children of `n`.
    pub parent_id: Option<i64>,
}

impl CategoryQueryService {
    pub async fn list_categories(
        &self,
        query: ListCategoriesQuery,
    ) -> ApplicationResult<Paginated<CategoryDto>> {
        let filter = CategoryQuery {
            page: PageRequest::new(query.page, query.limit),
            keyword: normalize_keyword(query.keyword),
            parent: ParentFilter::from_raw(query.parent_id)?,
        };
        let (records, total) = self.categories.list(&filter).await?;
        Ok(Paginated::from_records(records, &filter.page, total))
    }
}
