use super::TagQueryService;
use crate::{
    application::{
        dto::{Paginated, TagDto},
        error::ApplicationResult,
        queries::normalize_keyword,
    },
    domain::{pagination::PageRequest, tag::TagQuery},
};

#[derive(Debug, Clone, Default)]
pub struct ListTagsQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub keyword: Option<String>,
}

impl TagQueryService {
    pub async fn list_tags(&self, query: ListTagsQuery) -> ApplicationResult<Paginated<TagDto>> {
        let filter = TagQuery {
            page: PageRequest::new(query.page, query.limit),
            keyword: normalize_keyword(query.keyword),
        };
        let (records, total) = self.tags.list(&filter).await?;
        Ok(Paginated::from_records(records, &filter.page, total))
    }
}
