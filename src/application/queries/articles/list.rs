use super::ArticleQueryService;
use crate::{
    application::{
        dto::{ArticleDto, Paginated},
        error::{ApplicationError, ApplicationResult},
        queries::normalize_keyword,
    },
    domain::{
        article::ArticleQuery, category::CategoryId, pagination::PageRequest, tag::TagId,
    },
};

#[derive(Debug, Clone, Default)]
pub struct ListArticlesQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub keyword: Option<String>,
    pub category_id: Option<i64>,
    pub tag_id: Option<i64>,
    /// `Some(true)` published only, `Some(false)` drafts only.
    pub published: Option<bool>,
}

impl ArticleQueryService {
    pub async fn list_articles(
        &self,
        query: ListArticlesQuery,
    ) -> ApplicationResult<Paginated<ArticleDto>> {
        let filter = Self::build_filter(query)?;
        let (records, total) = self.articles.list(&filter).await?;
        Ok(Paginated::from_records(records, &filter.page, total))
    }

    fn build_filter(query: ListArticlesQuery) -> ApplicationResult<ArticleQuery> {
        let category_id = query
            .category_id
            .map(CategoryId::new)
            .transpose()
            .map_err(|_| ApplicationError::invalid_field("categoryId", "must be positive"))?;
        let tag_id = query
            .tag_id
            .map(TagId::new)
            .transpose()
            .map_err(|_| ApplicationError::invalid_field("tagId", "must be positive"))?;

        Ok(ArticleQuery {
            page: PageRequest::new(query.page, query.limit),
            keyword: normalize_keyword(query.keyword),
            category_id,
            tag_id,
            is_published: query.published,
        })
    }
}
