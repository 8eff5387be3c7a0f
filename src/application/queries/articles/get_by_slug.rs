use super::ArticleQueryService;
use crate::{
    application::{dto::ArticleDto, error::ApplicationResult},
    domain::slug::Slug,
};

pub struct GetArticleBySlugQuery {
    pub slug: String,
}

impl ArticleQueryService {
    pub async fn get_article_by_slug(
        &self,
        query: GetArticleBySlugQuery,
    ) -> ApplicationResult<ArticleDto> {
        let slug = Slug::new(query.slug)?;
        let article = self.articles.find_by_slug(&slug).await?;
        Ok(article.into())
    }
}
