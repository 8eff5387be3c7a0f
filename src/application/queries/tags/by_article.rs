use super::TagQueryService;
use crate::{
    application::{dto::TagDto, error::ApplicationResult},
    domain::article::ArticleId,
};

impl TagQueryService {
    /// Tags of an article. A missing article is `NotFound(Article)`, not an empty list.
    pub async fn tags_for_article(&self, article_id: i64) -> ApplicationResult<Vec<TagDto>> {
        let article_id = ArticleId::new(article_id)?;
        self.articles.find_by_id(article_id).await?;
        let tags = self.tags.find_by_article(article_id).await?;
        Ok(tags.into_iter().map(Into::into).collect())
    }
}
