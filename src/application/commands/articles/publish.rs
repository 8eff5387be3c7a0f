// src/application/commands/articles/publish.rs
use super::ArticleCommandService;
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::article::{ArticleId, EMPTY_CONTENT},
};

pub struct SetPublishStateCommand {
    pub id: i64,
    pub publish: bool,
}

impl ArticleCommandService {
    /// Publishing stamps `published_at` with the current time and requires
    /// non-blank content; unpublishing clears it.
    pub async fn set_publish_state(&self, command: SetPublishStateCommand) -> ApplicationResult<()> {
        let id = ArticleId::new(command.id)?;
        let article = self.articles.find_by_id(id).await?;
        let now = self.clock.now();

        if command.publish {
            if !article.has_content() {
                tracing::warn!(article_id = %id, "refused to publish article without content");
                return Err(ApplicationError::bad_request(EMPTY_CONTENT));
            }
            self.articles.set_published_at(id, Some(now), now).await?;
            tracing::info!(article_id = %id, published_at = %now, "article published");
        } else {
            self.articles.set_published_at(id, None, now).await?;
            tracing::info!(article_id = %id, "article unpublished");
        }

        Ok(())
    }

    pub async fn publish_article(&self, id: i64) -> ApplicationResult<()> {
        self.set_publish_state(SetPublishStateCommand { id, publish: true })
            .await
    }

    pub async fn unpublish_article(&self, id: i64) -> ApplicationResult<()> {
        self.set_publish_state(SetPublishStateCommand { id, publish: false })
            .await
    }
}
