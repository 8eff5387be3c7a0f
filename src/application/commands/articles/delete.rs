// src/application/commands/articles/delete.rs
use super::ArticleCommandService;
use crate::{application::error::ApplicationResult, domain::article::ArticleId};

pub struct DeleteArticleCommand {
    pub id: i64,
}

impl ArticleCommandService {
    pub async fn delete_article(&self, command: DeleteArticleCommand) -> ApplicationResult<()> {
        let id = ArticleId::new(command.id)?;
        self.articles.delete(id).await?;
        tracing::info!(article_id = %id, "article deleted");
        Ok(())
    }
}
