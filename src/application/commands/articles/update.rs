// src/application/commands/articles/update.rs
use super::ArticleCommandService;
use crate::{
    application::{
        commands::slug::slug_for_update,
        dto::ArticleDto,
        error::ApplicationResult,
    },
    domain::article::{ArticleId, ArticleTitle, ArticleUpdate, parse_published_at},
};

/// Replaces an article's fields.
///
/// An empty `category_ids` / `tag_ids` leaves that association set untouched;
/// `clear_categories` / `clear_tags` empty it explicitly.
#[derive(Debug, Clone, Default)]
pub struct UpdateArticleCommand {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub slug: Option<String>,
    /// RFC 3339; `None` keeps the stored value.
    pub published_at: Option<String>,
    pub category_ids: Vec<i64>,
    pub tag_ids: Vec<i64>,
    pub clear_categories: bool,
    pub clear_tags: bool,
}

impl ArticleCommandService {
    pub async fn update_article(&self, command: UpdateArticleCommand) -> ApplicationResult<ArticleDto> {
        let id = ArticleId::new(command.id)?;
        let current = self.articles.find_by_id(id).await?;
        let now = self.clock.now();

        let title = ArticleTitle::new(command.title)?;
        let slug = slug_for_update(
            self.slugger.as_ref(),
            command.slug.as_deref(),
            title.as_str(),
            current.title.as_str(),
            &current.slug,
        )?;
        let published_at = match command.published_at.as_deref() {
            Some(raw) => Some(parse_published_at(raw, now)?),
            None => current.published_at,
        };

        let categories = self
            .category_update(&command.category_ids, command.clear_categories)
            .await?;
        let tags = self.tag_update(&command.tag_ids, command.clear_tags).await?;

        self.articles
            .update(ArticleUpdate {
                id,
                title,
                content: command.content,
                slug,
                published_at,
                categories,
                tags,
                updated_at: now,
            })
            .await?;

        let updated = self.articles.find_by_id(id).await?;
        tracing::info!(article_id = %updated.id, slug = %updated.slug, "article updated");
        Ok(updated.into())
    }
}
