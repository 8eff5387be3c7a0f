// src/application/commands/articles/create.rs
use super::ArticleCommandService;
use crate::{
    application::{
        commands::slug::slug_for_create,
        dto::ArticleDto,
        error::ApplicationResult,
    },
    domain::article::{ArticleTitle, NewArticle},
};

#[derive(Debug, Clone, Default)]
pub struct CreateArticleCommand {
    pub title: String,
    pub content: String,
    /// Derived from the title when absent or blank.
    pub slug: Option<String>,
    pub category_ids: Vec<i64>,
    pub tag_ids: Vec<i64>,
}

impl CreateArticleCommand {
    pub fn builder() -> CreateArticleCommandBuilder {
        CreateArticleCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct CreateArticleCommandBuilder {
    title: Option<String>,
    content: String,
    slug: Option<String>,
    category_ids: Vec<i64>,
    tag_ids: Vec<i64>,
}

impl CreateArticleCommandBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    pub fn category_ids(mut self, ids: impl Into<Vec<i64>>) -> Self {
        self.category_ids = ids.into();
        self
    }

    pub fn tag_ids(mut self, ids: impl Into<Vec<i64>>) -> Self {
        self.tag_ids = ids.into();
        self
    }

    pub fn build(self) -> Result<CreateArticleCommand, &'static str> {
        Ok(CreateArticleCommand {
            title: self.title.ok_or("title is required")?,
            content: self.content,
            slug: self.slug,
            category_ids: self.category_ids,
            tag_ids: self.tag_ids,
        })
    }
}

impl ArticleCommandService {
    pub async fn create_article(&self, command: CreateArticleCommand) -> ApplicationResult<ArticleDto> {
        let CreateArticleCommand {
            title,
            content,
            slug,
            category_ids,
            tag_ids,
        } = command;

        let title = ArticleTitle::new(title)?;
        let slug = slug_for_create(self.slugger.as_ref(), slug.as_deref(), title.as_str())?;
        let categories = self.resolve_categories(&category_ids).await?;
        let tags = self.resolve_tags(&tag_ids).await?;
        let now = self.clock.now();

        let id = self
            .articles
            .insert(NewArticle {
                title,
                content,
                slug,
                categories,
                tags,
                created_at: now,
                updated_at: now,
            })
            .await?;

        let created = self.articles.find_by_id(id).await?;
        tracing::info!(article_id = %created.id, slug = %created.slug, "article created");
        Ok(created.into())
    }
}
