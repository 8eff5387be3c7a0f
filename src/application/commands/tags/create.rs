// src/application/commands/tags/create.rs
use super::TagCommandService;
use crate::{
    application::{commands::slug::slug_for_create, dto::TagDto, error::ApplicationResult},
    domain::tag::{NewTag, TagName},
};

#[derive(Debug, Clone, Default)]
pub struct CreateTagCommand {
    pub name: String,
    pub description: String,
    pub slug: Option<String>,
}

impl TagCommandService {
    pub async fn create_tag(&self, command: CreateTagCommand) -> ApplicationResult<TagDto> {
        let name = TagName::new(command.name)?;
        let slug = slug_for_create(self.slugger.as_ref(), command.slug.as_deref(), name.as_str())?;
        let now = self.clock.now();

        let id = self
            .tags
            .insert(NewTag {
                name,
                description: command.description,
                slug,
                created_at: now,
                updated_at: now,
            })
            .await?;

        let created = self.tags.find_by_id(id).await?;
        tracing::info!(tag_id = %created.id, slug = %created.slug, "tag created");
        Ok(created.into())
    }
}
