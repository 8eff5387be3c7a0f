// src/application/commands/tags/update.rs
use super::TagCommandService;
use crate::{
    application::{commands::slug::slug_for_update, dto::TagDto, error::ApplicationResult},
    domain::tag::{TagId, TagName, TagUpdate},
};

#[derive(Debug, Clone, Default)]
pub struct UpdateTagCommand {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub slug: Option<String>,
}

impl TagCommandService {
    pub async fn update_tag(&self, command: UpdateTagCommand) -> ApplicationResult<TagDto> {
        let id = TagId::new(command.id)?;
        let current = self.tags.find_by_id(id).await?;

        let name = TagName::new(command.name)?;
        let slug = slug_for_update(
            self.slugger.as_ref(),
            command.slug.as_deref(),
            name.as_str(),
            current.name.as_str(),
            &current.slug,
        )?;

        self.tags
            .update(TagUpdate {
                id,
                name,
                description: command.description,
                slug,
                updated_at: self.clock.now(),
            })
            .await?;

        let updated = self.tags.find_by_id(id).await?;
        tracing::info!(tag_id = %updated.id, slug = %updated.slug, "tag updated");
        Ok(updated.into())
    }
}
