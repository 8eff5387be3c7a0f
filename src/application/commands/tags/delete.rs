// src/application/commands/tags/delete.rs
use super::TagCommandService;
use crate::{application::error::ApplicationResult, domain::tag::TagId};

pub struct DeleteTagCommand {
    pub id: i64,
}

impl TagCommandService {
    pub async fn delete_tag(&self, command: DeleteTagCommand) -> ApplicationResult<()> {
        let id = TagId::new(command.id)?;
        self.tags.delete(id).await?;
        tracing::info!(tag_id = %id, "tag deleted");
        Ok(())
    }
}
