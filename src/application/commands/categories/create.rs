// src/application/commands/categories/create.rs
use super::CategoryCommandService;
use crate::{
    application::{commands::slug::slug_for_create, dto::CategoryDto, error::ApplicationResult},
    domain::category::{CategoryName, NewCategory, parent_from_raw},
};

#[derive(Debug, Clone, Default)]
pub struct CreateCategoryCommand {
    pub name: String,
    pub description: String,
    pub slug: Option<String>,
    /// `None` or `0` creates a root.
    pub parent_id: Option<i64>,
}

impl CategoryCommandService {
    pub async fn create_category(
        &self,
        command: CreateCategoryCommand,
    ) -> ApplicationResult<CategoryDto> {
        let name = CategoryName::new(command.name)?;
        let slug = slug_for_create(self.slugger.as_ref(), command.slug.as_deref(), name.as_str())?;
        let parent_id = parent_from_raw(command.parent_id)?;
        let now = self.clock.now();

        let id = self
            .categories
            .insert(NewCategory {
                name,
                description: command.description,
                slug,
                parent_id,
                created_at: now,
                updated_at: now,
            })
            .await?;

        let created = self.categories.find_by_id(id).await?;
        tracing::info!(category_id = %created.id, slug = %created.slug, "category created");
        Ok(created.into())
    }
}
