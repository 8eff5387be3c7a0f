// src/application/commands/categories/update.rs
use super::CategoryCommandService;
use crate::{
    application::{commands::slug::slug_for_update, dto::CategoryDto, error::ApplicationResult},
    domain::category::{CategoryId, CategoryName, CategoryUpdate, parent_from_raw},
};

#[derive(Debug, Clone, Default)]
pub struct UpdateCategoryCommand {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub slug: Option<String>,
    /// Copied as given; `None` or `0` moves the category to the roots.
    pub parent_id: Option<i64>,
}

impl CategoryCommandService {
    pub async fn update_category(
        &self,
        command: UpdateCategoryCommand,
    ) -> ApplicationResult<CategoryDto> {
        let id = CategoryId::new(command.id)?;
        let current = self.categories.find_by_id(id).await?;

        let name = CategoryName::new(command.name)?;
        let slug = slug_for_update(
            self.slugger.as_ref(),
            command.slug.as_deref(),
            name.as_str(),
            current.name.as_str(),
            &current.slug,
        )?;
        let parent_id = parent_from_raw(command.parent_id)?;

        self.categories
            .update(CategoryUpdate {
                id,
                name,
                description: command.description,
                slug,
                parent_id,
                updated_at: self.clock.now(),
            })
            .await?;

        let updated = self.categories.find_by_id(id).await?;
        tracing::info!(category_id = %updated.id, slug = %updated.slug, "category updated");
        Ok(updated.into())
    }
}
