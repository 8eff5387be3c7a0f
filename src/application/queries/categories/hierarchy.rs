use super::CategoryQueryService;
use crate::{
    application::{dto::CategoryDto, error::ApplicationResult},
    domain::category::CategoryId,
};

impl CategoryQueryService {
    /// Direct children ordered by name.
    pub async fn list_children(&self, parent_id: i64) -> ApplicationResult<Vec<CategoryDto>> {
        let parent_id = CategoryId::new(parent_id)?;
        let children = self.categories.find_children(parent_id).await?;
        Ok(children.into_iter().map(Into::into).collect())
    }

    /// Ancestor chain `[root, .., self]`.
    pub async fn hierarchy(&self, id: i64) -> ApplicationResult<Vec<CategoryDto>> {
        let id = CategoryId::new(id)?;
        let chain = self.categories.hierarchy(id).await?;
        Ok(chain.into_iter().map(Into::into).collect())
    }
}
