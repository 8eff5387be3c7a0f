use super::CategoryQueryService;
use crate::{
    application::{dto::CategoryDto, error::ApplicationResult},
    domain::{category::CategoryId, slug::Slug},
};

pub struct GetCategoryByIdQuery {
    pub id: i64,
}

pub struct GetCategoryBySlugQuery {
    pub slug: String,
}

impl CategoryQueryService {
    pub async fn get_category_by_id(
        &self,
        query: GetCategoryByIdQuery,
    ) -> ApplicationResult<CategoryDto> {
        let id = CategoryId::new(query.id)?;
        Ok(self.categories.find_by_id(id).await?.into())
    }

    pub async fn get_category_by_slug(
        &self,
        query: GetCategoryBySlugQuery,
    ) -> ApplicationResult<CategoryDto> {
        let slug = Slug::new(query.slug)?;
        Ok(self.categories.find_by_slug(&slug).await?.into())
    }
}
