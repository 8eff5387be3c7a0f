use super::TagQueryService;
use crate::{
    application::{dto::TagDto, error::ApplicationResult},
    domain::{slug::Slug, tag::TagId},
};

pub struct GetTagByIdQuery {
    pub id: i64,
}

pub struct GetTagBySlugQuery {
    pub slug: String,
}

impl TagQueryService {
    pub async fn get_tag_by_id(&self, query: GetTagByIdQuery) -> ApplicationResult<TagDto> {
        let id = TagId::new(query.id)?;
        Ok(self.tags.find_by_id(id).await?.into())
    }

    pub async fn get_tag_by_slug(&self, query: GetTagBySlugQuery) -> ApplicationResult<TagDto> {
        let slug = Slug::new(query.slug)?;
        Ok(self.tags.find_by_slug(&slug).await?.into())
    }
}
