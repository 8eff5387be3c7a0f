use std::sync::Arc;

use crate::domain::{article::ArticleRepository, tag::TagRepository};

pub struct TagQueryService {
    pub(super) tags: Arc<dyn TagRepository>,
    pub(super) articles: Arc<dyn ArticleRepository>,
}

impl TagQueryService {
    pub fn new(tags: Arc<dyn TagRepository>, articles: Arc<dyn ArticleRepository>) -> Self {
        Self { tags, articles }
    }
}
