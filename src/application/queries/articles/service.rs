use std::sync::Arc;

use crate::domain::article::ArticleRepository;

pub struct ArticleQueryService {
    pub(super) articles: Arc<dyn ArticleRepository>,
}

impl ArticleQueryService {
    pub fn new(articles: Arc<dyn ArticleRepository>) -> Self {
        Self { articles }
    }
}
