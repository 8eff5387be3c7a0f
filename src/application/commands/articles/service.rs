// src/application/commands/articles/service.rs
use std::sync::Arc;

use crate::{
    application::ports::{time::Clock, util::SlugGenerator},
    domain::{article::ArticleRepository, category::CategoryRepository, tag::TagRepository},
};

pub struct ArticleCommandService {
    pub(super) articles: Arc<dyn ArticleRepository>,
    pub(super) categories: Arc<dyn CategoryRepository>,
    pub(super) tags: Arc<dyn TagRepository>,
    pub(super) slugger: Arc<dyn SlugGenerator>,
    pub(super) clock: Arc<dyn Clock>,
}

impl ArticleCommandService {
    pub fn new(
        articles: Arc<dyn ArticleRepository>,
        categories: Arc<dyn CategoryRepository>,
        tags: Arc<dyn TagRepository>,
        slugger: Arc<dyn SlugGenerator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            articles,
            categories,
            tags,
            slugger,
            clock,
        }
    }
}
