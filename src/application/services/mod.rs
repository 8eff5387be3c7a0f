// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{
            articles::ArticleCommandService, categories::CategoryCommandService,
            tags::TagCommandService,
        },
        ports::{time::Clock, util::SlugGenerator},
        queries::{
            articles::ArticleQueryService, categories::CategoryQueryService,
            tags::TagQueryService,
        },
    },
    domain::{article::ArticleRepository, category::CategoryRepository, tag::TagRepository},
};

pub struct ApplicationServices {
    pub article_commands: Arc<ArticleCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
    pub category_commands: Arc<CategoryCommandService>,
    pub category_queries: Arc<CategoryQueryService>,
    pub tag_commands: Arc<TagCommandService>,
    pub tag_queries: Arc<TagQueryService>,
}

impl ApplicationServices {
    pub fn new(
        article_repo: Arc<dyn ArticleRepository>,
        category_repo: Arc<dyn CategoryRepository>,
        tag_repo: Arc<dyn TagRepository>,
        clock: Arc<dyn Clock>,
        slugger: Arc<dyn SlugGenerator>,
    ) -> Self {
        let article_commands = Arc::new(ArticleCommandService::new(
            Arc::clone(&article_repo),
            Arc::clone(&category_repo),
            Arc::clone(&tag_repo),
            Arc::clone(&slugger),
            Arc::clone(&clock),
        ));
        let article_queries = Arc::new(ArticleQueryService::new(Arc::clone(&article_repo)));

        let category_commands = Arc::new(CategoryCommandService::new(
            Arc::clone(&category_repo),
            Arc::clone(&slugger),
            Arc::clone(&clock),
        ));
        let category_queries = Arc::new(CategoryQueryService::new(Arc::clone(&category_repo)));

        let tag_commands = Arc::new(TagCommandService::new(
            Arc::clone(&tag_repo),
            Arc::clone(&slugger),
            Arc::clone(&clock),
        ));
        let tag_queries = Arc::new(TagQueryService::new(
            Arc::clone(&tag_repo),
            Arc::clone(&article_repo),
        ));

        Self {
            article_commands,
            article_queries,
            category_commands,
            category_queries,
            tag_commands,
            tag_queries,
        }
    }
}
