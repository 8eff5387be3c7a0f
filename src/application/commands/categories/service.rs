// src/application/commands/categories/service.rs
use std::sync::Arc;

use crate::{
    application::ports::{time::Clock, util::SlugGenerator},
    domain::category::CategoryRepository,
};

/// Category writes. Parent checks (existence, self-parenting, cycles) live in
/// the repository; this layer validates names and fills slugs.
pub struct CategoryCommandService {
    pub(super) categories: Arc<dyn CategoryRepository>,
    pub(super) slugger: Arc<dyn SlugGenerator>,
    pub(super) clock: Arc<dyn Clock>,
}

impl CategoryCommandService {
    pub fn new(
        categories: Arc<dyn CategoryRepository>,
        slugger: Arc<dyn SlugGenerator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            categories,
            slugger,
            clock,
        }
    }
}
