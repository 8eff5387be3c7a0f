// src/application/commands/tags/service.rs
use std::sync::Arc;

use crate::{
    application::ports::{time::Clock, util::SlugGenerator},
    domain::tag::TagRepository,
};

pub struct TagCommandService {
    pub(super) tags: Arc<dyn TagRepository>,
    pub(super) slugger: Arc<dyn SlugGenerator>,
    pub(super) clock: Arc<dyn Clock>,
}

impl TagCommandService {
    pub fn new(
        tags: Arc<dyn TagRepository>,
        slugger: Arc<dyn SlugGenerator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            tags,
            slugger,
            clock,
        }
    }
}
