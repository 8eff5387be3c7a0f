use std::sync::Arc;

use crate::domain::category::CategoryRepository;

pub struct CategoryQueryService {
    pub(super) categories: Arc<dyn CategoryRepository>,
}

impl CategoryQueryService {
    pub fn new(categories: Arc<dyn CategoryRepository>) -> Self {
        Self { categories }
    }
}
