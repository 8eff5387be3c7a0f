// src/domain/category/entity.rs
use crate::domain::category::value_objects::{CategoryId, CategoryName};
use crate::domain::slug::Slug;
use chrono::{DateTime, Utc};

/// A node of the category forest.
///
/// The parent is held by id only. `children` holds the direct children when the
/// repository loaded them and is otherwise empty; grandchildren are never nested.
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub id: CategoryId,
    pub name: CategoryName,
    pub description: String,
    pub slug: Slug,
    pub parent_id: Option<CategoryId>,
    pub children: Vec<Category>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Category {
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}

#[derive(Debug, Clone)]
pub struct NewCategory {
    pub name: CategoryName,
    pub description: String,
    pub slug: Slug,
    pub parent_id: Option<CategoryId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Full replacement of a category's scalar fields, `parent_id` included.
#[derive(Debug, Clone)]
pub struct CategoryUpdate {
    pub id: CategoryId,
    pub name: CategoryName,
    pub description: String,
    pub slug: Slug,
    pub parent_id: Option<CategoryId>,
    pub updated_at: DateTime<Utc>,
}
