// src/domain/tag/entity.rs
use crate::domain::slug::Slug;
use crate::domain::tag::value_objects::{TagId, TagName};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq)]
pub struct Tag {
    pub id: TagId,
    pub name: TagName,
    pub description: String,
    pub slug: Slug,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewTag {
    pub name: TagName,
    pub description: String,
    pub slug: Slug,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Full replacement of a tag's scalar fields.
#[derive(Debug, Clone)]
pub struct TagUpdate {
    pub id: TagId,
    pub name: TagName,
    pub description: String,
    pub slug: Slug,
    pub updated_at: DateTime<Utc>,
}
