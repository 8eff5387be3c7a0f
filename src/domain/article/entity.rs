// src/domain/article/entity.rs
use crate::domain::article::value_objects::{ArticleId, ArticleTitle};
use crate::domain::category::Category;
use crate::domain::slug::Slug;
use crate::domain::tag::Tag;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq)]
pub struct Article {
    pub id: ArticleId,
    pub title: ArticleTitle,
    /// HTML body.
    pub content: String,
    pub slug: Slug,
    pub published_at: Option<DateTime<Utc>>,
    pub categories: Vec<Category>,
    pub tags: Vec<Tag>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Article {
    pub fn is_published(&self) -> bool {
        self.published_at.is_some()
    }

    pub fn has_content(&self) -> bool {
        !self.content.trim().is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub title: ArticleTitle,
    pub content: String,
    pub slug: Slug,
    pub categories: Vec<Category>,
    pub tags: Vec<Tag>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// What an update does to one association set.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum AssociationUpdate<T> {
    /// Leave the stored rows alone.
    #[default]
    Keep,
    /// Replace the stored rows with exactly these entries; empty clears.
    Replace(Vec<T>),
}

impl<T> AssociationUpdate<T> {
    pub fn is_keep(&self) -> bool {
        matches!(self, Self::Keep)
    }
}

/// Full replacement of an article's scalar fields plus association changes.
#[derive(Debug, Clone)]
pub struct ArticleUpdate {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub content: String,
    pub slug: Slug,
    pub published_at: Option<DateTime<Utc>>,
    pub categories: AssociationUpdate<Category>,
    pub tags: AssociationUpdate<Tag>,
    pub updated_at: DateTime<Utc>,
}

impl ArticleUpdate {
    pub fn touches_associations(&self) -> bool {
        !self.categories.is_keep() || !self.tags.is_keep()
    }
}
