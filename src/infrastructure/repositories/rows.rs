// src/infrastructure/repositories/rows.rs
use crate::domain::article::{Article, ArticleId, ArticleTitle};
use crate::domain::category::{Category, CategoryId, CategoryName};
use crate::domain::errors::DomainError;
use crate::domain::slug::Slug;
use crate::domain::tag::{Tag, TagId, TagName};
use chrono::{DateTime, Utc};
use sqlx::{FromRow, Postgres, QueryBuilder};

pub(super) const ARTICLE_COLUMNS: &str =
    "a.id, a.title, a.content, a.slug, a.published_at, a.created_at, a.updated_at";
pub(super) const CATEGORY_COLUMNS: &str =
    "c.id, c.name, c.description, c.slug, c.parent_id, c.created_at, c.updated_at";
pub(super) const TAG_COLUMNS: &str =
    "t.id, t.name, t.description, t.slug, t.created_at, t.updated_at";

#[derive(Debug, FromRow)]
pub(super) struct ArticleRow {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub slug: String,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ArticleRow {
    pub fn into_article(self, categories: Vec<Category>, tags: Vec<Tag>) -> Result<Article, DomainError> {
        Ok(Article {
            id: ArticleId::new(self.id)?,
            title: ArticleTitle::new(self.title)?,
            content: self.content,
            slug: Slug::new(self.slug)?,
            published_at: self.published_at,
            categories,
            tags,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

#[derive(Debug, FromRow)]
pub(super) struct CategoryRow {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub slug: String,
    pub parent_id: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<CategoryRow> for Category {
    type Error = DomainError;

    fn try_from(row: CategoryRow) -> Result<Self, Self::Error> {
        Ok(Category {
            id: CategoryId::new(row.id)?,
            name: CategoryName::new(row.name)?,
            description: row.description,
            slug: Slug::new(row.slug)?,
            parent_id: row.parent_id.map(CategoryId::new).transpose()?,
            children: Vec::new(),
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[derive(Debug, FromRow)]
pub(super) struct TagRow {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub slug: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<TagRow> for Tag {
    type Error = DomainError;

    fn try_from(row: TagRow) -> Result<Self, Self::Error> {
        Ok(Tag {
            id: TagId::new(row.id)?,
            name: TagName::new(row.name)?,
            description: row.description,
            slug: Slug::new(row.slug)?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

/// A category joined to one of the articles it labels.
#[derive(Debug, FromRow)]
pub(super) struct LinkedCategoryRow {
    pub article_id: i64,
    #[sqlx(flatten)]
    pub category: CategoryRow,
}

/// A tag joined to one of the articles it labels.
#[derive(Debug, FromRow)]
pub(super) struct LinkedTagRow {
    pub article_id: i64,
    #[sqlx(flatten)]
    pub tag: TagRow,
}

/// Escapes `LIKE` wildcards in user input and wraps it as a substring pattern.
pub(super) fn like_pattern(keyword: &str) -> String {
    let escaped = keyword
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{escaped}%")
}

/// Opens the next filter clause with `WHERE` or `AND`.
pub(super) fn push_condition(builder: &mut QueryBuilder<'_, Postgres>, has_where: &mut bool) {
    if *has_where {
        builder.push(" AND ");
    } else {
        builder.push(" WHERE ");
        *has_where = true;
    }
}
