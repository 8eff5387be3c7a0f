use crate::domain::category::hierarchy::{PARENT_NOT_FOUND, SELF_PARENT};
use crate::domain::errors::DomainError;
use crate::domain::slug::SLUG_EXISTS;
use crate::domain::tag::TAG_NAME_EXISTS;

const CNT_ARTICLE_SLUG: &str = "articles_slug_key";
const CNT_CATEGORY_SLUG: &str = "categories_slug_key";
const CNT_TAG_SLUG: &str = "tags_slug_key";
const CNT_TAG_NAME: &str = "tags_name_key";
const CNT_CATEGORY_PARENT: &str = "categories_parent_id_fkey";
const CNT_CATEGORY_OWN_PARENT: &str = "categories_not_own_parent_chk";
const CNT_ARTICLE_CATEGORY: &str = "article_categories_category_id_fkey";
const CNT_ARTICLE_TAG: &str = "article_tags_tag_id_fkey";

/// Translates sqlx failures into the domain taxonomy.
///
/// Constraint violations that a concurrent writer can provoke after the
/// application level checks passed are reported as payload errors.
pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_ARTICLE_SLUG | CNT_CATEGORY_SLUG | CNT_TAG_SLUG => {
                        DomainError::invalid_field("slug", SLUG_EXISTS)
                    }
                    CNT_TAG_NAME => DomainError::invalid_field("name", TAG_NAME_EXISTS),
                    CNT_CATEGORY_PARENT => DomainError::invalid_field("parentId", PARENT_NOT_FOUND),
                    CNT_CATEGORY_OWN_PARENT => DomainError::invalid_field("parentId", SELF_PARENT),
                    CNT_ARTICLE_CATEGORY => {
                        DomainError::invalid_field("categoryIds", "Category does not exist")
                    }
                    CNT_ARTICLE_TAG => DomainError::invalid_field("tagIds", "Tag does not exist"),
                    other => {
                        tracing::error!(constraint = other, "unexpected constraint violation");
                        DomainError::internal(format!("database constraint violation: {other}"))
                    }
                };
            }

            DomainError::internal(db_err.message().to_string())
        }
        _ => DomainError::internal(err.to_string()),
    }
}
