// src/application/commands/articles/references.rs
//! Resolution of `categoryIds` / `tagIds` from request bodies.
//!
//! A reference that does not exist is a bad payload, not a missing resource,
//! so `NotFound` is recast as `InvalidPayload` here.
use std::collections::HashSet;

use super::ArticleCommandService;
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::{
        article::AssociationUpdate,
        category::{Category, CategoryId},
        errors::DomainError,
        tag::{Tag, TagId},
    },
};

fn unique(ids: &[i64]) -> Vec<i64> {
    let mut seen = HashSet::new();
    ids.iter().copied().filter(|id| seen.insert(*id)).collect()
}

fn masked(err: DomainError, field: &str, message: String) -> ApplicationError {
    if err.is_not_found() {
        ApplicationError::invalid_field(field, message)
    } else {
        err.into()
    }
}

impl ArticleCommandService {
    pub(super) async fn resolve_categories(&self, ids: &[i64]) -> ApplicationResult<Vec<Category>> {
        let mut resolved = Vec::with_capacity(ids.len());
        for raw in unique(ids) {
            let message = format!("Category {raw} does not exist");
            let id = CategoryId::new(raw)
                .map_err(|_| ApplicationError::invalid_field("categoryIds", message.clone()))?;
            let category = self
                .categories
                .find_by_id(id)
                .await
                .map_err(|err| masked(err, "categoryIds", message))?;
            resolved.push(category);
        }
        Ok(resolved)
    }

    pub(super) async fn resolve_tags(&self, ids: &[i64]) -> ApplicationResult<Vec<Tag>> {
        let mut resolved = Vec::with_capacity(ids.len());
        for raw in unique(ids) {
            let message = format!("Tag {raw} does not exist");
            let id = TagId::new(raw)
                .map_err(|_| ApplicationError::invalid_field("tagIds", message.clone()))?;
            let tag = self
                .tags
                .find_by_id(id)
                .await
                .map_err(|err| masked(err, "tagIds", message))?;
            resolved.push(tag);
        }
        Ok(resolved)
    }

    /// Non-empty ids replace the set; otherwise `clear` decides between clearing and keeping.
    pub(super) async fn category_update(
        &self,
        ids: &[i64],
        clear: bool,
    ) -> ApplicationResult<AssociationUpdate<Category>> {
        if !ids.is_empty() {
            return Ok(AssociationUpdate::Replace(self.resolve_categories(ids).await?));
        }
        Ok(if clear {
            AssociationUpdate::Replace(Vec::new())
        } else {
            AssociationUpdate::Keep
        })
    }

    pub(super) async fn tag_update(
        &self,
        ids: &[i64],
        clear: bool,
    ) -> ApplicationResult<AssociationUpdate<Tag>> {
        if !ids.is_empty() {
            return Ok(AssociationUpdate::Replace(self.resolve_tags(ids).await?));
        }
        Ok(if clear {
            AssociationUpdate::Replace(Vec::new())
        } else {
            AssociationUpdate::Keep
        })
    }
}
