// src/domain/category/hierarchy.rs
//! Walks over the category forest shared by every `CategoryRepository`
//! implementation.
use std::collections::{HashSet, VecDeque};

use crate::domain::category::{Category, CategoryId, CategoryRepository};
use crate::domain::errors::{DomainError, DomainResult};

pub const SELF_PARENT: &str = "A category cannot be its own parent";
pub const PARENT_IS_DESCENDANT: &str =
    "Cannot set a child category as the parent (would create a cycle)";
pub const PARENT_NOT_FOUND: &str = "Parent category not found";
pub const HAS_CHILDREN: &str =
    "Cannot delete a category with child categories. Move or delete children first.";

/// Returns `true` when `candidate` lies in the subtree below `root`.
///
/// Uses `root.children` when they were loaded and asks the repository for every
/// other level. Each node is expanded at most once.
pub async fn is_descendant<R>(
    repo: &R,
    root: &Category,
    candidate: CategoryId,
) -> DomainResult<bool>
where
    R: CategoryRepository + ?Sized,
{
    let mut visited = HashSet::from([root.id]);
    let mut pending: Vec<Category> = if root.children.is_empty() {
        repo.find_children(root.id).await?
    } else {
        root.children.clone()
    };

    while let Some(mut node) = pending.pop() {
        if node.id == candidate {
            return Ok(true);
        }
        if !visited.insert(node.id) {
            continue;
        }
        let children = if node.children.is_empty() {
            repo.find_children(node.id).await?
        } else {
            std::mem::take(&mut node.children)
        };
        pending.extend(children);
    }

    Ok(false)
}

/// Checks a proposed parent for `subject` (`None` while creating).
///
/// The parent must exist, must not be the subject itself and must not sit in
/// the subject's subtree.
pub async fn ensure_valid_parent<R>(
    repo: &R,
    subject: Option<&Category>,
    parent_id: Option<CategoryId>,
) -> DomainResult<()>
where
    R: CategoryRepository + ?Sized,
{
    let Some(parent_id) = parent_id else {
        return Ok(());
    };

    match repo.find_by_id(parent_id).await {
        Ok(_) => {}
        Err(err) if err.is_not_found() => {
            return Err(DomainError::invalid_field("parentId", PARENT_NOT_FOUND));
        }
        Err(err) => return Err(err),
    }

    let Some(subject) = subject else {
        return Ok(());
    };

    if subject.id == parent_id {
        tracing::warn!(category_id = %subject.id, "rejected self-parenting category");
        return Err(DomainError::invalid_field("parentId", SELF_PARENT));
    }

    if is_descendant(repo, subject, parent_id).await? {
        tracing::warn!(
            category_id = %subject.id,
            parent_id = %parent_id,
            "rejected category parent that would create a cycle"
        );
        return Err(DomainError::invalid_field("parentId", PARENT_IS_DESCENDANT));
    }

    Ok(())
}

/// Builds `[root, .., parent, self]` by following parent ids upward.
///
/// Entries are returned without children.
pub async fn ancestor_chain<R>(repo: &R, id: CategoryId) -> DomainResult<Vec<Category>>
where
    R: CategoryRepository + ?Sized,
{
    let mut current = repo.find_by_id(id).await?;
    let mut visited = HashSet::from([current.id]);
    let mut chain = VecDeque::new();

    loop {
        let parent_id = current.parent_id;
        current.children.clear();
        chain.push_front(current);

        let Some(parent_id) = parent_id else {
            break;
        };
        if !visited.insert(parent_id) {
            return Err(DomainError::internal("category hierarchy contains a cycle"));
        }
        current = repo.find_by_id(parent_id).await?;
    }

    Ok(chain.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::category::{CategoryName, CategoryQuery, CategoryUpdate, NewCategory};
    use crate::domain::errors::EntityKind;
    use crate::domain::slug::Slug;
    use async_trait::async_trait;
    use chrono::Utc;
    use std::collections::HashMap;

    /// Parent pointers only; enough for the walks above.
    struct Forest {
        parents: HashMap<i64, Option<i64>>,
    }

    impl Forest {
        fn new(edges: &[(i64, Option<i64>)]) -> Self {
            Self {
                parents: edges.iter().copied().collect(),
            }
        }

        fn node(&self, id: i64) -> Category {
            Category {
                id: CategoryId(id),
                name: CategoryName::new(format!("c{id}")).unwrap(),
                description: String::new(),
                slug: Slug::new(format!("c{id}")).unwrap(),
                parent_id: self.parents[&id].map(CategoryId),
                children: Vec::new(),
                created_at: Utc::now(),
                updated_at: Utc::now(),
            }
        }
    }

    #[async_trait]
    impl CategoryRepository for Forest {
        async fn find_by_id(&self, id: CategoryId) -> DomainResult<Category> {
            if !self.parents.contains_key(&id.0) {
                return Err(DomainError::NotFound(EntityKind::Category));
            }
            let mut node = self.node(id.0);
            node.children = self.find_children(id).await?;
            Ok(node)
        }

        async fn find_by_slug(&self, _slug: &Slug) -> DomainResult<Category> {
            unimplemented!()
        }

        async fn list(&self, _query: &CategoryQuery) -> DomainResult<(Vec<Category>, u64)> {
            unimplemented!()
        }

        async fn find_children(&self, parent_id: CategoryId) -> DomainResult<Vec<Category>> {
            let mut ids: Vec<i64> = self
                .parents
                .iter()
                .filter(|(_, parent)| **parent == Some(parent_id.0))
                .map(|(id, _)| *id)
                .collect();
            ids.sort_unstable();
            Ok(ids.into_iter().map(|id| self.node(id)).collect())
        }

        async fn hierarchy(&self, id: CategoryId) -> DomainResult<Vec<Category>> {
            ancestor_chain(self, id).await
        }

        async fn insert(&self, _category: NewCategory) -> DomainResult<CategoryId> {
            unimplemented!()
        }

        async fn update(&self, _update: CategoryUpdate) -> DomainResult<()> {
            unimplemented!()
        }

        async fn delete(&self, _id: CategoryId) -> DomainResult<()> {
            unimplemented!()
        }

        async fn count_by_slug(
            &self,
            _slug: &Slug,
            _exclude: Option<CategoryId>,
        ) -> DomainResult<u64> {
            unimplemented!()
        }
    }

    fn chain() -> Forest {
        // 1 <- 2 <- 3, plus an unrelated root 4
        Forest::new(&[(1, None), (2, Some(1)), (3, Some(2)), (4, None)])
    }

    #[tokio::test]
    async fn grandchild_is_a_descendant() {
        let forest = chain();
        let root = forest.find_by_id(CategoryId(1)).await.unwrap();
        assert!(is_descendant(&forest, &root, CategoryId(3)).await.unwrap());
        assert!(!is_descendant(&forest, &root, CategoryId(4)).await.unwrap());
    }

    #[tokio::test]
    async fn descendant_walk_terminates_on_stored_cycle() {
        let forest = Forest::new(&[(1, Some(2)), (2, Some(1))]);
        let root = forest.find_by_id(CategoryId(1)).await.unwrap();
        assert!(!is_descendant(&forest, &root, CategoryId(9)).await.unwrap());
    }

    #[tokio::test]
    async fn rejects_descendant_as_parent() {
        let forest = chain();
        let subject = forest.find_by_id(CategoryId(1)).await.unwrap();
        let err = ensure_valid_parent(&forest, Some(&subject), Some(CategoryId(3)))
            .await
            .unwrap_err();
        match err {
            DomainError::InvalidPayload(fields) => {
                assert_eq!(fields.get("parentId"), Some(PARENT_IS_DESCENDANT));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn rejects_self_and_missing_parent() {
        let forest = chain();
        let subject = forest.find_by_id(CategoryId(2)).await.unwrap();

        let err = ensure_valid_parent(&forest, Some(&subject), Some(CategoryId(2)))
            .await
            .unwrap_err();
        assert!(matches!(&err, DomainError::InvalidPayload(f) if f.get("parentId") == Some(SELF_PARENT)));

        let err = ensure_valid_parent(&forest, None, Some(CategoryId(99)))
            .await
            .unwrap_err();
        assert!(matches!(&err, DomainError::InvalidPayload(f) if f.get("parentId") == Some(PARENT_NOT_FOUND)));
    }

    #[tokio::test]
    async fn moving_under_a_sibling_subtree_is_allowed() {
        let forest = chain();
        let subject = forest.find_by_id(CategoryId(3)).await.unwrap();
        ensure_valid_parent(&forest, Some(&subject), Some(CategoryId(4)))
            .await
            .unwrap();
        ensure_valid_parent(&forest, Some(&subject), None)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn ancestor_chain_runs_root_first() {
        let forest = chain();
        let ids: Vec<i64> = ancestor_chain(&forest, CategoryId(3))
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.id.0)
            .collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn ancestor_chain_reports_missing_start() {
        let forest = chain();
        let err = ancestor_chain(&forest, CategoryId(42)).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound(EntityKind::Category)));
    }

    #[tokio::test]
    async fn ancestor_chain_detects_stored_cycle() {
        let forest = Forest::new(&[(1, Some(2)), (2, Some(1))]);
        let err = ancestor_chain(&forest, CategoryId(1)).await.unwrap_err();
        assert!(matches!(err, DomainError::Internal(_)));
    }
}
