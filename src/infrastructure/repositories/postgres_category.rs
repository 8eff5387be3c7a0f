// src/infrastructure/repositories/postgres_category.rs
use std::collections::HashMap;

use super::map_sqlx;
use super::rows::{CATEGORY_COLUMNS, CategoryRow, like_pattern, push_condition};
use crate::domain::category::hierarchy::{HAS_CHILDREN, ensure_valid_parent};
use crate::domain::category::{
    Category, CategoryId, CategoryQuery, CategoryRepository, CategoryUpdate, NewCategory,
    ParentFilter,
};
use crate::domain::errors::{DomainError, DomainResult, EntityKind};
use crate::domain::slug::{SLUG_EXISTS, Slug};
use async_trait::async_trait;
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

#[derive(Clone)]
pub struct PostgresCategoryRepository {
    pool: PgPool,
}

impl PostgresCategoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ChainRow {
    #[sqlx(flatten)]
    category: CategoryRow,
    is_cycle: bool,
}

impl PostgresCategoryRepository {
    fn apply_conditions(builder: &mut QueryBuilder<'_, Postgres>, query: &CategoryQuery) {
        let mut has_where = false;

        if let Some(keyword) = &query.keyword {
            let pattern = like_pattern(keyword);
            push_condition(builder, &mut has_where);
            builder.push("(c.name ILIKE ");
            builder.push_bind(pattern.clone());
            builder.push(" OR c.description ILIKE ");
            builder.push_bind(pattern);
            builder.push(")");
        }

        match query.parent {
            ParentFilter::Any => {}
            ParentFilter::RootsOnly => {
                push_condition(builder, &mut has_where);
                builder.push("c.parent_id IS NULL");
            }
            ParentFilter::ChildrenOf(parent_id) => {
                push_condition(builder, &mut has_where);
                builder.push("c.parent_id = ");
                builder.push_bind(i64::from(parent_id));
            }
        }
    }

    async fn fetch_row(&self, column: &str, value: Filter<'_>) -> DomainResult<Category> {
        let sql = format!("SELECT {CATEGORY_COLUMNS} FROM categories c WHERE c.{column} = $1");
        let query = sqlx::query_as::<_, CategoryRow>(&sql);
        let query = match value {
            Filter::Id(id) => query.bind(id),
            Filter::Slug(slug) => query.bind(slug),
        };
        let row = query
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or(DomainError::NotFound(EntityKind::Category))?;

        let mut category = Category::try_from(row)?;
        category.children = self.find_children(category.id).await?;
        Ok(category)
    }

    /// Attaches direct children to every entry with a single query.
    async fn attach_children(&self, categories: &mut [Category]) -> DomainResult<()> {
        if categories.is_empty() {
            return Ok(());
        }
        let ids: Vec<i64> = categories.iter().map(|c| i64::from(c.id)).collect();
        let rows = sqlx::query_as::<_, CategoryRow>(&format!(
            "SELECT {CATEGORY_COLUMNS} FROM categories c
             WHERE c.parent_id = ANY($1)
             ORDER BY c.name ASC, c.id ASC"
        ))
        .bind(&ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        let mut by_parent: HashMap<CategoryId, Vec<Category>> = HashMap::new();
        for row in rows {
            let child = Category::try_from(row)?;
            if let Some(parent_id) = child.parent_id {
                by_parent.entry(parent_id).or_default().push(child);
            }
        }
        for category in categories.iter_mut() {
            category.children = by_parent.remove(&category.id).unwrap_or_default();
        }
        Ok(())
    }

    async fn ensure_slug_free(&self, slug: &Slug, exclude: Option<CategoryId>) -> DomainResult<()> {
        if self.count_by_slug(slug, exclude).await? > 0 {
            return Err(DomainError::invalid_field("slug", SLUG_EXISTS));
        }
        Ok(())
    }
}

enum Filter<'a> {
    Id(i64),
    Slug(&'a str),
}

#[async_trait]
impl CategoryRepository for PostgresCategoryRepository {
    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Category> {
        self.fetch_row("id", Filter::Id(i64::from(id))).await
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Category> {
        self.fetch_row("slug", Filter::Slug(slug.as_str())).await
    }

    async fn list(&self, query: &CategoryQuery) -> DomainResult<(Vec<Category>, u64)> {
        let mut count: QueryBuilder<Postgres> =
            QueryBuilder::new("SELECT COUNT(*) FROM categories c");
        Self::apply_conditions(&mut count, query);
        let total: i64 = count
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let mut select: QueryBuilder<Postgres> =
            QueryBuilder::new(format!("SELECT {CATEGORY_COLUMNS} FROM categories c"));
        Self::apply_conditions(&mut select, query);
        select.push(" ORDER BY c.name ASC, c.id ASC LIMIT ");
        select.push_bind(i64::from(query.page.limit()));
        select.push(" OFFSET ");
        select.push_bind(query.page.offset());

        let rows = select
            .build_query_as::<CategoryRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let mut categories = rows
            .into_iter()
            .map(Category::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        self.attach_children(&mut categories).await?;

        Ok((categories, u64::try_from(total).unwrap_or_default()))
    }

    async fn find_children(&self, parent_id: CategoryId) -> DomainResult<Vec<Category>> {
        let rows = sqlx::query_as::<_, CategoryRow>(&format!(
            "SELECT {CATEGORY_COLUMNS} FROM categories c
             WHERE c.parent_id = $1
             ORDER BY c.name ASC, c.id ASC"
        ))
        .bind(i64::from(parent_id))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter()
            .map(Category::try_from)
            .collect::<Result<Vec<_>, _>>()
    }

    async fn hierarchy(&self, id: CategoryId) -> DomainResult<Vec<Category>> {
        let rows = sqlx::query_as::<_, ChainRow>(
            r#"
            WITH RECURSIVE chain AS (
                SELECT c.id, c.name, c.description, c.slug, c.parent_id,
                       c.created_at, c.updated_at,
                       0 AS depth, ARRAY[c.id] AS path, FALSE AS is_cycle
                FROM categories c
                WHERE c.id = $1
              UNION ALL
                SELECT p.id, p.name, p.description, p.slug, p.parent_id,
                       p.created_at, p.updated_at,
                       chain.depth + 1, chain.path || p.id, p.id = ANY(chain.path)
                FROM categories p
                JOIN chain ON p.id = chain.parent_id
                WHERE NOT chain.is_cycle
            )
            SELECT id, name, description, slug, parent_id, created_at, updated_at, is_cycle
            FROM chain
            ORDER BY depth DESC
            "#,
        )
        .bind(i64::from(id))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        if rows.is_empty() {
            return Err(DomainError::NotFound(EntityKind::Category));
        }
        if rows.iter().any(|row| row.is_cycle) {
            tracing::error!(category_id = %id, "stored category hierarchy contains a cycle");
            return Err(DomainError::internal("category hierarchy contains a cycle"));
        }

        rows.into_iter()
            .map(|row| Category::try_from(row.category))
            .collect::<Result<Vec<_>, _>>()
    }

    async fn insert(&self, category: NewCategory) -> DomainResult<CategoryId> {
        let NewCategory {
            name,
            description,
            slug,
            parent_id,
            created_at,
            updated_at,
        } = category;

        self.ensure_slug_free(&slug, None).await?;
        ensure_valid_parent(self, None, parent_id).await?;

        let id: i64 = sqlx::query_scalar(
            "INSERT INTO categories (name, description, slug, parent_id, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING id",
        )
        .bind(name.as_str())
        .bind(description)
        .bind(slug.as_str())
        .bind(parent_id.map(i64::from))
        .bind(created_at)
        .bind(updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        CategoryId::new(id)
    }

    async fn update(&self, update: CategoryUpdate) -> DomainResult<()> {
        let CategoryUpdate {
            id,
            name,
            description,
            slug,
            parent_id,
            updated_at,
        } = update;

        let current = self.find_by_id(id).await?;
        if current.slug != slug {
            self.ensure_slug_free(&slug, Some(id)).await?;
        }
        ensure_valid_parent(self, Some(&current), parent_id).await?;

        let result = sqlx::query(
            "UPDATE categories
             SET name = $1, description = $2, slug = $3, parent_id = $4, updated_at = $5
             WHERE id = $6",
        )
        .bind(name.as_str())
        .bind(description)
        .bind(slug.as_str())
        .bind(parent_id.map(i64::from))
        .bind(updated_at)
        .bind(i64::from(id))
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound(EntityKind::Category));
        }
        Ok(())
    }

    async fn delete(&self, id: CategoryId) -> DomainResult<()> {
        let has_children: bool =
            sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM categories WHERE parent_id = $1)")
                .bind(i64::from(id))
                .fetch_one(&self.pool)
                .await
                .map_err(map_sqlx)?;
        if has_children {
            tracing::warn!(category_id = %id, "refused to delete category with children");
            return Err(DomainError::bad_request(HAS_CHILDREN));
        }

        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        sqlx::query("DELETE FROM article_categories WHERE category_id = $1")
            .bind(i64::from(id))
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?;

        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(i64::from(id))
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound(EntityKind::Category));
        }

        tx.commit().await.map_err(map_sqlx)
    }

    async fn count_by_slug(&self, slug: &Slug, exclude: Option<CategoryId>) -> DomainResult<u64> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM categories WHERE slug = $1 AND ($2::BIGINT IS NULL OR id <> $2)",
        )
        .bind(slug.as_str())
        .bind(exclude.map(i64::from))
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(u64::try_from(count).unwrap_or_default())
    }
}
