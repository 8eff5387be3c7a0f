// src/infrastructure/repositories/postgres_tag.rs
use super::map_sqlx;
use super::rows::{TAG_COLUMNS, TagRow, like_pattern, push_condition};
use crate::domain::article::ArticleId;
use crate::domain::errors::{DomainError, DomainResult, EntityKind};
use crate::domain::slug::{SLUG_EXISTS, Slug};
use crate::domain::tag::{
    NewTag, TAG_NAME_EXISTS, Tag, TagId, TagName, TagQuery, TagRepository, TagUpdate,
};
use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};

#[derive(Clone)]
pub struct PostgresTagRepository {
    pool: PgPool,
}

impl PostgresTagRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn apply_conditions(builder: &mut QueryBuilder<'_, Postgres>, query: &TagQuery) {
        let mut has_where = false;
        if let Some(keyword) = &query.keyword {
            let pattern = like_pattern(keyword);
            push_condition(builder, &mut has_where);
            builder.push("(t.name ILIKE ");
            builder.push_bind(pattern.clone());
            builder.push(" OR t.description ILIKE ");
            builder.push_bind(pattern);
            builder.push(")");
        }
    }

    async fn ensure_unique(
        &self,
        name: &TagName,
        slug: &Slug,
        exclude: Option<TagId>,
    ) -> DomainResult<()> {
        if self.count_by_slug(slug, exclude).await? > 0 {
            return Err(DomainError::invalid_field("slug", SLUG_EXISTS));
        }
        if self.count_by_name(name, exclude).await? > 0 {
            return Err(DomainError::invalid_field("name", TAG_NAME_EXISTS));
        }
        Ok(())
    }
}

#[async_trait]
impl TagRepository for PostgresTagRepository {
    async fn find_by_id(&self, id: TagId) -> DomainResult<Tag> {
        let row = sqlx::query_as::<_, TagRow>(&format!(
            "SELECT {TAG_COLUMNS} FROM tags t WHERE t.id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Tag::try_from)
            .transpose()?
            .ok_or(DomainError::NotFound(EntityKind::Tag))
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Tag> {
        let row = sqlx::query_as::<_, TagRow>(&format!(
            "SELECT {TAG_COLUMNS} FROM tags t WHERE t.slug = $1"
        ))
        .bind(slug.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Tag::try_from)
            .transpose()?
            .ok_or(DomainError::NotFound(EntityKind::Tag))
    }

    async fn list(&self, query: &TagQuery) -> DomainResult<(Vec<Tag>, u64)> {
        let mut count: QueryBuilder<Postgres> = QueryBuilder::new("SELECT COUNT(*) FROM tags t");
        Self::apply_conditions(&mut count, query);
        let total: i64 = count
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let mut select: QueryBuilder<Postgres> =
            QueryBuilder::new(format!("SELECT {TAG_COLUMNS} FROM tags t"));
        Self::apply_conditions(&mut select, query);
        select.push(" ORDER BY t.name ASC, t.id ASC LIMIT ");
        select.push_bind(i64::from(query.page.limit()));
        select.push(" OFFSET ");
        select.push_bind(query.page.offset());

        let tags = select
            .build_query_as::<TagRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?
            .into_iter()
            .map(Tag::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((tags, u64::try_from(total).unwrap_or_default()))
    }

    async fn find_by_article(&self, article_id: ArticleId) -> DomainResult<Vec<Tag>> {
        let rows = sqlx::query_as::<_, TagRow>(&format!(
            "SELECT {TAG_COLUMNS} FROM tags t
             JOIN article_tags l ON l.tag_id = t.id
             WHERE l.article_id = $1
             ORDER BY t.name ASC, t.id ASC"
        ))
        .bind(i64::from(article_id))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter()
            .map(Tag::try_from)
            .collect::<Result<Vec<_>, _>>()
    }

    async fn insert(&self, tag: NewTag) -> DomainResult<TagId> {
        let NewTag {
            name,
            description,
            slug,
            created_at,
            updated_at,
        } = tag;

        self.ensure_unique(&name, &slug, None).await?;

        let id: i64 = sqlx::query_scalar(
            "INSERT INTO tags (name, description, slug, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING id",
        )
        .bind(name.as_str())
        .bind(description)
        .bind(slug.as_str())
        .bind(created_at)
        .bind(updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        TagId::new(id)
    }

    async fn update(&self, update: TagUpdate) -> DomainResult<()> {
        let TagUpdate {
            id,
            name,
            description,
            slug,
            updated_at,
        } = update;

        let current = self.find_by_id(id).await?;
        if current.slug != slug && self.count_by_slug(&slug, Some(id)).await? > 0 {
            return Err(DomainError::invalid_field("slug", SLUG_EXISTS));
        }
        if current.name != name && self.count_by_name(&name, Some(id)).await? > 0 {
            return Err(DomainError::invalid_field("name", TAG_NAME_EXISTS));
        }

        let result = sqlx::query(
            "UPDATE tags SET name = $1, description = $2, slug = $3, updated_at = $4
             WHERE id = $5",
        )
        .bind(name.as_str())
        .bind(description)
        .bind(slug.as_str())
        .bind(updated_at)
        .bind(i64::from(id))
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound(EntityKind::Tag));
        }
        Ok(())
    }

    async fn delete(&self, id: TagId) -> DomainResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        sqlx::query("DELETE FROM article_tags WHERE tag_id = $1")
            .bind(i64::from(id))
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?;

        let result = sqlx::query("DELETE FROM tags WHERE id = $1")
            .bind(i64::from(id))
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound(EntityKind::Tag));
        }

        tx.commit().await.map_err(map_sqlx)
    }

    async fn count_by_slug(&self, slug: &Slug, exclude: Option<TagId>) -> DomainResult<u64> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM tags WHERE slug = $1 AND ($2::BIGINT IS NULL OR id <> $2)",
        )
        .bind(slug.as_str())
        .bind(exclude.map(i64::from))
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(u64::try_from(count).unwrap_or_default())
    }

    async fn count_by_name(&self, name: &TagName, exclude: Option<TagId>) -> DomainResult<u64> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM tags WHERE name = $1 AND ($2::BIGINT IS NULL OR id <> $2)",
        )
        .bind(name.as_str())
        .bind(exclude.map(i64::from))
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(u64::try_from(count).unwrap_or_default())
    }
}
