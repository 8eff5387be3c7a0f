// src/infrastructure/repositories/postgres_article.rs
use std::collections::HashMap;

use super::map_sqlx;
use super::rows::{
    ARTICLE_COLUMNS, ArticleRow, CATEGORY_COLUMNS, LinkedCategoryRow, LinkedTagRow, TAG_COLUMNS,
    like_pattern, push_condition,
};
use crate::domain::article::{
    Article, ArticleId, ArticleQuery, ArticleRepository, ArticleUpdate, AssociationUpdate,
    NewArticle,
};
use crate::domain::category::Category;
use crate::domain::errors::{DomainError, DomainResult, EntityKind};
use crate::domain::slug::{SLUG_EXISTS, Slug};
use crate::domain::tag::Tag;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgExecutor, PgPool, Postgres, QueryBuilder, Transaction};

#[derive(Clone)]
pub struct PostgresArticleRepository {
    pool: PgPool,
}

impl PostgresArticleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl PostgresArticleRepository {
    fn apply_conditions(builder: &mut QueryBuilder<'_, Postgres>, query: &ArticleQuery) {
        let mut has_where = false;

        if let Some(keyword) = &query.keyword {
            let pattern = like_pattern(keyword);
            push_condition(builder, &mut has_where);
            builder.push("(a.title ILIKE ");
            builder.push_bind(pattern.clone());
            builder.push(" OR a.content ILIKE ");
            builder.push_bind(pattern);
            builder.push(")");
        }

        if let Some(category_id) = query.category_id {
            push_condition(builder, &mut has_where);
            builder.push(
                "EXISTS (SELECT 1 FROM article_categories ac \
                 WHERE ac.article_id = a.id AND ac.category_id = ",
            );
            builder.push_bind(i64::from(category_id));
            builder.push(")");
        }

        if let Some(tag_id) = query.tag_id {
            push_condition(builder, &mut has_where);
            builder.push(
                "EXISTS (SELECT 1 FROM article_tags at2 \
                 WHERE at2.article_id = a.id AND at2.tag_id = ",
            );
            builder.push_bind(i64::from(tag_id));
            builder.push(")");
        }

        match query.is_published {
            Some(true) => {
                push_condition(builder, &mut has_where);
                builder.push("a.published_at IS NOT NULL");
            }
            Some(false) => {
                push_condition(builder, &mut has_where);
                builder.push("a.published_at IS NULL");
            }
            None => {}
        }
    }

    /// Loads categories and tags for every row with one query per association.
    async fn hydrate(&self, rows: Vec<ArticleRow>) -> DomainResult<Vec<Article>> {
        if rows.is_empty() {
            return Ok(Vec::new());
        }
        let ids: Vec<i64> = rows.iter().map(|row| row.id).collect();

        let category_rows = sqlx::query_as::<_, LinkedCategoryRow>(&format!(
            "SELECT ac.article_id, {CATEGORY_COLUMNS}
             FROM article_categories ac
             JOIN categories c ON c.id = ac.category_id
             WHERE ac.article_id = ANY($1)
             ORDER BY c.name ASC, c.id ASC"
        ))
        .bind(&ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        let tag_rows = sqlx::query_as::<_, LinkedTagRow>(&format!(
            "SELECT at2.article_id, {TAG_COLUMNS}
             FROM article_tags at2
             JOIN tags t ON t.id = at2.tag_id
             WHERE at2.article_id = ANY($1)
             ORDER BY t.name ASC, t.id ASC"
        ))
        .bind(&ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        let mut categories: HashMap<i64, Vec<Category>> = HashMap::new();
        for linked in category_rows {
            categories
                .entry(linked.article_id)
                .or_default()
                .push(Category::try_from(linked.category)?);
        }

        let mut tags: HashMap<i64, Vec<Tag>> = HashMap::new();
        for linked in tag_rows {
            tags.entry(linked.article_id)
                .or_default()
                .push(Tag::try_from(linked.tag)?);
        }

        rows.into_iter()
            .map(|row| {
                let categories = categories.remove(&row.id).unwrap_or_default();
                let tags = tags.remove(&row.id).unwrap_or_default();
                row.into_article(categories, tags)
            })
            .collect()
    }

    async fn fetch_one_by(&self, column: &str, value: FetchKey<'_>) -> DomainResult<Article> {
        let sql = format!("SELECT {ARTICLE_COLUMNS} FROM articles a WHERE a.{column} = $1");
        let query = sqlx::query_as::<_, ArticleRow>(&sql);
        let query = match value {
            FetchKey::Id(id) => query.bind(id),
            FetchKey::Slug(slug) => query.bind(slug),
        };
        let row = query
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or(DomainError::NotFound(EntityKind::Article))?;

        self.hydrate(vec![row])
            .await?
            .pop()
            .ok_or(DomainError::NotFound(EntityKind::Article))
    }

    async fn ensure_slug_free(&self, slug: &Slug, exclude: Option<ArticleId>) -> DomainResult<()> {
        if self.count_by_slug(slug, exclude).await? > 0 {
            return Err(DomainError::invalid_field("slug", SLUG_EXISTS));
        }
        Ok(())
    }

    async fn write_scalars<'c, E>(executor: E, update: &ArticleUpdate) -> DomainResult<u64>
    where
        E: PgExecutor<'c>,
    {
        let result = sqlx::query(
            "UPDATE articles
             SET title = $1, content = $2, slug = $3, published_at = $4, updated_at = $5
             WHERE id = $6",
        )
        .bind(update.title.as_str())
        .bind(&update.content)
        .bind(update.slug.as_str())
        .bind(update.published_at)
        .bind(update.updated_at)
        .bind(i64::from(update.id))
        .execute(executor)
        .await
        .map_err(map_sqlx)?;

        Ok(result.rows_affected())
    }
}

enum FetchKey<'a> {
    Id(i64),
    Slug(&'a str),
}

async fn link_categories(
    tx: &mut Transaction<'_, Postgres>,
    article_id: i64,
    categories: &[Category],
) -> DomainResult<()> {
    if categories.is_empty() {
        return Ok(());
    }
    let ids: Vec<i64> = categories.iter().map(|c| i64::from(c.id)).collect();
    sqlx::query(
        "INSERT INTO article_categories (article_id, category_id)
         SELECT $1, UNNEST($2::BIGINT[])
         ON CONFLICT DO NOTHING",
    )
    .bind(article_id)
    .bind(&ids)
    .execute(&mut **tx)
    .await
    .map_err(map_sqlx)?;
    Ok(())
}

async fn link_tags(
    tx: &mut Transaction<'_, Postgres>,
    article_id: i64,
    tags: &[Tag],
) -> DomainResult<()> {
    if tags.is_empty() {
        return Ok(());
    }
    let ids: Vec<i64> = tags.iter().map(|t| i64::from(t.id)).collect();
    sqlx::query(
        "INSERT INTO article_tags (article_id, tag_id)
         SELECT $1, UNNEST($2::BIGINT[])
         ON CONFLICT DO NOTHING",
    )
    .bind(article_id)
    .bind(&ids)
    .execute(&mut **tx)
    .await
    .map_err(map_sqlx)?;
    Ok(())
}

#[async_trait]
impl ArticleRepository for PostgresArticleRepository {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Article> {
        self.fetch_one_by("id", FetchKey::Id(i64::from(id))).await
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Article> {
        self.fetch_one_by("slug", FetchKey::Slug(slug.as_str()))
            .await
    }

    async fn list(&self, query: &ArticleQuery) -> DomainResult<(Vec<Article>, u64)> {
        let mut count: QueryBuilder<Postgres> =
            QueryBuilder::new("SELECT COUNT(*) FROM articles a");
        Self::apply_conditions(&mut count, query);
        let total: i64 = count
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let mut select: QueryBuilder<Postgres> =
            QueryBuilder::new(format!("SELECT {ARTICLE_COLUMNS} FROM articles a"));
        Self::apply_conditions(&mut select, query);
        select.push(" ORDER BY a.created_at DESC, a.id DESC LIMIT ");
        select.push_bind(i64::from(query.page.limit()));
        select.push(" OFFSET ");
        select.push_bind(query.page.offset());

        let rows = select
            .build_query_as::<ArticleRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let articles = self.hydrate(rows).await?;
        Ok((articles, u64::try_from(total).unwrap_or_default()))
    }

    async fn insert(&self, article: NewArticle) -> DomainResult<ArticleId> {
        let NewArticle {
            title,
            content,
            slug,
            categories,
            tags,
            created_at,
            updated_at,
        } = article;

        self.ensure_slug_free(&slug, None).await?;

        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let id: i64 = sqlx::query_scalar(
            "INSERT INTO articles (title, content, slug, published_at, created_at, updated_at)
             VALUES ($1, $2, $3, NULL, $4, $5)
             RETURNING id",
        )
        .bind(title.as_str())
        .bind(&content)
        .bind(slug.as_str())
        .bind(created_at)
        .bind(updated_at)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_sqlx)?;

        link_categories(&mut tx, id, &categories).await?;
        link_tags(&mut tx, id, &tags).await?;

        tx.commit().await.map_err(map_sqlx)?;
        ArticleId::new(id)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<()> {
        let stored_slug: String = sqlx::query_scalar("SELECT slug FROM articles WHERE id = $1")
            .bind(i64::from(update.id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or(DomainError::NotFound(EntityKind::Article))?;

        if stored_slug != update.slug.as_str() {
            self.ensure_slug_free(&update.slug, Some(update.id)).await?;
        }

        if !update.touches_associations() {
            let affected = Self::write_scalars(&self.pool, &update).await?;
            if affected == 0 {
                return Err(DomainError::NotFound(EntityKind::Article));
            }
            return Ok(());
        }

        let article_id = i64::from(update.id);
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let affected = Self::write_scalars(&mut *tx, &update).await?;
        if affected == 0 {
            return Err(DomainError::NotFound(EntityKind::Article));
        }

        if let AssociationUpdate::Replace(categories) = &update.categories {
            sqlx::query("DELETE FROM article_categories WHERE article_id = $1")
                .bind(article_id)
                .execute(&mut *tx)
                .await
                .map_err(map_sqlx)?;
            link_categories(&mut tx, article_id, categories).await?;
        }

        if let AssociationUpdate::Replace(tags) = &update.tags {
            sqlx::query("DELETE FROM article_tags WHERE article_id = $1")
                .bind(article_id)
                .execute(&mut *tx)
                .await
                .map_err(map_sqlx)?;
            link_tags(&mut tx, article_id, tags).await?;
        }

        tx.commit().await.map_err(map_sqlx)
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        // association rows go with the article through ON DELETE CASCADE
        let result = sqlx::query("DELETE FROM articles WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound(EntityKind::Article));
        }
        Ok(())
    }

    async fn set_published_at(
        &self,
        id: ArticleId,
        published_at: Option<DateTime<Utc>>,
        updated_at: DateTime<Utc>,
    ) -> DomainResult<()> {
        let result =
            sqlx::query("UPDATE articles SET published_at = $1, updated_at = $2 WHERE id = $3")
                .bind(published_at)
                .bind(updated_at)
                .bind(i64::from(id))
                .execute(&self.pool)
                .await
                .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound(EntityKind::Article));
        }
        Ok(())
    }

    async fn count_by_slug(&self, slug: &Slug, exclude: Option<ArticleId>) -> DomainResult<u64> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM articles WHERE slug = $1 AND ($2::BIGINT IS NULL OR id <> $2)",
        )
        .bind(slug.as_str())
        .bind(exclude.map(i64::from))
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(u64::try_from(count).unwrap_or_default())
    }
}
