// tests/support/mocks/store.rs
//! One shared in-memory database behind the three repository traits.
//!
//! Association rows live on the stored article as id lists, mirroring the two
//! join tables. Category and tag deletes strip their ids from every article.
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use quillpress::domain::article::{
    Article, ArticleId, ArticleQuery, ArticleRepository, ArticleTitle, ArticleUpdate,
    AssociationUpdate, NewArticle,
};
use quillpress::domain::category::hierarchy::{HAS_CHILDREN, ancestor_chain, ensure_valid_parent};
use quillpress::domain::category::{
    Category, CategoryId, CategoryQuery, CategoryRepository, CategoryUpdate, NewCategory,
    ParentFilter,
};
use quillpress::domain::errors::{DomainError, DomainResult, EntityKind};
use quillpress::domain::pagination::PageRequest;
use quillpress::domain::slug::{SLUG_EXISTS, Slug};
use quillpress::domain::tag::{
    NewTag, TAG_NAME_EXISTS, Tag, TagId, TagName, TagQuery, TagRepository, TagUpdate,
};

#[derive(Debug, Clone)]
struct StoredArticle {
    id: i64,
    title: ArticleTitle,
    content: String,
    slug: Slug,
    published_at: Option<DateTime<Utc>>,
    category_ids: Vec<i64>,
    tag_ids: Vec<i64>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

#[derive(Default)]
struct State {
    last_article_id: i64,
    last_category_id: i64,
    last_tag_id: i64,
    articles: BTreeMap<i64, StoredArticle>,
    categories: BTreeMap<i64, Category>,
    tags: BTreeMap<i64, Tag>,
}

impl State {
    fn hydrate(&self, stored: &StoredArticle) -> Article {
        let mut categories: Vec<Category> = stored
            .category_ids
            .iter()
            .filter_map(|id| self.categories.get(id).cloned())
            .collect();
        categories.sort_by(|a, b| (a.name.as_str(), a.id).cmp(&(b.name.as_str(), b.id)));

        let mut tags: Vec<Tag> = stored
            .tag_ids
            .iter()
            .filter_map(|id| self.tags.get(id).cloned())
            .collect();
        tags.sort_by(|a, b| (a.name.as_str(), a.id).cmp(&(b.name.as_str(), b.id)));

        Article {
            id: ArticleId(stored.id),
            title: stored.title.clone(),
            content: stored.content.clone(),
            slug: stored.slug.clone(),
            published_at: stored.published_at,
            categories,
            tags,
            created_at: stored.created_at,
            updated_at: stored.updated_at,
        }
    }

    fn children_of(&self, parent: i64) -> Vec<Category> {
        let mut children: Vec<Category> = self
            .categories
            .values()
            .filter(|c| c.parent_id == Some(CategoryId(parent)))
            .cloned()
            .collect();
        children.sort_by(|a, b| (a.name.as_str(), a.id).cmp(&(b.name.as_str(), b.id)));
        children
    }

    fn with_children(&self, category: &Category) -> Category {
        let mut category = category.clone();
        category.children = self.children_of(category.id.0);
        category
    }

    fn check_references(&self, categories: &[Category], tags: &[Tag]) -> DomainResult<()> {
        if let Some(missing) = categories
            .iter()
            .find(|c| !self.categories.contains_key(&c.id.0))
        {
            return Err(DomainError::invalid_field(
                "categoryIds",
                format!("Category {} does not exist", missing.id),
            ));
        }
        if let Some(missing) = tags.iter().find(|t| !self.tags.contains_key(&t.id.0)) {
            return Err(DomainError::invalid_field(
                "tagIds",
                format!("Tag {} does not exist", missing.id),
            ));
        }
        Ok(())
    }
}

fn matches_keyword(keyword: &Option<String>, fields: [&str; 2]) -> bool {
    match keyword {
        None => true,
        Some(keyword) => {
            let needle = keyword.to_lowercase();
            fields
                .iter()
                .any(|field| field.to_lowercase().contains(&needle))
        }
    }
}

fn page_of<T>(items: Vec<T>, page: &PageRequest) -> (Vec<T>, u64) {
    let total = items.len() as u64;
    let offset = usize::try_from(page.offset()).unwrap_or(usize::MAX);
    let limit = page.limit() as usize;
    (items.into_iter().skip(offset).take(limit).collect(), total)
}

fn unique_ids<T>(items: &[T], id: impl Fn(&T) -> i64) -> Vec<i64> {
    let mut ids: Vec<i64> = Vec::new();
    for item in items {
        let id = id(item);
        if !ids.contains(&id) {
            ids.push(id);
        }
    }
    ids
}

#[derive(Clone, Default)]
pub struct InMemoryStore {
    state: Arc<Mutex<State>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().expect("store mutex poisoned")
    }

    pub fn articles(&self) -> Arc<InMemoryArticles> {
        Arc::new(InMemoryArticles(self.clone()))
    }

    pub fn categories(&self) -> Arc<InMemoryCategories> {
        Arc::new(InMemoryCategories(self.clone()))
    }

    pub fn tags(&self) -> Arc<InMemoryTags> {
        Arc::new(InMemoryTags(self.clone()))
    }

    /// `(article_id, category_id)` rows.
    pub fn article_category_rows(&self) -> Vec<(i64, i64)> {
        let state = self.lock();
        state
            .articles
            .values()
            .flat_map(|a| a.category_ids.iter().map(move |c| (a.id, *c)))
            .collect()
    }

    /// `(article_id, tag_id)` rows.
    pub fn article_tag_rows(&self) -> Vec<(i64, i64)> {
        let state = self.lock();
        state
            .articles
            .values()
            .flat_map(|a| a.tag_ids.iter().map(move |t| (a.id, *t)))
            .collect()
    }

    /// Rewrites a parent pointer with no checks, to simulate corrupted data.
    pub fn force_parent(&self, id: i64, parent: Option<i64>) {
        let mut state = self.lock();
        if let Some(category) = state.categories.get_mut(&id) {
            category.parent_id = parent.map(CategoryId);
        }
    }
}

pub struct InMemoryArticles(InMemoryStore);
pub struct InMemoryCategories(InMemoryStore);
pub struct InMemoryTags(InMemoryStore);

#[async_trait]
impl ArticleRepository for InMemoryArticles {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Article> {
        let state = self.0.lock();
        state
            .articles
            .get(&id.0)
            .map(|stored| state.hydrate(stored))
            .ok_or(DomainError::NotFound(EntityKind::Article))
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Article> {
        let state = self.0.lock();
        state
            .articles
            .values()
            .find(|a| &a.slug == slug)
            .map(|stored| state.hydrate(stored))
            .ok_or(DomainError::NotFound(EntityKind::Article))
    }

    async fn list(&self, query: &ArticleQuery) -> DomainResult<(Vec<Article>, u64)> {
        let state = self.0.lock();
        let mut matching: Vec<&StoredArticle> = state
            .articles
            .values()
            .filter(|a| matches_keyword(&query.keyword, [a.title.as_str(), a.content.as_str()]))
            .filter(|a| {
                query
                    .category_id
                    .is_none_or(|c| a.category_ids.contains(&c.0))
            })
            .filter(|a| query.tag_id.is_none_or(|t| a.tag_ids.contains(&t.0)))
            .filter(|a| {
                query
                    .is_published
                    .is_none_or(|published| a.published_at.is_some() == published)
            })
            .collect();
        matching.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));

        let hydrated = matching.into_iter().map(|a| state.hydrate(a)).collect();
        Ok(page_of(hydrated, &query.page))
    }

    async fn insert(&self, article: NewArticle) -> DomainResult<ArticleId> {
        let mut state = self.0.lock();
        if state.articles.values().any(|a| a.slug == article.slug) {
            return Err(DomainError::invalid_field("slug", SLUG_EXISTS));
        }
        state.check_references(&article.categories, &article.tags)?;

        state.last_article_id += 1;
        let id = state.last_article_id;
        state.articles.insert(
            id,
            StoredArticle {
                id,
                title: article.title,
                content: article.content,
                slug: article.slug,
                published_at: None,
                category_ids: unique_ids(&article.categories, |c| c.id.0),
                tag_ids: unique_ids(&article.tags, |t| t.id.0),
                created_at: article.created_at,
                updated_at: article.updated_at,
            },
        );
        Ok(ArticleId(id))
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<()> {
        let mut state = self.0.lock();
        if !state.articles.contains_key(&update.id.0) {
            return Err(DomainError::NotFound(EntityKind::Article));
        }
        if state
            .articles
            .values()
            .any(|a| a.id != update.id.0 && a.slug == update.slug)
        {
            return Err(DomainError::invalid_field("slug", SLUG_EXISTS));
        }
        let (new_categories, new_tags) = match (&update.categories, &update.tags) {
            (AssociationUpdate::Replace(c), AssociationUpdate::Replace(t)) => {
                (Some(c.as_slice()), Some(t.as_slice()))
            }
            (AssociationUpdate::Replace(c), AssociationUpdate::Keep) => (Some(c.as_slice()), None),
            (AssociationUpdate::Keep, AssociationUpdate::Replace(t)) => (None, Some(t.as_slice())),
            (AssociationUpdate::Keep, AssociationUpdate::Keep) => (None, None),
        };
        state.check_references(new_categories.unwrap_or(&[]), new_tags.unwrap_or(&[]))?;

        let category_ids = new_categories.map(|c| unique_ids(c, |c| c.id.0));
        let tag_ids = new_tags.map(|t| unique_ids(t, |t| t.id.0));

        let stored = state
            .articles
            .get_mut(&update.id.0)
            .ok_or(DomainError::NotFound(EntityKind::Article))?;
        stored.title = update.title;
        stored.content = update.content;
        stored.slug = update.slug;
        stored.published_at = update.published_at;
        stored.updated_at = update.updated_at;
        if let Some(ids) = category_ids {
            stored.category_ids = ids;
        }
        if let Some(ids) = tag_ids {
            stored.tag_ids = ids;
        }
        Ok(())
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        self.0
            .lock()
            .articles
            .remove(&id.0)
            .map(|_| ())
            .ok_or(DomainError::NotFound(EntityKind::Article))
    }

    async fn set_published_at(
        &self,
        id: ArticleId,
        published_at: Option<DateTime<Utc>>,
        updated_at: DateTime<Utc>,
    ) -> DomainResult<()> {
        let mut state = self.0.lock();
        let stored = state
            .articles
            .get_mut(&id.0)
            .ok_or(DomainError::NotFound(EntityKind::Article))?;
        stored.published_at = published_at;
        stored.updated_at = updated_at;
        Ok(())
    }

    async fn count_by_slug(&self, slug: &Slug, exclude: Option<ArticleId>) -> DomainResult<u64> {
        let state = self.0.lock();
        Ok(state
            .articles
            .values()
            .filter(|a| &a.slug == slug && Some(ArticleId(a.id)) != exclude)
            .count() as u64)
    }
}

#[async_trait]
impl CategoryRepository for InMemoryCategories {
    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Category> {
        let state = self.0.lock();
        state
            .categories
            .get(&id.0)
            .map(|c| state.with_children(c))
            .ok_or(DomainError::NotFound(EntityKind::Category))
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Category> {
        let state = self.0.lock();
        state
            .categories
            .values()
            .find(|c| &c.slug == slug)
            .map(|c| state.with_children(c))
            .ok_or(DomainError::NotFound(EntityKind::Category))
    }

    async fn list(&self, query: &CategoryQuery) -> DomainResult<(Vec<Category>, u64)> {
        let state = self.0.lock();
        let mut matching: Vec<&Category> = state
            .categories
            .values()
            .filter(|c| matches_keyword(&query.keyword, [c.name.as_str(), c.description.as_str()]))
            .filter(|c| match query.parent {
                ParentFilter::Any => true,
                ParentFilter::RootsOnly => c.parent_id.is_none(),
                ParentFilter::ChildrenOf(parent) => c.parent_id == Some(parent),
            })
            .collect();
        matching.sort_by(|a, b| (a.name.as_str(), a.id).cmp(&(b.name.as_str(), b.id)));

        let loaded = matching.into_iter().map(|c| state.with_children(c)).collect();
        Ok(page_of(loaded, &query.page))
    }

    async fn find_children(&self, parent_id: CategoryId) -> DomainResult<Vec<Category>> {
        Ok(self.0.lock().children_of(parent_id.0))
    }

    async fn hierarchy(&self, id: CategoryId) -> DomainResult<Vec<Category>> {
        ancestor_chain(self, id).await
    }

    async fn insert(&self, category: NewCategory) -> DomainResult<CategoryId> {
        if self.count_by_slug(&category.slug, None).await? > 0 {
            return Err(DomainError::invalid_field("slug", SLUG_EXISTS));
        }
        ensure_valid_parent(self, None, category.parent_id).await?;

        let mut state = self.0.lock();
        state.last_category_id += 1;
        let id = state.last_category_id;
        state.categories.insert(
            id,
            Category {
                id: CategoryId(id),
                name: category.name,
                description: category.description,
                slug: category.slug,
                parent_id: category.parent_id,
                children: Vec::new(),
                created_at: category.created_at,
                updated_at: category.updated_at,
            },
        );
        Ok(CategoryId(id))
    }

    async fn update(&self, update: CategoryUpdate) -> DomainResult<()> {
        let current = self.find_by_id(update.id).await?;
        if current.slug != update.slug && self.count_by_slug(&update.slug, Some(update.id)).await? > 0
        {
            return Err(DomainError::invalid_field("slug", SLUG_EXISTS));
        }
        ensure_valid_parent(self, Some(&current), update.parent_id).await?;

        let mut state = self.0.lock();
        let stored = state
            .categories
            .get_mut(&update.id.0)
            .ok_or(DomainError::NotFound(EntityKind::Category))?;
        stored.name = update.name;
        stored.description = update.description;
        stored.slug = update.slug;
        stored.parent_id = update.parent_id;
        stored.updated_at = update.updated_at;
        Ok(())
    }

    async fn delete(&self, id: CategoryId) -> DomainResult<()> {
        let mut state = self.0.lock();
        if state
            .categories
            .values()
            .any(|c| c.parent_id == Some(id))
        {
            return Err(DomainError::bad_request(HAS_CHILDREN));
        }
        if state.categories.remove(&id.0).is_none() {
            return Err(DomainError::NotFound(EntityKind::Category));
        }
        for article in state.articles.values_mut() {
            article.category_ids.retain(|c| *c != id.0);
        }
        Ok(())
    }

    async fn count_by_slug(&self, slug: &Slug, exclude: Option<CategoryId>) -> DomainResult<u64> {
        let state = self.0.lock();
        Ok(state
            .categories
            .values()
            .filter(|c| &c.slug == slug && Some(c.id) != exclude)
            .count() as u64)
    }
}

#[async_trait]
impl TagRepository for InMemoryTags {
    async fn find_by_id(&self, id: TagId) -> DomainResult<Tag> {
        self.0
            .lock()
            .tags
            .get(&id.0)
            .cloned()
            .ok_or(DomainError::NotFound(EntityKind::Tag))
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Tag> {
        self.0
            .lock()
            .tags
            .values()
            .find(|t| &t.slug == slug)
            .cloned()
            .ok_or(DomainError::NotFound(EntityKind::Tag))
    }

    async fn list(&self, query: &TagQuery) -> DomainResult<(Vec<Tag>, u64)> {
        let state = self.0.lock();
        let mut matching: Vec<Tag> = state
            .tags
            .values()
            .filter(|t| matches_keyword(&query.keyword, [t.name.as_str(), t.description.as_str()]))
            .cloned()
            .collect();
        matching.sort_by(|a, b| (a.name.as_str(), a.id).cmp(&(b.name.as_str(), b.id)));
        Ok(page_of(matching, &query.page))
    }

    async fn find_by_article(&self, article_id: ArticleId) -> DomainResult<Vec<Tag>> {
        let state = self.0.lock();
        Ok(state
            .articles
            .get(&article_id.0)
            .map(|a| state.hydrate(a).tags)
            .unwrap_or_default())
    }

    async fn insert(&self, tag: NewTag) -> DomainResult<TagId> {
        if self.count_by_slug(&tag.slug, None).await? > 0 {
            return Err(DomainError::invalid_field("slug", SLUG_EXISTS));
        }
        if self.count_by_name(&tag.name, None).await? > 0 {
            return Err(DomainError::invalid_field("name", TAG_NAME_EXISTS));
        }

        let mut state = self.0.lock();
        state.last_tag_id += 1;
        let id = state.last_tag_id;
        state.tags.insert(
            id,
            Tag {
                id: TagId(id),
                name: tag.name,
                description: tag.description,
                slug: tag.slug,
                created_at: tag.created_at,
                updated_at: tag.updated_at,
            },
        );
        Ok(TagId(id))
    }

    async fn update(&self, update: TagUpdate) -> DomainResult<()> {
        if self.count_by_slug(&update.slug, Some(update.id)).await? > 0 {
            return Err(DomainError::invalid_field("slug", SLUG_EXISTS));
        }
        if self.count_by_name(&update.name, Some(update.id)).await? > 0 {
            return Err(DomainError::invalid_field("name", TAG_NAME_EXISTS));
        }

        let mut state = self.0.lock();
        let stored = state
            .tags
            .get_mut(&update.id.0)
            .ok_or(DomainError::NotFound(EntityKind::Tag))?;
        stored.name = update.name;
        stored.description = update.description;
        stored.slug = update.slug;
        stored.updated_at = update.updated_at;
        Ok(())
    }

    async fn delete(&self, id: TagId) -> DomainResult<()> {
        let mut state = self.0.lock();
        if state.tags.remove(&id.0).is_none() {
            return Err(DomainError::NotFound(EntityKind::Tag));
        }
        for article in state.articles.values_mut() {
            article.tag_ids.retain(|t| *t != id.0);
        }
        Ok(())
    }

    async fn count_by_slug(&self, slug: &Slug, exclude: Option<TagId>) -> DomainResult<u64> {
        let state = self.0.lock();
        Ok(state
            .tags
            .values()
            .filter(|t| &t.slug == slug && Some(t.id) != exclude)
            .count() as u64)
    }

    async fn count_by_name(&self, name: &TagName, exclude: Option<TagId>) -> DomainResult<u64> {
        let state = self.0.lock();
        Ok(state
            .tags
            .values()
            .filter(|t| &t.name == name && Some(t.id) != exclude)
            .count() as u64)
    }
}
