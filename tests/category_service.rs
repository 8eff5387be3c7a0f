// tests/category_service.rs
use quillpress::application::commands::articles::CreateArticleCommand;
use quillpress::application::commands::categories::DeleteCategoryCommand;
use quillpress::application::error::ApplicationError;
use quillpress::application::queries::articles::GetArticleByIdQuery;
use quillpress::application::queries::categories::{
    GetCategoryByIdQuery, GetCategoryBySlugQuery, ListCategoriesQuery,
};
use quillpress::domain::errors::{DomainError, EntityKind};

mod support;

use support::{InMemoryStore, build_services, category, category_update};

fn parent_error(err: &ApplicationError) -> Option<String> {
    match err.as_domain() {
        Some(DomainError::InvalidPayload(fields)) => fields.get("parentId").map(str::to_string),
        _ => None,
    }
}

/// Creates A (root), B under A and C under B; returns their ids.
async fn chain(services: &quillpress::application::services::ApplicationServices) -> (i64, i64, i64) {
    let a = services
        .category_commands
        .create_category(category("A", None))
        .await
        .unwrap();
    let b = services
        .category_commands
        .create_category(category("B", Some(a.id)))
        .await
        .unwrap();
    let c = services
        .category_commands
        .create_category(category("C", Some(b.id)))
        .await
        .unwrap();
    (a.id, b.id, c.id)
}

#[tokio::test]
async fn category_cannot_be_its_own_parent() {
    let store = InMemoryStore::new();
    let services = build_services(&store);
    let a = services
        .category_commands
        .create_category(category("A", None))
        .await
        .unwrap();

    let err = services
        .category_commands
        .update_category(category_update(a.id, "A", Some(a.id)))
        .await
        .unwrap_err();
    assert_eq!(
        parent_error(&err).as_deref(),
        Some("A category cannot be its own parent")
    );
}

#[tokio::test]
async fn moving_under_a_descendant_is_a_cycle() {
    let store = InMemoryStore::new();
    let services = build_services(&store);
    let (a, _, c) = chain(&services).await;

    let err = services
        .category_commands
        .update_category(category_update(a, "A", Some(c)))
        .await
        .unwrap_err();
    assert_eq!(
        parent_error(&err).as_deref(),
        Some("Cannot set a child category as the parent (would create a cycle)")
    );

    let unchanged = services
        .category_queries
        .get_category_by_id(GetCategoryByIdQuery { id: a })
        .await
        .unwrap();
    assert_eq!(unchanged.parent_id, None);
}

#[tokio::test]
async fn unknown_parent_is_rejected() {
    let store = InMemoryStore::new();
    let services = build_services(&store);

    let err = services
        .category_commands
        .create_category(category("Lost", Some(99)))
        .await
        .unwrap_err();
    assert_eq!(
        parent_error(&err).as_deref(),
        Some("Parent category not found")
    );

    let err = services
        .category_commands
        .create_category(category("Negative", Some(-1)))
        .await
        .unwrap_err();
    assert!(parent_error(&err).is_some());
}

#[tokio::test]
async fn zero_parent_moves_category_to_roots() {
    let store = InMemoryStore::new();
    let services = build_services(&store);
    let (_, b, _) = chain(&services).await;

    let moved = services
        .category_commands
        .update_category(category_update(b, "B", Some(0)))
        .await
        .unwrap();
    assert_eq!(moved.parent_id, None);
}

#[tokio::test]
async fn deleting_a_parent_is_refused() {
    let store = InMemoryStore::new();
    let services = build_services(&store);
    let (a, _, _) = chain(&services).await;

    let err = services
        .category_commands
        .delete_category(DeleteCategoryCommand { id: a })
        .await
        .unwrap_err();
    match err.as_domain() {
        Some(DomainError::BadRequest(message)) => assert_eq!(
            message,
            "Cannot delete a category with child categories. Move or delete children first."
        ),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn hierarchy_runs_from_root_to_self() {
    let store = InMemoryStore::new();
    let services = build_services(&store);
    let (a, b, c) = chain(&services).await;

    let names: Vec<(i64, String)> = services
        .category_queries
        .hierarchy(c)
        .await
        .unwrap()
        .into_iter()
        .map(|entry| (entry.id, entry.name))
        .collect();
    assert_eq!(
        names,
        vec![(a, "A".to_string()), (b, "B".to_string()), (c, "C".to_string())]
    );

    let root_only = services.category_queries.hierarchy(a).await.unwrap();
    assert_eq!(root_only.len(), 1);

    let err = services.category_queries.hierarchy(404).await.unwrap_err();
    assert!(matches!(
        err.as_domain(),
        Some(DomainError::NotFound(EntityKind::Category))
    ));
}

#[tokio::test]
async fn hierarchy_reports_corrupted_cycle() {
    let store = InMemoryStore::new();
    let services = build_services(&store);
    let (a, _, c) = chain(&services).await;
    store.force_parent(a, Some(c));

    let err = services.category_queries.hierarchy(c).await.unwrap_err();
    assert!(matches!(err.as_domain(), Some(DomainError::Internal(_))));
}

#[tokio::test]
async fn find_one_loads_direct_children_only() {
    let store = InMemoryStore::new();
    let services = build_services(&store);
    let (a, b, _) = chain(&services).await;

    let root = services
        .category_queries
        .get_category_by_slug(GetCategoryBySlugQuery { slug: "a".into() })
        .await
        .unwrap();
    assert_eq!(root.id, a);
    assert_eq!(root.children.len(), 1);
    assert_eq!(root.children[0].id, b);
    assert!(root.children[0].children.is_empty());

    let children = services.category_queries.list_children(a).await.unwrap();
    assert_eq!(children.iter().map(|c| c.id).collect::<Vec<_>>(), vec![b]);
}

#[tokio::test]
async fn list_filters_by_parent_and_keyword() {
    let store = InMemoryStore::new();
    let services = build_services(&store);
    let (a, b, _) = chain(&services).await;
    services
        .category_commands
        .create_category(category("Zeta", None))
        .await
        .unwrap();

    let roots = services
        .category_queries
        .list_categories(ListCategoriesQuery {
            parent_id: Some(0),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(
        roots.result.iter().map(|c| c.name.as_str()).collect::<Vec<_>>(),
        vec!["A", "Zeta"]
    );

    let under_a = services
        .category_queries
        .list_categories(ListCategoriesQuery {
            parent_id: Some(a),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(under_a.metadata.total, 1);
    assert_eq!(under_a.result[0].id, b);

    let keyword = services
        .category_queries
        .list_categories(ListCategoriesQuery {
            keyword: Some("zeta".into()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(keyword.metadata.total, 1);

    let err = services
        .category_queries
        .list_categories(ListCategoriesQuery {
            parent_id: Some(-5),
            ..Default::default()
        })
        .await
        .unwrap_err();
    assert!(parent_error(&err).is_some());
}

#[tokio::test]
async fn duplicate_slug_is_rejected_on_create_and_update() {
    let store = InMemoryStore::new();
    let services = build_services(&store);
    services
        .category_commands
        .create_category(category("Rust", None))
        .await
        .unwrap();
    let other = services
        .category_commands
        .create_category(category("Go", None))
        .await
        .unwrap();

    let err = services
        .category_commands
        .create_category(category("Rust", None))
        .await
        .unwrap_err();
    assert!(matches!(err.as_domain(), Some(DomainError::InvalidPayload(f)) if f.get("slug") == Some("Slug already exists")));

    let err = services
        .category_commands
        .update_category(category_update(other.id, "Rust", None))
        .await
        .unwrap_err();
    assert!(matches!(err.as_domain(), Some(DomainError::InvalidPayload(f)) if f.get("slug").is_some()));
}

#[tokio::test]
async fn delete_detaches_category_from_articles() {
    let store = InMemoryStore::new();
    let services = build_services(&store);
    let leaf = services
        .category_commands
        .create_category(category("Leaf", None))
        .await
        .unwrap();
    let command = CreateArticleCommand::builder()
        .title("Filed")
        .category_ids(vec![leaf.id])
        .build()
        .unwrap();
    let article = services
        .article_commands
        .create_article(command)
        .await
        .unwrap();

    services
        .category_commands
        .delete_category(DeleteCategoryCommand { id: leaf.id })
        .await
        .unwrap();

    assert!(
        store
            .article_category_rows()
            .iter()
            .all(|(_, category_id)| *category_id != leaf.id)
    );
    let reloaded = services
        .article_queries
        .get_article_by_id(GetArticleByIdQuery { id: article.id })
        .await
        .unwrap();
    assert!(reloaded.categories.is_empty());

    let err = services
        .category_commands
        .delete_category(DeleteCategoryCommand { id: leaf.id })
        .await
        .unwrap_err();
    assert!(matches!(
        err.as_domain(),
        Some(DomainError::NotFound(EntityKind::Category))
    ));
}
