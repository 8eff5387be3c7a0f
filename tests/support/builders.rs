// tests/support/builders.rs
use quillpress::application::commands::{
    articles::{CreateArticleCommand, UpdateArticleCommand},
    categories::{CreateCategoryCommand, UpdateCategoryCommand},
    tags::CreateTagCommand,
};

pub fn article(title: &str, content: &str) -> CreateArticleCommand {
    CreateArticleCommand::builder()
        .title(title)
        .content(content)
        .build()
        .expect("title set")
}

/// Update that rewrites title and content and leaves every association alone.
pub fn article_update(id: i64, title: &str, content: &str) -> UpdateArticleCommand {
    UpdateArticleCommand {
        id,
        title: title.into(),
        content: content.into(),
        ..Default::default()
    }
}

pub fn category(name: &str, parent_id: Option<i64>) -> CreateCategoryCommand {
    CreateCategoryCommand {
        name: name.into(),
        description: format!("{name} articles"),
        slug: None,
        parent_id,
    }
}

pub fn category_update(id: i64, name: &str, parent_id: Option<i64>) -> UpdateCategoryCommand {
    UpdateCategoryCommand {
        id,
        name: name.into(),
        description: format!("{name} articles"),
        slug: None,
        parent_id,
    }
}

pub fn tag(name: &str) -> CreateTagCommand {
    CreateTagCommand {
        name: name.into(),
        description: String::new(),
        slug: None,
    }
}
