// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_article;
mod postgres_category;
mod postgres_tag;
mod rows;

pub use error::map_sqlx;
pub use postgres_article::PostgresArticleRepository;
pub use postgres_category::PostgresCategoryRepository;
pub use postgres_tag::PostgresTagRepository;
