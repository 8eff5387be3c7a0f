pub mod entity;
pub mod publishing;
pub mod query;
pub mod repository;
pub mod value_objects;

pub use entity::{Article, ArticleUpdate, AssociationUpdate, NewArticle};
pub use publishing::{EMPTY_CONTENT, parse_published_at};
pub use query::ArticleQuery;
pub use repository::ArticleRepository;
pub use value_objects::{ArticleId, ArticleTitle};
