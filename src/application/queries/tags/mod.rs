mod by_article;
mod get;
mod list;
mod service;

pub use get::{GetTagByIdQuery, GetTagBySlugQuery};
pub use list::ListTagsQuery;
pub use service::TagQueryService;
