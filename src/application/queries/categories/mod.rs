mod get;
mod hierarchy;
mod list;
mod service;

pub use get::{GetCategoryByIdQuery, GetCategoryBySlugQuery};
pub use list::ListCategoriesQuery;
pub use service::CategoryQueryService;
