pub mod entity;
pub mod query;
pub mod repository;
pub mod value_objects;

pub use entity::{NewTag, Tag, TagUpdate};
pub use query::TagQuery;
pub use repository::TagRepository;
pub use value_objects::{TAG_NAME_EXISTS, TagId, TagName};
