pub mod entity;
pub mod hierarchy;
pub mod query;
pub mod repository;
pub mod value_objects;

pub use entity::{Category, CategoryUpdate, NewCategory};
pub use query::{CategoryQuery, ParentFilter};
pub use repository::CategoryRepository;
pub use value_objects::{CategoryId, CategoryName, parent_from_raw};
