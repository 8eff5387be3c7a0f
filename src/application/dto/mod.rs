pub mod articles;
pub mod categories;
pub mod pagination;
pub mod serde_time;
pub mod tags;

pub use articles::ArticleDto;
pub use categories::CategoryDto;
pub use pagination::{PageMetadata, Paginated};
pub use tags::TagDto;
