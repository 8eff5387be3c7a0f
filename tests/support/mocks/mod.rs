// tests/support/mocks/mod.rs
//! In-memory stand-ins for the persistence and time ports.
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod store;
pub mod time;
pub mod util;

pub use store::{InMemoryArticles, InMemoryCategories, InMemoryStore, InMemoryTags};
pub use time::fixed_now;
pub use util::TickingClock;
