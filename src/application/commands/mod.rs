// src/application/commands/mod.rs
pub mod articles;
pub mod categories;
pub mod tags;

mod slug;
