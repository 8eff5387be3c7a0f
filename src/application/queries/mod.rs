// src/application/queries/mod.rs
pub mod articles;
pub mod categories;
pub mod tags;

/// Trimmed keyword, or `None` when nothing is left to match.
pub(crate) fn normalize_keyword(keyword: Option<String>) -> Option<String> {
    keyword
        .map(|k| k.trim().to_string())
        .filter(|k| !k.is_empty())
}
