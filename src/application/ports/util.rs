// src/application/ports/util.rs

/// Turns free text into a lowercase, hyphen separated ASCII token.
///
/// Implementations must be idempotent: `slugify(slugify(x)) == slugify(x)`.
pub trait SlugGenerator: Send + Sync {
    fn slugify(&self, input: &str) -> String;
}
