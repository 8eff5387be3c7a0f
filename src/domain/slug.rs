// src/domain/slug.rs
use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

pub const SLUG_EXISTS: &str = "Slug already exists";

/// URL-safe identifier shared by articles, categories and tags.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Slug(String);

impl Slug {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::invalid_field("slug", "Slug cannot be empty"));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Slug> for String {
    fn from(value: Slug) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_slug_is_an_invalid_payload() {
        let err = Slug::new("   ").unwrap_err();
        match err {
            DomainError::InvalidPayload(fields) => {
                assert_eq!(fields.get("slug"), Some("Slug cannot be empty"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn slug_keeps_its_value() {
        let slug = Slug::new("hello-world").unwrap();
        assert_eq!(slug.as_str(), "hello-world");
        assert_eq!(String::from(slug), "hello-world");
    }
}
