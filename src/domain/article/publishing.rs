// src/domain/article/publishing.rs
use crate::domain::errors::{DomainError, DomainResult};
use chrono::{DateTime, Utc};

pub const EMPTY_CONTENT: &str = "Cannot publish an article without content";

/// Parses a client supplied `publishedAt` (RFC 3339).
///
/// Instants later than `now` are rejected; a published timestamp is never in the future.
pub fn parse_published_at(raw: &str, now: DateTime<Utc>) -> DomainResult<DateTime<Utc>> {
    let parsed = DateTime::parse_from_rfc3339(raw.trim())
        .map_err(|_| {
            DomainError::invalid_field(
                "publishedAt",
                "Invalid date format, expected RFC 3339 (e.g. 2024-01-31T09:00:00Z)",
            )
        })?
        .with_timezone(&Utc);

    if parsed > now {
        return Err(DomainError::invalid_field(
            "publishedAt",
            "Publication date cannot be in the future",
        ));
    }
    Ok(parsed)
}
