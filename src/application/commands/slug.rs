// src/application/commands/slug.rs
use crate::application::{error::ApplicationResult, ports::util::SlugGenerator};
use crate::domain::slug::Slug;

fn explicit(slug: Option<&str>) -> Option<&str> {
    slug.map(str::trim).filter(|s| !s.is_empty())
}

/// Client slug when given, otherwise derived from `source`.
pub(super) fn slug_for_create(
    slugger: &dyn SlugGenerator,
    requested: Option<&str>,
    source: &str,
) -> ApplicationResult<Slug> {
    let value = match explicit(requested) {
        Some(slug) => slug.to_string(),
        None => slugger.slugify(source),
    };
    Ok(Slug::new(value)?)
}

/// Client slug when given; a fresh one when the source text changed; else the stored slug.
pub(super) fn slug_for_update(
    slugger: &dyn SlugGenerator,
    requested: Option<&str>,
    new_source: &str,
    current_source: &str,
    current: &Slug,
) -> ApplicationResult<Slug> {
    if let Some(slug) = explicit(requested) {
        return Ok(Slug::new(slug)?);
    }
    if new_source != current_source {
        return Ok(Slug::new(slugger.slugify(new_source))?);
    }
    Ok(current.clone())
}
