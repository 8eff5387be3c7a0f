// src/application/error.rs
use crate::domain::errors::{DomainError, EntityKind};
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("unauthorized: {0}")]
    Unauthorized(String),
}

impl ApplicationError {
    pub fn not_found(kind: EntityKind) -> Self {
        Self::Domain(DomainError::NotFound(kind))
    }

    pub fn invalid_field(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Domain(DomainError::invalid_field(field, message))
    }

    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::Domain(DomainError::bad_request(msg))
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        Self::Unauthorized(msg.into())
    }

    pub fn infrastructure(msg: impl Into<String>) -> Self {
        Self::Domain(DomainError::internal(msg))
    }

    /// The underlying taxonomy error, if any.
    pub fn as_domain(&self) -> Option<&DomainError> {
        match self {
            Self::Domain(err) => Some(err),
            Self::Unauthorized(_) => None,
        }
    }
}
