//! Domain error model.

use thiserror::Error;

use crate::validation::EntityValidationError;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// All variants are raised synchronously to the immediate caller; nothing in the core
/// retries or silently recovers.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An identifier string was malformed (e.g. not a canonical UUID).
    #[error("invalid identifier: {0}")]
    InvalidIdentifier(String),

    /// One or more field invariants were violated.
    ///
    /// Carries the complete field → messages map so every violation can be reported.
    #[error(transparent)]
    Validation(#[from] EntityValidationError),

    /// `update`/`delete` found no entity with the given identity.
    #[error("{entity_type} not found using id {id}")]
    NotFound { id: String, entity_type: String },

    /// The backing store failed (poisoned lock, adapter I/O).
    #[error("storage failure: {0}")]
    Storage(String),
}

impl DomainError {
    pub fn invalid_identifier(msg: impl Into<String>) -> Self {
        Self::InvalidIdentifier(msg.into())
    }

    pub fn not_found(id: impl core::fmt::Display, entity_type: impl Into<String>) -> Self {
        Self::NotFound {
            id: id.to_string(),
            entity_type: entity_type.into(),
        }
    }

    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// Field errors, when this is a validation failure.
    pub fn validation_errors(&self) -> Option<&crate::validation::FieldErrors> {
        match self {
            Self::Validation(e) => Some(e.errors()),
            _ => None,
        }
    }
}
