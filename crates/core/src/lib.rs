//! `catalog-core`: domain kit building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! value objects, entity identity, the validation gate, the repository contract and
//! the search model shared by every storage adapter.

pub mod entity;
pub mod error;
pub mod id;
pub mod repository;
pub mod search;
pub mod validation;
pub mod value_object;

pub use entity::{Entity, EntityType};
pub use error::{DomainError, DomainResult};
pub use id::Identity;
pub use repository::{Repository, SearchableRepository};
pub use search::{
    DEFAULT_PER_PAGE, SearchFilter, SearchInput, SearchParams, SearchResult, SortDirection,
};
pub use validation::{EntityValidationError, FieldErrors, FieldValidator, validate_entity};
pub use value_object::ValueObject;
