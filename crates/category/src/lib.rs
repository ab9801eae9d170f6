//! Category domain module.
//!
//! Business rules for catalog categories, implemented as deterministic domain logic
//! (no IO, no HTTP, no storage). Every state change goes through the validation gate.

pub mod category;
pub mod repository;
pub mod validator;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use category::{CATEGORY_ENTITY, Category, CategoryProps, CreateCategory};
pub use repository::CategoryRepository;
pub use validator::{CategorySnapshot, CategoryValidator, NAME_MAX_CHARS};
