//! Application layer: category use cases.
//!
//! Use cases orchestrate domain operations and repository calls. They are generic over
//! [`catalog_category::CategoryRepository`], so the in-memory adapter and any persisted
//! adapter are interchangeable.

pub mod use_case;
pub mod use_cases;

pub use use_case::UseCase;
pub use use_cases::{
    CategoryOutput, CreateCategoryUseCase, DeleteCategoryInput, DeleteCategoryUseCase,
    GetCategoryInput, GetCategoryUseCase, ListCategoriesOutput, ListCategoriesUseCase,
    UpdateCategoryInput, UpdateCategoryUseCase,
};
