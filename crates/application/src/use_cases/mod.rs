//! Category use cases.

pub mod common;
pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

pub use common::CategoryOutput;
pub use create::CreateCategoryUseCase;
pub use delete::{DeleteCategoryInput, DeleteCategoryUseCase};
pub use get::{GetCategoryInput, GetCategoryUseCase};
pub use list::{ListCategoriesOutput, ListCategoriesUseCase};
pub use update::{UpdateCategoryInput, UpdateCategoryUseCase};
