//! Create a category.

use async_trait::async_trait;

use catalog_category::{Category, CategoryRepository, CreateCategory};
use catalog_core::DomainResult;

use super::common::CategoryOutput;
use crate::use_case::UseCase;

/// Validate and store a new category.
#[derive(Debug)]
pub struct CreateCategoryUseCase<R> {
    repo: R,
}

impl<R: CategoryRepository> CreateCategoryUseCase<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R: CategoryRepository> UseCase<CreateCategory, CategoryOutput> for CreateCategoryUseCase<R> {
    async fn execute(&self, input: CreateCategory) -> DomainResult<CategoryOutput> {
        let category = Category::create(input)?;
        let output = CategoryOutput::from(&category);
        self.repo.insert(category).await?;
        tracing::info!(category_id = %output.id, "category created");
        Ok(output)
    }
}
