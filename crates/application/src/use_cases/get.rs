//! Fetch one category by id.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use catalog_category::CategoryRepository;
use catalog_core::{DomainResult, Identity};

use super::common::CategoryOutput;
use crate::use_case::UseCase;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetCategoryInput {
    pub id: String,
}

/// Fetch one category by id.
#[derive(Debug)]
pub struct GetCategoryUseCase<R> {
    repo: R,
}

impl<R: CategoryRepository> GetCategoryUseCase<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R: CategoryRepository> UseCase<GetCategoryInput, CategoryOutput> for GetCategoryUseCase<R> {
    async fn execute(&self, input: GetCategoryInput) -> DomainResult<CategoryOutput> {
        let id = Identity::parse(&input.id)?;
        match self.repo.find_by_id(&id).await? {
            Some(category) => Ok(CategoryOutput::from(category)),
            None => Err(self.repo.not_found(&id)),
        }
    }
}
