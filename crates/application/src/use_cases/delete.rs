//! Remove a category.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use catalog_category::CategoryRepository;
use catalog_core::{DomainResult, Identity};

use crate::use_case::UseCase;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteCategoryInput {
    pub id: String,
}

/// Remove a category by id.
#[derive(Debug)]
pub struct DeleteCategoryUseCase<R> {
    repo: R,
}

impl<R: CategoryRepository> DeleteCategoryUseCase<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R: CategoryRepository> UseCase<DeleteCategoryInput, ()> for DeleteCategoryUseCase<R> {
    async fn execute(&self, input: DeleteCategoryInput) -> DomainResult<()> {
        let id = Identity::parse(&input.id)?;
        self.repo.delete(&id).await?;
        tracing::info!(category_id = %id, "category deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use catalog_category::testing::CategoryFakeBuilder;
    use catalog_core::DomainError;
    use catalog_infra::CategoryInMemoryRepository;

    #[tokio::test]
    async fn deletes_the_category() {
        let items = CategoryFakeBuilder::the_categories(2);
        let repo = Arc::new(CategoryInMemoryRepository::seeded(items.clone()));
        let use_case = DeleteCategoryUseCase::new(repo.clone());

        use_case
            .execute(DeleteCategoryInput {
                id: items[0].category_id().to_string(),
            })
            .await
            .unwrap();
        assert_eq!(repo.items().unwrap(), vec![items[1].clone()]);
    }

    #[tokio::test]
    async fn unknown_id_is_not_found() {
        let repo = Arc::new(CategoryInMemoryRepository::seeded(
            CategoryFakeBuilder::the_categories(1),
        ));
        let use_case = DeleteCategoryUseCase::new(repo.clone());
        let id = Identity::new();

        let err = use_case
            .execute(DeleteCategoryInput { id: id.to_string() })
            .await
            .unwrap_err();
        assert_eq!(err, DomainError::not_found(id, "Category"));
        assert_eq!(repo.len().unwrap(), 1);
    }

    #[tokio::test]
    async fn rejects_malformed_id() {
        let use_case = DeleteCategoryUseCase::new(CategoryInMemoryRepository::for_categories());
        let err = use_case
            .execute(DeleteCategoryInput {
                id: "fake id".to_string(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidIdentifier(_)));
    }
}
