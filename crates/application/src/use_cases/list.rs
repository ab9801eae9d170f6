//! Paginated category listing.

use async_trait::async_trait;

use catalog_category::CategoryRepository;
use catalog_core::{DomainResult, SearchInput, SearchResult};
use catalog_infra::SearchConfig;

use super::common::CategoryOutput;
use crate::use_case::UseCase;

/// One page of categories plus pagination metadata.
pub type ListCategoriesOutput = SearchResult<CategoryOutput, String>;

/// Search categories (name filter, sort, pagination).
#[derive(Debug)]
pub struct ListCategoriesUseCase<R> {
    repo: R,
    config: SearchConfig,
}

impl<R: CategoryRepository> ListCategoriesUseCase<R> {
    pub fn new(repo: R) -> Self {
        Self::with_config(repo, SearchConfig::default())
    }

    pub fn with_config(repo: R, config: SearchConfig) -> Self {
        Self { repo, config }
    }
}

#[async_trait]
impl<R> UseCase<SearchInput, ListCategoriesOutput> for ListCategoriesUseCase<R>
where
    R: CategoryRepository,
{
    async fn execute(&self, input: SearchInput) -> DomainResult<ListCategoriesOutput> {
        let params = input.into_params(self.config.default_per_page);
        let result = self.repo.search(params).await?;
        Ok(result.map_items(CategoryOutput::from))
    }
}
