//! Partial category update.

use async_trait::async_trait;
use serde::{Deserialize, Deserializer, Serialize};

use catalog_category::CategoryRepository;
use catalog_core::{DomainResult, Identity};

use super::common::CategoryOutput;
use crate::use_case::UseCase;

/// Partial update. Absent fields are left untouched.
///
/// `description` is tri-state: absent (`None`), cleared (`Some(None)`) or set
/// (`Some(Some(text))`). In JSON, a missing key is absent and `null` clears.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateCategoryInput {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "present")]
    pub description: Option<Option<String>>,
    #[serde(default)]
    pub is_active: Option<bool>,
}

fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/// Apply a partial change to an existing category.
///
/// Every change goes through the entity's validated operations; the first rejected
/// change aborts the use case and nothing is written back.
#[derive(Debug)]
pub struct UpdateCategoryUseCase<R> {
    repo: R,
}

impl<R: CategoryRepository> UpdateCategoryUseCase<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> UseCase<UpdateCategoryInput, CategoryOutput> for UpdateCategoryUseCase<R>
where
    R: CategoryRepository,
{
    async fn execute(&self, input: UpdateCategoryInput) -> DomainResult<CategoryOutput> {
        let id = Identity::parse(&input.id)?;
        let Some(mut category) = self.repo.find_by_id(&id).await? else {
            return Err(self.repo.not_found(&id));
        };

        if let Some(name) = input.name {
            category.change_name(name)?;
        }
        if let Some(description) = input.description {
            category.change_description(description)?;
        }
        match input.is_active {
            Some(true) => category.activate()?,
            Some(false) => category.deactivate()?,
            None => {}
        }

        let output = CategoryOutput::from(&category);
        self.repo.update(category).await?;
        tracing::info!(category_id = %id, "category updated");
        Ok(output)
    }
}
