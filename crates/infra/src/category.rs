//! In-memory category repository.

use catalog_category::{CATEGORY_ENTITY, Category};
use catalog_core::SortDirection;

use crate::repository::{InMemorySearchableRepository, SearchStrategy, SortValue};

/// Search hooks for categories: case-insensitive name filter, sortable by `name` and
/// `created_at`, newest first by default.
#[derive(Debug, Default, Clone, Copy)]
pub struct CategorySearch;

impl SearchStrategy<Category> for CategorySearch {
    type Filter = String;

    fn sortable_fields(&self) -> &[&'static str] {
        &["name", "created_at"]
    }

    fn matches(&self, item: &Category, filter: &String) -> bool {
        item.name().to_lowercase().contains(&filter.to_lowercase())
    }

    fn sort_value<'a>(&self, item: &'a Category, field: &str) -> Option<SortValue<'a>> {
        match field {
            "name" => Some(SortValue::Text(item.name())),
            "created_at" => Some(SortValue::Timestamp(item.created_at())),
            _ => None,
        }
    }

    fn default_sort(&self) -> Option<(&'static str, SortDirection)> {
        Some(("created_at", SortDirection::Desc))
    }
}

pub type CategoryInMemoryRepository = InMemorySearchableRepository<Category, CategorySearch>;

impl CategoryInMemoryRepository {
    pub fn for_categories() -> Self {
        Self::new(CATEGORY_ENTITY, CategorySearch)
    }

    pub fn seeded(items: Vec<Category>) -> Self {
        Self::with_items(CATEGORY_ENTITY, CategorySearch, items)
    }
}
