//! Fixture builders for categories.

use chrono::{DateTime, Duration, Utc};

use catalog_core::Identity;

use crate::category::{Category, CategoryProps};

/// Builder for test categories with deterministic defaults.
#[derive(Debug, Clone)]
pub struct CategoryFakeBuilder {
    category_id: Option<Identity>,
    name: String,
    description: Option<String>,
    is_active: bool,
    created_at: Option<DateTime<Utc>>,
}

impl CategoryFakeBuilder {
    pub fn a_category() -> Self {
        Self {
            category_id: None,
            name: "Category".to_string(),
            description: None,
            is_active: true,
            created_at: None,
        }
    }

    /// `count` categories named `"Category {n}"` (1-based), created one second apart
    /// in ascending order starting now.
    pub fn the_categories(count: usize) -> Vec<Category> {
        let base = Utc::now();
        (0..count)
            .map(|i| {
                Self::a_category()
                    .with_name(format!("Category {}", i + 1))
                    .with_created_at(base + Duration::seconds(i as i64))
                    .build()
            })
            .collect()
    }

    pub fn with_id(mut self, id: Identity) -> Self {
        self.category_id = Some(id);
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn deactivated(mut self) -> Self {
        self.is_active = false;
        self
    }

    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    pub fn build(self) -> Category {
        Category::new(CategoryProps {
            category_id: self.category_id,
            name: self.name,
            description: self.description,
            is_active: Some(self.is_active),
            created_at: self.created_at,
        })
    }
}
