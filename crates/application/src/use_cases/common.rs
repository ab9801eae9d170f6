use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use catalog_category::Category;

/// Category as returned to callers of the use cases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryOutput {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<&Category> for CategoryOutput {
    fn from(category: &Category) -> Self {
        Self {
            id: category.category_id().to_string(),
            name: category.name().to_string(),
            description: category.description().map(str::to_string),
            is_active: category.is_active(),
            created_at: category.created_at(),
        }
    }
}

impl From<Category> for CategoryOutput {
    fn from(category: Category) -> Self {
        Self::from(&category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_category::testing::CategoryFakeBuilder;

    #[test]
    fn maps_every_field() {
        let category = CategoryFakeBuilder::a_category()
            .with_name("Movie")
            .with_description("some description")
            .deactivated()
            .build();

        let output = CategoryOutput::from(&category);
        assert_eq!(
            output,
            CategoryOutput {
                id: category.category_id().to_string(),
                name: "Movie".to_string(),
                description: Some("some description".to_string()),
                is_active: false,
                created_at: category.created_at(),
            }
        );
    }

    #[test]
    fn absent_description_serializes_as_null() {
        let category = CategoryFakeBuilder::a_category().build();
        let json = serde_json::to_value(CategoryOutput::from(category)).unwrap();
        assert_eq!(json["description"], serde_json::Value::Null);
        assert_eq!(json["is_active"], serde_json::Value::Bool(true));
    }
}
