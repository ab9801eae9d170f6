use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use catalog_core::{DomainResult, Entity, EntityType, Identity, validate_entity};

use crate::validator::{CategorySnapshot, CategoryValidator};

/// Type descriptor handed to category repositories.
pub const CATEGORY_ENTITY: EntityType = EntityType::new("Category");

/// Constructor input. Absent fields take their defaults (new id, no description,
/// active, created now).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryProps {
    pub category_id: Option<Identity>,
    pub name: String,
    pub description: Option<String>,
    pub is_active: Option<bool>,
    pub created_at: Option<DateTime<Utc>>,
}

/// Command: create a new, validated category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateCategory {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub is_active: Option<bool>,
}

/// Entity: Category.
///
/// Equality is identity-only: two categories are equal when their `category_id`s are.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    category_id: Identity,
    name: String,
    description: Option<String>,
    is_active: bool,
    created_at: DateTime<Utc>,
}

impl Category {
    /// Build a category without running validation (rehydration, fixtures).
    pub fn new(props: CategoryProps) -> Self {
        Self {
            category_id: props.category_id.unwrap_or_default(),
            name: props.name,
            description: props.description,
            is_active: props.is_active.unwrap_or(true),
            created_at: props.created_at.unwrap_or_else(Utc::now),
        }
    }

    /// Build and validate a brand-new category.
    pub fn create(cmd: CreateCategory) -> DomainResult<Self> {
        let category = Self::new(CategoryProps {
            name: cmd.name,
            description: cmd.description,
            is_active: cmd.is_active,
            ..Default::default()
        });
        Self::validate(&category.snapshot())?;
        Ok(category)
    }

    pub fn category_id(&self) -> &Identity {
        &self.category_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn change_name(&mut self, name: impl Into<String>) -> DomainResult<()> {
        let name = name.into();
        Self::validate(&CategorySnapshot {
            name: &name,
            ..self.snapshot()
        })?;
        self.name = name;
        Ok(())
    }

    pub fn change_description(&mut self, description: Option<String>) -> DomainResult<()> {
        Self::validate(&CategorySnapshot {
            description: description.as_deref(),
            ..self.snapshot()
        })?;
        self.description = description;
        Ok(())
    }

    pub fn activate(&mut self) -> DomainResult<()> {
        self.set_active(true)
    }

    pub fn deactivate(&mut self) -> DomainResult<()> {
        self.set_active(false)
    }

    fn set_active(&mut self, is_active: bool) -> DomainResult<()> {
        Self::validate(&CategorySnapshot {
            is_active,
            ..self.snapshot()
        })?;
        self.is_active = is_active;
        Ok(())
    }

    fn snapshot(&self) -> CategorySnapshot<'_> {
        CategorySnapshot {
            name: &self.name,
            description: self.description.as_deref(),
            is_active: self.is_active,
        }
    }

    fn validate(snapshot: &CategorySnapshot<'_>) -> DomainResult<()> {
        validate_entity(&CategoryValidator, snapshot)?;
        Ok(())
    }
}

impl Entity for Category {
    type Id = Identity;

    fn entity_id(&self) -> &Identity {
        &self.category_id
    }
}

impl PartialEq for Category {
    fn eq(&self, other: &Self) -> bool {
        self.same_identity_as(other)
    }
}

impl Eq for Category {}
