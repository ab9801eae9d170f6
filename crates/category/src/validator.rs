//! Field rules for categories.

use catalog_core::validation::rules;
use catalog_core::{FieldErrors, FieldValidator};

/// Maximum length of a category name, in characters.
pub const NAME_MAX_CHARS: usize = 255;

/// Field values of a category as they would be after a proposed change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategorySnapshot<'a> {
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub is_active: bool,
}

/// Hand-written validator for [`CategorySnapshot`].
///
/// - `name`: required, not blank, at most [`NAME_MAX_CHARS`] characters
/// - `description`: optional free text
#[derive(Debug, Default, Clone, Copy)]
pub struct CategoryValidator;

impl CategoryValidator {
    pub fn new() -> Self {
        Self
    }
}

impl<'a> FieldValidator<CategorySnapshot<'a>> for CategoryValidator {
    fn validate(&self, snapshot: &CategorySnapshot<'a>) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        rules::not_blank(&mut errors, "name", snapshot.name);
        rules::max_chars(&mut errors, "name", snapshot.name, NAME_MAX_CHARS);
        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(name: &str) -> CategorySnapshot<'_> {
        CategorySnapshot {
            name,
            description: None,
            is_active: true,
        }
    }

    #[test]
    fn accepts_regular_names() {
        assert!(CategoryValidator.is_valid(&snapshot("Movie")));
        assert!(CategoryValidator.is_valid(&snapshot(&"a".repeat(NAME_MAX_CHARS))));
    }

    #[test]
    fn rejects_empty_name() {
        let errors = CategoryValidator.validate(&snapshot("")).unwrap_err();
        assert_eq!(
            errors.get("name").unwrap(),
            &["name should not be empty".to_string()]
        );
    }

    #[test]
    fn rejects_too_long_name() {
        let long = "a".repeat(NAME_MAX_CHARS + 1);
        let errors = CategoryValidator.validate(&snapshot(&long)).unwrap_err();
        assert_eq!(
            errors.get("name").unwrap(),
            &["name must be shorter than or equal to 255 characters".to_string()]
        );
    }

    #[test]
    fn description_is_free_text() {
        let s = CategorySnapshot {
            name: "Movie",
            description: Some(""),
            is_active: false,
        };
        assert!(CategoryValidator.is_valid(&s));
    }
}
