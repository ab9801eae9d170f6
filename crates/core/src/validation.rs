//! Validation pipeline: validate-before-mutate for entities.
//!
//! Entities expose a snapshot of their (proposed) field values to a [`FieldValidator`].
//! The validator either accepts it or returns a [`FieldErrors`] map describing every
//! violation. [`validate_entity`] is the gate entities call in their creation factory
//! and in every mutating operation, *before* committing the change.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Field name → ordered list of violation messages.
///
/// Fields are kept in a `BTreeMap` so error output is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message for `field`, preserving insertion order of messages.
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    /// Number of failing fields (not messages).
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// `Ok(())` when no field failed, otherwise `Err(self)`.
    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

/// Validator over a snapshot of an entity's field values.
///
/// Implementations may be hand-written checks, rule lists or schema-backed; the core
/// only depends on this narrow contract.
pub trait FieldValidator<S: ?Sized> {
    fn validate(&self, snapshot: &S) -> Result<(), FieldErrors>;

    fn is_valid(&self, snapshot: &S) -> bool {
        self.validate(snapshot).is_ok()
    }
}

/// Entity validation failure carrying the full field → messages map.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Validation Error")]
pub struct EntityValidationError {
    errors: FieldErrors,
}

impl EntityValidationError {
    pub fn new(errors: FieldErrors) -> Self {
        Self { errors }
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn into_errors(self) -> FieldErrors {
        self.errors
    }

    /// Number of failing fields.
    pub fn count(&self) -> usize {
        self.errors.len()
    }
}

/// Run `validator` against `snapshot`, wrapping failures in [`EntityValidationError`].
pub fn validate_entity<S, V>(validator: &V, snapshot: &S) -> Result<(), EntityValidationError>
where
    S: ?Sized,
    V: FieldValidator<S> + ?Sized,
{
    validator.validate(snapshot).map_err(|errors| {
        tracing::debug!(
            failing_fields = ?errors.fields().collect::<Vec<_>>(),
            "entity validation rejected"
        );
        EntityValidationError::new(errors)
    })
}

/// Reusable field rules for hand-written validators.
///
/// Each rule appends a message to `errors` when violated and leaves it untouched
/// otherwise.
pub mod rules {
    use super::FieldErrors;

    /// Rejects empty or whitespace-only text.
    pub fn not_blank(errors: &mut FieldErrors, field: &str, value: &str) {
        if value.trim().is_empty() {
            errors.add(field, format!("{field} should not be empty"));
        }
    }

    /// Rejects text longer than `max` characters (Unicode scalar values).
    pub fn max_chars(errors: &mut FieldErrors, field: &str, value: &str, max: usize) {
        if value.chars().count() > max {
            errors.add(
                field,
                format!("{field} must be shorter than or equal to {max} characters"),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Snapshot {
        name: String,
        code: String,
    }

    struct SnapshotValidator;

    impl FieldValidator<Snapshot> for SnapshotValidator {
        fn validate(&self, s: &Snapshot) -> Result<(), FieldErrors> {
            let mut errors = FieldErrors::new();
            rules::not_blank(&mut errors, "name", &s.name);
            rules::max_chars(&mut errors, "name", &s.name, 5);
            rules::not_blank(&mut errors, "code", &s.code);
            errors.into_result()
        }
    }

    fn snapshot(name: &str, code: &str) -> Snapshot {
        Snapshot {
            name: name.to_string(),
            code: code.to_string(),
        }
    }

    #[test]
    fn valid_snapshot_passes() {
        assert!(SnapshotValidator.is_valid(&snapshot("abc", "x")));
        assert!(validate_entity(&SnapshotValidator, &snapshot("abc", "x")).is_ok());
    }

    #[test]
    fn collects_every_failing_field() {
        let err = validate_entity(&SnapshotValidator, &snapshot("   ", "")).unwrap_err();
        assert_eq!(err.count(), 2);
        assert_eq!(
            err.errors().get("name").unwrap(),
            &["name should not be empty".to_string()]
        );
        assert!(err.errors().contains("code"));
        assert_eq!(err.to_string(), "Validation Error");
    }

    #[test]
    fn messages_for_one_field_keep_order() {
        let mut errors = FieldErrors::new();
        errors.add("name", "first");
        errors.add("name", "second");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("name").unwrap(), &["first", "second"]);
    }

    #[test]
    fn max_chars_counts_characters_not_bytes() {
        assert!(SnapshotValidator.is_valid(&snapshot("ééééé", "x")));
        let err = SnapshotValidator.validate(&snapshot("éééééé", "x")).unwrap_err();
        assert_eq!(
            err.get("name").unwrap(),
            &["name must be shorter than or equal to 5 characters".to_string()]
        );
    }

    #[test]
    fn field_errors_serialize_as_plain_map() {
        let mut errors = FieldErrors::new();
        errors.add("name", "name should not be empty");
        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "name": ["name should not be empty"] })
        );
    }
}
