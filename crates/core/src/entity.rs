//! Entity trait: identity + continuity across state changes.

use core::any::Any;

use crate::value_object::ValueObject;

/// Explicit descriptor of a concrete entity type.
///
/// Handed to repositories at construction time; used in `NotFound` messages and by
/// persisted adapters to pick the right deserializer.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct EntityType(&'static str);

impl EntityType {
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    pub fn name(&self) -> &'static str {
        self.0
    }
}

impl core::fmt::Display for EntityType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.0)
    }
}

/// Entity marker + minimal interface.
///
/// An entity carries exactly one identity value object. Equality between entities is
/// decided solely by concrete type + identity; domain field values are irrelevant.
pub trait Entity: Any {
    /// Identity value object.
    type Id: ValueObject + Send + Sync;

    /// Returns the entity identity.
    fn entity_id(&self) -> &Self::Id;

    /// Identity equality against an arbitrary value.
    ///
    /// `true` iff `other` is the same concrete entity type and its identity `equals`
    /// this one. Never panics.
    fn same_identity_as(&self, other: &dyn Any) -> bool
    where
        Self: Sized,
    {
        other
            .downcast_ref::<Self>()
            .is_some_and(|other| self.entity_id().equals(other.entity_id()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Identity;

    #[derive(Debug, Clone)]
    struct Stub {
        id: Identity,
        label: String,
    }

    impl Entity for Stub {
        type Id = Identity;

        fn entity_id(&self) -> &Identity {
            &self.id
        }
    }

    #[derive(Debug, Clone)]
    struct OtherStub {
        id: Identity,
    }

    impl Entity for OtherStub {
        type Id = Identity;

        fn entity_id(&self) -> &Identity {
            &self.id
        }
    }

    #[test]
    fn same_id_means_same_entity_regardless_of_fields() {
        let id = Identity::new();
        let a = Stub {
            id,
            label: "a".to_string(),
        };
        let b = Stub {
            id,
            label: "b".to_string(),
        };
        assert_ne!(a.label, b.label);
        assert!(a.same_identity_as(&b));
        assert!(b.same_identity_as(&a));
        assert!(a.same_identity_as(&a));
    }

    #[test]
    fn different_ids_are_different_entities() {
        let a = Stub {
            id: Identity::new(),
            label: "a".to_string(),
        };
        let b = Stub {
            id: Identity::new(),
            label: "a".to_string(),
        };
        assert!(!a.same_identity_as(&b));
    }

    #[test]
    fn different_entity_types_are_never_equal() {
        let id = Identity::new();
        let a = Stub {
            id,
            label: "a".to_string(),
        };
        let b = OtherStub { id };
        assert!(!a.same_identity_as(&b));
        assert!(!b.same_identity_as(&a));
        assert!(!a.same_identity_as(&id));
    }

    #[test]
    fn entity_type_displays_its_name() {
        const CATEGORY: EntityType = EntityType::new("Category");
        assert_eq!(CATEGORY.to_string(), "Category");
        assert_eq!(CATEGORY.name(), "Category");
    }
}
