//! Value object trait: equality by value, not identity.
//!
//! Value objects are domain objects that have **no identity** - they are defined entirely
//! by their attribute values. Two value objects with the same values are considered equal.

use core::any::Any;

/// Value object contract.
///
/// Value objects are domain objects that are **immutable** and **compared by value**.
/// Each concrete type supplies its structural equality through `PartialEq` (usually
/// derived), so no runtime field introspection is needed.
///
/// ## Value Object vs Entity
///
/// - **Value Object**: No identity (two value objects with same values are equal)
/// - **Entity**: Has identity (two entities with same ID are the same entity)
///
/// ## Heterogeneous equality
///
/// `equals` accepts any `&dyn Any`. It is `true` only when the other value is the exact
/// same concrete type **and** all fields compare equal. A different variant (even one
/// with overlapping field names) or a non-value-object yields `false`; it never panics.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Money {
///     amount: i64,
///     currency: String,
/// }
///
/// impl ValueObject for Money {}
///
/// let m1 = Money { amount: 100, currency: "USD".to_string() };
/// let m2 = Money { amount: 100, currency: "USD".to_string() };
/// assert!(m1.equals(&m2));
/// assert!(!m1.equals(&"USD"));
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug + Any {
    /// Structural equality against an arbitrary value.
    fn equals(&self, other: &dyn Any) -> bool {
        other
            .downcast_ref::<Self>()
            .is_some_and(|other| self == other)
    }
}

/// Equality that treats an absent side as "never equal".
///
/// `None` models the empty/absent value object state: comparing against it is always
/// `false`, including `None` vs `None`.
pub fn equals_optional<V: ValueObject>(left: Option<&V>, right: Option<&dyn Any>) -> bool {
    match (left, right) {
        (Some(left), Some(right)) => left.equals(right),
        _ => false,
    }
}
