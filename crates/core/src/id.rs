//! Identity value object used to name entity instances.

use core::str::FromStr;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use uuid::{Uuid, Variant};

use crate::error::DomainError;
use crate::value_object::ValueObject;

/// Length of the canonical hyphenated UUID form (`8-4-4-4-12`).
pub const IDENTITY_LEN: usize = 36;

/// UUID-backed identity of an entity.
///
/// Renders as the canonical 36-character hyphenated lowercase string and serializes
/// as that string.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Identity(Uuid);

impl Identity {
    /// Generate a fresh random identity (UUIDv4, 122 random bits).
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a canonical hyphenated UUID string.
    ///
    /// Simple (no hyphens), braced and URN forms are rejected: only the 36-character
    /// representation is accepted. The value must be the nil UUID or an RFC 4122
    /// UUID of version 1 to 5.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        if s.len() != IDENTITY_LEN {
            return Err(DomainError::invalid_identifier(format!(
                "Invalid UUID: expected {IDENTITY_LEN} characters, got {}",
                s.len()
            )));
        }
        let uuid = Uuid::try_parse(s)
            .map_err(|e| DomainError::invalid_identifier(format!("Invalid UUID: {e}")))?;
        if !uuid.is_nil()
            && (uuid.get_variant() != Variant::RFC4122
                || !(1..=5).contains(&uuid.get_version_num()))
        {
            return Err(DomainError::invalid_identifier(format!(
                "Invalid UUID: {s} is not an RFC 4122 UUID"
            )));
        }
        Ok(Self(uuid))
    }

    /// Use the supplied string when present, otherwise generate a new identity.
    pub fn from_optional(s: Option<&str>) -> Result<Self, DomainError> {
        match s {
            Some(s) => Self::parse(s),
            None => Ok(Self::new()),
        }
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for Identity {
    fn default() -> Self {
        Self::new()
    }
}

impl ValueObject for Identity {}

impl core::fmt::Display for Identity {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0.hyphenated(), f)
    }
}

impl From<Uuid> for Identity {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<Identity> for Uuid {
    fn from(value: Identity) -> Self {
        value.0
    }
}

impl FromStr for Identity {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for Identity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Identity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn generated_identity_is_canonical() {
        let id = Identity::new();
        let s = id.to_string();
        assert_eq!(s.len(), IDENTITY_LEN);
        assert_eq!(s, s.to_lowercase());
    }

    #[test]
    fn accepts_a_valid_uuid() {
        let valid = "123e4567-e89b-12d3-a456-426614174000";
        let id = Identity::parse(valid).unwrap();
        assert_eq!(id.to_string(), valid);
    }

    #[test]
    fn accepts_the_nil_uuid() {
        let nil = "00000000-0000-0000-0000-000000000000";
        assert_eq!(Identity::parse(nil).unwrap().to_string(), nil);
    }

    #[test]
    fn round_trip_reproduces_an_equal_identity() {
        let original = Identity::new();
        let parsed: Identity = original.to_string().parse().unwrap();
        assert!(parsed.equals(&original));
        assert_eq!(parsed, original);
    }

    #[test]
    fn rejects_invalid_uuid() {
        let err = Identity::parse("invalid-uuid").unwrap_err();
        assert!(matches!(err, DomainError::InvalidIdentifier(_)));
    }

    #[test]
    fn rejects_non_canonical_forms() {
        for s in [
            "123e4567e89b12d3a456426614174000",
            "{123e4567-e89b-12d3-a456-426614174000}",
            "urn:uuid:123e4567-e89b-12d3-a456-426614174000",
            "123e4567-e89b-12d3-a456-42661417400g",
            "123e4567-e89b-02d3-0456-426614174000",
            "123e4567-e89b-72d3-a456-426614174000",
            "123e4567-e89b-12d3-c456-426614174000",
            "",
        ] {
            assert!(
                matches!(Identity::parse(s), Err(DomainError::InvalidIdentifier(_))),
                "expected rejection for {s:?}"
            );
        }
    }

    #[test]
    fn from_optional_generates_or_parses() {
        let valid = "123e4567-e89b-12d3-a456-426614174000";
        assert_eq!(
            Identity::from_optional(Some(valid)).unwrap().to_string(),
            valid
        );
        assert!(Identity::from_optional(None).is_ok());
        assert!(Identity::from_optional(Some("nope")).is_err());
    }

    #[test]
    fn generates_distinct_identities() {
        let ids: HashSet<Identity> = (0..1_000).map(|_| Identity::new()).collect();
        assert_eq!(ids.len(), 1_000);
    }

    #[test]
    fn serializes_as_string() {
        let id = Identity::parse("123e4567-e89b-12d3-a456-426614174000").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"123e4567-e89b-12d3-a456-426614174000\"");

        let back: Identity = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);

        assert!(serde_json::from_str::<Identity>("\"invalid-uuid\"").is_err());
    }
}
