//! Shared resource model: identifiers, kinds, and stored records.
//!
//! Every content type the CMS serves is a set of text-ish fields plus a
//! server-assigned [`ResourceId`]. A field set implements [`ResourceFields`]
//! to describe its naming and the rules its fields must satisfy; the
//! controller and the stores are generic over that trait.

use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use super::validation::FieldCheck;

/// Server-assigned resource identifier.
///
/// Serialised as the hyphenated UUID string. Identifiers are time ordered so
/// listing by id also lists by creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceId(Uuid);

impl ResourceId {
    /// Mint a fresh, time-ordered identifier.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::now_v7())
    }

    /// Parse a path segment into an identifier.
    ///
    /// Returns `None` for anything that is not a UUID; callers treat that as
    /// a missing resource.
    ///
    /// # Examples
    /// ```
    /// use burzcontent::domain::ResourceId;
    ///
    /// assert!(ResourceId::parse("abc").is_none());
    /// assert!(ResourceId::parse("0190f7b4-8a4e-7cc0-9a64-4b0b2f1d2c3e").is_some());
    /// ```
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Uuid::parse_str(raw).ok().map(Self)
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Naming for one resource type, used for routes, envelopes and messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceKind {
    /// Envelope key for a single record, e.g. `user`.
    pub singular: &'static str,
    /// Route segment and envelope key for collections, e.g. `users`.
    pub plural: &'static str,
    /// Capitalised name used in messages, e.g. `User`.
    pub title: &'static str,
}

impl ResourceKind {
    /// Message reported when a record of this kind cannot be found.
    #[must_use]
    pub fn not_found_message(&self) -> String {
        format!("{} not found", self.title)
    }
}

/// Client-writable fields of a resource type.
///
/// Implementors deserialise from the request body with missing fields
/// defaulted, so absent attributes surface as `required` violations rather
/// than parse failures.
pub trait ResourceFields:
    Serialize + DeserializeOwned + Clone + fmt::Debug + PartialEq + Send + Sync + 'static
{
    /// Naming for this resource type.
    const KIND: ResourceKind;

    /// Fields paired with their ordered rules.
    fn checks(&self) -> Vec<FieldCheck<'_>>;
}

/// Deserialise an explicit `null` as the field's default.
///
/// Paired with `#[serde(default)]` on a field set so that a `null`
/// attribute is treated like an absent one and reaches validation.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// A stored resource: its identifier plus its fields, flattened on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "F: DeserializeOwned"))]
pub struct Record<F> {
    pub id: ResourceId,
    #[serde(flatten)]
    pub fields: F,
}

impl<F> Record<F> {
    pub fn new(id: ResourceId, fields: F) -> Self {
        Self { id, fields }
    }
}
