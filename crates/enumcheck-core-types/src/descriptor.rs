//! Runtime enumeration descriptors
//!
//! `EnumDescriptor` is the owned, serializable form of an enumeration
//! table. It can be derived from any [`EnumType`] or built by hand (or
//! deserialized) when the enumeration is published by another component.

use crate::EnumType;
use serde::{Deserialize, Serialize};

/// A single `(name, underlying value)` entry of an enumeration
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EnumMember {
    pub name: String,
    pub value: i64,
}

impl EnumMember {
    pub fn new(name: impl Into<String>, value: i64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// Owned description of an enumeration type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumDescriptor {
    /// Fully-qualified type name
    pub full_name: String,
    /// Members in declaration order
    #[serde(default)]
    pub members: Vec<EnumMember>,
}

impl EnumDescriptor {
    /// Create an empty descriptor
    pub fn new(full_name: impl Into<String>) -> Self {
        Self {
            full_name: full_name.into(),
            members: Vec::new(),
        }
    }

    /// Append a member
    pub fn with_member(mut self, name: impl Into<String>, value: i64) -> Self {
        self.members.push(EnumMember::new(name, value));
        self
    }

    /// Build a descriptor from a static enumeration table
    pub fn of<T: EnumType>() -> Self {
        Self {
            full_name: T::FULL_NAME.to_string(),
            members: T::MEMBERS
                .iter()
                .map(|(name, value)| EnumMember::new(*name, value.underlying()))
                .collect(),
        }
    }

    /// Member names in declaration order (duplicates preserved)
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.members.iter().map(|m| m.name.as_str())
    }

    /// Underlying value of the first member called `name`
    pub fn value_of(&self, name: &str) -> Option<i64> {
        self.members.iter().find(|m| m.name == name).map(|m| m.value)
    }

    /// Qualify a member name with this type's full name
    pub fn qualify(&self, name: &str) -> String {
        format!("{}.{}", self.full_name, name)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}
