//! Enumeration diff output types.
//!
//! All types implement `Debug, Clone, Serialize, Deserialize, PartialEq`.
//! Collections keep declaration order so serialized output is deterministic.

use crate::errors::Result;
use serde::{Deserialize, Serialize};

/// The structured diff between two enumerations.
///
/// `only_in_left` / `only_in_right` drive the difference records.
/// `value_mismatches` is informational and never produces a record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EnumDiff {
    /// Full name of the left-hand enumeration
    pub left: String,
    /// Full name of the right-hand enumeration
    pub right: String,
    /// Names declared only by the left enumeration
    pub only_in_left: Vec<String>,
    /// Names declared only by the right enumeration
    pub only_in_right: Vec<String>,
    /// Shared names whose underlying values differ
    pub value_mismatches: Vec<ValueMismatch>,
}

/// A member name present on both sides with different underlying values.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValueMismatch {
    pub name: String,
    pub left: i64,
    pub right: i64,
}

impl EnumDiff {
    /// True when both enumerations declare the same set of names
    pub fn is_empty(&self) -> bool {
        self.only_in_left.is_empty() && self.only_in_right.is_empty()
    }

    /// Number of difference records
    pub fn len(&self) -> usize {
        self.only_in_left.len() + self.only_in_right.len()
    }

    /// Qualified difference records: left-only names first, then right-only
    pub fn records(&self) -> Vec<String> {
        self.only_in_left
            .iter()
            .map(|name| format!("{}.{}", self.left, name))
            .chain(
                self.only_in_right
                    .iter()
                    .map(|name| format!("{}.{}", self.right, name)),
            )
            .collect()
    }

    /// Pretty-printed JSON form of the diff
    ///
    /// # Errors
    ///
    /// - `Serialization` - the diff could not be encoded
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
