//! Enumeration diff computation engine.
//!
//! The core entry point is [`compute_enum_diff`], which compares two
//! [`EnumDescriptor`]s and produces an [`EnumDiff`]. [`enum_differences`]
//! is the typed convenience wrapper returning qualified records.

use crate::diff::human_summary::render_human_summary;
use crate::diff::model::{EnumDiff, ValueMismatch};
use crate::errors::{EnumCheckError, Result};
use crate::logging_facility::elapsed_ms;
use crate::logging_facility::schema::OP_ENUM_DIFFERENCES;
use enumcheck_core_types::{EnumDescriptor, EnumType};
use std::collections::HashSet;
use std::time::Instant;

/// Distinct names in order of first occurrence.
fn distinct_names(desc: &EnumDescriptor) -> Vec<&str> {
    let mut seen = HashSet::new();
    desc.names().filter(|name| seen.insert(*name)).collect()
}

/// Split two name lists around their intersection.
///
/// Returns `(common, only_a, only_b)`; each list keeps the order of its input.
fn name_delta<'a>(a: &[&'a str], b: &[&'a str]) -> (Vec<&'a str>, Vec<&'a str>, Vec<&'a str>) {
    let set_a: HashSet<&str> = a.iter().copied().collect();
    let set_b: HashSet<&str> = b.iter().copied().collect();
    let common: Vec<&str> = a.iter().copied().filter(|n| set_b.contains(n)).collect();
    let only_a: Vec<&str> = a.iter().copied().filter(|n| !set_b.contains(n)).collect();
    let only_b: Vec<&str> = b.iter().copied().filter(|n| !set_a.contains(n)).collect();
    (common, only_a, only_b)
}

/// Compute the structured diff between two enumeration descriptors.
///
/// Only member names take part in the left/right comparison; matching is
/// case-sensitive and exact. Shared names with different underlying values
/// are listed in `value_mismatches` without affecting the records.
pub fn compute_enum_diff(left: &EnumDescriptor, right: &EnumDescriptor) -> EnumDiff {
    let start = Instant::now();
    crate::log_op_start!(
        OP_ENUM_DIFFERENCES,
        left = left.full_name.as_str(),
        right = right.full_name.as_str(),
    );

    let left_names = distinct_names(left);
    let right_names = distinct_names(right);
    let (common, only_left, only_right) = name_delta(&left_names, &right_names);

    let value_mismatches = common
        .iter()
        .filter_map(|name| match (left.value_of(name), right.value_of(name)) {
            (Some(l), Some(r)) if l != r => Some(ValueMismatch {
                name: (*name).to_string(),
                left: l,
                right: r,
            }),
            _ => None,
        })
        .collect();

    let diff = EnumDiff {
        left: left.full_name.clone(),
        right: right.full_name.clone(),
        only_in_left: only_left.into_iter().map(str::to_string).collect(),
        only_in_right: only_right.into_iter().map(str::to_string).collect(),
        value_mismatches,
    };

    crate::log_op_end!(
        OP_ENUM_DIFFERENCES,
        duration_ms = elapsed_ms(start),
        left = left.full_name.as_str(),
        right = right.full_name.as_str(),
        diff_count = diff.len(),
    );

    diff
}

/// Qualified names declared by exactly one of two descriptors.
pub fn descriptor_differences(left: &EnumDescriptor, right: &EnumDescriptor) -> Vec<String> {
    compute_enum_diff(left, right).records()
}

/// Qualified names declared by exactly one of `T1` and `T2`.
///
/// Each record is `"<FULL_NAME>.<member>"`; records for `T1` come first.
/// An empty result means both types declare the same member names.
pub fn enum_differences<T1: EnumType, T2: EnumType>() -> Vec<String> {
    descriptor_differences(&EnumDescriptor::of::<T1>(), &EnumDescriptor::of::<T2>())
}

/// Assert that `T1` and `T2` declare the same member names.
///
/// # Panics
///
/// Panics with a human-readable summary when any name differs.
pub fn assert_same_members<T1: EnumType, T2: EnumType>() {
    let diff = compute_enum_diff(&EnumDescriptor::of::<T1>(), &EnumDescriptor::of::<T2>());
    assert!(
        diff.is_empty(),
        "enumerations declare different members:\n{}",
        render_human_summary(&diff)
    );
}

/// Parse and validate an [`EnumDescriptor`] from JSON.
///
/// # Errors
///
/// - `Serialization` - input is not a valid descriptor document
/// - `InvalidDescriptor` - `full_name` or a member name is blank
pub fn parse_descriptor_json(json: &str) -> Result<EnumDescriptor> {
    let desc: EnumDescriptor = serde_json::from_str(json)?;

    if desc.full_name.trim().is_empty() {
        return Err(EnumCheckError::InvalidDescriptor {
            reason: "`full_name` must not be blank".to_string(),
        });
    }
    if let Some(pos) = desc.members.iter().position(|m| m.name.trim().is_empty()) {
        return Err(EnumCheckError::InvalidDescriptor {
            reason: format!("member at position {} has a blank name", pos),
        });
    }

    Ok(desc)
}
