//! enumcheck core - enumeration helpers for unit tests
//!
//! This crate provides:
//! - Structural comparison of two enumerations by member name (`diff`)
//! - Uniform random selection of a declared value (`random`)
//! - The canonical error facility (`errors`)
//! - Structured logging with a test capture mode (`logging_facility`)
//!
//! Enumerations are described by the static tables of
//! [`EnumType`], usually declared with [`enum_type!`].

pub mod diff;
pub mod errors;
pub mod logging_facility;
pub mod random;

// Re-export commonly used types
pub use diff::{
    assert_same_members, compute_enum_diff, descriptor_differences, enum_differences,
    render_human_summary, EnumDiff,
};
pub use enumcheck_core_types::{enum_type, EnumDescriptor, EnumMember, EnumType};
pub use errors::{EnumCheckError, ExError, ExErrorKind, Result};
pub use random::{random_value, random_value_with, RandomSource, SharedRandom, ThreadRandom};

#[doc(hidden)]
pub use tracing;
