//! Enumeration diff engine.
//!
//! Compares the member-name sets of two enumerations and reports every name
//! declared by exactly one of them.
//!
//! ## Entry points
//!
//! ```
//! use enumcheck_core::{enum_type, diff::enum_differences};
//!
//! enum_type! {
//!     #[derive(Debug, Clone, Copy)]
//!     enum T1 as "Namespace.T1" { Alpha, Beta, Gamma }
//! }
//! enum_type! {
//!     #[derive(Debug, Clone, Copy)]
//!     enum T2 as "Namespace.T2" { Beta, Gamma, Delta }
//! }
//!
//! assert_eq!(
//!     enum_differences::<T1, T2>(),
//!     vec!["Namespace.T1.Alpha", "Namespace.T2.Delta"]
//! );
//! ```
//!
//! ## Guarantees
//!
//! - **Name-only**: values and declaration order never make two names differ.
//! - **Ordering**: left-only names first, then right-only names, each group
//!   in declaration order of first occurrence.
//! - **Set semantics**: a name repeated within one table is reported once.

pub mod engine;
pub mod human_summary;
pub mod model;

pub use engine::{
    assert_same_members, compute_enum_diff, descriptor_differences, enum_differences,
    parse_descriptor_json,
};
pub use human_summary::render_human_summary;
pub use model::{EnumDiff, ValueMismatch};
