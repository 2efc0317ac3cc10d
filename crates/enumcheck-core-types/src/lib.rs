//! Core types shared across enumcheck facilities
//!
//! This crate provides the foundational types used by the comparison,
//! randomisation and logging facilities:
//!
//! - **Enumeration tables**: the `EnumType` trait and the `enum_type!` macro
//! - **Descriptors**: `EnumDescriptor` / `EnumMember`, the runtime form of a table
//! - **Schema constants**: Canonical field keys, operation and event names

pub mod descriptor;
pub mod enum_type;
pub mod schema;

pub use descriptor::{EnumDescriptor, EnumMember};
pub use enum_type::EnumType;
