//! Uniform random selection from enumeration tables.
//!
//! Draws go through a [`RandomSource`] strategy so callers choose how the
//! generator state is shared:
//!
//! - [`ThreadRandom`] - one generator per thread, no locking (default)
//! - [`SharedRandom`] - one generator behind a mutex; [`SharedRandom::global`]
//!   is the lazily seeded process-wide instance
//! - [`SharedRandom::seeded`] - reproducible sequences for tests

pub mod select;
pub mod source;

pub use select::{random_value, random_value_with};
pub use source::{RandomSource, SharedRandom, ThreadRandom};
