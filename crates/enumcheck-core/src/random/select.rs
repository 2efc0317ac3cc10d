//! Random value selection.

use crate::errors::{EnumCheckError, Result};
use crate::logging_facility::elapsed_ms;
use crate::logging_facility::schema::OP_RANDOM_VALUE;
use crate::random::source::{RandomSource, ThreadRandom};
use enumcheck_core_types::EnumType;
use std::num::NonZeroUsize;
use std::time::Instant;

/// Pick a declared value of `T` uniformly at random.
///
/// Uses the calling thread's generator. Every entry of `T::MEMBERS`,
/// aliases included, is an equally likely candidate.
///
/// # Errors
///
/// - `EmptyDomain` - `T` declares no values
pub fn random_value<T: EnumType>() -> Result<T> {
    random_value_with::<T, _>(&ThreadRandom)
}

/// Pick a declared value of `T` uniformly at random using `source`.
///
/// # Errors
///
/// - `EmptyDomain` - `T` declares no values
/// - `RandomSourceUnavailable` - the source could not produce an index
/// - `IndexOutOfRange` - the source returned an index outside `0..N`
pub fn random_value_with<T, R>(source: &R) -> Result<T>
where
    T: EnumType,
    R: RandomSource + ?Sized,
{
    let start = Instant::now();
    let members = T::MEMBERS;
    crate::log_op_start!(
        OP_RANDOM_VALUE,
        enum_type = T::FULL_NAME,
        member_count = members.len(),
    );

    match pick(members, source) {
        Ok((index, value)) => {
            crate::log_op_end!(
                OP_RANDOM_VALUE,
                duration_ms = elapsed_ms(start),
                enum_type = T::FULL_NAME,
                index = index,
            );
            Ok(value)
        }
        Err(err) => {
            crate::log_op_error!(
                OP_RANDOM_VALUE,
                err.clone(),
                duration_ms = elapsed_ms(start),
                enum_type = T::FULL_NAME,
            );
            Err(err)
        }
    }
}

fn pick<T, R>(members: &[(&'static str, T)], source: &R) -> Result<(usize, T)>
where
    T: EnumType,
    R: RandomSource + ?Sized,
{
    let upper = NonZeroUsize::new(members.len()).ok_or_else(|| EnumCheckError::EmptyDomain {
        enum_type: T::FULL_NAME.to_string(),
    })?;

    let index = source.next_index(upper)?;
    members
        .get(index)
        .map(|(_, value)| (index, *value))
        .ok_or_else(|| EnumCheckError::IndexOutOfRange {
            enum_type: T::FULL_NAME.to_string(),
            index,
            len: members.len(),
        })
}
