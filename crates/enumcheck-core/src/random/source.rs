//! Random index providers.

use crate::errors::{EnumCheckError, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::num::NonZeroUsize;
use std::sync::{Mutex, OnceLock};

/// Strategy supplying uniformly distributed indices.
pub trait RandomSource {
    /// Draw an index uniformly from `0..upper`.
    ///
    /// # Errors
    ///
    /// - `RandomSourceUnavailable` - the generator state could not be acquired
    fn next_index(&self, upper: NonZeroUsize) -> Result<usize>;
}

/// Per-thread generator, seeded from OS entropy on first use in each thread.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_index(&self, upper: NonZeroUsize) -> Result<usize> {
        Ok(rand::thread_rng().gen_range(0..upper.get()))
    }
}

/// A single generator shared between threads behind a mutex.
#[derive(Debug)]
pub struct SharedRandom {
    rng: Mutex<StdRng>,
}

static GLOBAL_RANDOM: OnceLock<SharedRandom> = OnceLock::new();

impl SharedRandom {
    /// Generator seeded from OS entropy
    pub fn from_entropy() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Generator with a fixed seed; equal seeds yield equal sequences
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// The process-wide instance, seeded from entropy on first use
    pub fn global() -> &'static SharedRandom {
        GLOBAL_RANDOM.get_or_init(Self::from_entropy)
    }
}

impl Default for SharedRandom {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl RandomSource for SharedRandom {
    fn next_index(&self, upper: NonZeroUsize) -> Result<usize> {
        let mut rng = self
            .rng
            .lock()
            .map_err(|_| EnumCheckError::RandomSourceUnavailable {
                reason: "shared generator mutex poisoned".to_string(),
            })?;
        Ok(rng.gen_range(0..upper.get()))
    }
}
