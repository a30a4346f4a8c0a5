//! Uniform index sampling over a 32-bit random source.
//!
//! Reducing a raw `u32` with `% range` favours low values whenever `range`
//! does not divide 2^32, so draws at or above the largest multiple of
//! `range` are rejected and redrawn.

use rand::RngCore;
use rand::rngs::ThreadRng;
use tracing::debug;

use crate::error::GeneratorError;

const SOURCE_SPAN: u64 = 1 << 32;

/// Largest multiple of `range` not above 2^32. Draws at or above it are rejected.
pub(crate) fn acceptance_limit(range: u32) -> u64 {
    let range = u64::from(range);
    (SOURCE_SPAN / range) * range
}

pub struct IndexSampler<R: RngCore> {
    rng: R,
}

impl IndexSampler<ThreadRng> {
    /// Sampler backed by the thread-local CSPRNG, reseeded from the OS.
    pub fn from_os_entropy() -> Self {
        Self { rng: rand::rng() }
    }
}

impl<R: RngCore> IndexSampler<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Uniformly distributed index in `[0, range)`.
    pub fn sample(&mut self, range: usize) -> Result<usize, GeneratorError> {
        let range = u32::try_from(range)
            .ok()
            .filter(|&r| r > 0)
            .ok_or(GeneratorError::EmptyRange)?;
        let limit = acceptance_limit(range);

        loop {
            let value = self.rng.next_u32();
            if u64::from(value) < limit {
                return Ok((value % range) as usize);
            }
            debug!(value, range, "rejected biased draw");
        }
    }
}
