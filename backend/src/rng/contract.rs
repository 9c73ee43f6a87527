//! Generator contract consumed by sampling code
//!
//! Any uniform 64-bit source can drive the samplers in [`crate::sampling`].
//! `MIN` and `MAX` let generic algorithms calibrate without knowing the
//! generator's internals.

/// A seedable source of uniformly distributed 64-bit words
pub trait RandomBitGenerator {
    /// Smallest value `next_u64` can return.
    const MIN: u64;
    /// Largest value `next_u64` can return.
    const MAX: u64;

    /// Hard reset: discard the current state and rebuild it from `seed`,
    /// positioned at the start of substream `worker_index`.
    fn seed(&mut self, seed: u64, worker_index: u64);

    /// Return the next raw output and advance the state.
    fn next_u64(&mut self) -> u64;

    fn min() -> u64
    where
        Self: Sized,
    {
        Self::MIN
    }

    fn max() -> u64
    where
        Self: Sized,
    {
        Self::MAX
    }
}

impl<G: RandomBitGenerator> RandomBitGenerator for &mut G {
    const MIN: u64 = G::MIN;
    const MAX: u64 = G::MAX;

    fn seed(&mut self, seed: u64, worker_index: u64) {
        (**self).seed(seed, worker_index)
    }

    fn next_u64(&mut self) -> u64 {
        (**self).next_u64()
    }
}
