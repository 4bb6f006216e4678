use crate::error::{Result, SamplingError};
use log::debug;
use rand::{Rng, RngCore, SeedableRng};
use rand_xoshiro::{SplitMix64, Xoshiro256StarStar};

/// A seeded stream of uniform random numbers.
///
/// Every sampler takes a `&mut RandomSource` instead of reaching for a thread-local or global
/// generator, so a run is reproducible from its seed alone. Two sources built from the same seed
/// and driven through the same calls yield identical outputs.
///
/// A source is mutated on every draw. Share one between threads only behind a lock, or give each
/// worker its own source from a [`SeedSequence`].
#[derive(Debug, Clone)]
pub struct RandomSource {
    seed: u64,
    rng: Xoshiro256StarStar,
}

impl RandomSource {
    pub fn new(seed: u64) -> RandomSource {
        debug!("creating random source with seed {seed}");

        RandomSource {
            seed,
            rng: Xoshiro256StarStar::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns an integer uniformly distributed in `[0, bound)`.
    pub fn next_uniform_int(&mut self, bound: usize) -> Result<usize> {
        if bound == 0 {
            return Err(SamplingError::ZeroBound);
        }

        Ok(self.uniform_below(bound))
    }

    // Callers guarantee `bound > 0`; `gen_range` panics on an empty range.
    pub(crate) fn uniform_below(&mut self, bound: usize) -> usize {
        debug_assert!(bound > 0);
        self.rng.gen_range(0..bound)
    }

    /// Returns a float uniformly distributed in `[0, 1)`.
    pub fn next_uniform_float(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}

impl RngCore for RandomSource {
    fn next_u32(&mut self) -> u32 {
        self.rng.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.rng.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> std::result::Result<(), rand::Error> {
        self.rng.try_fill_bytes(dest)
    }
}

/// Derives a reproducible series of seeds from one root seed, for handing each worker its own
/// [`RandomSource`].
#[derive(Debug, Clone)]
pub struct SeedSequence {
    seeder: SplitMix64,
}

impl SeedSequence {
    pub fn new(root_seed: u64) -> SeedSequence {
        SeedSequence {
            seeder: SplitMix64::seed_from_u64(root_seed),
        }
    }

    pub fn next_seed(&mut self) -> u64 {
        self.seeder.next_u64()
    }

    pub fn next_source(&mut self) -> RandomSource {
        RandomSource::new(self.next_seed())
    }
}
