//! Seeded uniform (reservoir) and weighted sampling.

pub mod error;
pub mod random_source;
pub mod reservoir_sample;
pub mod weighted_sample;

pub use error::{ErrorKind, Result, SamplingError};
pub use random_source::{RandomSource, SeedSequence};
pub use reservoir_sample::{
    reservoir_sample, reservoir_sample_iter, reservoir_sample_one, Reservoir,
};
pub use weighted_sample::{sample_with_replacement, WeightedIndex};
