use log::info;
use rayon::prelude::*;
use samplekit::{reservoir_sample, RandomSource, SeedSequence};

#[derive(Debug, PartialEq)]
pub struct UniformityReport {
    pub trials: usize,
    pub expected: f64,
    pub frequencies: Vec<f64>,
}

impl UniformityReport {
    pub fn max_deviation(&self) -> f64 {
        self.frequencies
            .iter()
            .map(|f| (f - self.expected).abs())
            .fold(0.0, f64::max)
    }
}

/// Repeats a `k`-of-`len` reservoir sample `trials` times and reports how often each element was
/// picked. Every trial gets its own source, seeded from `root_seed`, so the report does not depend
/// on how rayon schedules the trials.
pub fn check_reservoir_uniformity(
    root_seed: u64,
    len: usize,
    k: usize,
    trials: usize,
) -> UniformityReport {
    let mut seeder = SeedSequence::new(root_seed);
    let seeds: Vec<u64> = (0..trials).map(|_| seeder.next_seed()).collect();
    let input: Vec<usize> = (0..len).collect();

    info!("running {trials} trials of {k} out of {len}");

    let counts = seeds
        .par_iter()
        .fold(
            || vec![0usize; len],
            |mut counts, seed| {
                let mut rng = RandomSource::new(*seed);
                for x in reservoir_sample(&mut rng, &input, k) {
                    counts[x] += 1;
                }
                counts
            },
        )
        .reduce(
            || vec![0usize; len],
            |mut a, b| {
                for (x, y) in a.iter_mut().zip(b) {
                    *x += y;
                }
                a
            },
        );

    let expected = if len == 0 {
        0.0
    } else {
        k.min(len) as f64 / len as f64
    };

    let frequencies = counts
        .into_iter()
        .map(|c| if trials == 0 { 0.0 } else { c as f64 / trials as f64 })
        .collect();

    UniformityReport {
        trials,
        expected,
        frequencies,
    }
}
