use crate::error::{Result, SamplingError};
use crate::random_source::RandomSource;
use log::debug;
use num_traits::Float;

/// Draws `q` indices into `weights`, each independently with probability proportional to its
/// weight.
///
/// Zero weights are allowed and are never drawn, as long as the total is positive. All arguments
/// are checked before the first draw, so an error never comes with a partial sample.
///
/// Each draw is an inverse-CDF lookup by linear scan over half-open intervals
/// `[s, s + weights[k])`. If rounding pushes the target past the last interval, the draw falls
/// back to the last index with a positive weight.
pub fn sample_with_replacement<W: Float>(
    rng: &mut RandomSource,
    weights: &[W],
    q: usize,
) -> Result<Vec<usize>> {
    if q == 0 {
        return Err(SamplingError::NonPositiveDrawCount);
    }

    let total = total_weight(weights)?;
    let fallback = last_positive_index(weights);

    debug!(
        "drawing {q} weighted samples over {} weights with total {total}",
        weights.len()
    );

    let samples = (0..q)
        .map(|_| scan_draw(weights, total, fallback, rng.next_uniform_float()))
        .collect();

    Ok(samples)
}

/// A precomputed cumulative table for repeated weighted draws in `O(log n)` each.
///
/// For a given uniform draw this picks the same index as [`sample_with_replacement`], so both
/// follow the same distribution.
#[derive(Debug, Clone)]
pub struct WeightedIndex {
    cumulative: Vec<f64>,
    fallback: usize,
}

impl WeightedIndex {
    pub fn new<W: Float>(weights: &[W]) -> Result<WeightedIndex> {
        total_weight(weights)?;

        let cumulative = weights
            .iter()
            .scan(0.0, |s, w| {
                *s += as_f64(*w);
                Some(*s)
            })
            .collect();

        Ok(WeightedIndex {
            cumulative,
            fallback: last_positive_index(weights),
        })
    }

    pub fn len(&self) -> usize {
        self.cumulative.len()
    }

    /// Always false: a table is never built from an empty weight slice.
    pub fn is_empty(&self) -> bool {
        self.cumulative.is_empty()
    }

    pub fn total(&self) -> f64 {
        self.cumulative.last().copied().unwrap_or(0.0)
    }

    pub fn sample(&self, rng: &mut RandomSource) -> usize {
        self.index_for_uniform(rng.next_uniform_float())
    }

    pub fn sample_n(&self, rng: &mut RandomSource, q: usize) -> Result<Vec<usize>> {
        if q == 0 {
            return Err(SamplingError::NonPositiveDrawCount);
        }

        Ok((0..q).map(|_| self.sample(rng)).collect())
    }

    fn index_for_uniform(&self, u: f64) -> usize {
        self.index_of(u * self.total())
    }

    fn index_of(&self, target: f64) -> usize {
        // The first interval whose upper end lies above the target. Zero-width intervals share
        // their upper end with the previous one and are skipped.
        let k = self.cumulative.partition_point(|&upper| upper <= target);
        if k < self.cumulative.len() {
            k
        } else {
            self.fallback
        }
    }
}

fn as_f64<W: Float>(weight: W) -> f64 {
    weight.to_f64().unwrap_or(f64::NAN)
}

fn total_weight<W: Float>(weights: &[W]) -> Result<f64> {
    if weights.is_empty() {
        return Err(SamplingError::EmptyWeights);
    }

    let mut total = 0.0;
    for (index, weight) in weights.iter().map(|w| as_f64(*w)).enumerate() {
        if weight.is_nan() || weight < 0.0 {
            return Err(SamplingError::InvalidWeight { index, weight });
        }
        total += weight;
    }

    if !total.is_finite() {
        return Err(SamplingError::NonFiniteTotal { total });
    }
    if total <= 0.0 {
        return Err(SamplingError::NonPositiveTotal { total });
    }

    Ok(total)
}

// Only called on validated weights, which always hold a positive entry.
fn last_positive_index<W: Float>(weights: &[W]) -> usize {
    weights
        .iter()
        .rposition(|w| as_f64(*w) > 0.0)
        .unwrap_or(weights.len() - 1)
}

// Maps one uniform draw `u` in `[0, 1)` to an index.
fn scan_draw<W: Float>(weights: &[W], total: f64, fallback: usize, u: f64) -> usize {
    linear_index(weights, u * total, fallback)
}

fn linear_index<W: Float>(weights: &[W], target: f64, fallback: usize) -> usize {
    let mut s = 0.0;
    for (k, weight) in weights.iter().enumerate() {
        let next = s + as_f64(*weight);
        if s <= target && target < next {
            return k;
        }
        s = next;
    }

    fallback
}
