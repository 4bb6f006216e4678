use crate::random_source::RandomSource;
use log::debug;

/// Picks `k` elements of `input` uniformly at random without replacement (Algorithm R).
///
/// Asking for no elements yields an empty sample and asking for at least as many elements as
/// there are yields a copy of the whole input in its original order. Neither case draws from
/// `rng`.
pub fn reservoir_sample<T: Clone>(rng: &mut RandomSource, input: &[T], k: usize) -> Vec<T> {
    debug!("reservoir sample of {k} out of {} elements", input.len());

    if k >= input.len() {
        return input.to_vec();
    }

    // Sample references so only the kept elements get cloned.
    reservoir_sample_iter(rng, input.iter(), k)
        .into_iter()
        .cloned()
        .collect()
}

/// Single-pass variant of [`reservoir_sample`] that never holds more than `k` items of `source`.
///
/// Given the same seed and the same items, this draws exactly what the slice version draws.
pub fn reservoir_sample_iter<T, I: IntoIterator<Item = T>>(
    rng: &mut RandomSource,
    source: I,
    k: usize,
) -> Vec<T> {
    if k == 0 {
        return Vec::new();
    }

    let mut source = source.into_iter();
    let mut samples = Vec::with_capacity(k);

    for _ in 0..k {
        if let Some(x) = source.next() {
            samples.push(x);
        } else {
            break;
        }
    }

    // `i` is the 0-based position of `sample` in the source.
    for (i, sample) in (k..).zip(source) {
        let j = rng.uniform_below(i + 1);
        if j < k {
            samples[j] = sample;
        }
    }

    samples
}

pub fn reservoir_sample_one<T, I: IntoIterator<Item = T>>(
    rng: &mut RandomSource,
    source: I,
) -> Option<T> {
    let mut source = source.into_iter();
    let mut chosen = source.next()?;

    for (i, sample) in (1..).zip(source) {
        if rng.uniform_below(i + 1) == 0 {
            chosen = sample;
        }
    }

    Some(chosen)
}

/// An incremental reservoir for items that arrive one at a time.
#[derive(Debug, Clone)]
pub struct Reservoir<T> {
    capacity: usize,
    seen: usize,
    samples: Vec<T>,
}

impl<T> Reservoir<T> {
    pub fn new(capacity: usize) -> Reservoir<T> {
        Reservoir {
            capacity,
            seen: 0,
            samples: Vec::with_capacity(capacity),
        }
    }

    pub fn observe(&mut self, rng: &mut RandomSource, item: T) {
        self.seen += 1;

        if self.samples.len() < self.capacity {
            self.samples.push(item);
            return;
        }

        if self.capacity == 0 {
            return;
        }

        let j = rng.uniform_below(self.seen);
        if j < self.capacity {
            self.samples[j] = item;
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of items observed so far, kept or not.
    pub fn seen(&self) -> usize {
        self.seen
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.samples
    }

    pub fn into_sample(self) -> Vec<T> {
        self.samples
    }
}
