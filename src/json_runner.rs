use anyhow::{Context, Result};
use itertools::Itertools;
use log::info;
use samplekit::{reservoir_sample, sample_with_replacement, RandomSource, WeightedIndex};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use std::io::{Read, Write};

#[derive(Serialize, Debug, PartialEq, Eq)]
pub struct WeightedSampleJson {
    pub indices: Vec<usize>,
    pub counts: Vec<usize>,
}

impl WeightedSampleJson {
    fn new(indices: Vec<usize>, num_weights: usize) -> Self {
        let tally = indices.iter().counts();
        let counts = (0..num_weights)
            .map(|i| tally.get(&i).copied().unwrap_or(0))
            .collect();

        WeightedSampleJson { indices, counts }
    }
}

fn write_json<T: Serialize, W: Write>(mut writer: W, obj: T) -> Result<()> {
    serde_json::to_writer(&mut writer, &obj)?;
    writeln!(&mut writer)?;
    Ok(())
}

fn read_json<T: DeserializeOwned, R: Read>(reader: R) -> Result<T> {
    let json: T = serde_json::from_reader(reader)?;
    Ok(json)
}

pub fn run_reservoir<R: Read, W: Write>(reader: R, writer: W, seed: u64, k: usize) -> Result<()> {
    let elements: Vec<Value> = read_json(reader).context("expected a JSON array of elements")?;

    info!("sampling {k} of {} elements with seed {seed}", elements.len());

    let mut rng = RandomSource::new(seed);
    write_json(writer, reservoir_sample(&mut rng, &elements, k))
}

pub fn run_weighted<R: Read, W: Write>(
    reader: R,
    writer: W,
    seed: u64,
    q: usize,
    use_table: bool,
) -> Result<()> {
    let weights: Vec<f64> = read_json(reader).context("expected a JSON array of weights")?;

    info!(
        "drawing {q} samples over {} weights with seed {seed}",
        weights.len()
    );

    let mut rng = RandomSource::new(seed);
    let indices = if use_table {
        WeightedIndex::new(&weights)?.sample_n(&mut rng, q)?
    } else {
        sample_with_replacement(&mut rng, &weights, q)?
    };

    write_json(writer, WeightedSampleJson::new(indices, weights.len()))
}
