mod json_runner;
mod trials;

use anyhow::Result;
use clap::{Parser, Subcommand};
use itertools::Itertools;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "samplekit", version, about = "Seeded reservoir and weighted sampling")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Pick `n` elements of a JSON array on stdin uniformly without replacement
    Reservoir {
        #[arg(long, default_value_t = 0)]
        seed: u64,
        /// Sample size; zero or negative yields an empty sample
        #[arg(short, allow_negative_numbers = true)]
        n: i64,
    },
    /// Draw `q` indices into a JSON array of weights on stdin, with replacement
    Weighted {
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(short, allow_negative_numbers = true)]
        q: i64,
        /// Use a cumulative table with binary search instead of a linear scan
        #[arg(long)]
        table: bool,
    },
    /// Measure how evenly the reservoir sampler picks elements over many trials
    Check {
        #[arg(long, default_value_t = 5498709864)]
        seed: u64,
        #[arg(long, default_value_t = 10)]
        len: usize,
        #[arg(short, default_value_t = 3, allow_negative_numbers = true)]
        n: i64,
        #[arg(long, default_value_t = 100_000)]
        trials: usize,
    },
}

// Negative counts behave like zero.
fn clamp_count(count: i64) -> usize {
    usize::try_from(count).unwrap_or(0)
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Command::Reservoir { seed, n } => json_runner::run_reservoir(
            std::io::stdin().lock(),
            std::io::stdout(),
            seed,
            clamp_count(n),
        ),
        Command::Weighted { seed, q, table } => json_runner::run_weighted(
            std::io::stdin().lock(),
            std::io::stdout(),
            seed,
            clamp_count(q),
            table,
        ),
        Command::Check {
            seed,
            len,
            n,
            trials,
        } => {
            let start_time = Instant::now();

            let report = trials::check_reservoir_uniformity(seed, len, clamp_count(n), trials);

            println!(
                "[Trials: {}] [Expected: {:.4}] [Max deviation: {:.4}]",
                report.trials,
                report.expected,
                report.max_deviation()
            );
            println!(
                "{}",
                report
                    .frequencies
                    .iter()
                    .map(|f| format!("{f:.4}"))
                    .join(" ")
            );

            let run_time = start_time.elapsed();

            println!("{} seconds", run_time.as_secs_f32());

            Ok(())
        }
    }
}
