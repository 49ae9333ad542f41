use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use std::io;
use tracing::{info, Level};
use trie_dedup::config::{BenchConfig, SIZE_COUNTS, UNIQUE_COUNTS};
use trie_dedup::report::run_suite;
use trie_dedup::tester::Algorithm;

/// Times duplicate removal from u32 arrays and prints the results as CSV
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// With 1, only the largest selected size and unique count are measured
    #[clap(short = 'c', long, default_value_t = 0)]
    runs: usize,

    /// How many array sizes to use, from 16 upward
    #[clap(short = 'n', long, default_value_t = SIZE_COUNTS.len())]
    sizes: usize,

    /// How many unique counts to use, from 16 upward
    #[clap(short = 'u', long, default_value_t = UNIQUE_COUNTS.len())]
    uniques: usize,

    /// Shuffle each array after filling it
    #[clap(short, long)]
    shuffle: bool,

    /// Measure linear and random fills (the default)
    #[clap(short, long, conflicts_with = "linear")]
    random: bool,

    /// Measure linear fills only
    #[clap(short, long)]
    linear: bool,

    /// Strategy to measure, may be repeated
    #[clap(short = 't', long = "test", value_enum, ignore_case = true)]
    tests: Vec<Algorithm>,

    /// Seed for the random fills
    #[clap(long)]
    seed: Option<u64>,

    /// Log each measurement
    #[clap(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args: Args = Args::parse();

    //logging
    let level = if args.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    let config = match BenchConfig::new(
        args.runs,
        args.sizes,
        args.uniques,
        args.linear && !args.random,
        &args.tests,
        args.shuffle,
        args.seed,
    ) {
        Ok(config) => config,
        Err(e) => Args::command().error(ErrorKind::ValueValidation, e).exit(),
    };
    info!(
        sizes = ?config.sizes,
        uniques = ?config.uniques,
        algorithms = ?config.algorithms,
        shuffle = config.shuffle,
        "starting"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_suite(&config, &mut out)?;
    Ok(())
}
