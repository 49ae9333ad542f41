use crate::config::BenchConfig;
use crate::error::BenchError;
use crate::fill::{fill_keys, Distribution};
use crate::tester::Tester;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::Write;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Resident set size in bytes, 0 where the platform does not report it.
pub fn working_set() -> usize {
    memory_stats::memory_stats().map_or(0, |stats| stats.physical_mem)
}

pub fn write_header<W: Write>(out: &mut W, config: &BenchConfig) -> Result<(), BenchError> {
    write!(out, "Algo,Size,")?;
    for unique in config.uniques.iter() {
        for distribution in config.distributions.iter() {
            write!(out, "U{}/{},", unique, distribution.tag())?;
        }
    }
    writeln!(out, "WS")?;
    Ok(())
}

/// Times one dedup pass over already generated keys: the scan (including
/// `init`), a working set sample and `empty`. Returns the elapsed time and
/// the sampled working set.
pub fn measure(
    tester: &mut dyn Tester,
    keys: &mut Vec<u32>,
    unique: usize,
) -> Result<(Duration, usize), BenchError> {
    let start = Instant::now();
    let res = tester.run(keys, unique);
    let ws = working_set();
    tester.empty();
    let elapsed = start.elapsed();
    res?;
    Ok((elapsed, ws))
}

/// Writes the header and one row per tester and size.
pub fn run_suite<W: Write>(config: &BenchConfig, out: &mut W) -> Result<(), BenchError> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    write_header(out, config)?;
    let mut ws = 0;

    for algorithm in config.algorithms.iter() {
        let mut tester = match algorithm.tester() {
            Some(tester) => tester,
            None => continue,
        };
        info!(tester = tester.name(), "benchmarking");

        for n in config.sizes.iter().copied() {
            write!(out, "{},{},", tester.name(), n)?;
            for unique in config.uniques.iter().copied() {
                for distribution in config.distributions.iter().copied() {
                    if unique > n {
                        write!(out, "_,")?;
                        continue;
                    }
                    let (elapsed, sample) =
                        cell(tester.as_mut(), &mut rng, n, unique, distribution, config)?;
                    ws = sample;
                    write!(out, "{},", elapsed.as_micros())?;
                }
            }
            writeln!(out, "{}", ws)?;
            out.flush()?;
        }
    }
    Ok(())
}

fn cell(
    tester: &mut dyn Tester,
    rng: &mut StdRng,
    n: usize,
    unique: usize,
    distribution: Distribution,
    config: &BenchConfig,
) -> Result<(Duration, usize), BenchError> {
    let mut keys = fill_keys(rng, n, unique, distribution, config.shuffle);
    let res = measure(tester, &mut keys, unique);
    match &res {
        Ok((elapsed, ws)) => debug!(
            tester = tester.name(),
            n,
            unique,
            distribution = distribution.tag(),
            micros = elapsed.as_micros() as u64,
            ws,
            "measured"
        ),
        Err(e) => warn!(tester = tester.name(), n, unique, "{}", e),
    }
    res
}
