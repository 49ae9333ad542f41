use crate::error::BenchError;
use crate::fill::Distribution;
use crate::tester::Algorithm;

/// Input array lengths, smallest first.
pub const SIZE_COUNTS: [usize; 10] = [
    1 << 4,
    1 << 6,
    1 << 8,
    1 << 10,
    1 << 12,
    1 << 14,
    1 << 16,
    1 << 18,
    1 << 20,
    1 << 22,
];

/// Distinct value counts, smallest first.
pub const UNIQUE_COUNTS: [usize; 10] = SIZE_COUNTS;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchConfig {
    pub sizes: Vec<usize>,
    pub uniques: Vec<usize>,
    pub distributions: Vec<Distribution>,
    pub algorithms: Vec<Algorithm>,
    pub shuffle: bool,
    pub seed: Option<u64>,
}

impl BenchConfig {
    /// `size_count`/`unique_count` select that many entries from the front
    /// of the tables. With `runs == 1` only the last selected size and unique
    /// count are measured.
    pub fn new(
        runs: usize,
        size_count: usize,
        unique_count: usize,
        linear_only: bool,
        algorithms: &[Algorithm],
        shuffle: bool,
        seed: Option<u64>,
    ) -> Result<Self, BenchError> {
        if size_count > SIZE_COUNTS.len() {
            return Err(BenchError::SizeOutOfRange {
                requested: size_count,
                max: SIZE_COUNTS.len(),
            });
        }
        if unique_count > UNIQUE_COUNTS.len() {
            return Err(BenchError::UniqueOutOfRange {
                requested: unique_count,
                max: UNIQUE_COUNTS.len(),
            });
        }

        let single = runs == 1;
        let window = |table: &[usize], count: usize| -> Vec<usize> {
            let start = if single { count.saturating_sub(1) } else { 0 };
            table[start..count].to_vec()
        };

        let distributions = if linear_only {
            vec![Distribution::Linear]
        } else {
            vec![Distribution::Linear, Distribution::Random]
        };

        Ok(BenchConfig {
            sizes: window(&SIZE_COUNTS, size_count),
            uniques: window(&UNIQUE_COUNTS, unique_count),
            distributions,
            algorithms: Algorithm::resolve(algorithms),
            shuffle,
            seed,
        })
    }
}

impl Default for BenchConfig {
    fn default() -> Self {
        BenchConfig {
            sizes: SIZE_COUNTS.to_vec(),
            uniques: UNIQUE_COUNTS.to_vec(),
            distributions: vec![Distribution::Linear, Distribution::Random],
            algorithms: Algorithm::EACH.to_vec(),
            shuffle: false,
            seed: None,
        }
    }
}
