use crate::ByteTrie;
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

/// How the distinct values of an input array are chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Distribution {
    /// `0, 1, .., unique - 1`
    Linear,
    /// Uniform over the whole `u32` range, without repeats.
    Random,
}

impl Distribution {
    /// Column suffix in the report header.
    pub fn tag(&self) -> &'static str {
        match self {
            Distribution::Linear => "L",
            Distribution::Random => "R",
        }
    }
}

/// Builds `n` keys holding exactly `unique` distinct values (`unique <= n`):
/// the distinct values first, then that prefix repeated cyclically, then
/// optionally shuffled.
pub fn fill_keys<R: Rng>(
    rng: &mut R,
    n: usize,
    unique: usize,
    distribution: Distribution,
    shuffle: bool,
) -> Vec<u32> {
    assert!(unique <= n, "unique count {} exceeds size {}", unique, n);
    let mut keys = Vec::with_capacity(n);

    match distribution {
        Distribution::Linear => keys.extend(0..unique as u32),
        Distribution::Random => {
            let mut seen = ByteTrie::new();
            let mut rejected = 0usize;
            while keys.len() < unique {
                let x: u32 = rng.gen();
                if seen.test(x) {
                    rejected += 1;
                    continue;
                }
                seen.insert(x);
                keys.push(x);
            }
            debug!(unique, rejected, "generated random distinct keys");
        }
    }

    if unique > 0 {
        while keys.len() < n {
            let take = (n - keys.len()).min(unique);
            keys.extend_from_within(..take);
        }
    }

    if shuffle {
        keys.shuffle(rng);
    }
    keys
}

#[cfg(test)]
mod tests {
    use super::*;
    use hashbrown::HashMap;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn counts(keys: &[u32]) -> HashMap<u32, usize> {
        let mut map = HashMap::new();
        for key in keys {
            *map.entry(*key).or_insert(0) += 1;
        }
        map
    }

    #[test]
    fn test_linear_fill_repeats_prefix() {
        let mut rng = StdRng::seed_from_u64(1);
        let keys = fill_keys(&mut rng, 10, 4, Distribution::Linear, false);
        assert_eq!(keys, vec![0, 1, 2, 3, 0, 1, 2, 3, 0, 1]);
    }

    #[test]
    fn test_random_fill_has_exact_unique_count() {
        let mut rng = StdRng::seed_from_u64(7);
        for (n, unique) in [(16, 16), (64, 16), (1 << 12, 1 << 6), (1000, 333)] {
            let keys = fill_keys(&mut rng, n, unique, Distribution::Random, true);
            assert_eq!(keys.len(), n);
            let counts = counts(&keys);
            assert_eq!(counts.len(), unique);
            let lo = n / unique;
            let hi = (n + unique - 1) / unique;
            assert!(counts.values().all(|c| *c == lo || *c == hi));
        }
    }

    #[test]
    fn test_shuffle_keeps_multiset() {
        let mut rng = StdRng::seed_from_u64(3);
        let plain = fill_keys(&mut rng, 256, 16, Distribution::Linear, false);
        let shuffled = fill_keys(&mut rng, 256, 16, Distribution::Linear, true);
        assert_ne!(plain, shuffled);
        assert_eq!(counts(&plain), counts(&shuffled));
    }

    #[test]
    fn test_seeded_fill_is_reproducible() {
        let a = fill_keys(&mut StdRng::seed_from_u64(11), 64, 32, Distribution::Random, true);
        let b = fill_keys(&mut StdRng::seed_from_u64(11), 64, 32, Distribution::Random, true);
        assert_eq!(a, b);
    }

    #[test]
    fn test_distribution_tag() {
        assert_eq!(Distribution::Linear.tag(), "L");
        assert_eq!(Distribution::Random.tag(), "R");
    }
}
