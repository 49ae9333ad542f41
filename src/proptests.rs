use super::*;

use hashbrown::HashSet;
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

fn build<S: MembershipSet>(keys: &[u32]) -> S {
    let mut set = S::default();
    for key in keys {
        set.insert(*key);
    }
    set
}

fn check_against_model<S: MembershipSet>(keys: &[u32], probes: &[u32]) {
    let model: HashSet<u32> = keys.iter().copied().collect();
    let mut set: S = build(keys);
    for key in keys.iter().chain(probes.iter()) {
        let expected = model.contains(key);
        assert_eq!(set.contains(*key), expected, "contains({:#x})", key);
        assert_eq!(set.test(*key), expected, "test({:#x})", key);
    }
}

/// Keys clustered on a few prefixes so leaves are shared.
fn clustered_keys() -> impl Strategy<Value = Vec<u32>> {
    (
        prop::collection::vec(any::<u32>(), 1..4),
        prop::collection::vec((0usize..4, any::<u16>()), 0..200),
    )
        .prop_map(|(bases, offsets)| {
            offsets
                .into_iter()
                .map(|(i, off)| (bases[i % bases.len()] & 0xFFFF_0000) | off as u32)
                .collect()
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_matches_model(keys in prop::collection::vec(any::<u32>(), 0..300),
                          probes in prop::collection::vec(any::<u32>(), 0..300)) {
        check_against_model::<ByteTrie>(&keys, &probes);
        check_against_model::<NibbleTrie>(&keys, &probes);
    }

    #[test]
    fn prop_matches_model_clustered(keys in clustered_keys(), probes in clustered_keys()) {
        check_against_model::<ByteTrie>(&keys, &probes);
        check_against_model::<NibbleTrie>(&keys, &probes);
    }

    #[test]
    fn prop_insert_is_idempotent(keys in prop::collection::vec(any::<u32>(), 0..100), times in 1usize..4) {
        let once: ByteTrie = build(&keys);
        let mut repeated = ByteTrie::new();
        for _ in 0..times {
            for key in keys.iter() {
                repeated.insert(*key);
            }
        }
        prop_assert_eq!(&once, &repeated);

        let once: NibbleTrie = build(&keys);
        let mut repeated = NibbleTrie::new();
        for _ in 0..times {
            for key in keys.iter() {
                repeated.insert(*key);
            }
        }
        prop_assert_eq!(&once, &repeated);
    }

    #[test]
    fn prop_order_independent(keys in prop::collection::vec(any::<u32>(), 0..200), seed in any::<u64>()) {
        let mut shuffled = keys.clone();
        shuffled.shuffle(&mut StdRng::seed_from_u64(seed));
        prop_assert_eq!(build::<ByteTrie>(&keys), build::<ByteTrie>(&shuffled));
        prop_assert_eq!(build::<NibbleTrie>(&keys), build::<NibbleTrie>(&shuffled));
    }

    #[test]
    fn prop_contains_never_grows(keys in prop::collection::vec(any::<u32>(), 0..100),
                                 probes in prop::collection::vec(any::<u32>(), 1..100)) {
        let trie: NibbleTrie = build(&keys);
        let before = trie.footprint();
        for key in probes.iter() {
            trie.contains(*key);
        }
        prop_assert_eq!(trie.footprint(), before);
    }
}

#[test]
fn test_exhaustive_16_bit_universe() {
    // every third key of the lowest 16-bit block, and the same pattern in
    // the highest block so every level of the path differs between them
    let mut bytes = ByteTrie::new();
    let mut nibbles = NibbleTrie::new();
    for key in (0u32..=0xFFFF).step_by(3) {
        bytes.insert(key);
        nibbles.insert(key);
        bytes.insert(0xFFFF_0000 | key);
        nibbles.insert(0xFFFF_0000 | key);
    }
    for key in 0u32..=0xFFFF {
        let expected = key % 3 == 0;
        assert_eq!(bytes.test(key), expected, "{:#x}", key);
        assert_eq!(nibbles.test(key), expected, "{:#x}", key);
        assert_eq!(bytes.test(0xFFFF_0000 | key), expected, "{:#x}", key);
        assert_eq!(nibbles.test(0xFFFF_0000 | key), expected, "{:#x}", key);
    }
}

#[test]
fn test_random_sample_full_universe() {
    let mut rng = StdRng::seed_from_u64(0x5EED);
    let keys: Vec<u32> = (0..2_000).map(|_| rng.gen()).collect();
    let model: HashSet<u32> = keys.iter().copied().collect();
    let mut bytes: ByteTrie = build(&keys);
    let mut nibbles: NibbleTrie = build(&keys);
    for _ in 0..10_000 {
        let key: u32 = rng.gen();
        let expected = model.contains(&key);
        assert_eq!(bytes.test(key), expected);
        assert_eq!(nibbles.test(key), expected);
    }
    for key in keys {
        assert!(bytes.test(key));
        assert!(nibbles.test(key));
    }
}

#[test]
fn test_boundary_keys_both_variants() {
    for key in [0u32, u32::MAX] {
        let mut bytes = ByteTrie::new();
        let mut nibbles = NibbleTrie::new();
        assert!(!bytes.test(key));
        assert!(!nibbles.test(key));
        bytes.insert(key);
        nibbles.insert(key);
        assert!(bytes.test(key) && bytes.contains(key));
        assert!(nibbles.test(key) && nibbles.contains(key));
        assert!(!bytes.test(!key));
        assert!(!nibbles.test(!key));
    }
}
