use crate::error::BenchError;
use crate::{ByteTrie, MembershipSet, NibbleTrie};
use clap::ValueEnum;
use fnv::FnvBuildHasher;
use hashbrown::HashSet;

/// One duplicate-removal strategy. `run` drives the shared scan: every key
/// that `test` does not report as seen is `insert`ed and kept, in place.
pub trait Tester {
    fn name(&self) -> &'static str;

    /// Called once per input before the scan.
    fn init(&mut self, keys: &mut [u32]);

    /// Releases whatever `init` and the scan built.
    fn empty(&mut self);

    fn insert(&mut self, keys: &[u32], at: usize);

    fn test(&mut self, keys: &[u32], at: usize) -> bool;

    fn validate(&self, kept: usize, unique: usize) -> Result<(), BenchError> {
        if kept == unique {
            Ok(())
        } else {
            Err(BenchError::UniqueMismatch {
                tester: self.name(),
                expected: unique,
                found: kept,
            })
        }
    }

    /// Compacts `keys` down to the survivors and returns how many there are.
    fn run(&mut self, keys: &mut Vec<u32>, unique: usize) -> Result<usize, BenchError> {
        self.init(keys);
        let mut kept = 0;
        for at in 0..keys.len() {
            if !self.test(keys, at) {
                self.insert(keys, at);
                keys[kept] = keys[at];
                kept += 1;
            }
        }
        keys.truncate(kept);
        self.validate(kept, unique)?;
        Ok(kept)
    }
}

/// Never finds a duplicate; measures the bare scan.
#[derive(Debug, Default)]
pub struct BaselineTester;

impl Tester for BaselineTester {
    fn name(&self) -> &'static str {
        "baseline"
    }

    fn init(&mut self, _keys: &mut [u32]) {}

    fn empty(&mut self) {}

    fn insert(&mut self, _keys: &[u32], _at: usize) {}

    fn test(&mut self, _keys: &[u32], _at: usize) -> bool {
        false
    }

    fn validate(&self, _kept: usize, _unique: usize) -> Result<(), BenchError> {
        Ok(())
    }
}

/// Sorts the input up front; a key is a duplicate of its predecessor.
#[derive(Debug, Default)]
pub struct SortTester;

impl Tester for SortTester {
    fn name(&self) -> &'static str {
        "sort"
    }

    fn init(&mut self, keys: &mut [u32]) {
        keys.sort_unstable();
    }

    fn empty(&mut self) {}

    fn insert(&mut self, _keys: &[u32], _at: usize) {}

    fn test(&mut self, keys: &[u32], at: usize) -> bool {
        at > 0 && keys[at] == keys[at - 1]
    }
}

/// Linear search over everything kept so far.
#[derive(Debug, Default)]
pub struct SquareTester {
    seen: Vec<u32>,
}

impl Tester for SquareTester {
    fn name(&self) -> &'static str {
        "nsquare"
    }

    fn init(&mut self, keys: &mut [u32]) {
        self.seen = Vec::with_capacity(keys.len());
    }

    fn empty(&mut self) {
        self.seen = Vec::new();
    }

    fn insert(&mut self, keys: &[u32], at: usize) {
        self.seen.push(keys[at]);
    }

    fn test(&mut self, keys: &[u32], at: usize) -> bool {
        self.seen.contains(&keys[at])
    }
}

/// Any [`MembershipSet`], rebuilt from scratch for every input.
#[derive(Debug)]
pub struct TrieTester<S> {
    name: &'static str,
    set: Option<S>,
}

impl<S: MembershipSet> TrieTester<S> {
    pub fn new(name: &'static str) -> Self {
        TrieTester { name, set: None }
    }

    pub fn set(&self) -> Option<&S> {
        self.set.as_ref()
    }
}

impl<S: MembershipSet> Tester for TrieTester<S> {
    fn name(&self) -> &'static str {
        self.name
    }

    fn init(&mut self, _keys: &mut [u32]) {
        self.set = Some(S::default());
    }

    fn empty(&mut self) {
        self.set = None;
    }

    fn insert(&mut self, keys: &[u32], at: usize) {
        if let Some(set) = self.set.as_mut() {
            set.insert(keys[at]);
        }
    }

    fn test(&mut self, keys: &[u32], at: usize) -> bool {
        self.set.as_mut().map_or(false, |set| set.test(keys[at]))
    }
}

/// hashbrown set with FNV hashing, sized for the whole input.
#[derive(Debug, Default)]
pub struct SetTester {
    set: Option<HashSet<u32, FnvBuildHasher>>,
}

impl Tester for SetTester {
    fn name(&self) -> &'static str {
        "set"
    }

    fn init(&mut self, keys: &mut [u32]) {
        self.set = Some(HashSet::with_capacity_and_hasher(
            keys.len(),
            FnvBuildHasher::default(),
        ));
    }

    fn empty(&mut self) {
        self.set = None;
    }

    fn insert(&mut self, keys: &[u32], at: usize) {
        if let Some(set) = self.set.as_mut() {
            set.insert(keys[at]);
        }
    }

    fn test(&mut self, keys: &[u32], at: usize) -> bool {
        self.set.as_ref().map_or(false, |set| set.contains(&keys[at]))
    }
}

/// Selectable strategies, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, ValueEnum)]
pub enum Algorithm {
    All,
    Baseline,
    Sort,
    Nsquare,
    Trie,
    Trie16,
    Set,
}

impl Algorithm {
    pub const EACH: [Algorithm; 6] = [
        Algorithm::Baseline,
        Algorithm::Sort,
        Algorithm::Nsquare,
        Algorithm::Trie,
        Algorithm::Trie16,
        Algorithm::Set,
    ];

    /// Expands `All` and removes repeats, keeping report order.
    pub fn resolve(selected: &[Algorithm]) -> Vec<Algorithm> {
        if selected.is_empty() || selected.contains(&Algorithm::All) {
            return Algorithm::EACH.to_vec();
        }
        let mut algorithms = selected.to_vec();
        algorithms.sort();
        algorithms.dedup();
        algorithms
    }

    pub fn tester(&self) -> Option<Box<dyn Tester>> {
        let tester: Box<dyn Tester> = match self {
            Algorithm::All => return None,
            Algorithm::Baseline => Box::new(BaselineTester),
            Algorithm::Sort => Box::new(SortTester),
            Algorithm::Nsquare => Box::new(SquareTester::default()),
            Algorithm::Trie => Box::new(TrieTester::<ByteTrie>::new("trie")),
            Algorithm::Trie16 => Box::new(TrieTester::<NibbleTrie>::new("trie16")),
            Algorithm::Set => Box::new(SetTester::default()),
        };
        Some(tester)
    }
}
