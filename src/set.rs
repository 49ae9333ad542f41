use crate::{Branch, Leaf};
use std::mem::size_of;

/// Insert/test membership over the whole `u32` universe.
///
/// `test` walks the same allocate-or-return path as `insert`, so a miss still
/// materializes every interior node on the way down; only the leaf bit is
/// left untouched. `contains` is the read-only walk that stops at the first
/// empty slot. Both always agree on membership.
pub trait MembershipSet: Default {
    fn insert(&mut self, key: u32);

    fn test(&mut self, key: u32) -> bool;

    fn contains(&self, key: u32) -> bool;

    /// Materialized nodes beneath (and including) the root.
    fn footprint(&self) -> Footprint;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Footprint {
    pub branches: usize,
    pub leaves: usize,
    pub bytes: usize,
}

pub(crate) trait Tally {
    fn tally(&self, footprint: &mut Footprint);
}

impl Tally for Leaf {
    fn tally(&self, footprint: &mut Footprint) {
        footprint.leaves += 1;
        footprint.bytes += size_of::<Leaf>();
    }
}

impl<T: Tally, const N: usize> Tally for Branch<T, N> {
    fn tally(&self, footprint: &mut Footprint) {
        footprint.branches += 1;
        footprint.bytes += size_of::<Self>();
        for child in self.children() {
            child.tally(footprint);
        }
    }
}

pub(crate) fn footprint_of<T: Tally>(root: &T) -> Footprint {
    let mut footprint = Footprint::default();
    root.tally(&mut footprint);
    footprint
}
