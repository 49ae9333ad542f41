pub mod config;
pub mod error;
pub mod fill;
pub mod report;
pub mod tester;

mod byte_trie;
mod key;
mod leaf;
mod nibble_trie;
mod node;
mod set;

#[cfg(test)]
mod proptests;

pub use key::{byte_path, nibble_path};
pub use set::{Footprint, MembershipSet};

/// Presence bits for the 256 possible low bytes under one prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leaf {
    bits: [u64; 4],
}

/// Fixed fan-out interior node. Every slot is either empty or owns exactly
/// one child; a materialized slot is never replaced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Branch<T, const N: usize> {
    children: [Option<Box<T>>; N],
}

/// Bottom interior level of the byte trie: 256 slots of leaves.
type LeafBranch256 = Branch<Leaf, 256>;
/// Middle interior level of the byte trie.
type MidBranch256 = Branch<LeafBranch256, 256>;

/// Bottom interior level of the nibble trie: 16 slots of leaves.
type LeafBranch16 = Branch<Leaf, 16>;
type Branch16L5 = Branch<LeafBranch16, 16>;
type Branch16L4 = Branch<Branch16L5, 16>;
type Branch16L3 = Branch<Branch16L4, 16>;
type Branch16L2 = Branch<Branch16L3, 16>;

/// Membership set over `u32` keyed by bytes: three 256-way branch levels
/// (bits 31-24, 23-16, 15-8) and a leaf bitmap for bits 7-0.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ByteTrie {
    root: Branch<MidBranch256, 256>,
}

/// Membership set over `u32` keyed by nibbles: six 16-way branch levels for
/// bits 31-8, most significant nibble first, and a leaf bitmap for bits 7-0.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct NibbleTrie {
    root: Branch<Branch16L2, 16>,
}
