use crate::{Branch, Leaf};
use std::fmt::{Display, Error, Formatter};

impl<T, const N: usize> Branch<T, N> {
    pub fn new() -> Self {
        Branch {
            children: std::array::from_fn(|_| None),
        }
    }

    /// Whether the slot at `index` has never been materialized.
    #[inline]
    pub fn is_empty(&self, index: u8) -> bool {
        debug_assert!((index as usize) < N, "index {} out of fan-out {}", index, N);
        self.children[index as usize].is_none()
    }

    /// Number of materialized slots.
    pub fn len(&self) -> usize {
        self.children.iter().filter(|c| c.is_some()).count()
    }

    /// Child at `index` without materializing it.
    #[inline]
    pub fn get(&self, index: u8) -> Option<&T> {
        debug_assert!((index as usize) < N, "index {} out of fan-out {}", index, N);
        self.children[index as usize].as_deref()
    }

    pub(crate) fn keys(&self) -> Vec<u8> {
        self.children
            .iter()
            .enumerate()
            .filter(|n| n.1.is_some())
            .map(|n| n.0 as u8)
            .collect()
    }

    pub(crate) fn children(&self) -> impl Iterator<Item = &T> {
        self.children.iter().filter_map(|c| c.as_deref())
    }
}

impl<T: Default, const N: usize> Branch<T, N> {
    /// Child at `index`, creating an empty one first if the slot is empty.
    #[inline]
    pub fn child(&mut self, index: u8) -> &mut T {
        debug_assert!((index as usize) < N, "index {} out of fan-out {}", index, N);
        self.children[index as usize].get_or_insert_with(Box::default)
    }
}

impl<T, const M: usize, const N: usize> Branch<Branch<T, M>, N> {
    #[inline]
    pub fn child_branch(&mut self, index: u8) -> &mut Branch<T, M> {
        debug_assert!((index as usize) < N, "index {} out of fan-out {}", index, N);
        self.children[index as usize].get_or_insert_with(|| Box::new(Branch::new()))
    }
}

impl<const N: usize> Branch<Leaf, N> {
    #[inline]
    pub fn child_leaf(&mut self, index: u8) -> &mut Leaf {
        self.child(index)
    }
}

impl<T, const N: usize> Default for Branch<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> Display for Branch<T, N> {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        write!(
            f,
            "Branch{fanout}({clen}) {keys:?}",
            fanout = N,
            clen = self.len(),
            keys = self.keys(),
        )
    }
}
