use crate::Leaf;
use std::fmt::{Display, Error, Formatter};

impl Leaf {
    pub fn new() -> Self {
        Leaf { bits: [0; 4] }
    }

    #[inline]
    pub fn insert(&mut self, low: u8) {
        self.bits[(low >> 6) as usize] |= 1u64 << (low & 63);
    }

    #[inline]
    pub fn test(&self, low: u8) -> bool {
        self.bits[(low >> 6) as usize] & (1u64 << (low & 63)) != 0
    }

    /// Number of set bits.
    pub fn len(&self) -> usize {
        self.bits.iter().map(|w| w.count_ones() as usize).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.bits == [0; 4]
    }

    fn lows(&self) -> Vec<u8> {
        (0..=u8::MAX).filter(|low| self.test(*low)).collect()
    }
}

impl Default for Leaf {
    fn default() -> Self {
        Leaf::new()
    }
}

impl Display for Leaf {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        write!(f, "Leaf({len}) {lows:?}", len = self.len(), lows = self.lows())
    }
}
