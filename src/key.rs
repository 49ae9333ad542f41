//! Splitting a `u32` key into the per-level indices of each trie shape.

/// Byte path: branch indices for bits 31-24, 23-16 and 15-8, then the leaf
/// bit for bits 7-0.
#[inline]
pub fn byte_path(key: u32) -> ([u8; 3], u8) {
    let [b3, b2, b1, b0] = key.to_be_bytes();
    ([b3, b2, b1], b0)
}

/// Nibble path: the key is shifted right by 8 and the remaining 24 bits are
/// split into six nibbles, returned most significant first. The low byte is
/// the leaf bit.
#[inline]
pub fn nibble_path(key: u32) -> ([u8; 6], u8) {
    let high = key >> 8;
    let mut nibbles = [0u8; 6];
    for (i, nibble) in nibbles.iter_mut().rev().enumerate() {
        *nibble = ((high >> (4 * i)) & 0xF) as u8;
    }
    (nibbles, key as u8)
}
