//! Rotate-multiply mix: two independent products summed.

/// Multiply the key and its half-word rotation by separate odd constants
/// and add the products.
#[inline]
pub fn rot_mul(key: u64) -> u64 {
    let rotated = key.rotate_right(32);
    let low = key.wrapping_mul(0xA24BAED4963EE407);
    let high = rotated.wrapping_mul(0x9FB21C651E98DF25);
    low.wrapping_add(high)
}
