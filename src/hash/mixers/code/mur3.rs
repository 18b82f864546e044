//! MurmurHash3 64-bit finalizer (Austin Appleby, public domain).

/// Three xor-shift-multiply rounds, all shifts by 33.
#[inline]
pub fn mur3(key: u64) -> u64 {
    let mut h = key;
    h ^= h >> 33;
    h = h.wrapping_mul(0xFF51AFD7ED558CCD);
    h ^= h >> 33;
    h = h.wrapping_mul(0xC4CEB9FE1A85EC53);
    h ^= h >> 33;
    h
}
