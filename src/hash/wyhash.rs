//! wyhash-family primitives: the mum mixer, the keyed 64-bit hash, the
//! wyrand stream step, and a condensed byte-slice hash.
//!
//! Constants are Wang Yi's published secrets from the wyhash final
//! version. The byte-slice hash is a condensed schedule (eight bytes at a
//! time, zero padded), not the upstream block layout; it is meant for
//! benchmark keying, not interchange with other wyhash implementations.

/// First wyhash secret.
pub const WY_P0: u64 = 0xA0761D6478BD642F;
/// Second wyhash secret.
pub const WY_P1: u64 = 0xE7037ED1A0B428DB;

/// "mum": the 128-bit product of `a` and `b`, folded by xor of its halves.
#[inline]
pub fn wymix(a: u64, b: u64) -> u64 {
    let r = (a as u128) * (b as u128);
    ((r >> 64) as u64) ^ (r as u64)
}

/// Keyed 64-bit integer hash: one wide multiply, one mum round.
#[inline]
pub fn wyhash64(a: u64, b: u64) -> u64 {
    let r = ((a ^ WY_P0) as u128) * ((b ^ WY_P1) as u128);
    let lo = r as u64;
    let hi = (r >> 64) as u64;
    wymix(lo ^ WY_P0, hi ^ WY_P1)
}

/// One wyrand step: advance the state by the first secret, mum the result.
#[inline]
pub fn wyrand_step(state: &mut u64) -> u64 {
    *state = state.wrapping_add(WY_P0);
    wymix(*state, *state ^ WY_P1)
}

/// Condensed wyhash over a byte slice. Little-endian eight-byte chunks
/// (last one zero padded) are mum-folded into the seeded state; the
/// length is mixed in last, so slices differing only in trailing zero
/// bytes still hash apart.
pub fn wyhash_bytes(bytes: &[u8], seed: u64) -> u64 {
    let mut h = seed ^ WY_P0;
    for chunk in bytes.chunks(8) {
        let mut buf = [0u8; 8];
        buf[..chunk.len()].copy_from_slice(chunk);
        h = wymix(u64::from_le_bytes(buf) ^ WY_P1, h);
    }
    wymix(h ^ bytes.len() as u64, WY_P1)
}
