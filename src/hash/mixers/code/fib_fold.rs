//! Fibonacci (golden-ratio) folding mixers.

use super::split_mix::GOLDEN_GAMMA;

/// Multiplier for the narrow fold, paired with the 32-bit shift.
const FOLD_MUL_NARROW: u64 = 0xCA4BCAA75EC3F625;

/// Fold the full 128-bit product of `key` and the golden-ratio constant:
/// high half added to low half.
#[inline]
pub fn fib_fold_wide(key: u64) -> u64 {
    let r = (key as u128) * (GOLDEN_GAMMA as u128);
    ((r >> 64) as u64).wrapping_add(r as u64)
}

/// Single 64-bit product folded at 32 bits, for targets where the 128-bit
/// multiply is a libcall. Distinct constant, distinct output stream; its
/// diffusion level is pinned by tests.
#[inline]
pub fn fib_fold_narrow(key: u64) -> u64 {
    let r = key.wrapping_mul(FOLD_MUL_NARROW);
    (r >> 32).wrapping_add(r)
}

/// Golden-ratio fold with the platform-appropriate multiply width.
#[inline]
pub fn fib_fold(key: u64) -> u64 {
    #[cfg(target_pointer_width = "64")]
    {
        fib_fold_wide(key)
    }
    #[cfg(not(target_pointer_width = "64"))]
    {
        fib_fold_narrow(key)
    }
}
