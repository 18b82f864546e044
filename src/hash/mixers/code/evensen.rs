//! Pelle Evensen's rrxmrrxmsx_0 mixer.
//!
//! <https://mostlymangling.blogspot.com/2019/01/better-stronger-mixer-and-test-procedure.html>

/// Rotate-rotate-xor stages around two multiplies, closed by a shift-xor.
#[inline]
pub fn rrxmrrxmsx_0(mut v: u64) -> u64 {
    v ^= v.rotate_left(39) ^ v.rotate_left(14);
    v = v.wrapping_mul(0xA24BAED4963EE407);
    v ^= v.rotate_left(40) ^ v.rotate_left(15);
    v = v.wrapping_mul(0x9FB21C651E98DF25);
    v ^ (v >> 28)
}
