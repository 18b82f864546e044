//! Byte-string hashing variants.

use std::collections::hash_map::RandomState;
use std::hash::{BuildHasher, Hasher};

pub use crate::hash::wyhash::wyhash_bytes;

/// Key length used by the string workload. Fifteen bytes spans two
/// eight-byte chunks with a ragged tail, so the padding path is always
/// exercised.
pub const KEY_LEN: usize = 15;

/// Hash bytes with std's default hasher (SipHash, per-process keys).
pub fn siphash_bytes(state: &RandomState, bytes: &[u8]) -> u64 {
    let mut hasher = state.build_hasher();
    hasher.write(bytes);
    hasher.finish()
}
