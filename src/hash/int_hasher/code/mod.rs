//! Integer hash schemes behind the std hashing traits.
//!
//! One scheme is picked per hasher at construction, so a single binary
//! can compare all of them in one run. `SchemeBuildHasher` slots into
//! `HashMap::with_hasher` and stamps its scheme on every hasher it
//! builds.

use std::hash::{BuildHasher, Hasher};
use std::num::NonZeroU64;

use crate::hash::mixers::{fib_fold, mix64, mur3, rot_mul, rrxmrrxmsx_0, GOLDEN_GAMMA};
use crate::hash::wyhash::wyhash64;

/// Modulus of the deliberately bad scheme in the benchmark set.
pub const BAD_MOD_N: NonZeroU64 = match NonZeroU64::new(1024) {
    Some(n) => n,
    None => unreachable!(),
};

/// Which mixing law backs the hasher.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HashScheme {
    /// Key passes through untouched.
    Identity,
    /// Golden-ratio Fibonacci fold.
    FibFold,
    /// MurmurHash3 finalizer.
    Mur3,
    /// Rotate-multiply mix.
    RotMul,
    /// Evensen's rrxmrrxmsx_0.
    Rrxmrrxmsx,
    /// wyhash64 keyed with the golden-ratio constant.
    Wy,
    /// SplitMix64 finalizer, the default.
    SplitMix,
    /// `key % n`. Deliberately terrible; collision stress runs only. The
    /// modulus is part of the scheme value, no global to configure.
    BadMod(NonZeroU64),
}

impl Default for HashScheme {
    fn default() -> Self {
        HashScheme::SplitMix
    }
}

impl HashScheme {
    /// Hash one integer key.
    #[inline]
    pub fn hash(self, key: u64) -> u64 {
        match self {
            HashScheme::Identity => key,
            HashScheme::FibFold => fib_fold(key),
            HashScheme::Mur3 => mur3(key),
            HashScheme::RotMul => rot_mul(key),
            HashScheme::Rrxmrrxmsx => rrxmrrxmsx_0(key),
            HashScheme::Wy => wyhash64(key, GOLDEN_GAMMA),
            HashScheme::SplitMix => mix64(key),
            HashScheme::BadMod(n) => key % n.get(),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            HashScheme::Identity => "identity",
            HashScheme::FibFold => "fib_fold",
            HashScheme::Mur3 => "mur3",
            HashScheme::RotMul => "rot_mul",
            HashScheme::Rrxmrrxmsx => "rrxmrrxmsx_0",
            HashScheme::Wy => "wyhash64",
            HashScheme::SplitMix => "split_mix",
            HashScheme::BadMod(_) => "bad_mod",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            HashScheme::Identity => "no mixing at all",
            HashScheme::FibFold => "golden-ratio fold",
            HashScheme::Mur3 => "MurmurHash3 finalizer",
            HashScheme::RotMul => "rotate-multiply mix",
            HashScheme::Rrxmrrxmsx => "strongest mixer in the set",
            HashScheme::Wy => "keyed wide-multiply hash",
            HashScheme::SplitMix => "SplitMix64 finalizer (default)",
            HashScheme::BadMod(_) => "modulo, the collision worst case",
        }
    }
}

/// The schemes the benchmark compares, worst case included.
pub fn bench_schemes() -> Vec<HashScheme> {
    vec![
        HashScheme::Identity,
        HashScheme::FibFold,
        HashScheme::Mur3,
        HashScheme::RotMul,
        HashScheme::Rrxmrrxmsx,
        HashScheme::Wy,
        HashScheme::SplitMix,
        HashScheme::BadMod(BAD_MOD_N),
    ]
}

/// `std::hash::Hasher` adapter over a scheme. Integer writes fold the key
/// into the running state through the scheme; byte slices go eight bytes
/// at a time, zero padded. A single `write_u64` on a fresh hasher reduces
/// to `scheme.hash(key)` exactly.
pub struct SchemeHasher {
    scheme: HashScheme,
    state: u64,
}

impl Hasher for SchemeHasher {
    #[inline]
    fn finish(&self) -> u64 {
        self.state
    }

    fn write(&mut self, bytes: &[u8]) {
        for chunk in bytes.chunks(8) {
            let mut buf = [0u8; 8];
            buf[..chunk.len()].copy_from_slice(chunk);
            self.state = self.scheme.hash(self.state ^ u64::from_le_bytes(buf));
        }
    }

    #[inline]
    fn write_u8(&mut self, i: u8) {
        self.state = self.scheme.hash(self.state ^ u64::from(i));
    }

    #[inline]
    fn write_u16(&mut self, i: u16) {
        self.state = self.scheme.hash(self.state ^ u64::from(i));
    }

    #[inline]
    fn write_u32(&mut self, i: u32) {
        self.state = self.scheme.hash(self.state ^ u64::from(i));
    }

    #[inline]
    fn write_u64(&mut self, i: u64) {
        self.state = self.scheme.hash(self.state ^ i);
    }

    #[inline]
    fn write_u128(&mut self, i: u128) {
        self.write_u64(i as u64);
        self.write_u64((i >> 64) as u64);
    }

    #[inline]
    fn write_usize(&mut self, i: usize) {
        self.write_u64(i as u64);
    }
}

/// Factory for `HashMap`: carries the scheme, stamps it on every hasher.
#[derive(Clone, Copy, Debug, Default)]
pub struct SchemeBuildHasher {
    scheme: HashScheme,
}

impl SchemeBuildHasher {
    pub fn new(scheme: HashScheme) -> Self {
        Self { scheme }
    }

    pub fn scheme(&self) -> HashScheme {
        self.scheme
    }
}

impl BuildHasher for SchemeBuildHasher {
    type Hasher = SchemeHasher;

    #[inline]
    fn build_hasher(&self) -> SchemeHasher {
        SchemeHasher {
            scheme: self.scheme,
            state: 0,
        }
    }
}
