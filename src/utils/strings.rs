//! Random alphanumeric key material.
//!
//! Every function takes the generator as an argument; there is no
//! process-wide engine hiding behind these helpers, so two calls with
//! equally-seeded engines produce identical keys.

use crate::random::engines::RandomEngine;

/// The 62 alphanumeric bytes, digits first.
pub const ALPHANUMERIC: &[u8; 62] =
    b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

#[inline]
fn pick_char<R: RandomEngine>(rng: &mut R) -> u8 {
    ALPHANUMERIC[(rng.next_u64() >> 33) as usize % ALPHANUMERIC.len()]
}

/// Owned random alphanumeric string of exactly `len` bytes.
pub fn alphanum_string<R: RandomEngine>(rng: &mut R, len: usize) -> String {
    let mut s = String::with_capacity(len);
    for _ in 0..len {
        s.push(pick_char(rng) as char);
    }
    s
}

/// A pre-filled alphanumeric buffer handing out borrowed windows: string
/// keys with no per-key allocation.
pub struct AlphanumPool {
    buf: Vec<u8>,
}

impl AlphanumPool {
    /// Default pool size, 32 KiB of key material.
    pub const DEFAULT_LEN: usize = 32 * 1024;

    pub fn new<R: RandomEngine>(rng: &mut R) -> Self {
        Self::with_len(rng, Self::DEFAULT_LEN)
    }

    pub fn with_len<R: RandomEngine>(rng: &mut R, len: usize) -> Self {
        let mut buf = vec![0u8; len];
        for byte in &mut buf {
            *byte = pick_char(rng);
        }
        Self { buf }
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Borrow a random `len`-byte window.
    ///
    /// # Panics
    /// If `len` is not smaller than the pool.
    pub fn window<R: RandomEngine>(&self, rng: &mut R, len: usize) -> &str {
        assert!(len < self.buf.len(), "window must be smaller than the pool");
        let start = (rng.next_u64() % (self.buf.len() - len) as u64) as usize;
        // The buffer holds alphanumeric bytes only, always valid UTF-8.
        std::str::from_utf8(&self.buf[start..start + len]).expect("pool is ASCII")
    }
}
