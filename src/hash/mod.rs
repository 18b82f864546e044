//! Hashing: stateless mixers, integer hash schemes, byte-string hashing.

pub mod int_hasher;
pub mod mixers;
pub mod string_hash;
pub mod wyhash;
