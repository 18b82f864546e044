//! Random number generation.

pub mod engines;
