//! # Integer hash schemes
//!
//! Pluggable mixing laws behind `std::hash::{Hasher, BuildHasher}`, so a
//! stock `HashMap` can be driven by any scheme in the set, the
//! deliberately bad one included. The map workload shows what each
//! scheme's diffusion buys (or costs) once probing enters the picture.

pub mod bench;
pub mod code;
pub mod test;

pub use code::{bench_schemes, HashScheme, SchemeBuildHasher, SchemeHasher, BAD_MOD_N};

use crate::registry::AlgorithmRunner;
use crate::utils::timer::Variant;

pub struct IntHasherRunner;

impl AlgorithmRunner for IntHasherRunner {
    fn name(&self) -> &'static str {
        "int_hash_schemes"
    }

    fn description(&self) -> &'static str {
        "Hash-map insert and probe under each integer scheme"
    }

    fn category(&self) -> &'static str {
        "hash"
    }

    fn available_variants(&self) -> Vec<&'static str> {
        bench_schemes().iter().map(|scheme| scheme.name()).collect()
    }

    fn get_variant_closures<'a>(&'a self, size: usize, seed: u64) -> Vec<Variant<'a>> {
        bench::variant_closures(size, seed)
    }

    fn verify(&self) -> Result<(), String> {
        test::verify_all()
    }
}
