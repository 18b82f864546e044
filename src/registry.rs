//! Benchmark case registry: dynamic discovery and execution.
//!
//! Each case registers once and the CLI finds it by name, so adding a
//! case never means adding a binary.

use crate::utils::timer::{Variant, VariantResult};

/// Result rows from measuring one variant (alias kept for case modules).
pub type BenchmarkResult = VariantResult;

/// Interface every benchmark case implements.
pub trait AlgorithmRunner: Send + Sync {
    /// Case name, e.g. "prng_engines".
    fn name(&self) -> &'static str;

    /// Human-readable description.
    fn description(&self) -> &'static str;

    /// Category, e.g. "random" or "hash".
    fn category(&self) -> &'static str;

    /// Names of the variants this case compares, in display order.
    fn available_variants(&self) -> Vec<&'static str>;

    /// One closure per variant, each performing a single self-timed
    /// sample at the given input size. `seed` fixes the case's input
    /// data; the harness handles warm-up, scheduling, and statistics. An
    /// empty vector means the case declines this size.
    fn get_variant_closures<'a>(&'a self, size: usize, seed: u64) -> Vec<Variant<'a>>;

    /// Cheap self-check of the case's reference semantics.
    fn verify(&self) -> Result<(), String>;
}

/// All registered cases.
pub struct AlgorithmRegistry {
    algorithms: Vec<Box<dyn AlgorithmRunner>>,
}

impl AlgorithmRegistry {
    pub fn new() -> Self {
        Self {
            algorithms: Vec::new(),
        }
    }

    pub fn register<A: AlgorithmRunner + 'static>(&mut self, algo: A) {
        self.algorithms.push(Box::new(algo));
    }

    pub fn all(&self) -> &[Box<dyn AlgorithmRunner>] {
        &self.algorithms
    }

    pub fn find(&self, name: &str) -> Option<&dyn AlgorithmRunner> {
        self.algorithms
            .iter()
            .find(|a| a.name() == name)
            .map(|a| a.as_ref())
    }

    pub fn list_names(&self) -> Vec<&'static str> {
        self.algorithms.iter().map(|a| a.name()).collect()
    }

    pub fn by_category(&self, category: &str) -> Vec<&dyn AlgorithmRunner> {
        self.algorithms
            .iter()
            .filter(|a| a.category() == category)
            .map(|a| a.as_ref())
            .collect()
    }
}

impl Default for AlgorithmRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the registry with every case in the crate.
pub fn build_registry() -> AlgorithmRegistry {
    let mut registry = AlgorithmRegistry::new();

    registry.register(crate::random::engines::EnginesRunner);
    registry.register(crate::hash::mixers::MixersRunner);
    registry.register(crate::hash::int_hasher::IntHasherRunner);
    registry.register(crate::hash::string_hash::StringHashRunner);

    registry
}
