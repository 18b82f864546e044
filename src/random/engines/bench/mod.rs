//! Throughput closures for the engine comparison.

use std::hint::black_box;

use crate::utils::timer::Variant;

use super::code::{Engine, EngineKind, RandomEngine};

/// One timed sample: seed a fresh engine, draw `size` values. Seeding and
/// warm-up stay outside the timed region.
pub fn variant_closures(size: usize, seed: u64) -> Vec<Variant<'static>> {
    EngineKind::ALL
        .iter()
        .map(|&kind| Variant {
            name: kind.name(),
            description: kind.description(),
            run: Box::new(move || {
                let mut engine = Engine::new(kind, seed);
                let (elapsed, _last) = crate::measure!({
                    let mut last = 0u64;
                    for _ in 0..size {
                        last = black_box(engine.next_u64());
                    }
                    last
                });
                (elapsed, None)
            }),
        })
        .collect()
}
