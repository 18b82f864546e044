//! Throughput closures for the mixer comparison.

use std::hint::black_box;

use crate::utils::timer::Variant;

use super::code::available_variants;

/// One timed sample: run the mixer over `size` consecutive inputs
/// starting at the run seed, xor-folding the outputs so nothing is dead.
pub fn variant_closures(size: usize, seed: u64) -> Vec<Variant<'static>> {
    available_variants()
        .into_iter()
        .map(|variant| {
            let mix = variant.function;
            Variant {
                name: variant.name,
                description: variant.description,
                run: Box::new(move || {
                    let (elapsed, _acc) = crate::measure!({
                        let mut acc = 0u64;
                        for i in 0..size as u64 {
                            acc ^= black_box(mix(black_box(seed.wrapping_add(i))));
                        }
                        acc
                    });
                    (elapsed, None)
                }),
            }
        })
        .collect()
}
