//! Hash-map workload closures for the integer schemes.

use std::collections::HashMap;
use std::hint::black_box;

use crate::random::engines::{CounterMix, RandomEngine};
use crate::utils::bench::shuffle;
use crate::utils::timer::Variant;

use super::code::{bench_schemes, SchemeBuildHasher};

/// One timed sample: insert `size` keys into a map built on the scheme,
/// then probe every key once in shuffled order. Keys are SplitMix64
/// points of the run seed, identical across schemes, so the probe hit
/// count must match everywhere.
pub fn variant_closures(size: usize, seed: u64) -> Vec<Variant<'static>> {
    bench_schemes()
        .into_iter()
        .map(|scheme| Variant {
            name: scheme.name(),
            description: scheme.description(),
            run: Box::new(move || {
                let mut rng = CounterMix::new(seed);
                let keys: Vec<u64> = (0..size).map(|_| rng.next_u64()).collect();
                let mut probes = keys.clone();
                shuffle(&mut probes, seed ^ 0x5bd1e995);
                let build = SchemeBuildHasher::new(scheme);

                let (elapsed, hits) = crate::measure!({
                    let mut map: HashMap<u64, u64, SchemeBuildHasher> =
                        HashMap::with_capacity_and_hasher(size, build);
                    for &key in &keys {
                        map.insert(key, key ^ 1);
                    }
                    let mut hits = 0u64;
                    for &key in &probes {
                        if black_box(map.contains_key(&key)) {
                            hits += 1;
                        }
                    }
                    hits
                });
                (elapsed, Some(hits as f64))
            }),
        })
        .collect()
}
