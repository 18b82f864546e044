//! Hashing closures over shared random string keys.

use std::collections::hash_map::RandomState;
use std::hint::black_box;
use std::sync::Arc;

use crate::random::engines::Sfc4;
use crate::utils::bench::derive_seed;
use crate::utils::strings::AlphanumPool;
use crate::utils::timer::Variant;

use super::code::{siphash_bytes, wyhash_bytes, KEY_LEN};

/// One timed sample: hash every key once, xor-folding the outputs. The
/// key set is drawn from one alphanumeric pool and shared by all
/// variants, so they hash the same bytes.
pub fn variant_closures(size: usize, seed: u64) -> Vec<Variant<'static>> {
    let mut fill = Sfc4::new(derive_seed(seed, 0));
    let pool = AlphanumPool::new(&mut fill);
    let mut pick = Sfc4::new(derive_seed(seed, 1));
    let keys: Arc<Vec<String>> = Arc::new(
        (0..size)
            .map(|_| pool.window(&mut pick, KEY_LEN).to_string())
            .collect(),
    );

    let sip_keys = Arc::clone(&keys);
    let sip_state = RandomState::new();
    let wy_keys = Arc::clone(&keys);

    vec![
        Variant {
            name: "std_siphash",
            description: "std's default hasher over the same keys",
            run: Box::new(move || {
                let (elapsed, _acc) = crate::measure!({
                    let mut acc = 0u64;
                    for key in sip_keys.iter() {
                        acc ^= black_box(siphash_bytes(&sip_state, key.as_bytes()));
                    }
                    acc
                });
                (elapsed, None)
            }),
        },
        Variant {
            name: "wyhash",
            description: "condensed wyhash, eight bytes per round",
            run: Box::new(move || {
                let (elapsed, _acc) = crate::measure!({
                    let mut acc = 0u64;
                    for key in wy_keys.iter() {
                        acc ^= black_box(wyhash_bytes(key.as_bytes(), seed));
                    }
                    acc
                });
                (elapsed, None)
            }),
        },
    ]
}
