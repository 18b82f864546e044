//! Scheme reference values and container drop-in checks.

use std::collections::HashMap;

use super::code::{bench_schemes, HashScheme, SchemeBuildHasher, BAD_MOD_N};

/// Runtime self-check: reference hashes for one key, then every scheme
/// driving a usable map.
pub fn verify_all() -> Result<(), String> {
    let key = 0xDEADBEEFu64;
    // The fold dispatches on pointer width, so its reference value does
    // too.
    let fib_expected = if cfg!(target_pointer_width = "64") {
        0x00dfed97b871eaa8
    } else {
        0x347364788b16a703
    };
    let cases: [(HashScheme, u64); 8] = [
        (HashScheme::Identity, 0x00000000deadbeef),
        (HashScheme::FibFold, fib_expected),
        (HashScheme::Mur3, 0xd24bd59f862a1dac),
        (HashScheme::RotMul, 0x18b4dbc41caf1489),
        (HashScheme::Rrxmrrxmsx, 0xc7596929f1a38205),
        (HashScheme::Wy, 0xcee09d2bf7de8570),
        (HashScheme::SplitMix, 0x4e062702ec929eea),
        (HashScheme::BadMod(BAD_MOD_N), 0x2ef),
    ];

    for (scheme, expected) in cases {
        let got = scheme.hash(key);
        if got != expected {
            return Err(format!(
                "{}({:#x}) was {:#018x}, reference is {:#018x}",
                scheme.name(),
                key,
                got,
                expected
            ));
        }
    }

    for scheme in bench_schemes() {
        let mut map = HashMap::with_hasher(SchemeBuildHasher::new(scheme));
        for k in 0..512u64 {
            map.insert(k, k * 2);
        }
        for k in 0..512u64 {
            if map.get(&k) != Some(&(k * 2)) {
                return Err(format!("{}: key {} lost or corrupted", scheme.name(), k));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::hash::BuildHasher;
    use std::num::NonZeroU64;

    use crate::hash::mixers::mix64;

    use super::super::code::{HashScheme, SchemeBuildHasher};
    use super::verify_all;

    #[test]
    fn test_verify_all() {
        verify_all().expect("scheme reference check");
    }

    #[test]
    fn test_default_scheme_is_split_mix() {
        assert_eq!(HashScheme::default(), HashScheme::SplitMix);
        assert_eq!(HashScheme::default().hash(1), mix64(1));
        assert_eq!(HashScheme::default().hash(1), 0x5692161d100b05e5);
    }

    #[test]
    fn test_bad_mod_collides_by_construction() {
        let n = NonZeroU64::new(8).expect("nonzero literal");
        let scheme = HashScheme::BadMod(n);
        for k in 0..64u64 {
            assert_eq!(scheme.hash(k), scheme.hash(k + 8));
            assert!(scheme.hash(k) < 8);
        }
    }

    #[test]
    fn test_single_u64_write_reduces_to_scheme_hash() {
        for scheme in super::super::code::bench_schemes() {
            let build = SchemeBuildHasher::new(scheme);
            assert_eq!(
                build.hash_one(0xDEADBEEFu64),
                scheme.hash(0xDEADBEEF),
                "{}",
                scheme.name()
            );
        }
    }

    #[test]
    fn test_byte_writes_chain() {
        let build = SchemeBuildHasher::new(HashScheme::SplitMix);
        let a = build.hash_one("benchmark key");
        let b = build.hash_one("benchmark key");
        let c = build.hash_one("benchmark keY");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_tuple_keys_do_not_collapse() {
        // Chained integer writes must keep both halves live; replacing
        // the state on each write would hash (x, y) and (z, y) alike.
        let build = SchemeBuildHasher::new(HashScheme::SplitMix);
        assert_ne!(build.hash_one((1u64, 2u64)), build.hash_one((3u64, 2u64)));
    }
}
