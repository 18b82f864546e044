//! Engine determinism, reference vectors, and seeding contracts.

use crate::hash::mixers::{split_mix64_at, MixerKind};

use super::code::{
    CounterMix, Engine, EngineKind, Lehmer64, Orbit, RandomEngine, RomuDuoJr, Sfc4,
};

fn draw<E: RandomEngine>(engine: &mut E, n: usize) -> Vec<u64> {
    (0..n).map(|_| engine.next_u64()).collect()
}

#[test]
fn test_reference_vectors_seed_42() {
    let cases: [(EngineKind, [u64; 3]); 6] = [
        (
            EngineKind::Lehmer64,
            [0xb7dbd4cc19cc230a, 0x5ea3c04a53482a30, 0xf041f89a78df8d0a],
        ),
        (
            EngineKind::Orbit,
            [0x342e687985c0c786, 0x84184569ff4995c3, 0x99029dfdee06bfca],
        ),
        (
            EngineKind::RomuDuoJr,
            [0x0cd578853b13e86a, 0x9547c26716c2fcc3, 0x319fca45adf652cc],
        ),
        (
            EngineKind::Sfc4,
            [0x8523e80b9315250f, 0x6eed2e597dc42594, 0x69a1dd05569574be],
        ),
        (
            EngineKind::CounterMix,
            [0xbdd732262feb6e95, 0xba69ec90eb4fef88, 0xfb452912299a5453],
        ),
        (
            EngineKind::WyRand,
            [0xae4a7cbfdda9b434, 0xe9cc09d33d38d9d2, 0xcb5756512b93433a],
        ),
    ];
    for (kind, expected) in cases {
        let mut engine = Engine::new(kind, 42);
        assert_eq!(draw(&mut engine, 3), expected, "{}", kind.name());
    }
}

#[test]
fn test_reference_vectors_seed_deadbeef() {
    let cases: [(EngineKind, [u64; 3]); 6] = [
        (
            EngineKind::Lehmer64,
            [0xe72e7c2c12d346dc, 0x7a734afda306eed3, 0x38d082f1d29f8b32],
        ),
        (
            EngineKind::Orbit,
            [0x5d6cc2713c884be7, 0x4f8a2a92103708c8, 0x7a250e4b8a9db14e],
        ),
        (
            EngineKind::RomuDuoJr,
            [0x44915fde1c3d32b8, 0x2e25ad0fe6d38474, 0xc42abd2a20fdeaf7],
        ),
        (
            EngineKind::Sfc4,
            [0x1102af1f6f14d318, 0xadfcc7b25d62220f, 0x31e4f74e218be5f8],
        ),
        (
            EngineKind::CounterMix,
            [0x4adfb90f68c9eb9b, 0x23e2d64a9611a6b6, 0xd7d7b2935c80ef68],
        ),
        (
            EngineKind::WyRand,
            [0x19ac9caacf4e1b73, 0x52d1d68eb4ad109d, 0xad63f8cef74cc23c],
        ),
    ];
    for (kind, expected) in cases {
        let mut engine = Engine::new(kind, 0xDEADBEEF);
        assert_eq!(draw(&mut engine, 3), expected, "{}", kind.name());
    }
}

#[test]
fn test_same_seed_same_sequence() {
    for kind in EngineKind::ALL {
        let mut a = Engine::new(kind, 0x1234_5678);
        let mut b = Engine::new(kind, 0x1234_5678);
        for i in 0..64 {
            assert_eq!(
                a.next_u64(),
                b.next_u64(),
                "{} diverged at step {}",
                kind.name(),
                i
            );
        }
    }
}

#[test]
fn test_distinct_seeds_distinct_prefixes() {
    for kind in EngineKind::ALL {
        let prefixes: Vec<Vec<u64>> = (1u64..=16)
            .map(|seed| draw(&mut Engine::new(kind, seed), 8))
            .collect();
        for i in 0..prefixes.len() {
            for j in (i + 1)..prefixes.len() {
                assert_ne!(
                    prefixes[i],
                    prefixes[j],
                    "{}: seeds {} and {} share a prefix",
                    kind.name(),
                    i + 1,
                    j + 1
                );
            }
        }
    }
}

#[test]
fn test_declared_range_is_full() {
    assert_eq!(Engine::MIN, 0);
    assert_eq!(Engine::MAX, u64::MAX);
    assert_eq!(<Lehmer64 as RandomEngine>::MIN, 0);
    assert_eq!(<Sfc4 as RandomEngine>::MAX, u64::MAX);
}

#[test]
fn test_kind_round_trip() {
    for kind in EngineKind::ALL {
        assert_eq!(Engine::new(kind, 1).kind(), kind);
    }
}

// The first post-construction output must equal the raw recurrence
// stepped warm-up + 1 times; a construction shortcut would break this.
#[test]
fn test_warmup_is_exact_stepping() {
    let mut raw = Orbit::unmixed(7);
    let mut nth = 0;
    for _ in 0..=Orbit::WARMUP_ROUNDS {
        nth = raw.next_u64();
    }
    assert_eq!(nth, 0x4d9676d6fc1da2ee);
    assert_eq!(Orbit::new(7).next_u64(), nth);

    let mut raw = RomuDuoJr::unmixed(7);
    let mut nth = 0;
    for _ in 0..=RomuDuoJr::WARMUP_ROUNDS {
        nth = raw.next_u64();
    }
    assert_eq!(nth, 0x533088f0fbddd6ab);
    assert_eq!(RomuDuoJr::new(7).next_u64(), nth);

    let mut raw = Sfc4::unmixed(7);
    let mut nth = 0;
    for _ in 0..=Sfc4::WARMUP_ROUNDS {
        nth = raw.next_u64();
    }
    assert_eq!(nth, 0x55a1c5e49afa9d58);
    assert_eq!(Sfc4::new(7).next_u64(), nth);
}

// Drive word A onto exactly zero: that step's output collapses to zero
// and word B must hold still instead of advancing.
#[test]
fn test_orbit_zero_step_skips_word_b() {
    let mut raw = Orbit::unmixed(0u64.wrapping_sub(Orbit::INC_A));
    assert_eq!(raw.next_u64(), 0);
    assert_eq!(raw.next_u64(), 0x7b4508038b44abb0);
}

#[test]
fn test_counter_mix_stateless_matches_stream() {
    let mut stream = CounterMix::new(42);
    for offset in 0..16u64 {
        let from_stream = stream.next_u64();
        assert_eq!(
            from_stream,
            CounterMix::value_at(MixerKind::SplitMix64, 42 + offset)
        );
        assert_eq!(from_stream, split_mix64_at(42 + offset));
    }
}

#[test]
#[cfg(target_pointer_width = "64")]
fn test_counter_mix_over_another_mixer() {
    let mut stream = CounterMix::with_mixer(MixerKind::FibFold, 42);
    assert_eq!(
        draw(&mut stream, 3),
        [0xf519f86ee2385b8b, 0x935172286182d7a1, 0x3188ebe1e0cd53b7]
    );
}

// The 128-bit state comes from two SplitMix64 points, so adjacent seeds
// must not start on adjacent states.
#[test]
fn test_lehmer_spreads_adjacent_seeds() {
    let firsts: Vec<u64> = (0u64..8).map(|s| Lehmer64::new(s).next_u64()).collect();
    for i in 0..firsts.len() {
        for j in (i + 1)..firsts.len() {
            assert_ne!(firsts[i], firsts[j], "seeds {} and {}", i, j);
        }
    }
}
