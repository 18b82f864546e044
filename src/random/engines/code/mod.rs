//! The generator family.
//!
//! Each engine is a standalone state machine with the same contract:
//! construct from a `u64` seed (warm-up included), then draw `u64`s one
//! call at a time.

mod counter_mix;
mod lehmer64;
mod orbit;
mod romu_duo_jr;
mod sfc4;
mod wyrand;

pub use counter_mix::CounterMix;
pub use lehmer64::Lehmer64;
pub use orbit::Orbit;
pub use romu_duo_jr::RomuDuoJr;
pub use sfc4::Sfc4;
pub use wyrand::WyRand;

/// Fixed seed for the second word of the two-word engines. Never supplied
/// by callers: the user seed fills word A, this constant decorrelates
/// word B.
pub(crate) const WORD_B_SEED: u64 = 0x9E6C63D0676A9A99;

/// Uniform bit-generator capability: advance the state one step, yield
/// one `u64`. Consumers take a generator argument instead of reaching for
/// a process-wide instance.
pub trait RandomEngine {
    /// Smallest value `next_u64` can return.
    const MIN: u64 = 0;
    /// Largest value `next_u64` can return.
    const MAX: u64 = u64::MAX;

    /// Advance the internal state exactly once and return the next value.
    fn next_u64(&mut self) -> u64;
}

/// Runtime-selectable engine identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EngineKind {
    Lehmer64,
    Orbit,
    RomuDuoJr,
    Sfc4,
    CounterMix,
    WyRand,
}

impl EngineKind {
    /// Every engine, in display order.
    pub const ALL: [EngineKind; 6] = [
        EngineKind::Lehmer64,
        EngineKind::Orbit,
        EngineKind::RomuDuoJr,
        EngineKind::Sfc4,
        EngineKind::CounterMix,
        EngineKind::WyRand,
    ];

    pub fn name(self) -> &'static str {
        match self {
            EngineKind::Lehmer64 => "lehmer64",
            EngineKind::Orbit => "orbit",
            EngineKind::RomuDuoJr => "romu_duo_jr",
            EngineKind::Sfc4 => "sfc4",
            EngineKind::CounterMix => "counter_mix",
            EngineKind::WyRand => "wyrand",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            EngineKind::Lehmer64 => "128-bit multiplicative congruential",
            EngineKind::Orbit => "two counters with a nonlinear output mix",
            EngineKind::RomuDuoJr => "multiply-rotate, output before update",
            EngineKind::Sfc4 => "small fast chaotic, four words",
            EngineKind::CounterMix => "SplitMix64 point at an incrementing index",
            EngineKind::WyRand => "additive secret plus one mum",
        }
    }
}

/// Tagged union over the concrete engines: one seedable generator whose
/// algorithm is picked at run time, no recompilation and no boxing.
pub enum Engine {
    Lehmer64(Lehmer64),
    Orbit(Orbit),
    RomuDuoJr(RomuDuoJr),
    Sfc4(Sfc4),
    CounterMix(CounterMix),
    WyRand(WyRand),
}

impl Engine {
    /// Seed an engine of the given kind, warm-up included.
    pub fn new(kind: EngineKind, seed: u64) -> Self {
        match kind {
            EngineKind::Lehmer64 => Engine::Lehmer64(Lehmer64::new(seed)),
            EngineKind::Orbit => Engine::Orbit(Orbit::new(seed)),
            EngineKind::RomuDuoJr => Engine::RomuDuoJr(RomuDuoJr::new(seed)),
            EngineKind::Sfc4 => Engine::Sfc4(Sfc4::new(seed)),
            EngineKind::CounterMix => Engine::CounterMix(CounterMix::new(seed)),
            EngineKind::WyRand => Engine::WyRand(WyRand::new(seed)),
        }
    }

    pub fn kind(&self) -> EngineKind {
        match self {
            Engine::Lehmer64(_) => EngineKind::Lehmer64,
            Engine::Orbit(_) => EngineKind::Orbit,
            Engine::RomuDuoJr(_) => EngineKind::RomuDuoJr,
            Engine::Sfc4(_) => EngineKind::Sfc4,
            Engine::CounterMix(_) => EngineKind::CounterMix,
            Engine::WyRand(_) => EngineKind::WyRand,
        }
    }
}

impl RandomEngine for Engine {
    #[inline]
    fn next_u64(&mut self) -> u64 {
        match self {
            Engine::Lehmer64(g) => g.next_u64(),
            Engine::Orbit(g) => g.next_u64(),
            Engine::RomuDuoJr(g) => g.next_u64(),
            Engine::Sfc4(g) => g.next_u64(),
            Engine::CounterMix(g) => g.next_u64(),
            Engine::WyRand(g) => g.next_u64(),
        }
    }
}
