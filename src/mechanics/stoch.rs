/// Stochastic mechanics: the RNG seam used by sampling and spawning.
/// Every draw goes through an explicit generator handle; nothing reads
/// ambient/global randomness, so a fixed seed replays a whole session.
use bevy_prng::WyRand;
use rand_core::{RngCore, SeedableRng};

use crate::error::{EngineError, Result};

/// A source of uniform floats in `[0, 1)`.
pub trait UnitSource {
    fn next_unit(&mut self) -> f64;
}

impl<R: RngCore + ?Sized> UnitSource for R {
    #[inline]
    fn next_unit(&mut self) -> f64 {
        unit_from_bits(self.next_u64())
    }
}

/// Top 53 bits of a u64 as a float in `[0, 1)`.
#[inline]
pub fn unit_from_bits(bits: u64) -> f64 {
    ((bits >> 11) as f64) / ((1u64 << 53) as f64)
}

/// Seeded WyRand, the crate's default generator.
#[inline]
pub fn seeded(seed: u64) -> WyRand {
    WyRand::from_seed(seed.to_le_bytes())
}

/// WyRand seeded from OS entropy, for callers that do not need replays.
pub fn os_seeded() -> Result<WyRand> {
    WyRand::try_from_os_rng().map_err(|e| EngineError::RngUnavailable(e.to_string()))
}

/// Uniform in `[lo, hi)`.
#[inline]
pub fn uniform<U: UnitSource + ?Sized>(rng: &mut U, lo: f64, hi: f64) -> f64 {
    lo + (hi - lo) * rng.next_unit()
}

/// Bernoulli(p).
#[inline]
pub fn bernoulli<U: UnitSource + ?Sized>(rng: &mut U, p: f64) -> bool {
    rng.next_unit() < p.clamp(0.0, 1.0)
}
