use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use uuid::Uuid;

/// Seeded stream driving one simulation run. A `None` seed draws one from
/// entropy; the seed actually used is returned so it can be logged.
pub fn create_rng(seed: Option<u64>) -> (ChaCha8Rng, u64) {
    let seed = seed.unwrap_or_else(|| rand::thread_rng().gen());
    (ChaCha8Rng::seed_from_u64(seed), seed)
}

/// Uniform draw in `[lo, hi)`. An empty range yields `lo`, so a zero
/// entropy factor is legal.
#[inline]
pub fn uniform<R: Rng + ?Sized>(rng: &mut R, lo: f64, hi: f64) -> f64 {
    if lo < hi {
        rng.gen_range(lo..hi)
    } else {
        lo
    }
}

/// Uniform draw in `[-spread, spread)`.
#[inline]
pub fn jitter<R: Rng + ?Sized>(rng: &mut R, spread: f64) -> f64 {
    uniform(rng, -spread, spread)
}

/// Entity id drawn from the simulation stream, so ids replay with the seed.
pub fn next_id<R: Rng + ?Sized>(rng: &mut R) -> Uuid {
    Uuid::from_u128(rng.gen::<u128>())
}
