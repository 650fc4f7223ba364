use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoroshiro64StarStar;

/// A fixed-seed rng for tests that should be deterministic but still see varied values.
pub fn consistent_rng() -> impl Rng {
    consistent_rng_seeded(0)
}

/// Like [consistent_rng] with a caller-chosen seed, for tests that need several
/// independent deterministic streams.
pub fn consistent_rng_seeded(seed: u64) -> impl Rng {
    Xoroshiro64StarStar::seed_from_u64(seed)
}
