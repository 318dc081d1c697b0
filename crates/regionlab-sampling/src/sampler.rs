//! Uniform sampling of interval-valued systems
//!
//! The generator is always passed in by the caller. A propagation run seeds
//! one generator and threads it through every draw; parallel runs derive one
//! sub-seed per chunk with [`derive_seed`].

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use regionlab_domain::{Interval, IntervalMatrix, IntervalVector, Matrix2, Vector2};

/// Draw one value uniformly from `[from, from + |from - to|)`
pub fn sample_interval<R: Rng>(interval: &Interval, rng: &mut R) -> f64 {
    interval.at(rng.random::<f64>())
}

/// Draw a concrete system from interval-valued coefficients
///
/// Entries are drawn in the order `a00, a01, a10, a11, b0, b1`.
pub fn sample_system<R: Rng>(
    matrix: &IntervalMatrix,
    vector: &IntervalVector,
    rng: &mut R,
) -> (Matrix2, Vector2) {
    let a00 = sample_interval(&matrix.entry(0, 0), rng);
    let a01 = sample_interval(&matrix.entry(0, 1), rng);
    let a10 = sample_interval(&matrix.entry(1, 0), rng);
    let a11 = sample_interval(&matrix.entry(1, 1), rng);
    let b0 = sample_interval(&vector.entry(0), rng);
    let b1 = sample_interval(&vector.entry(1), rng);

    ([[a00, a01], [a10, a11]], [b0, b1])
}

/// Seed of sub-stream `stream` derived from `master` (SplitMix64 finalizer)
pub fn derive_seed(master: u64, stream: u64) -> u64 {
    let mut z = master
        .wrapping_add(stream.wrapping_add(1).wrapping_mul(0x9E37_79B9_7F4A_7C15));
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Generator for a run seeded with `seed`
pub fn seeded_rng(seed: u64) -> SmallRng {
    SmallRng::seed_from_u64(seed)
}

/// Generator for sub-stream `stream` of a run seeded with `master`
pub fn stream_rng(master: u64, stream: u64) -> SmallRng {
    SmallRng::seed_from_u64(derive_seed(master, stream))
}

/// Fresh master seed from the operating system
pub fn random_seed() -> u64 {
    rand::rng().random()
}
