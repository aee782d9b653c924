//! Seed management for cosmology generation
//!
//! A cosmology is keyed by a single 32-bit seed. The generation engine draws
//! from one RNG derived from that seed; auxiliary consumers (for example a
//! timeline that picks daily sightings) get their own stream via
//! [`derive_seed`] so they never shift the engine's draws.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Draw a fresh seed uniformly from the full `u32` range.
pub fn random_seed() -> u32 {
    rand::random()
}

/// The engine's random source for `seed`.
pub fn rng_from_seed(seed: u32) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed as u64)
}

/// Derive a sub-seed from a master seed and a system name.
///
/// FNV-1a over the system name, folded with the master seed, so the result is
/// stable across toolchains and platforms.
pub fn derive_seed(master: u32, system: &str) -> u64 {
    const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
    const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

    let mut hash = FNV_OFFSET;
    for byte in (master as u64).to_le_bytes().iter().chain(system.as_bytes()) {
        hash ^= *byte as u64;
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    hash
}

/// RNG for an auxiliary system, independent of the engine's stream.
pub fn derived_rng(master: u32, system: &str) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(derive_seed(master, system))
}
