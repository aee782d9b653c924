//! Seeded statistical sampling primitives.
//!
//! Everything here draws from a caller-owned RNG so that the number and order
//! of draws is fixed by the caller. Changing how many uniforms a sampler
//! consumes changes every downstream value for a given seed.

use std::f64::consts::PI;
use rand::Rng;

/// Sample from a Gaussian (normal) distribution using the Box-Muller transform.
///
/// Consumes exactly two uniform `f64` draws.
pub fn sample_gaussian(rng: &mut impl Rng, mean: f64, std_dev: f64) -> f64 {
    // Shift [0, 1) to (0, 1] so ln never sees zero
    let u1: f64 = 1.0 - rng.gen::<f64>();
    let u2: f64 = rng.gen();
    let z = (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos();
    mean + std_dev * z
}

/// Sample from a skew-normal distribution.
///
/// Uses the two-Gaussian construction: with `delta = shape / sqrt(1 + shape²)`,
/// `u0, v ~ N(0, 1)` and `u1 = delta·u0 + sqrt(1 - delta²)·v`, the sample is
/// `u1` when `u0 >= 0` and `-u1` otherwise, then shifted and scaled.
/// Positive `shape` skews right; `shape == 0` is a plain Gaussian.
///
/// Consumes exactly four uniform `f64` draws.
pub fn sample_skew_normal(rng: &mut impl Rng, shape: f64, location: f64, scale: f64) -> f64 {
    let delta = shape / (1.0 + shape * shape).sqrt();
    let u0 = sample_gaussian(rng, 0.0, 1.0);
    let v = sample_gaussian(rng, 0.0, 1.0);
    let u1 = delta * u0 + (1.0 - delta * delta).sqrt() * v;
    let x = if u0 >= 0.0 { u1 } else { -u1 };
    location + scale * x
}

/// Draw `count` skew-normal samples in order.
pub fn sample_skew_normal_n(
    rng: &mut impl Rng,
    count: usize,
    shape: f64,
    location: f64,
    scale: f64,
) -> Vec<f64> {
    (0..count)
        .map(|_| sample_skew_normal(rng, shape, location, scale))
        .collect()
}

/// Round to a fixed number of decimal places (half away from zero).
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}
