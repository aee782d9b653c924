//! Luminary generation
//!
//! The engine consumes one RNG in a fixed order. For a given seed the output
//! is reproducible only as long as this order is unchanged:
//!
//! 1. body count `n`, uniform in `body_count_range`
//! 2. `scale`, uniform in `scale_range`
//! 3. `n` skew-normal distances (four uniforms each)
//! 4. one RGB triple (r, g, b) per luminary, nearest first
//!
//! Between steps 3 and 4 the anchors are injected and the distances are
//! folded to absolute values, rounded and sorted.
//!
//! The luminary count is always `n + 1`. When the home anchor was not already
//! among the samples, two anchors are injected and the farthest distance is
//! dropped. This matches the established output of the procedure and is kept
//! deliberately; see DESIGN.md.

use rand::Rng;
use tracing::debug;
use crate::color::Rgb;
use crate::config::GenerationConfig;
use crate::luminary::Luminary;
use crate::sampling::{round_to, sample_skew_normal_n};

/// Generate the luminaries of a cosmology, ordered by ascending distance.
///
/// The config is assumed valid (see [`GenerationConfig::validate`]).
pub fn generate_luminaries(rng: &mut impl Rng, config: &GenerationConfig) -> Vec<Luminary> {
    let (count_lo, count_hi) = config.body_count_range;
    let (scale_lo, scale_hi) = config.scale_range;

    let n = rng.gen_range(count_lo..count_hi) as usize;
    let scale = rng.gen_range(scale_lo..scale_hi) as f64;
    debug!(n, scale, "drew body count and scale");

    let samples = sample_skew_normal_n(rng, n, config.skew_shape, config.skew_location, scale);

    let distances = fit_to_body_count(anchor_distances(&samples, config), n);
    build_luminaries(rng, &distances, config)
}

/// Keep the `n + 1` nearest distances of a sorted, anchored list of `n` samples.
pub fn fit_to_body_count(mut distances: Vec<f64>, n: usize) -> Vec<f64> {
    let body_count = n + 1;
    if distances.len() > body_count {
        debug!(
            dropped = distances.len() - body_count,
            "distance list longer than body count, dropping farthest"
        );
        distances.truncate(body_count);
    }
    distances
}

/// Inject anchors, take absolute values, round, and sort ascending.
///
/// The central anchor is always added. The home anchor is added unless one of
/// the raw samples is exactly equal to it; a sample that only rounds or folds
/// to the home distance (0.996, -1.0) does not count.
pub fn anchor_distances(samples: &[f64], config: &GenerationConfig) -> Vec<f64> {
    let mut distances = samples.to_vec();
    let home_sampled = samples.contains(&config.home_anchor);

    distances.push(config.central_anchor);
    if !home_sampled {
        distances.push(config.home_anchor);
    }

    let mut distances: Vec<f64> = distances
        .iter()
        .map(|d| round_to(d.abs(), config.precision))
        .collect();
    distances.sort_by(|a, b| a.total_cmp(b));
    distances
}

/// Draw colors and build one luminary per distance.
///
/// The first (nearest) luminary always gets the central color, but its triple
/// is still drawn so the RNG advances identically.
pub fn build_luminaries(
    rng: &mut impl Rng,
    distances: &[f64],
    config: &GenerationConfig,
) -> Vec<Luminary> {
    let mut colors: Vec<Rgb> = distances.iter().map(|_| draw_rgb(rng)).collect();
    if let Some(central) = colors.first_mut() {
        *central = config.central_rgb;
    }

    distances
        .iter()
        .zip(colors)
        .map(|(&distance, rgb)| {
            Luminary::new(distance, distance <= config.visibility_threshold, rgb)
        })
        .collect()
}

fn draw_rgb(rng: &mut impl Rng) -> Rgb {
    let r = rng.gen_range(0..=255u8);
    let g = rng.gen_range(0..=255u8);
    let b = rng.gen_range(0..=255u8);
    Rgb::new(r, g, b)
}

/// Number of luminaries flagged visible.
pub fn visible_count(luminaries: &[Luminary]) -> usize {
    luminaries.iter().filter(|l| l.visible()).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn generate(seed: u64) -> Vec<Luminary> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        generate_luminaries(&mut rng, &GenerationConfig::default())
    }

    #[test]
    fn test_generation_is_deterministic() {
        for seed in 0..20 {
            assert_eq!(generate(seed), generate(seed));
        }
    }

    #[test]
    fn test_body_count_is_n_plus_one() {
        for seed in 0..100 {
            let mut replay = ChaCha8Rng::seed_from_u64(seed);
            let n = replay.gen_range(4u32..16) as usize;

            let luminaries = generate(seed);
            assert_eq!(luminaries.len(), n + 1, "seed {}", seed);
        }
    }

    #[test]
    fn test_sorted_rounded_and_anchored() {
        for seed in 0..100 {
            let luminaries = generate(seed);
            assert!(luminaries.len() >= 2);

            for pair in luminaries.windows(2) {
                assert!(pair[0].distance() <= pair[1].distance());
            }
            for lum in &luminaries {
                assert!(lum.distance() >= 0.0);
                assert_eq!(round_to(lum.distance(), 2), lum.distance());
            }

            assert_eq!(luminaries[0].distance(), 0.0);
            assert_eq!(luminaries[0].rgb(), Rgb::new(255, 165, 0));
            assert_eq!(luminaries[0].color(), "orange");
        }
    }

    #[test]
    fn test_visibility_matches_threshold() {
        for seed in 0..100 {
            for lum in generate(seed) {
                assert_eq!(lum.visible(), lum.distance() <= 9.5);
            }
        }
    }

    #[test]
    fn test_anchor_injection() {
        let config = GenerationConfig::default();

        // Home anchor missing: both anchors are added
        let distances = anchor_distances(&[-3.456, 12.0], &config);
        assert_eq!(distances, vec![0.0, 1.0, 3.46, 12.0]);

        // An exact raw sample suppresses the home anchor
        let distances = anchor_distances(&[1.0, 5.0], &config);
        assert_eq!(distances, vec![0.0, 1.0, 5.0]);

        // Samples that only round or fold to it do not
        let distances = anchor_distances(&[0.996, 5.0], &config);
        assert_eq!(distances, vec![0.0, 1.0, 1.0, 5.0]);

        let distances = anchor_distances(&[-1.0], &config);
        assert_eq!(distances, vec![0.0, 1.0, 1.0]);
    }

    #[test]
    fn test_near_home_sample_drops_farthest_body() {
        // With n = 2 samples the body count is 3, so the duplicate home entry
        // pushes the farthest sample out.
        let config = GenerationConfig::default();
        let distances = fit_to_body_count(anchor_distances(&[0.996, 5.0], &config), 2);
        assert_eq!(distances, vec![0.0, 1.0, 1.0]);

        // An exact home sample leaves nothing to drop
        let distances = fit_to_body_count(anchor_distances(&[1.0, 5.0], &config), 2);
        assert_eq!(distances, vec![0.0, 1.0, 5.0]);
    }

    #[test]
    fn test_build_luminaries_forces_central_color() {
        let config = GenerationConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let luminaries = build_luminaries(&mut rng, &[0.0, 9.5, 9.51], &config);

        assert_eq!(luminaries.len(), 3);
        assert_eq!(luminaries[0].color(), "orange");
        assert!(luminaries[1].visible());
        assert!(!luminaries[2].visible());
        assert_eq!(visible_count(&luminaries), 2);
    }

    #[test]
    fn test_central_color_still_consumes_draws() {
        // Forcing the central color must not skip its RGB draw
        let config = GenerationConfig::default();
        let mut a = ChaCha8Rng::seed_from_u64(11);
        let mut b = ChaCha8Rng::seed_from_u64(11);

        build_luminaries(&mut a, &[0.0, 2.0], &config);
        for _ in 0..6 {
            let _ = b.gen_range(0..=255u8);
        }
        assert_eq!(a.gen::<u32>(), b.gen::<u32>());
    }

    #[test]
    fn test_custom_threshold() {
        let config = GenerationConfig {
            visibility_threshold: 0.5,
            ..Default::default()
        };
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let luminaries = generate_luminaries(&mut rng, &config);
        for lum in &luminaries {
            assert_eq!(lum.visible(), lum.distance() <= 0.5);
        }
    }
}
