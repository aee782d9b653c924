//! The cosmology aggregate: seed, luminaries and numeric ledger.

use std::fmt;
use rand_chacha::ChaCha8Rng;
use tracing::info;
use crate::config::GenerationConfig;
use crate::error::{CosmologyError, Result};
use crate::generation::{generate_luminaries, visible_count};
use crate::ledger::NumberLedger;
use crate::luminary::Luminary;
use crate::seeds::{random_seed, rng_from_seed};

/// Collection names accepted by [`Cosmology::count_of`].
pub const LUMINARY: &str = "luminary";
pub const NUMBER: &str = "number";

/// A seeded collection of luminaries plus a ledger of numbers.
///
/// The luminaries are generated once, at construction, and never change.
/// The ledger starts as `{visible luminary count}` and is mutated only through
/// [`add_number`](Cosmology::add_number) and
/// [`remove_number`](Cosmology::remove_number).
#[derive(Clone, Debug)]
pub struct Cosmology {
    seed: u32,
    rng: ChaCha8Rng,
    config: GenerationConfig,
    luminary: Vec<Luminary>,
    number: NumberLedger,
}

impl Cosmology {
    /// Build a cosmology with the default generation constants.
    ///
    /// Without a seed, one is drawn from the full `u32` range and kept as
    /// this cosmology's seed.
    pub fn new(seed: Option<u32>) -> Self {
        Self::generate(seed.unwrap_or_else(random_seed), GenerationConfig::default())
    }

    pub fn from_seed(seed: u32) -> Self {
        Self::new(Some(seed))
    }

    /// Build with custom generation constants. Fails if the config is invalid.
    pub fn with_config(seed: Option<u32>, config: GenerationConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::generate(seed.unwrap_or_else(random_seed), config))
    }

    fn generate(seed: u32, config: GenerationConfig) -> Self {
        let mut rng = rng_from_seed(seed);
        let luminary = generate_luminaries(&mut rng, &config);

        let visible = visible_count(&luminary);
        let mut number = NumberLedger::new();
        number.add(visible as i64);

        info!(seed, luminaries = luminary.len(), visible, "generated cosmology");

        Self {
            seed,
            rng,
            config,
            luminary,
            number,
        }
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    /// Luminaries ordered by ascending distance. The first is the central body.
    pub fn luminaries(&self) -> &[Luminary] {
        &self.luminary
    }

    pub fn luminary(&self, index: usize) -> Option<&Luminary> {
        self.luminary.get(index)
    }

    pub fn visible_luminaries(&self) -> impl Iterator<Item = &Luminary> {
        self.luminary.iter().filter(|l| l.visible())
    }

    pub fn numbers(&self) -> &NumberLedger {
        &self.number
    }

    /// Size of a named collection (`"luminary"` or `"number"`, any case).
    pub fn count_of(&self, collection: &str) -> Result<usize> {
        match collection.to_lowercase().as_str() {
            LUMINARY => Ok(self.luminary.len()),
            NUMBER => Ok(self.number.count()),
            _ => Err(CosmologyError::UnknownCollection(collection.to_string())),
        }
    }

    /// Record one more occurrence of `n`.
    pub fn add_number(&mut self, n: i64) {
        self.number.add(n);
    }

    /// Remove every occurrence of `n` from the ledger; returns how many went.
    pub fn remove_number(&mut self, n: i64) -> usize {
        self.number.remove(n)
    }

    /// The seeded random source, positioned just after generation.
    ///
    /// Further draws are reproducible for a given seed but do not affect the
    /// already generated luminaries.
    pub fn rng(&mut self) -> &mut ChaCha8Rng {
        &mut self.rng
    }
}

impl fmt::Display for Cosmology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Cosmology(seed={}, luminary={}, number={})",
            self.seed,
            self.luminary.len(),
            self.number
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_seed_is_kept() {
        for seed in [0, 1, 42, 123_456_789, u32::MAX] {
            assert_eq!(Cosmology::from_seed(seed).seed(), seed);
        }
    }

    #[test]
    fn test_random_seed_is_exposed() {
        let cosmology = Cosmology::new(None);
        let replay = Cosmology::from_seed(cosmology.seed());
        assert_eq!(cosmology.luminaries(), replay.luminaries());
    }

    #[test]
    fn test_same_seed_same_cosmology() {
        for seed in 0..50 {
            let a = Cosmology::from_seed(seed);
            let b = Cosmology::from_seed(seed);
            assert_eq!(a.luminaries(), b.luminaries());
            assert_eq!(a.numbers(), b.numbers());
        }
    }

    #[test]
    fn test_generated_invariants() {
        for seed in 0..200 {
            let cosmology = Cosmology::from_seed(seed);
            let luminaries = cosmology.luminaries();

            assert!(luminaries.len() >= 2);
            assert!(luminaries
                .windows(2)
                .all(|pair| pair[0].distance() <= pair[1].distance()));
            assert_eq!(luminaries[0].color(), "orange");
            for lum in luminaries {
                assert_eq!(lum.visible(), lum.distance() <= 9.5);
            }
        }
    }

    #[test]
    fn test_initial_ledger_is_visible_count() {
        let cosmology = Cosmology::from_seed(42);
        let visible = cosmology.visible_luminaries().count() as i64;
        assert_eq!(cosmology.numbers().to_vec(), vec![visible]);
        assert_eq!(cosmology.count_of(NUMBER), Ok(1));
    }

    #[test]
    fn test_ledger_bulk_removal() {
        let mut cosmology = Cosmology::from_seed(7);
        let v = cosmology.numbers().to_vec()[0];

        cosmology.add_number(3);
        assert_eq!(cosmology.count_of("number"), Ok(2));

        cosmology.add_number(3);
        cosmology.remove_number(3);

        if v == 3 {
            // The initial entry is also a 3 and goes with the others
            assert_eq!(cosmology.count_of("number"), Ok(0));
        } else {
            assert_eq!(cosmology.numbers().to_vec(), vec![v]);
        }

        assert_eq!(cosmology.remove_number(999), 0);
    }

    #[test]
    fn test_count_of() {
        let cosmology = Cosmology::from_seed(42);
        assert_eq!(cosmology.count_of("luminary"), Ok(cosmology.luminaries().len()));
        assert_eq!(cosmology.count_of("Luminary"), Ok(cosmology.luminaries().len()));
        assert_eq!(
            cosmology.count_of("bogus"),
            Err(CosmologyError::UnknownCollection("bogus".to_string()))
        );
    }

    #[test]
    fn test_display() {
        let mut cosmology = Cosmology::from_seed(42);
        let v = cosmology.numbers().to_vec()[0];
        cosmology.add_number(v + 100);

        assert_eq!(
            cosmology.to_string(),
            format!(
                "Cosmology(seed=42, luminary={}, number=[{}, {}])",
                cosmology.luminaries().len(),
                v,
                v + 100
            )
        );
    }

    #[test]
    fn test_rng_continues_deterministically() {
        let mut a = Cosmology::from_seed(2024);
        let mut b = Cosmology::from_seed(2024);
        assert_eq!(a.rng().gen::<u64>(), b.rng().gen::<u64>());
    }

    #[test]
    fn test_with_config() {
        let config = GenerationConfig {
            visibility_threshold: 100.0,
            ..Default::default()
        };
        let cosmology = Cosmology::with_config(Some(5), config).unwrap();
        assert!(cosmology.luminaries().iter().all(|l| l.visible()));
        assert_eq!(
            cosmology.numbers().to_vec(),
            vec![cosmology.luminaries().len() as i64]
        );

        let bad = GenerationConfig {
            body_count_range: (10, 2),
            ..Default::default()
        };
        assert!(matches!(
            Cosmology::with_config(Some(5), bad),
            Err(CosmologyError::Config(_))
        ));
    }

    #[test]
    fn test_with_config_rejects_unroundable_precision() {
        let config = GenerationConfig {
            precision: 400,
            ..Default::default()
        };
        assert!(matches!(
            Cosmology::with_config(Some(1), config),
            Err(CosmologyError::Config(_))
        ));

        let config = GenerationConfig {
            precision: 15,
            ..Default::default()
        };
        let cosmology = Cosmology::with_config(Some(1), config).unwrap();
        assert!(cosmology.luminaries().iter().all(|l| l.distance().is_finite()));
    }
}
