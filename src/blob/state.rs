//! Per-day blob state: seed, palette, shape parameters and noise field.

use crate::color::hsl_to_rgb;
use crate::noise::NoiseField;
use crate::params::BlobShape;
use crate::random::{hash_seed, SeededRandom};

/// Hue rotation between palette entries (degrees)
pub const GOLDEN_ANGLE_DEG: f64 = 137.5;

/// Seed key for the `counter`-th interactive reseed on `date`
pub fn test_seed_key(date: &str, counter: u32) -> String {
    format!("{}-test-{}", date, counter)
}

/// Colors derived from the day's hues, sRGB-encoded components in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    /// Surface color at the bottom of the blob
    pub base: [f32; 3],
    /// Surface color at the top of the blob
    pub accent: [f32; 3],
    /// Scene clear color (complement of the primary hue)
    pub background: [f32; 3],
}

/// Everything that stays fixed for one blob day.
///
/// Built once per seed string; a new day (or a test reseed) builds a fresh
/// state and replaces the old one wholesale.
#[derive(Debug, Clone)]
pub struct BlobState {
    pub seed: u32,
    pub seed_string: String,
    pub primary_hue: f64,
    pub secondary_hue: f64,
    pub tertiary_hue: f64,
    pub background_hue: f64,
    pub palette: Palette,
    pub shape: BlobShape,
    noise: NoiseField,
}

impl BlobState {
    /// Derive the state for `seed_string` with the default shape.
    pub fn new(seed_string: &str) -> Self {
        Self::with_shape(seed_string, BlobShape::default())
    }

    /// Derive the state for `seed_string` with custom shape parameters.
    ///
    /// The random stream feeds the noise shuffle first, then one more draw
    /// picks the primary hue.
    pub fn with_shape(seed_string: &str, shape: BlobShape) -> Self {
        let seed = hash_seed(seed_string);
        let mut random = SeededRandom::new(seed);
        let noise = NoiseField::new(&mut random);

        let primary_hue = random.next_f64() * 360.0;
        let secondary_hue = (primary_hue + GOLDEN_ANGLE_DEG).rem_euclid(360.0);
        let tertiary_hue = (secondary_hue + GOLDEN_ANGLE_DEG).rem_euclid(360.0);
        let background_hue = (primary_hue + 180.0).rem_euclid(360.0);

        let palette = Palette {
            base: hsl_to_rgb(primary_hue, 1.0, 0.5),
            accent: hsl_to_rgb(secondary_hue, 1.0, 0.5),
            background: hsl_to_rgb(background_hue, 1.0, 0.5),
        };

        log::debug!(
            "Blob state for '{}': seed={} hues=({:.2}, {:.2}, {:.2})",
            seed_string,
            seed,
            primary_hue,
            secondary_hue,
            tertiary_hue
        );

        Self {
            seed,
            seed_string: seed_string.to_string(),
            primary_hue,
            secondary_hue,
            tertiary_hue,
            background_hue,
            palette,
            shape,
            noise,
        }
    }

    /// The day's noise field
    pub fn noise(&self) -> &NoiseField {
        &self.noise
    }

    /// Dark reflection gradient stops (top, middle, bottom) for the environment.
    pub fn environment_gradient(&self) -> [[f32; 3]; 3] {
        [
            hsl_to_rgb(self.primary_hue, 0.30, 0.15),
            hsl_to_rgb(self.secondary_hue, 0.20, 0.08),
            hsl_to_rgb(self.tertiary_hue, 0.25, 0.12),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_rgb_near(actual: [f32; 3], expected: [f32; 3]) {
        for c in 0..3 {
            assert!(
                (actual[c] - expected[c]).abs() < 1e-4,
                "{:?} != {:?}",
                actual,
                expected
            );
        }
    }

    #[test]
    fn test_new_year_recorded_state() {
        let state = BlobState::new("2024-01-01");
        assert_eq!(state.seed, 3_681_625_664);
        assert!((state.primary_hue - 181.397_160_915_657_88).abs() < 1e-9);
        assert!((state.secondary_hue - 318.897_160_915_657_9).abs() < 1e-9);
        assert!((state.tertiary_hue - 96.397_160_915_657_88).abs() < 1e-9);
        assert!((state.background_hue - 1.397_160_915_657_878).abs() < 1e-9);

        assert_rgb_near(state.palette.base, [0.0, 0.976_714, 1.0]);
        assert_rgb_near(state.palette.accent, [1.0, 0.0, 0.685_047]);
        assert_rgb_near(state.palette.background, [1.0, 0.023_286, 0.0]);
    }

    #[test]
    fn test_state_is_deterministic() {
        let a = BlobState::new("2024-06-01");
        let b = BlobState::new("2024-06-01");
        assert_eq!(a.seed, b.seed);
        assert_eq!(a.primary_hue.to_bits(), b.primary_hue.to_bits());
        assert_eq!(a.palette, b.palette);
        assert_eq!(a.noise().permutation(), b.noise().permutation());
    }

    #[test]
    fn test_hue_invariants() {
        for key in ["", "2024-01-01", "2031-12-31", "2024-01-01-test-3"] {
            let s = BlobState::new(key);
            assert!((0.0..360.0).contains(&s.primary_hue));
            assert!((0.0..360.0).contains(&s.secondary_hue));
            assert!((0.0..360.0).contains(&s.tertiary_hue));
            assert!((0.0..360.0).contains(&s.background_hue));
            let d = (s.secondary_hue - s.primary_hue - GOLDEN_ANGLE_DEG).rem_euclid(360.0);
            assert!(d < 1e-9 || (360.0 - d) < 1e-9, "key {:?}", key);
            let d = (s.tertiary_hue - s.secondary_hue - GOLDEN_ANGLE_DEG).rem_euclid(360.0);
            assert!(d < 1e-9 || (360.0 - d) < 1e-9, "key {:?}", key);
        }
    }

    #[test]
    fn test_default_shape() {
        let state = BlobState::new("2024-01-01");
        assert_eq!(state.shape, BlobShape::default());
        assert_eq!(state.shape.noise_scale, 1.0);
        assert_eq!(state.shape.base_amplitude, 0.0);
        assert_eq!(state.shape.max_amplitude, 1.0);
        assert_eq!(state.shape.rotation_speed, 0.0);
    }

    #[test]
    fn test_environment_gradient_is_dark() {
        let state = BlobState::new("2024-01-01");
        for stop in state.environment_gradient() {
            assert!(stop.iter().all(|c| (0.0..=0.2).contains(c)), "{:?}", stop);
        }
    }

    #[test]
    fn test_test_seed_key() {
        assert_eq!(test_seed_key("2024-01-01", 3), "2024-01-01-test-3");
        assert_ne!(
            BlobState::new(&test_seed_key("2024-01-01", 1)).seed,
            BlobState::new("2024-01-01").seed
        );
    }
}
