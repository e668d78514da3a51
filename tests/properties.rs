//! Property tests for the deterministic blob pipeline.

use glam::Vec3;
use proptest::prelude::*;

use timeblob::blob::{compute_frame, BaseGeometry, BlobState, GOLDEN_ANGLE_DEG};
use timeblob::clock::{day_progress_from_seconds, DayClock};
use timeblob::{hash_seed, NoiseField, SeededRandom};

fn field(key: &str) -> NoiseField {
    NoiseField::new(&mut SeededRandom::from_key(key))
}

#[test]
fn noise_stays_bounded_over_dense_samples() {
    let noise = field("2024-01-01");
    let mut random = SeededRandom::new(7);

    for _ in 0..10_000 {
        let x = random.next_f64() * 20.0 - 10.0;
        let y = random.next_f64() * 20.0 - 10.0;
        let z = random.next_f64() * 20.0 - 10.0;
        let n = noise.noise_3d(x, y, z);
        assert!(n.is_finite());
        assert!(n.abs() <= 1.2, "noise({}, {}, {}) = {}", x, y, z, n);
    }
}

proptest! {
    #[test]
    fn hash_is_deterministic(s in ".*") {
        prop_assert_eq!(hash_seed(&s), hash_seed(&s));
    }

    #[test]
    fn random_stream_is_reproducible_and_in_range(seed in any::<u32>()) {
        let mut a = SeededRandom::new(seed);
        let mut b = SeededRandom::new(seed);
        for _ in 0..64 {
            let x = a.next_f64();
            prop_assert_eq!(x.to_bits(), b.next_f64().to_bits());
            prop_assert!((0.0..1.0).contains(&x));
        }
    }

    #[test]
    fn permutation_is_a_shuffle(key in "[0-9]{4}-[0-9]{2}-[0-9]{2}") {
        let noise = field(&key);
        let perm = noise.permutation();
        prop_assert_eq!(perm.len(), 256);
        let mut seen = [false; 256];
        for &v in perm {
            prop_assert!(!seen[v as usize]);
            seen[v as usize] = true;
        }
    }

    #[test]
    fn blob_state_is_deterministic(key in ".{0,24}") {
        let a = BlobState::new(&key);
        let b = BlobState::new(&key);
        prop_assert_eq!(a.seed, b.seed);
        prop_assert_eq!(a.primary_hue.to_bits(), b.primary_hue.to_bits());
        prop_assert_eq!(a.palette, b.palette);
        prop_assert_eq!(a.noise().permutation(), b.noise().permutation());
    }

    #[test]
    fn hues_are_golden_angle_apart(key in ".{0,24}") {
        let s = BlobState::new(&key);
        for hue in [s.primary_hue, s.secondary_hue, s.tertiary_hue, s.background_hue] {
            prop_assert!((0.0..360.0).contains(&hue));
        }
        let step = (s.secondary_hue - s.primary_hue).rem_euclid(360.0);
        prop_assert!((step - GOLDEN_ANGLE_DEG).abs() < 1e-9);
        let next_step = (s.tertiary_hue - s.secondary_hue).rem_euclid(360.0);
        prop_assert!((next_step - GOLDEN_ANGLE_DEG).abs() < 1e-9);
        let opposite = (s.background_hue - s.primary_hue).rem_euclid(360.0);
        prop_assert!((opposite - 180.0).abs() < 1e-9);
    }

    #[test]
    fn noise_is_continuous_across_lattice_boundaries(
        cell in -8i32..8,
        y in -5.0f64..5.0,
        z in -5.0f64..5.0,
    ) {
        let noise = field("2024-06-01");
        let x = cell as f64;
        let eps = 1e-7;
        let below = noise.noise_3d(x - eps, y, z);
        let above = noise.noise_3d(x + eps, y, z);
        prop_assert!((below - above).abs() < 1e-4, "jump {} at x = {}", below - above, x);
    }

    #[test]
    fn zero_amplitude_reproduces_rest_pose(t in 0.0f64..1.0, elapsed in 0.0f64..1e5) {
        let base = BaseGeometry::icosphere(1.0, 1);
        let mut state = BlobState::new("2024-01-01");
        state.shape.base_amplitude = 0.0;
        state.shape.max_amplitude = 0.0;

        let frame = compute_frame(&base, &state, t, elapsed).unwrap();
        prop_assert_eq!(frame.positions.as_slice(), base.positions());
    }

    #[test]
    fn displacement_preserves_direction(
        t in 0.0f64..1.0,
        elapsed in 0.0f64..1e4,
        max_amplitude in 0.0f64..3.0,
    ) {
        let base = BaseGeometry::icosphere(1.0, 1);
        let mut state = BlobState::new("2024-03-15");
        state.shape.max_amplitude = max_amplitude;

        let frame = compute_frame(&base, &state, t, elapsed).unwrap();
        for (rest, moved) in base.positions().iter().zip(&frame.positions) {
            let r = Vec3::from_array(*rest);
            let m = Vec3::from_array(*moved);
            prop_assert!(m.length() > 0.0);
            prop_assert!(r.normalize().dot(m.normalize()) > 0.9999);
        }
    }

    #[test]
    fn colors_stay_in_unit_range(t in 0.0f64..1.0, elapsed in 0.0f64..1e4, key in ".{0,12}") {
        let base = BaseGeometry::icosphere(1.0, 1);
        let mut state = BlobState::new(&key);
        state.shape.max_amplitude = 2.5;

        let frame = compute_frame(&base, &state, t, elapsed).unwrap();
        for color in &frame.colors {
            prop_assert!(color.iter().all(|c| (0.0..=1.0).contains(c)));
        }
    }

    #[test]
    fn day_progress_matches_seconds(seconds in 0u32..86_400) {
        let clock = DayClock::with_override(seconds).unwrap();
        let p = clock.day_progress();
        prop_assert_eq!(p, day_progress_from_seconds(seconds as f64));
        prop_assert!((0.0..1.0).contains(&p));
    }

    #[test]
    fn out_of_day_override_is_rejected(seconds in 86_400u32..) {
        prop_assert!(DayClock::with_override(seconds).is_err());
    }
}
