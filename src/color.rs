//! Color helpers for palette derivation and vertex gradients.

/// Convert HSL to sRGB-encoded RGB components in [0, 1].
///
/// `h` is in degrees (any value, wrapped into [0, 360)); `s` and `l` are
/// clamped to [0, 1].
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> [f32; 3] {
    let h = h.rem_euclid(360.0) / 360.0;
    let s = s.clamp(0.0, 1.0);
    let l = l.clamp(0.0, 1.0);

    if s == 0.0 {
        let v = l as f32;
        return [v, v, v];
    }

    let q = if l <= 0.5 {
        l * (1.0 + s)
    } else {
        l + s - l * s
    };
    let p = 2.0 * l - q;

    let r = hue_to_rgb(p, q, h + 1.0 / 3.0);
    let g = hue_to_rgb(p, q, h);
    let b = hue_to_rgb(p, q, h - 1.0 / 3.0);

    [r as f32, g as f32, b as f32]
}

fn hue_to_rgb(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * 6.0 * (2.0 / 3.0 - t)
    } else {
        p
    }
}

/// Component-wise linear blend `a + (b - a) * t`.
#[inline]
pub fn lerp_rgb(a: [f32; 3], b: [f32; 3], t: f32) -> [f32; 3] {
    [
        a[0] + (b[0] - a[0]) * t,
        a[1] + (b[1] - a[1]) * t,
        a[2] + (b[2] - a[2]) * t,
    ]
}

/// Decode one sRGB-encoded component to linear light.
pub fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.040_45 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_rgb_eq(actual: [f32; 3], expected: [f32; 3]) {
        for c in 0..3 {
            assert!(
                (actual[c] - expected[c]).abs() < 1e-5,
                "{:?} != {:?}",
                actual,
                expected
            );
        }
    }

    #[test]
    fn test_primary_hues() {
        assert_rgb_eq(hsl_to_rgb(0.0, 1.0, 0.5), [1.0, 0.0, 0.0]);
        assert_rgb_eq(hsl_to_rgb(120.0, 1.0, 0.5), [0.0, 1.0, 0.0]);
        assert_rgb_eq(hsl_to_rgb(240.0, 1.0, 0.5), [0.0, 0.0, 1.0]);
        assert_rgb_eq(hsl_to_rgb(360.0, 1.0, 0.5), [1.0, 0.0, 0.0]);
    }

    #[test]
    fn test_grayscale_when_unsaturated() {
        assert_rgb_eq(hsl_to_rgb(200.0, 0.0, 0.25), [0.25, 0.25, 0.25]);
    }

    #[test]
    fn test_dark_low_saturation_stop() {
        // hsl(0, 30%, 15%)
        assert_rgb_eq(hsl_to_rgb(0.0, 0.3, 0.15), [0.195, 0.105, 0.105]);
    }

    #[test]
    fn test_full_saturation_components_in_range() {
        for h in 0..360 {
            let rgb = hsl_to_rgb(h as f64, 1.0, 0.5);
            assert!(rgb.iter().all(|c| (0.0..=1.0).contains(c)), "hue {}", h);
        }
    }

    #[test]
    fn test_lerp_endpoints_and_midpoint() {
        let a = [0.0, 0.5, 1.0];
        let b = [1.0, 0.5, 0.0];
        assert_rgb_eq(lerp_rgb(a, b, 0.0), a);
        assert_rgb_eq(lerp_rgb(a, b, 1.0), b);
        assert_rgb_eq(lerp_rgb(a, b, 0.5), [0.5, 0.5, 0.5]);
    }

    #[test]
    fn test_srgb_to_linear() {
        assert_eq!(srgb_to_linear(0.0), 0.0);
        assert!((srgb_to_linear(1.0) - 1.0).abs() < 1e-6);
        assert!((srgb_to_linear(0.5) - 0.214_041).abs() < 1e-5);
    }
}
