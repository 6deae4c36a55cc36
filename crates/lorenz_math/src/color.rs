//! Color conversion helpers
//!
//! Colors are `[r, g, b, a]` with each channel in `[0, 1]`.

/// RGBA color, channels in `[0, 1]`
pub type Rgba = [f32; 4];

/// Convert hue/saturation/value to an opaque RGBA color.
///
/// `hue` is in degrees and is wrapped into `[0, 360)`; `saturation` and
/// `value` are clamped to `[0, 1]`. Uses the branchless per-channel form
/// `v - v*s*clamp(min(k, 4 - k), 0, 1)` with `k = (n + h/60) mod 6`.
pub fn hsv_to_rgba(hue: f32, saturation: f32, value: f32) -> Rgba {
    let h = hue.rem_euclid(360.0) / 60.0;
    let s = saturation.clamp(0.0, 1.0);
    let v = value.clamp(0.0, 1.0);

    let channel = |n: f32| {
        let k = (n + h).rem_euclid(6.0);
        let k = k.min(4.0 - k).clamp(0.0, 1.0);
        v - v * s * k
    };

    [channel(5.0), channel(3.0), channel(1.0), 1.0]
}

/// Convert one sRGB-encoded channel to linear light.
///
/// Needed when the surface format is sRGB, so that colors authored in sRGB
/// space display unchanged.
pub fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_rgba_eq(actual: Rgba, expected: Rgba) {
        for (a, e) in actual.iter().zip(expected.iter()) {
            assert!((a - e).abs() < 1e-5, "{:?} != {:?}", actual, expected);
        }
    }

    #[test]
    fn test_primary_hues() {
        assert_rgba_eq(hsv_to_rgba(0.0, 1.0, 1.0), [1.0, 0.0, 0.0, 1.0]);
        assert_rgba_eq(hsv_to_rgba(120.0, 1.0, 1.0), [0.0, 1.0, 0.0, 1.0]);
        assert_rgba_eq(hsv_to_rgba(240.0, 1.0, 1.0), [0.0, 0.0, 1.0, 1.0]);
    }

    #[test]
    fn test_secondary_hues() {
        assert_rgba_eq(hsv_to_rgba(60.0, 1.0, 1.0), [1.0, 1.0, 0.0, 1.0]);
        assert_rgba_eq(hsv_to_rgba(180.0, 1.0, 1.0), [0.0, 1.0, 1.0, 1.0]);
        assert_rgba_eq(hsv_to_rgba(300.0, 1.0, 1.0), [1.0, 0.0, 1.0, 1.0]);
    }

    #[test]
    fn test_hue_wraps() {
        assert_rgba_eq(hsv_to_rgba(360.0, 1.0, 1.0), hsv_to_rgba(0.0, 1.0, 1.0));
        assert_rgba_eq(hsv_to_rgba(-120.0, 1.0, 1.0), hsv_to_rgba(240.0, 1.0, 1.0));
        assert_rgba_eq(hsv_to_rgba(450.0, 1.0, 1.0), hsv_to_rgba(90.0, 1.0, 1.0));
    }

    #[test]
    fn test_zero_saturation_is_gray() {
        assert_rgba_eq(hsv_to_rgba(200.0, 0.0, 0.5), [0.5, 0.5, 0.5, 1.0]);
    }

    #[test]
    fn test_zero_value_is_black() {
        assert_rgba_eq(hsv_to_rgba(42.0, 1.0, 0.0), [0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_srgb_to_linear_endpoints() {
        assert_eq!(srgb_to_linear(0.0), 0.0);
        assert!((srgb_to_linear(1.0) - 1.0).abs() < 1e-6);
        assert!(srgb_to_linear(0.5) < 0.5);
    }
}
