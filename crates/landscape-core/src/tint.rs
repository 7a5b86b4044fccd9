// Pure temperature tint logic (engine-agnostic)

use crate::constants::{COLD_COLOR_HEX, COLD_TEMPERATURE, HOT_COLOR_HEX, HOT_TEMPERATURE};
use glam::Vec3;

/// Convert a `0xRRGGBB` sRGB colour to linear RGB
pub fn srgb_hex_to_linear(hex: u32) -> Vec3 {
    let channel = |shift: u32| srgb_to_linear(((hex >> shift) & 0xff) as f32 / 255.0);
    Vec3::new(channel(16), channel(8), channel(0))
}

fn srgb_to_linear(value: f32) -> f32 {
    if value <= 0.04045 {
        value / 12.92
    } else {
        ((value + 0.055) / 1.055).powf(2.4)
    }
}

pub fn cold_color() -> Vec3 {
    srgb_hex_to_linear(COLD_COLOR_HEX)
}

pub fn hot_color() -> Vec3 {
    srgb_hex_to_linear(HOT_COLOR_HEX)
}

/// Interpolation factor between the cold and hot colours, clamped to `[0, 1]`
pub fn temperature_factor(celsius: f32) -> f32 {
    let t = (celsius - COLD_TEMPERATURE) / (HOT_TEMPERATURE - COLD_TEMPERATURE);
    t.clamp(0.0, 1.0)
}

/// Material tint for a temperature in Celsius, as linear RGB.
///
/// Unlike the sun path this does not extrapolate: anything below 0°C is the
/// cold colour and anything above 40°C the hot one.
pub fn temperature_tint(celsius: f32) -> Vec3 {
    let t = temperature_factor(celsius);
    // endpoints are returned as-is so clamped values compare exactly
    if t <= 0.0 {
        return cold_color();
    }
    if t >= 1.0 {
        return hot_color();
    }
    cold_color().lerp(hot_color(), t)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0.0)]
    #[case(-0.5)]
    #[case(-40.0)]
    #[case(f32::NEG_INFINITY)]
    fn test_cold_end_clamps(#[case] celsius: f32) {
        assert_eq!(temperature_tint(celsius), cold_color());
    }

    #[rstest]
    #[case(40.0)]
    #[case(40.5)]
    #[case(120.0)]
    #[case(f32::INFINITY)]
    fn test_hot_end_clamps(#[case] celsius: f32) {
        assert_eq!(temperature_tint(celsius), hot_color());
    }

    #[test]
    fn test_midpoint() {
        let expected = (cold_color() + hot_color()) * 0.5;
        assert!(temperature_tint(20.0).abs_diff_eq(expected, 1e-6));
    }

    #[rstest]
    #[case(-5.0, 0.0)]
    #[case(10.0, 0.25)]
    #[case(30.0, 0.75)]
    #[case(45.0, 1.0)]
    fn test_temperature_factor(#[case] celsius: f32, #[case] expected: f32) {
        assert!((temperature_factor(celsius) - expected).abs() < 1e-6);
    }

    #[test]
    fn test_hex_conversion() {
        assert_eq!(srgb_hex_to_linear(0x000000), Vec3::ZERO);
        assert!(srgb_hex_to_linear(0xffffff).abs_diff_eq(Vec3::ONE, 1e-6));
        // 0x33 = 0.2 sRGB
        let cold = cold_color();
        assert!((cold.x - 0.0331).abs() < 1e-3, "r was {}", cold.x);
        assert!((cold.z - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_tint_is_monotonic_in_red() {
        let mut previous = temperature_tint(0.0).x;
        for step in 1..=40 {
            let red = temperature_tint(step as f32).x;
            assert!(red >= previous);
            previous = red;
        }
    }
}
