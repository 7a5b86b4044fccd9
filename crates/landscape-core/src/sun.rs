// Pure sun path logic (engine-agnostic)

use crate::constants::{
    HOURS_PER_DAY, SUN_ELEVATION_AMPLITUDE, SUN_ELEVATION_OFFSET, SUN_ORBIT_RADIUS,
};
use glam::Vec3;
use std::f32::consts::{FRAC_PI_2, TAU};

/// Angle of the sun on its orbit for a time of day.
///
/// Midnight maps to `-π/2`, so the sun sits at its lowest point at 0h and its
/// highest at 12h. Hours outside `[0, 24)` wrap around.
pub fn sun_azimuth(hours: f32) -> f32 {
    let day_fraction = hours.rem_euclid(HOURS_PER_DAY) / HOURS_PER_DAY;
    day_fraction * TAU - FRAC_PI_2
}

/// Position of the sun light for a time of day on a 24-hour clock
pub fn sun_position(hours: f32) -> Vec3 {
    let (sin, cos) = sun_azimuth(hours).sin_cos();
    Vec3::new(
        cos * SUN_ORBIT_RADIUS,
        sin * SUN_ELEVATION_AMPLITUDE + SUN_ELEVATION_OFFSET,
        sin * SUN_ORBIT_RADIUS,
    )
}
