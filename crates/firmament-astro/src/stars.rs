use firmament_core::constants::{STAR_ROTATION_DEGREES_PER_HOUR, STAR_ROTATION_OFFSET_DEGREES};
use firmament_core::math::revolution_reduction_degrees;

use crate::epoch::universal_time;

/// Rotation of the star field in radians [0, 2π) for an observer at
/// `longitude` (radians, east positive).
///
/// The sky turns 15 degrees per hour of universal time; the fixed offset
/// lines the star texture up with the sky at 0h UT.
pub fn calculate_star_rotation(standard_time: f32, utc_offset: f32, longitude: f32) -> f32 {
    star_rotation_at(universal_time(standard_time, utc_offset), longitude as f64)
}

pub(crate) fn star_rotation_at(universal_time: f64, longitude: f64) -> f32 {
    let degrees = universal_time * STAR_ROTATION_DEGREES_PER_HOUR
        + longitude.to_degrees()
        + STAR_ROTATION_OFFSET_DEGREES;
    revolution_reduction_degrees(degrees).to_radians() as f32
}

/// Zenith of the north celestial pole. Its elevation equals the
/// observer's latitude (radians).
pub fn calculate_celestial_north_pole_zenith(latitude: f32) -> f32 {
    std::f32::consts::FRAC_PI_2 - latitude
}
