use firmament_core::math::{atan2_degrees, cos_degrees, sin_degrees};
use firmament_core::{Month, SkyPosition};

use crate::epoch::{
    day_number, eccentric_anomaly, ecliptic_to_equatorial, equatorial_to_horizontal,
    local_sidereal_time, obliquity, universal_time, SunElements,
};

/// Ecliptic longitude of the sun in degrees and its distance in AU.
pub(crate) fn sun_ecliptic(day_number: f64) -> (f64, f64) {
    let elements = SunElements::at(day_number);
    let e = elements.eccentricity;
    let ecc = eccentric_anomaly(elements.mean_anomaly, e);

    let x = cos_degrees(ecc) - e;
    let y = sin_degrees(ecc) * (1.0 - e * e).sqrt();
    let distance = (x * x + y * y).sqrt();
    let true_anomaly = atan2_degrees(y, x);

    (true_anomaly + elements.perihelion, distance)
}

/// Sun position for a precomputed day number and universal time.
pub(crate) fn sun_position_at(
    day_number: f64,
    universal_time: f64,
    latitude: f64,
    longitude: f64,
) -> SkyPosition {
    let (lon, distance) = sun_ecliptic(day_number);
    let x = distance * cos_degrees(lon);
    let y = distance * sin_degrees(lon);
    let equatorial = ecliptic_to_equatorial(x, y, 0.0, obliquity(day_number));
    let lst = local_sidereal_time(day_number, universal_time, longitude);
    equatorial_to_horizontal(equatorial, lst, latitude)
}

/// Apparent sun position for a local standard time (decimal hours), UTC
/// offset (hours), calendar date, and observer latitude/longitude (radians,
/// east positive).
pub fn calculate_sun_position(
    standard_time: f32,
    utc_offset: f32,
    month: Month,
    day: u32,
    year: i32,
    latitude: f32,
    longitude: f32,
) -> SkyPosition {
    let ut = universal_time(standard_time, utc_offset);
    let d = day_number(month, day, year, ut);
    sun_position_at(d, ut, latitude as f64, longitude as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_sun_position_reference_fixture() {
        let pos = calculate_sun_position(12.0, -7.0, Month::June, 6, 2003, 0.7156, -1.9548);
        assert!((pos.azimuth - 2.8096).abs() < 1e-3, "azimuth {}", pos.azimuth);
        assert!((pos.zenith - 0.3346).abs() < 1e-3, "zenith {}", pos.zenith);
    }

    #[test]
    fn test_sun_ecliptic_reference() {
        // 1990 April 19, 0h UT: longitude 28.69 degrees, distance 1.0043 AU.
        let (lon, r) = sun_ecliptic(-3543.0);
        let lon = firmament_core::math::revolution_reduction_degrees(lon);
        assert!((lon - 28.687).abs() < 0.01, "longitude {lon}");
        assert!((r - 1.0043).abs() < 1e-3, "distance {r}");
    }

    #[test]
    fn test_sun_below_horizon_at_midnight() {
        let pos = calculate_sun_position(0.0, -7.0, Month::June, 6, 2003, 0.7156, -1.9548);
        assert!(pos.zenith > FRAC_PI_2);
    }

    #[test]
    fn test_sun_rises_in_east_sets_in_west() {
        let morning = calculate_sun_position(7.0, -7.0, Month::March, 20, 2003, 0.7156, -1.9548);
        let evening = calculate_sun_position(17.0, -7.0, Month::March, 20, 2003, 0.7156, -1.9548);
        assert!(morning.azimuth > 0.0 && morning.azimuth < std::f32::consts::PI);
        assert!(evening.azimuth > std::f32::consts::PI);
    }

    #[test]
    fn test_sun_zenith_in_range_all_day() {
        for hour in 0..24 {
            let pos = calculate_sun_position(hour as f32, 2.0, Month::December, 1, 2021, -0.6, 0.3);
            assert!(pos.zenith >= 0.0 && pos.zenith <= std::f32::consts::PI);
            assert!(pos.azimuth >= 0.0 && pos.azimuth <= std::f32::consts::TAU);
        }
    }
}
