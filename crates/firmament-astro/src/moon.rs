use firmament_core::constants::{
    MOON_FADE_END_ZENITH, MOON_FADE_START_ZENITH, MOON_MIN_VISIBILITY,
};
use firmament_core::math::{
    atan2_degrees, cos_degrees, revolution_reduction_degrees, sin_degrees,
};
use firmament_core::{Month, SkyPosition};

use crate::epoch::{
    day_number, eccentric_anomaly, ecliptic_to_equatorial, equatorial_to_horizontal,
    julian_centuries, local_sidereal_time, obliquity, universal_time, SunElements,
};

/// Lunar orbital elements. Distances are in Earth radii.
#[derive(Debug, Clone, Copy)]
struct MoonElements {
    ascending_node: f64,
    inclination: f64,
    perigee: f64,
    mean_distance: f64,
    eccentricity: f64,
    mean_anomaly: f64,
}

impl MoonElements {
    fn at(day_number: f64) -> Self {
        Self {
            ascending_node: revolution_reduction_degrees(125.1228 - 0.052_953_808_3 * day_number),
            inclination: 5.1454,
            perigee: revolution_reduction_degrees(318.0634 + 0.164_357_322_3 * day_number),
            mean_distance: 60.2666,
            eccentricity: 0.054900,
            mean_anomaly: revolution_reduction_degrees(115.3654 + 13.064_992_950_9 * day_number),
        }
    }
}

/// Geocentric ecliptic longitude and latitude of the moon in degrees,
/// including the main periodic perturbations.
pub(crate) fn moon_ecliptic(day_number: f64) -> (f64, f64) {
    let el = MoonElements::at(day_number);
    let e = el.eccentricity;
    let ecc = eccentric_anomaly(el.mean_anomaly, e);

    let xv = el.mean_distance * (cos_degrees(ecc) - e);
    let yv = el.mean_distance * (1.0 - e * e).sqrt() * sin_degrees(ecc);
    let true_anomaly = atan2_degrees(yv, xv);
    let r = (xv * xv + yv * yv).sqrt();

    let arg = true_anomaly + el.perigee;
    let (sin_n, cos_n) = (sin_degrees(el.ascending_node), cos_degrees(el.ascending_node));
    let (sin_arg, cos_arg) = (sin_degrees(arg), cos_degrees(arg));
    let cos_i = cos_degrees(el.inclination);

    let xh = r * (cos_n * cos_arg - sin_n * sin_arg * cos_i);
    let yh = r * (sin_n * cos_arg + cos_n * sin_arg * cos_i);
    let zh = r * sin_arg * sin_degrees(el.inclination);

    let mut longitude = atan2_degrees(yh, xh);
    let mut latitude = atan2_degrees(zh, (xh * xh + yh * yh).sqrt());

    let sun = SunElements::at(day_number);
    let ms = sun.mean_anomaly;
    let mm = el.mean_anomaly;
    let moon_mean_longitude = el.ascending_node + el.perigee + mm;
    let d = moon_mean_longitude - sun.mean_longitude();
    let f = moon_mean_longitude - el.ascending_node;

    longitude += -1.274 * sin_degrees(mm - 2.0 * d)
        + 0.658 * sin_degrees(2.0 * d)
        - 0.186 * sin_degrees(ms)
        - 0.059 * sin_degrees(2.0 * mm - 2.0 * d)
        - 0.057 * sin_degrees(mm - 2.0 * d + ms)
        + 0.053 * sin_degrees(mm + 2.0 * d)
        + 0.046 * sin_degrees(2.0 * d - ms)
        + 0.041 * sin_degrees(mm - ms)
        - 0.035 * sin_degrees(d)
        - 0.031 * sin_degrees(mm + ms)
        - 0.015 * sin_degrees(2.0 * f - 2.0 * d)
        + 0.011 * sin_degrees(mm - 4.0 * d);

    latitude += -0.173 * sin_degrees(f - 2.0 * d)
        - 0.055 * sin_degrees(mm - f - 2.0 * d)
        - 0.046 * sin_degrees(mm + f - 2.0 * d)
        + 0.033 * sin_degrees(f + 2.0 * d)
        + 0.017 * sin_degrees(2.0 * mm + f);

    (revolution_reduction_degrees(longitude), latitude)
}

/// Moon position for a precomputed day number and universal time.
pub(crate) fn moon_position_at(
    day_number: f64,
    universal_time: f64,
    latitude: f64,
    longitude: f64,
) -> SkyPosition {
    let (lon, lat) = moon_ecliptic(day_number);
    let x = cos_degrees(lon) * cos_degrees(lat);
    let y = sin_degrees(lon) * cos_degrees(lat);
    let z = sin_degrees(lat);
    let equatorial = ecliptic_to_equatorial(x, y, z, obliquity(day_number));
    let lst = local_sidereal_time(day_number, universal_time, longitude);
    equatorial_to_horizontal(equatorial, lst, latitude)
}

/// Geocentric moon position. Arguments as for
/// [`calculate_sun_position`](crate::sun::calculate_sun_position).
pub fn calculate_moon_position(
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
    moon_position_at(d, ut, latitude as f64, longitude as f64)
}

/// Moon phase in degrees for a precomputed day number.
pub(crate) fn moon_phase_at(day_number: f64) -> f32 {
    let t = julian_centuries(day_number);
    let d = revolution_reduction_degrees(297.850_192_1 + 445_267.111_403_4 * t);
    let m = revolution_reduction_degrees(357.529_109_2 + 35_999.050_290_9 * t);
    let mp = revolution_reduction_degrees(134.963_396_4 + 477_198.867_505_5 * t);

    // Phase angle as seen from the moon: 0 at full, 180 at new.
    let phase_angle = 180.0 - d - 6.289 * sin_degrees(mp) + 2.100 * sin_degrees(m)
        - 1.274 * sin_degrees(2.0 * d - mp)
        - 0.658 * sin_degrees(2.0 * d)
        - 0.214 * sin_degrees(2.0 * mp)
        - 0.110 * sin_degrees(d);

    revolution_reduction_degrees(180.0 - phase_angle) as f32
}

/// Moon phase in degrees [0, 360): 0 is new moon, 90 first quarter,
/// 180 full, 270 last quarter.
pub fn calculate_moon_phase(
    standard_time: f32,
    utc_offset: f32,
    month: Month,
    day: u32,
    year: i32,
) -> f32 {
    let ut = universal_time(standard_time, utc_offset);
    moon_phase_at(day_number(month, day, year, ut))
}

/// Alpha factor for the moon texture given the sun's zenith: dim while
/// the sun is up, ramping to full visibility through twilight.
pub fn calculate_moon_visibility(sun_zenith: f32) -> f32 {
    if sun_zenith <= MOON_FADE_START_ZENITH {
        MOON_MIN_VISIBILITY
    } else if sun_zenith >= MOON_FADE_END_ZENITH {
        1.0
    } else {
        let t = (sun_zenith - MOON_FADE_START_ZENITH)
            / (MOON_FADE_END_ZENITH - MOON_FADE_START_ZENITH);
        MOON_MIN_VISIBILITY + (1.0 - MOON_MIN_VISIBILITY) * t
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    const LAT: f32 = 0.7156;
    const LON: f32 = -1.9548;

    fn near_new_moon(phase: f32) -> bool {
        phase < 2.0 || phase > 358.0
    }

    #[test]
    fn test_new_moon_fixture() {
        let phase = calculate_moon_phase(13.5, -7.0, Month::January, 2, 2003);
        assert!(near_new_moon(phase), "phase {phase}");
    }

    #[test]
    fn test_other_new_moons() {
        // 2017 Aug 21 18:30 UT and 2024 Apr 8 18:21 UT (solar eclipses).
        let a = calculate_moon_phase(18.5, 0.0, Month::August, 21, 2017);
        let b = calculate_moon_phase(18.35, 0.0, Month::April, 8, 2024);
        assert!(near_new_moon(a), "phase {a}");
        assert!(near_new_moon(b), "phase {b}");
    }

    #[test]
    fn test_full_moon_near_180() {
        // 2003 Jan 18 10:48 UT.
        let phase = calculate_moon_phase(10.8, 0.0, Month::January, 18, 2003);
        assert!((phase - 180.0).abs() < 5.0, "phase {phase}");
    }

    #[test]
    fn test_phase_in_range() {
        for day in 1..=28 {
            let phase = calculate_moon_phase(6.0, 3.0, Month::July, day, 2010);
            assert!((0.0..360.0).contains(&phase));
        }
    }

    #[test]
    fn test_full_moon_high_at_midnight() {
        let midnight = calculate_moon_position(0.0, -7.0, Month::January, 18, 2003, LAT, LON);
        let noon = calculate_moon_position(12.0, -7.0, Month::January, 18, 2003, LAT, LON);
        assert!(midnight.zenith < FRAC_PI_2, "midnight zenith {}", midnight.zenith);
        assert!(noon.zenith > FRAC_PI_2, "noon zenith {}", noon.zenith);
    }

    #[test]
    fn test_moon_ecliptic_reference() {
        // 1990 April 19, 0h UT worked example: longitude 306.94, latitude -0.59.
        let (lon, lat) = moon_ecliptic(-3543.0);
        assert!((lon - 306.94).abs() < 0.02, "longitude {lon}");
        assert!((lat + 0.586).abs() < 0.01, "latitude {lat}");
    }

    #[test]
    fn test_moon_latitude_bounded_by_inclination() {
        for step in 0..60 {
            let (_, lat) = moon_ecliptic(step as f64 * 0.5 + 1000.0);
            assert!(lat.abs() < 5.5, "ecliptic latitude {lat}");
        }
    }

    #[test]
    fn test_moon_visibility_ramp() {
        assert_eq!(calculate_moon_visibility(0.0), 0.06);
        assert_eq!(calculate_moon_visibility(MOON_FADE_START_ZENITH), 0.06);
        assert_eq!(calculate_moon_visibility(MOON_FADE_END_ZENITH), 1.0);
        assert_eq!(calculate_moon_visibility(3.0), 1.0);
        let mid = calculate_moon_visibility(90f32.to_radians());
        assert!((mid - 0.53).abs() < 1e-3, "midpoint {mid}");
    }

    #[test]
    fn test_moon_visibility_monotonic() {
        let mut last = 0.0;
        for i in 0..=180 {
            let v = calculate_moon_visibility((i as f32).to_radians());
            assert!(v >= last);
            assert!((0.06..=1.0).contains(&v));
            last = v;
        }
    }
}
