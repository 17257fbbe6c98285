//! Day numbering and the coordinate transforms shared by the sun and moon.
//!
//! Angles in this module are degrees unless noted. Day numbers count from
//! 2000 Jan 0.0 UT, so 2000 Jan 1 at 0h UT is day 1.0.

use firmament_core::math::{
    atan2_degrees, cos_degrees, revolution_reduction_degrees, sin_degrees,
};
use firmament_core::{Month, SkyPosition};

/// Universal time in hours for a local standard time and UTC offset.
/// The result may fall outside [0, 24); the day number absorbs it.
pub fn universal_time(standard_time: f32, utc_offset: f32) -> f64 {
    standard_time as f64 - utc_offset as f64
}

/// Day number with the fractional day taken from `universal_time` hours.
pub fn day_number(month: Month, day: u32, year: i32, universal_time: f64) -> f64 {
    let y = year as i64;
    let m = month.number() as i64;
    let calendar = 367 * y - (7 * (y + (m + 9) / 12)) / 4 + (275 * m) / 9 + day as i64 - 730_530;
    calendar as f64 + universal_time / 24.0
}

/// Julian centuries since J2000.0 (2000 Jan 1.5 UT).
pub fn julian_centuries(day_number: f64) -> f64 {
    (day_number - 1.5) / 36_525.0
}

/// Obliquity of the ecliptic.
pub fn obliquity(day_number: f64) -> f64 {
    23.4393 - 3.563e-7 * day_number
}

/// Eccentric anomaly from the mean anomaly with a single first-order correction.
pub fn eccentric_anomaly(mean_anomaly: f64, eccentricity: f64) -> f64 {
    let e_degrees = eccentricity.to_degrees();
    mean_anomaly
        + e_degrees * sin_degrees(mean_anomaly) * (1.0 + eccentricity * cos_degrees(mean_anomaly))
}

/// Orbital elements of the sun (the Earth's orbit seen from Earth).
#[derive(Debug, Clone, Copy)]
pub struct SunElements {
    /// Argument of perihelion.
    pub perihelion: f64,
    pub eccentricity: f64,
    /// Mean anomaly, reduced to [0, 360).
    pub mean_anomaly: f64,
}

impl SunElements {
    pub fn at(day_number: f64) -> Self {
        Self {
            perihelion: 282.9404 + 4.70935e-5 * day_number,
            eccentricity: 0.016709 - 1.151e-9 * day_number,
            mean_anomaly: revolution_reduction_degrees(356.0470 + 0.985_600_258_5 * day_number),
        }
    }

    /// Mean longitude, reduced to [0, 360).
    pub fn mean_longitude(&self) -> f64 {
        revolution_reduction_degrees(self.perihelion + self.mean_anomaly)
    }
}

/// Greenwich mean sidereal time at 0h UT, in degrees.
pub fn gmst0(day_number: f64) -> f64 {
    revolution_reduction_degrees(SunElements::at(day_number).mean_longitude() + 180.0)
}

/// Local sidereal time in degrees for a universal time and east-positive longitude.
pub fn local_sidereal_time(day_number: f64, universal_time: f64, longitude_radians: f64) -> f64 {
    revolution_reduction_degrees(
        gmst0(day_number) + universal_time * 15.0 + longitude_radians.to_degrees(),
    )
}

/// Right ascension and declination in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Equatorial {
    pub right_ascension: f64,
    pub declination: f64,
}

/// Rotate rectangular ecliptic coordinates into equatorial ones.
pub fn ecliptic_to_equatorial(x: f64, y: f64, z: f64, obliquity: f64) -> Equatorial {
    let (sin_e, cos_e) = (sin_degrees(obliquity), cos_degrees(obliquity));
    let xe = x;
    let ye = y * cos_e - z * sin_e;
    let ze = y * sin_e + z * cos_e;
    Equatorial {
        right_ascension: revolution_reduction_degrees(atan2_degrees(ye, xe)),
        declination: atan2_degrees(ze, (xe * xe + ye * ye).sqrt()),
    }
}

/// Azimuth (from north, toward east) and zenith of an equatorial position.
pub fn equatorial_to_horizontal(
    position: Equatorial,
    local_sidereal_time: f64,
    latitude_radians: f64,
) -> SkyPosition {
    let hour_angle = (local_sidereal_time - position.right_ascension).to_radians();
    let declination = position.declination.to_radians();

    let x = hour_angle.cos() * declination.cos();
    let y = hour_angle.sin() * declination.cos();
    let z = declination.sin();

    let (sin_lat, cos_lat) = latitude_radians.sin_cos();
    let x_hor = x * sin_lat - z * cos_lat;
    let y_hor = y;
    let z_hor = x * cos_lat + z * sin_lat;

    // atan2 gives the angle from south toward west; adding π measures from north.
    let azimuth = y_hor.atan2(x_hor) + std::f64::consts::PI;
    let altitude = z_hor.clamp(-1.0, 1.0).asin();

    SkyPosition::new(
        azimuth as f32,
        (std::f64::consts::FRAC_PI_2 - altitude) as f32,
    )
}
