use firmament_core::{Month, SkyData};

use crate::epoch::{day_number, universal_time};
use crate::moon::{calculate_moon_visibility, moon_phase_at, moon_position_at};
use crate::stars::{calculate_celestial_north_pole_zenith, star_rotation_at};
use crate::sun::sun_position_at;

/// Compute every sky quantity in one pass, sharing the day number.
pub fn calculate_sky_data(
    standard_time: f32,
    utc_offset: f32,
    month: Month,
    day: u32,
    year: i32,
    latitude: f32,
    longitude: f32,
) -> SkyData {
    let ut = universal_time(standard_time, utc_offset);
    let d = day_number(month, day, year, ut);
    let (lat, lon) = (latitude as f64, longitude as f64);

    let sun_position = sun_position_at(d, ut, lat, lon);
    let data = SkyData {
        moon_position: moon_position_at(d, ut, lat, lon),
        sun_position,
        star_rotation: star_rotation_at(ut, lon),
        north_star_zenith: calculate_celestial_north_pole_zenith(latitude),
        moon_phase: moon_phase_at(d),
        moon_visibility: calculate_moon_visibility(sun_position.zenith),
    };
    log::debug!(
        "Sky data for day {:.4}: sun zenith {:.3}, moon zenith {:.3}, phase {:.1}",
        d,
        data.sun_position.zenith,
        data.moon_position.zenith,
        data.moon_phase
    );
    data
}
