use firmament_core::{DateTime, Gps, SkyData, SkyPosition};

use crate::{
    calculate_celestial_north_pole_zenith, calculate_moon_phase, calculate_moon_position,
    calculate_moon_visibility, calculate_sky_data, calculate_star_rotation,
    calculate_sun_position,
};

/// Sky calculations bound to a clock and an observer.
///
/// Owns its `DateTime` and `Gps`; hosts that share one clock between
/// several skies copy it in and write changes back through the mutable
/// accessors.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SkyCalculations {
    date_time: DateTime,
    gps: Gps,
}

impl SkyCalculations {
    pub fn new(date_time: DateTime, gps: Gps) -> Self {
        Self { date_time, gps }
    }

    pub fn date_time(&self) -> &DateTime {
        &self.date_time
    }

    pub fn date_time_mut(&mut self) -> &mut DateTime {
        &mut self.date_time
    }

    pub fn gps(&self) -> &Gps {
        &self.gps
    }

    pub fn gps_mut(&mut self) -> &mut Gps {
        &mut self.gps
    }

    /// Advance the clock by `seconds`.
    pub fn advance(&mut self, seconds: f32) {
        self.date_time.add_time(seconds);
    }

    /// Full snapshot for the current clock and location.
    pub fn sky_data(&self) -> SkyData {
        let dt = &self.date_time;
        calculate_sky_data(
            dt.time_hours(),
            dt.utc_offset(),
            dt.month(),
            dt.day(),
            dt.year(),
            self.gps.latitude_radians(),
            self.gps.longitude_radians(),
        )
    }

    pub fn sun_position(&self) -> SkyPosition {
        let dt = &self.date_time;
        calculate_sun_position(
            dt.time_hours(),
            dt.utc_offset(),
            dt.month(),
            dt.day(),
            dt.year(),
            self.gps.latitude_radians(),
            self.gps.longitude_radians(),
        )
    }

    pub fn moon_position(&self) -> SkyPosition {
        let dt = &self.date_time;
        calculate_moon_position(
            dt.time_hours(),
            dt.utc_offset(),
            dt.month(),
            dt.day(),
            dt.year(),
            self.gps.latitude_radians(),
            self.gps.longitude_radians(),
        )
    }

    pub fn moon_phase(&self) -> f32 {
        let dt = &self.date_time;
        calculate_moon_phase(dt.time_hours(), dt.utc_offset(), dt.month(), dt.day(), dt.year())
    }

    pub fn moon_visibility(&self) -> f32 {
        calculate_moon_visibility(self.sun_position().zenith)
    }

    pub fn star_rotation(&self) -> f32 {
        let dt = &self.date_time;
        calculate_star_rotation(
            dt.time_hours(),
            dt.utc_offset(),
            self.gps.longitude_radians(),
        )
    }

    pub fn north_star_zenith(&self) -> f32 {
        calculate_celestial_north_pole_zenith(self.gps.latitude_radians())
    }
}
