//! Low-precision ephemerides for the sun and moon, plus the star-field
//! orientation, evaluated for an observer's local time and location.

pub mod calculations;
pub mod epoch;
pub mod moon;
pub mod sky_data;
pub mod stars;
pub mod sun;

pub use calculations::SkyCalculations;
pub use moon::{calculate_moon_phase, calculate_moon_position, calculate_moon_visibility};
pub use sky_data::calculate_sky_data;
pub use stars::{calculate_celestial_north_pole_zenith, calculate_star_rotation};
pub use sun::calculate_sun_position;
