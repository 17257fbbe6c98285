use firmament_core::constants::{
    MAX_LATITUDE_DEGREES, MAX_LONGITUDE_DEGREES, MAX_TURBIDITY, MAX_UTC_OFFSET_HOURS,
    MIN_TURBIDITY,
};
use thiserror::Error;

use crate::config::SkyConfig;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Turbidity {0} outside [1.7, 10]")]
    TurbidityOutOfRange(f64),
    #[error("Latitude {0}° outside ±90°")]
    LatitudeOutOfRange(f32),
    #[error("Longitude {0}° outside ±180°")]
    LongitudeOutOfRange(f32),
    #[error("UTC offset {0}h outside ±12h")]
    UtcOffsetOutOfRange(f32),
    #[error("Start hour {0} outside [0, 24)")]
    HoursOutOfRange(f32),
    #[error("Start day must be at least 1")]
    ZeroDay,
    #[error("Dome needs at least {min} {axis} segments, got {actual}")]
    TooFewSegments {
        axis: &'static str,
        min: u32,
        actual: u32,
    },
    #[error("Dome with {0} vertices exceeds 16-bit index range")]
    TooManyVertices(u64),
    #[error("Dome radius must be positive, got {0}")]
    NonPositiveRadius(f32),
    #[error("Sun texture side must be non-zero")]
    EmptySunTexture,
    #[error("Sun glow floor {0} outside [0, 1]")]
    GlowFloorOutOfRange(f32),
    #[error("Light table is empty")]
    EmptyLightTable,
    #[error("Light table angle {angle}° at entry {index} does not increase")]
    LightTableNotAscending { index: usize, angle: f32 },
}

/// Check a config for values the sky cannot use, reporting all of them.
pub fn validate_config(config: &SkyConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if !(MIN_TURBIDITY..=MAX_TURBIDITY).contains(&config.turbidity) {
        errors.push(ValidationError::TurbidityOutOfRange(config.turbidity));
    }

    let loc = &config.location;
    if loc.latitude.abs() > MAX_LATITUDE_DEGREES || loc.latitude.is_nan() {
        errors.push(ValidationError::LatitudeOutOfRange(loc.latitude));
    }
    if loc.longitude.abs() > MAX_LONGITUDE_DEGREES || loc.longitude.is_nan() {
        errors.push(ValidationError::LongitudeOutOfRange(loc.longitude));
    }

    let start = &config.start;
    if start.utc_offset.abs() > MAX_UTC_OFFSET_HOURS || start.utc_offset.is_nan() {
        errors.push(ValidationError::UtcOffsetOutOfRange(start.utc_offset));
    }
    if !(0.0..24.0).contains(&start.hours) {
        errors.push(ValidationError::HoursOutOfRange(start.hours));
    }
    if start.day == 0 {
        errors.push(ValidationError::ZeroDay);
    }

    let dome = &config.dome;
    if dome.vertical_segments < 3 {
        errors.push(ValidationError::TooFewSegments {
            axis: "vertical",
            min: 3,
            actual: dome.vertical_segments,
        });
    }
    if dome.horizontal_segments < 1 {
        errors.push(ValidationError::TooFewSegments {
            axis: "horizontal",
            min: 1,
            actual: dome.horizontal_segments,
        });
    }
    let vertices = dome.vertex_count();
    if vertices > u16::MAX as u64 + 1 {
        errors.push(ValidationError::TooManyVertices(vertices));
    }
    if dome.radius.is_nan() || dome.radius <= 0.0 {
        errors.push(ValidationError::NonPositiveRadius(dome.radius));
    }

    let sun = &config.sun_texture;
    if sun.side == 0 {
        errors.push(ValidationError::EmptySunTexture);
    }
    if !(0.0..=1.0).contains(&sun.glow_floor) {
        errors.push(ValidationError::GlowFloorOutOfRange(sun.glow_floor));
    }

    if config.light_table.is_empty() {
        errors.push(ValidationError::EmptyLightTable);
    }
    for (index, pair) in config.light_table.windows(2).enumerate() {
        if pair[1].angle_degrees <= pair[0].angle_degrees {
            errors.push(ValidationError::LightTableNotAscending {
                index: index + 1,
                angle: pair[1].angle_degrees,
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
