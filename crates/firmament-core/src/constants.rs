//! Single source of truth for shared constants.
//! Angles are radians unless the name says otherwise.

use std::f64::consts::PI;

/// Seconds in one civil day.
pub const SECONDS_PER_DAY: f32 = 86_400.0;

/// Seconds in one hour.
pub const SECONDS_PER_HOUR: f32 = 3_600.0;

/// Largest UTC offset magnitude in hours. Offsets are clamped to [-12, 12].
pub const MAX_UTC_OFFSET_HOURS: f32 = 12.0;

/// Latitude limit in degrees.
pub const MAX_LATITUDE_DEGREES: f32 = 90.0;

/// Longitude limit in degrees.
pub const MAX_LONGITUDE_DEGREES: f32 = 180.0;

/// Half of pi as f32, the horizon zenith.
pub const HORIZON_ZENITH: f32 = (PI / 2.0) as f32;

/// Default atmospheric turbidity for the Perez model (clear sky with light haze).
pub const DEFAULT_TURBIDITY: f64 = 3.5;

/// Lowest turbidity the Perez regression fits are valid for.
pub const MIN_TURBIDITY: f64 = 1.7;

/// Highest turbidity the Perez regression fits are valid for.
pub const MAX_TURBIDITY: f64 = 10.0;

/// Scale of the `1 - exp(-c / scale)` tone compression applied to sky RGB.
pub const TONE_COMPRESSION_SCALE: f64 = 15_000.0;

/// Vertex zeniths at or below the horizon are pulled up by this much
/// to keep the Perez luminance finite.
pub const HORIZON_ZENITH_EPSILON: f32 = 0.01;

/// Sun zenith where the sky starts fading out (93 degrees).
pub const TWILIGHT_START_ZENITH: f32 = 1.623_156_2;

/// Sun zenith where the sky is fully transparent (103 degrees).
pub const TWILIGHT_END_ZENITH: f32 = 1.797_689_1;

/// Sun zenith below which the moon is at its daytime minimum (85 degrees).
pub const MOON_FADE_START_ZENITH: f32 = 1.483_529_9;

/// Sun zenith above which the moon is fully visible (95 degrees).
pub const MOON_FADE_END_ZENITH: f32 = 1.658_062_8;

/// Moon texture alpha factor while the sun is well above the horizon.
pub const MOON_MIN_VISIBILITY: f32 = 0.06;

/// Moon phase reported before any calculation has run.
pub const DEFAULT_MOON_PHASE: f32 = 1.0;

/// Degrees the sky turns per hour of universal time.
pub const STAR_ROTATION_DEGREES_PER_HOUR: f64 = 15.0;

/// Aligns the star texture's zero meridian with the sky at 0h UT (GMST at J2000).
pub const STAR_ROTATION_OFFSET_DEGREES: f64 = 100.46;

/// Default dome radius.
pub const DEFAULT_DOME_RADIUS: f32 = 1.0;

/// Default number of longitude divisions in a generated dome.
pub const DEFAULT_VERTICAL_SEGMENTS: u32 = 12;

/// Default number of latitude divisions in a generated dome.
pub const DEFAULT_HORIZONTAL_SEGMENTS: u32 = 6;

/// Fixed vertex count of the night sky dome.
pub const NIGHT_DOME_VERTEX_COUNT: usize = 146;

/// Fixed triangle count of the night sky dome.
pub const NIGHT_DOME_TRIANGLE_COUNT: usize = 264;

/// Default side length of the generated sun texture in pixels.
pub const DEFAULT_SUN_TEXTURE_SIDE: u32 = 128;

/// Alpha at the inner edge of the sun's glow ring, as a fraction of 255.
pub const DEFAULT_SUN_GLOW_FLOOR: f32 = 0.125;

/// Opaque sun disk radius as a fraction of half the texture side.
pub const SUN_DISK_RADIUS_RATIO: f32 = 0.45;

/// Outer edge of the sun's fade ring as a fraction of half the texture side.
pub const SUN_FADE_RADIUS_RATIO: f32 = 0.55;

/// Outer edge of the sun's glow ring as a fraction of half the texture side.
pub const SUN_GLOW_RADIUS_RATIO: f32 = 0.98;

/// Bytes per texture pixel (8-bit RGBA or BGRA).
pub const BYTES_PER_PIXEL: usize = 4;

/// Ambient light intensity reported with every sky light sample.
pub const DEFAULT_AMBIENT_LIGHT: f32 = 0.4;
