use firmament_core::constants::{
    DEFAULT_DOME_RADIUS, DEFAULT_HORIZONTAL_SEGMENTS, DEFAULT_SUN_GLOW_FLOOR,
    DEFAULT_SUN_TEXTURE_SIDE, DEFAULT_TURBIDITY, DEFAULT_VERTICAL_SEGMENTS, SECONDS_PER_HOUR,
};
use firmament_core::{Date, DateTime, Gps, LightKeypoint, Month, PixelFormat, SkyPosition};
use serde::{Deserialize, Serialize};

use crate::defaults::default_light_table;

/// How the sky advances once built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SkyModeSetting {
    /// Sun and moon placed from `manual`, never updated.
    Manual,
    /// Like `Manual`, with phase and stars also taken from `manual`.
    Static,
    /// Computed once from `start` and `location`.
    CalculatedStatic,
    /// Computed from `start` and `location`, advancing on every update.
    #[default]
    CalculatedDynamic,
}

/// Observer location in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocationConfig {
    pub latitude: f32,
    pub longitude: f32,
}

impl Default for LocationConfig {
    fn default() -> Self {
        Self {
            latitude: 41.0,
            longitude: -112.0,
        }
    }
}

/// Local standard time the simulation starts at.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StartConfig {
    /// Month name, e.g. "June" or "jun".
    pub month: String,
    pub day: u32,
    pub year: i32,
    /// Hours past local midnight.
    pub hours: f32,
    /// Hours east of UTC.
    pub utc_offset: f32,
}

impl Default for StartConfig {
    fn default() -> Self {
        Self {
            month: "June".into(),
            day: 6,
            year: 2003,
            hours: 12.0,
            utc_offset: -7.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DomeConfig {
    pub radius: f32,
    pub vertical_segments: u32,
    pub horizontal_segments: u32,
    /// Build a full sphere instead of a hemisphere.
    pub full_sphere: bool,
}

impl Default for DomeConfig {
    fn default() -> Self {
        Self {
            radius: DEFAULT_DOME_RADIUS,
            vertical_segments: DEFAULT_VERTICAL_SEGMENTS,
            horizontal_segments: DEFAULT_HORIZONTAL_SEGMENTS,
            full_sphere: false,
        }
    }
}

impl DomeConfig {
    /// Vertex count the dome generator will produce.
    pub fn vertex_count(&self) -> u64 {
        let v = self.vertical_segments as u64;
        let h = self.horizontal_segments as u64;
        if self.full_sphere {
            let h = h + h % 2;
            h.saturating_sub(1) * v + 2
        } else {
            h * v + 1
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SunTextureConfig {
    pub side: u32,
    pub glow_floor: f32,
}

impl Default for SunTextureConfig {
    fn default() -> Self {
        Self {
            side: DEFAULT_SUN_TEXTURE_SIDE,
            glow_floor: DEFAULT_SUN_GLOW_FLOOR,
        }
    }
}

/// One light table entry as written in RON.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LightKeypointDef {
    pub angle_degrees: f32,
    pub color: (f32, f32, f32),
}

impl LightKeypointDef {
    pub fn to_keypoint(self) -> LightKeypoint {
        let (r, g, b) = self.color;
        LightKeypoint::from_degrees(self.angle_degrees, r, g, b)
    }
}

/// Fixed positions in degrees for the non-calculated modes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ManualConfig {
    pub sun_azimuth: f32,
    pub sun_zenith: f32,
    pub moon_azimuth: f32,
    pub moon_zenith: f32,
    pub moon_phase: f32,
    pub moon_visibility: f32,
    pub star_rotation: f32,
    pub north_star_zenith: f32,
}

impl Default for ManualConfig {
    fn default() -> Self {
        Self {
            sun_azimuth: 180.0,
            sun_zenith: 30.0,
            moon_azimuth: 90.0,
            moon_zenith: 60.0,
            moon_phase: 180.0,
            moon_visibility: 0.06,
            star_rotation: 0.0,
            north_star_zenith: 49.0,
        }
    }
}

impl ManualConfig {
    pub fn sun_position(&self) -> SkyPosition {
        SkyPosition::new(self.sun_azimuth.to_radians(), self.sun_zenith.to_radians())
    }

    pub fn moon_position(&self) -> SkyPosition {
        SkyPosition::new(self.moon_azimuth.to_radians(), self.moon_zenith.to_radians())
    }
}

/// Everything needed to build a sky, loaded from RON.
/// Missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkyConfig {
    pub mode: SkyModeSetting,
    pub turbidity: f64,
    pub location: LocationConfig,
    pub start: StartConfig,
    pub dome: DomeConfig,
    pub sun_texture: SunTextureConfig,
    pub pixel_format: PixelFormat,
    pub light_table: Vec<LightKeypointDef>,
    pub manual: ManualConfig,
}

impl Default for SkyConfig {
    fn default() -> Self {
        Self {
            mode: SkyModeSetting::default(),
            turbidity: DEFAULT_TURBIDITY,
            location: LocationConfig::default(),
            start: StartConfig::default(),
            dome: DomeConfig::default(),
            sun_texture: SunTextureConfig::default(),
            pixel_format: PixelFormat::default(),
            light_table: default_light_table(),
            manual: ManualConfig::default(),
        }
    }
}

impl SkyConfig {
    pub fn start_month(&self) -> Month {
        Month::from_name(&self.start.month)
    }

    /// Starting time. Out of range values are clamped the same way the
    /// setters clamp them.
    pub fn date_time(&self) -> DateTime {
        let date = Date::new(self.start_month(), self.start.day, self.start.year);
        DateTime::new(
            date,
            self.start.hours * SECONDS_PER_HOUR,
            self.start.utc_offset,
        )
    }

    pub fn gps(&self) -> Gps {
        Gps::new(self.location.latitude, self.location.longitude)
    }

    pub fn light_keypoints(&self) -> Vec<LightKeypoint> {
        self.light_table.iter().map(|k| k.to_keypoint()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_start_is_reference_noon() {
        let config = SkyConfig::default();
        let dt = config.date_time();
        assert_eq!(dt.month(), Month::June);
        assert_eq!(dt.day(), 6);
        assert_eq!(dt.year(), 2003);
        assert!((dt.time_hours() - 12.0).abs() < 1e-6);
        assert_eq!(dt.utc_offset(), -7.0);
    }

    #[test]
    fn test_month_names_parse() {
        let mut config = SkyConfig::default();
        config.start.month = "sept".into();
        assert_eq!(config.start_month(), Month::September);
        config.start.month = "nonsense".into();
        assert_eq!(config.start_month(), Month::January);
    }

    #[test]
    fn test_dome_vertex_count() {
        let mut dome = DomeConfig::default();
        assert_eq!(dome.vertex_count(), 6 * 12 + 1);
        dome.full_sphere = true;
        dome.horizontal_segments = 5;
        assert_eq!(dome.vertex_count(), 5 * 12 + 2);
    }

    #[test]
    fn test_manual_positions_in_radians() {
        let manual = ManualConfig::default();
        let sun = manual.sun_position();
        assert!((sun.azimuth - std::f32::consts::PI).abs() < 1e-6);
        assert!((sun.zenith - 30f32.to_radians()).abs() < 1e-6);
    }

    #[test]
    fn test_light_keypoints_convert() {
        let config = SkyConfig::default();
        let keypoints = config.light_keypoints();
        assert_eq!(keypoints.len(), 5);
        assert!((keypoints[1].angle - 84f32.to_radians()).abs() < 1e-6);
    }
}
