use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_AMBIENT_LIGHT, DEFAULT_MOON_PHASE};

/// Horizontal coordinate pair.
///
/// Azimuth is measured from north, increasing toward east. Zenith is the
/// angle from straight overhead: 0 is up, π/2 is the horizon.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SkyPosition {
    pub azimuth: f32,
    pub zenith: f32,
}

impl SkyPosition {
    pub fn new(azimuth: f32, zenith: f32) -> Self {
        Self { azimuth, zenith }
    }

    /// Convert a dome-space point (y up) to azimuth/zenith.
    /// The point does not need to be normalized.
    pub fn from_cartesian(x: f32, y: f32, z: f32) -> Self {
        Self {
            azimuth: x.atan2(z),
            zenith: (x * x + z * z).sqrt().atan2(y),
        }
    }

    /// Point on the unit sphere in dome space (y up, azimuth 0 along +z).
    pub fn to_unit_vector(self) -> Vec3 {
        let (sin_zen, cos_zen) = self.zenith.sin_cos();
        let (sin_az, cos_az) = self.azimuth.sin_cos();
        Vec3::new(sin_zen * sin_az, cos_zen, sin_zen * cos_az)
    }

    /// True when the position is above the horizon.
    pub fn is_above_horizon(self) -> bool {
        self.zenith < std::f32::consts::FRAC_PI_2
    }
}

/// One snapshot of everything the sky needs, produced by a single calculation pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkyData {
    pub moon_position: SkyPosition,
    pub sun_position: SkyPosition,
    /// Rotation of the star field about the celestial pole, radians.
    pub star_rotation: f32,
    /// Zenith of the north celestial pole, radians.
    pub north_star_zenith: f32,
    /// Moon phase in degrees [0, 360). 0 is new moon, 180 is full.
    pub moon_phase: f32,
    /// Moon texture alpha factor in [0, 1].
    pub moon_visibility: f32,
}

impl Default for SkyData {
    fn default() -> Self {
        Self {
            moon_position: SkyPosition::default(),
            sun_position: SkyPosition::default(),
            star_rotation: 0.0,
            north_star_zenith: 0.0,
            moon_phase: DEFAULT_MOON_PHASE,
            moon_visibility: 0.0,
        }
    }
}

/// Index/vertex/UV buffers handed to the host renderer. The caller owns them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawGeometry {
    pub indices: Vec<u16>,
    pub vertices: Vec<Vec3>,
    pub uvs: Vec<Vec2>,
}

impl RawGeometry {
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Iterate triangles as index triples.
    pub fn triangles(&self) -> impl Iterator<Item = [u16; 3]> + '_ {
        self.indices.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }
}

/// Floating point color with alpha, channels in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Self::new(1.0, 1.0, 1.0, 1.0)
    }
}

/// Light color derived from the sun's height, plus a fixed ambient term.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightData {
    pub color: Rgba,
    pub ambient_color: Rgba,
}

impl Default for LightData {
    fn default() -> Self {
        Self {
            color: Rgba::default(),
            ambient_color: Rgba::new(
                DEFAULT_AMBIENT_LIGHT,
                DEFAULT_AMBIENT_LIGHT,
                DEFAULT_AMBIENT_LIGHT,
                1.0,
            ),
        }
    }
}

/// Calibration point of the sun-zenith to light-color table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightKeypoint {
    /// Sun zenith in radians.
    pub angle: f32,
    pub color: Rgba,
}

impl LightKeypoint {
    pub fn from_degrees(angle_degrees: f32, r: f32, g: f32, b: f32) -> Self {
        Self {
            angle: angle_degrees.to_radians(),
            color: Rgba::rgb(r, g, b),
        }
    }
}

/// Byte order of 8-bit texture pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PixelFormat {
    Rgba8,
    /// Blue first, as most desktop texture uploads expect.
    #[default]
    Bgra8,
}

impl PixelFormat {
    /// Swap red and blue in place when converting from RGBA-ordered bytes.
    pub fn convert_from_rgba(self, pixels: &mut [u8]) {
        if self == Self::Bgra8 {
            for px in pixels.chunks_exact_mut(4) {
                px.swap(0, 2);
            }
        }
    }
}
