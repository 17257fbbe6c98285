//! Building a sky and its assets from a [`SkyConfig`].

use firmament_config::{DomeConfig, SkyConfig, SkyModeSetting};
use firmament_core::{FirmamentError, RawGeometry, SkyData};
use firmament_render::{
    create_moon_texture, create_night_sky_dome_geometry, create_night_sky_texture,
    create_sky_dome_geometry, create_sky_sphere_geometry, create_sun_texture, DomeGeometry,
    SkyPainter, Texture,
};

use crate::sky::Sky;

/// Meshes and textures a host needs to set up its dome, generated once.
#[derive(Debug, Clone)]
pub struct SkyAssets {
    pub dome: RawGeometry,
    pub night_dome: RawGeometry,
    pub sun_texture: Texture,
    pub moon_texture: Texture,
    pub night_sky_texture: Texture,
}

impl SkyAssets {
    pub fn from_config(config: &SkyConfig) -> Result<Self, FirmamentError> {
        let format = config.pixel_format;
        let assets = Self {
            dome: build_dome_geometry(&config.dome)?,
            night_dome: create_night_sky_dome_geometry(config.dome.radius),
            sun_texture: create_sun_texture(
                config.sun_texture.side,
                config.sun_texture.glow_floor,
                format,
            ),
            moon_texture: create_moon_texture(format)?,
            night_sky_texture: create_night_sky_texture(format)?,
        };
        log::info!(
            "Sky assets ready: dome {} vertices, night dome {} vertices, {:?} textures",
            assets.dome.vertex_count(),
            assets.night_dome.vertex_count(),
            format
        );
        Ok(assets)
    }
}

/// Hemisphere or full sphere, as configured.
pub fn build_dome_geometry(dome: &DomeConfig) -> Result<RawGeometry, FirmamentError> {
    if dome.full_sphere {
        create_sky_sphere_geometry(dome.radius, dome.vertical_segments, dome.horizontal_segments)
    } else {
        create_sky_dome_geometry(dome.radius, dome.vertical_segments, dome.horizontal_segments)
    }
}

impl<D: DomeGeometry> Sky<D> {
    /// Build a sky in the configured mode.
    ///
    /// The config is taken as given; run it through
    /// [`firmament_config::validate_config`] first to catch bad values.
    pub fn from_config(dome: Option<D>, config: &SkyConfig) -> Result<Self, FirmamentError> {
        let moon = create_moon_texture(config.pixel_format)?;
        let mut painter = SkyPainter::new(dome, moon);
        painter.set_turbidity(config.turbidity);
        painter.set_sky_lights(config.light_keypoints());

        let manual = &config.manual;
        let sky = match config.mode {
            SkyModeSetting::Manual => {
                Sky::manual(painter, manual.sun_position(), manual.moon_position())
            }
            SkyModeSetting::Static => Sky::fixed(
                painter,
                SkyData {
                    sun_position: manual.sun_position(),
                    moon_position: manual.moon_position(),
                    star_rotation: manual.star_rotation.to_radians(),
                    north_star_zenith: manual.north_star_zenith.to_radians(),
                    moon_phase: manual.moon_phase,
                    moon_visibility: manual.moon_visibility,
                },
            ),
            SkyModeSetting::CalculatedStatic => {
                Sky::calculated_static(painter, config.date_time(), config.gps())
            }
            SkyModeSetting::CalculatedDynamic => {
                Sky::calculated_dynamic(painter, config.date_time(), config.gps())
            }
        };
        log::info!("Built {} sky (turbidity {})", sky.mode().name(), config.turbidity);
        Ok(sky)
    }
}
