use firmament_core::constants::{DEFAULT_MOON_PHASE, DEFAULT_TURBIDITY};
use firmament_core::{ErrorCode, LightData, LightKeypoint, SkyPosition};
use glam::Vec3;

use crate::dome::{with_moon_pixels, with_vertices, DomeGeometry};
use crate::lighting::LightTable;
use crate::moon_phase::{apply_moon_phase, apply_moon_visibility};
use crate::perez::{twilight_alpha, SkyColorModel};
use crate::textures::Texture;

/// Sky state for one dome: where the sun and moon are, how the moon is
/// lit, and how to paint the dome for that.
///
/// Every change is pushed to the dome immediately. A painter built without
/// a dome records [`ErrorCode::GeometryNull`] and ignores dome updates,
/// but still tracks positions.
#[derive(Debug)]
pub struct SkyPainter<D: DomeGeometry> {
    dome: Option<D>,
    error: ErrorCode,
    sun: SkyPosition,
    moon: SkyPosition,
    moon_phase: f32,
    moon_visibility: f32,
    north_star_zenith: f32,
    star_rotation: f32,
    turbidity: f64,
    light_table: LightTable,
    /// Unmasked moon that phase masking restarts from.
    moon_texture: Texture,
}

impl<D: DomeGeometry> SkyPainter<D> {
    pub fn new(dome: Option<D>, moon_texture: Texture) -> Self {
        let error = if dome.is_some() {
            ErrorCode::Ok
        } else {
            log::warn!("Sky created without geometry: {}", ErrorCode::GeometryNull);
            ErrorCode::GeometryNull
        };
        Self {
            dome,
            error,
            sun: SkyPosition::default(),
            moon: SkyPosition::default(),
            moon_phase: DEFAULT_MOON_PHASE,
            moon_visibility: 1.0,
            north_star_zenith: 0.0,
            star_rotation: 0.0,
            turbidity: DEFAULT_TURBIDITY,
            light_table: LightTable::default(),
            moon_texture,
        }
    }

    pub fn error_code(&self) -> ErrorCode {
        self.error
    }

    pub fn dome(&self) -> Option<&D> {
        self.dome.as_ref()
    }

    pub fn dome_mut(&mut self) -> Option<&mut D> {
        self.dome.as_mut()
    }

    pub fn into_dome(self) -> Option<D> {
        self.dome
    }

    pub fn sun_position(&self) -> SkyPosition {
        self.sun
    }

    pub fn moon_position(&self) -> SkyPosition {
        self.moon
    }

    pub fn moon_phase(&self) -> f32 {
        self.moon_phase
    }

    pub fn moon_visibility(&self) -> f32 {
        self.moon_visibility
    }

    pub fn north_star_zenith(&self) -> f32 {
        self.north_star_zenith
    }

    pub fn star_rotation(&self) -> f32 {
        self.star_rotation
    }

    pub fn turbidity(&self) -> f64 {
        self.turbidity
    }

    /// Takes effect on the next color pass.
    pub fn set_turbidity(&mut self, turbidity: f64) {
        self.turbidity = turbidity;
    }

    pub fn light_table(&self) -> &LightTable {
        &self.light_table
    }

    pub fn moon_texture(&self) -> &Texture {
        &self.moon_texture
    }

    fn dome_for(&mut self, operation: &str) -> Option<&mut D> {
        if self.dome.is_none() {
            log::debug!("Skipping {operation}: no geometry");
        }
        self.dome.as_mut()
    }

    pub fn set_sun_position(&mut self, azimuth: f32, zenith: f32) {
        self.sun = SkyPosition::new(azimuth, zenith);
        let unit = self.sun.to_unit_vector();
        if let Some(dome) = self.dome_for("sun position") {
            dome.set_sun_position(unit);
        }
    }

    pub fn set_moon_position(&mut self, azimuth: f32, zenith: f32) {
        self.moon = SkyPosition::new(azimuth, zenith);
        let unit = self.moon.to_unit_vector();
        if let Some(dome) = self.dome_for("moon position") {
            dome.set_moon_position(unit);
        }
    }

    /// Tilt the star field so the celestial pole sits at `pole_zenith`, then
    /// spin it by `rotation`. Both in radians.
    pub fn set_star_position(&mut self, pole_zenith: f32, rotation: f32) {
        self.north_star_zenith = pole_zenith;
        self.star_rotation = rotation;
        if let Some(dome) = self.dome_for("star position") {
            dome.set_star_rotation(Vec3::new(pole_zenith, rotation, 0.0));
        }
    }

    /// Re-mask the moon texture for `phase` degrees (0 new, 180 full).
    /// Resets any visibility fade, so apply visibility afterwards.
    pub fn set_moon_phase(&mut self, phase: f32) {
        self.moon_phase = phase;
        let Some(dome) = self.dome.as_mut() else {
            log::debug!("Skipping moon phase: no geometry");
            return;
        };
        let baked = &self.moon_texture;
        with_moon_pixels(dome, |pixels| {
            apply_moon_phase(pixels, &baked.pixels, baked.width, baked.height, phase)
        });
    }

    /// Cap the moon texture alpha at `visibility` in [0, 1].
    pub fn set_moon_visibility(&mut self, visibility: f32) {
        self.moon_visibility = visibility;
        if let Some(dome) = self.dome_for("moon visibility") {
            with_moon_pixels(dome, |pixels| apply_moon_visibility(pixels, visibility));
        }
    }

    /// Paint every dome vertex with the Perez sky color for the current sun.
    /// Alpha is shared by all vertices and fades out through twilight.
    pub fn update_sky_color(&mut self) {
        let model = SkyColorModel::new(self.sun, self.turbidity);
        let alpha = twilight_alpha(self.sun.zenith);
        let Some(dome) = self.dome_for("sky color") else {
            return;
        };
        with_vertices(dome, |verts| {
            for i in 0..verts.vertex_count() {
                let p = verts.vertex_position(i);
                let [r, g, b] = model.color_at_point(p.x, p.y, p.z).to_bytes();
                verts.set_vertex_color(i, alpha, r, g, b);
            }
        });
    }

    /// Light color for the current sun zenith.
    pub fn calculate_sky_lights(&self) -> LightData {
        self.light_table.sample(self.sun.zenith)
    }

    /// Replace the light table.
    pub fn set_sky_lights(&mut self, keypoints: Vec<LightKeypoint>) {
        self.light_table.set_keypoints(keypoints);
    }

    /// Sample the light table and hand the result to the dome.
    pub fn update_sky_light(&mut self) -> LightData {
        let light = self.calculate_sky_lights();
        if let Some(dome) = self.dome_for("sky light") {
            dome.set_sky_light(&light);
        }
        light
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::create_sky_dome_geometry;
    use crate::memory::MemoryDome;
    use crate::textures::create_moon_texture;
    use firmament_core::PixelFormat;
    use std::f32::consts::FRAC_PI_2;

    fn painter() -> SkyPainter<MemoryDome> {
        let geom = create_sky_dome_geometry(1.0, 12, 6).expect("dome should build");
        let moon = create_moon_texture(PixelFormat::Bgra8).expect("moon decodes");
        let dome = MemoryDome::from_geometry(&geom, &moon);
        SkyPainter::new(Some(dome), moon)
    }

    fn dome(p: &SkyPainter<MemoryDome>) -> &MemoryDome {
        p.dome().expect("painter has a dome")
    }

    #[test]
    fn test_missing_dome_sets_error() {
        let moon = create_moon_texture(PixelFormat::Bgra8).expect("moon decodes");
        let mut p: SkyPainter<MemoryDome> = SkyPainter::new(None, moon);
        assert_eq!(p.error_code(), ErrorCode::GeometryNull);
        // Dome updates are ignored but positions are still tracked.
        p.set_sun_position(1.0, 0.5);
        p.update_sky_color();
        p.set_moon_phase(90.0);
        assert_eq!(p.sun_position(), SkyPosition::new(1.0, 0.5));
        assert_eq!(p.moon_phase(), 90.0);
    }

    #[test]
    fn test_positions_become_unit_vectors() {
        let mut p = painter();
        assert!(p.error_code().is_ok());
        p.set_sun_position(0.0, 0.0);
        let sun = dome(&p).sun_position.expect("sun set");
        assert!((sun - Vec3::Y).length() < 1e-6);

        p.set_moon_position(FRAC_PI_2, FRAC_PI_2);
        let moon = dome(&p).moon_position.expect("moon set");
        assert!((moon - Vec3::X).length() < 1e-6);
    }

    #[test]
    fn test_star_position_packs_rotation() {
        let mut p = painter();
        p.set_star_position(0.8, 2.0);
        assert_eq!(dome(&p).star_rotation, Some(Vec3::new(0.8, 2.0, 0.0)));
        assert_eq!((p.north_star_zenith(), p.star_rotation()), (0.8, 2.0));
    }

    #[test]
    fn test_noon_colors_are_opaque_blue() {
        let mut p = painter();
        p.set_sun_position(2.8096, 0.3346);
        p.update_sky_color();
        let d = dome(&p);
        assert!(d.geometry_locks.is_balanced());
        let [a, r, g, b] = d.vertex_color(0);
        assert_eq!(a, 255);
        assert!(b > r && b > g, "zenith ({r}, {g}, {b}) should be blue");
        assert!(d.sky_vertices().iter().all(|v| v.color[0] == 255));
    }

    #[test]
    fn test_night_colors_are_transparent() {
        let mut p = painter();
        p.set_sun_position(0.0, 1.9);
        p.update_sky_color();
        assert!(dome(&p).sky_vertices().iter().all(|v| v.color[0] == 0));
    }

    #[test]
    fn test_moon_phase_then_visibility() {
        let mut p = painter();
        p.set_moon_phase(180.0);
        let lit = dome(&p).moon_alpha(96, 64);
        assert_eq!(lit, 255);
        assert_eq!(dome(&p).moon_alpha(64, 64), 255);

        p.set_moon_visibility(0.5);
        assert_eq!(dome(&p).moon_alpha(96, 64), 127);

        // A new phase starts from the unmasked moon again.
        p.set_moon_phase(180.0);
        assert_eq!(dome(&p).moon_alpha(96, 64), 255);
        assert!(dome(&p).moon_locks.is_balanced());
        assert_eq!(dome(&p).moon_locks.locks, 3);
    }

    #[test]
    fn test_new_moon_is_dark() {
        let mut p = painter();
        p.set_moon_phase(0.0);
        assert_eq!(dome(&p).moon_alpha(64, 64), 0);
        assert_eq!(dome(&p).moon_alpha(100, 64), 0);
    }

    #[test]
    fn test_sky_light_follows_sun() {
        let mut p = painter();
        p.set_sun_position(0.0, 0.2);
        let day = p.update_sky_light();
        assert_eq!(dome(&p).sky_light, Some(day));
        assert!((day.color.r - 1.0).abs() < 1e-6);

        p.set_sun_position(0.0, 2.5);
        let night = p.calculate_sky_lights();
        assert!((night.color.r - 102.0 / 255.0).abs() < 1e-6);

        p.set_sky_lights(vec![LightKeypoint::from_degrees(0.0, 0.1, 0.2, 0.3)]);
        assert!((p.calculate_sky_lights().color.b - 0.3).abs() < 1e-6);
    }
}
