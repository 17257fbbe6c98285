use firmament_astro::SkyCalculations;
use firmament_core::{DateTime, ErrorCode, Gps, LightData, LightKeypoint, SkyData, SkyPosition};
use firmament_render::{DomeGeometry, SkyPainter};

use crate::mode::SkyMode;

/// A sky bound to one dome.
///
/// The mode fixes how the sky advances. Direct setters work in every mode
/// and go straight to the dome. The `update_*` methods recompute from the
/// clock, so outside the calculated modes they leave positions alone.
#[derive(Debug)]
pub struct Sky<D: DomeGeometry> {
    painter: SkyPainter<D>,
    mode: SkyMode,
}

impl<D: DomeGeometry> Sky<D> {
    /// Place the sun and moon by hand and paint once.
    pub fn manual(painter: SkyPainter<D>, sun: SkyPosition, moon: SkyPosition) -> Self {
        let mut sky = Self {
            painter,
            mode: SkyMode::Manual,
        };
        sky.set_moon_position(moon.azimuth, moon.zenith);
        sky.set_sun_position(sun.azimuth, sun.zenith);
        sky.update_sky_color();
        sky
    }

    /// Apply a full snapshot once.
    pub fn fixed(painter: SkyPainter<D>, data: SkyData) -> Self {
        let mut sky = Self {
            painter,
            mode: SkyMode::Static,
        };
        sky.apply_sky_data(&data);
        sky
    }

    /// Compute the sky for one instant and keep it there.
    pub fn calculated_static(painter: SkyPainter<D>, date_time: DateTime, gps: Gps) -> Self {
        Self::calculated(painter, SkyMode::CalculatedStatic(SkyCalculations::new(date_time, gps)))
    }

    /// Compute the sky now and again on every update.
    pub fn calculated_dynamic(painter: SkyPainter<D>, date_time: DateTime, gps: Gps) -> Self {
        Self::calculated(
            painter,
            SkyMode::CalculatedDynamic(SkyCalculations::new(date_time, gps)),
        )
    }

    fn calculated(painter: SkyPainter<D>, mode: SkyMode) -> Self {
        let mut sky = Self { painter, mode };
        sky.update_all_sky_objects();
        sky
    }

    pub fn mode(&self) -> &SkyMode {
        &self.mode
    }

    pub fn error_code(&self) -> ErrorCode {
        self.painter.error_code()
    }

    pub fn painter(&self) -> &SkyPainter<D> {
        &self.painter
    }

    pub fn painter_mut(&mut self) -> &mut SkyPainter<D> {
        &mut self.painter
    }

    pub fn dome(&self) -> Option<&D> {
        self.painter.dome()
    }

    pub fn dome_mut(&mut self) -> Option<&mut D> {
        self.painter.dome_mut()
    }

    pub fn into_dome(self) -> Option<D> {
        self.painter.into_dome()
    }

    /// Clock of a calculated sky.
    pub fn date_time(&self) -> Option<&DateTime> {
        self.mode.calculations().map(SkyCalculations::date_time)
    }

    /// Changes take effect on the next update.
    pub fn date_time_mut(&mut self) -> Option<&mut DateTime> {
        self.mode.calculations_mut().map(SkyCalculations::date_time_mut)
    }

    pub fn gps(&self) -> Option<&Gps> {
        self.mode.calculations().map(SkyCalculations::gps)
    }

    pub fn gps_mut(&mut self) -> Option<&mut Gps> {
        self.mode.calculations_mut().map(SkyCalculations::gps_mut)
    }

    /// Advance a dynamic sky to the current clock. Other modes are frozen.
    pub fn update(&mut self) {
        if self.mode.is_dynamic() {
            self.update_all_sky_objects();
        }
    }

    /// Advance a dynamic sky's clock by `delta_seconds`, then update it.
    pub fn update_with_delta(&mut self, delta_seconds: f32) {
        if let SkyMode::CalculatedDynamic(calc) = &mut self.mode {
            calc.advance(delta_seconds);
            self.update_all_sky_objects();
        }
    }

    /// Compute one snapshot and apply all of it.
    pub fn update_all_sky_objects(&mut self) {
        let Some(data) = self.mode.calculations().map(SkyCalculations::sky_data) else {
            log::debug!("{} sky has no clock to update from", self.mode.name());
            return;
        };
        self.apply_sky_data(&data);
    }

    fn apply_sky_data(&mut self, data: &SkyData) {
        let p = &mut self.painter;
        p.set_moon_position(data.moon_position.azimuth, data.moon_position.zenith);
        p.set_star_position(data.north_star_zenith, data.star_rotation);
        p.set_sun_position(data.sun_position.azimuth, data.sun_position.zenith);
        p.set_moon_phase(data.moon_phase);
        p.set_moon_visibility(data.moon_visibility);
        p.update_sky_color();
        p.update_sky_light();
    }

    pub fn update_sun_position(&mut self) {
        if let Some(pos) = self.mode.calculations().map(SkyCalculations::sun_position) {
            self.painter.set_sun_position(pos.azimuth, pos.zenith);
        }
    }

    pub fn update_moon_position(&mut self) {
        if let Some(pos) = self.mode.calculations().map(SkyCalculations::moon_position) {
            self.painter.set_moon_position(pos.azimuth, pos.zenith);
        }
    }

    pub fn update_moon_phase(&mut self) {
        if let Some(phase) = self.mode.calculations().map(SkyCalculations::moon_phase) {
            self.painter.set_moon_phase(phase);
        }
    }

    /// Fade the moon for the current sun height.
    pub fn update_moon_visibility(&mut self) {
        if let Some(visibility) = self.mode.calculations().map(SkyCalculations::moon_visibility) {
            self.painter.set_moon_visibility(visibility);
        }
    }

    /// Recompute both the celestial pole tilt and the star rotation.
    pub fn update_star_position(&mut self) {
        if let Some(calc) = self.mode.calculations() {
            let (zenith, rotation) = (calc.north_star_zenith(), calc.star_rotation());
            self.painter.set_star_position(zenith, rotation);
        }
    }

    /// Recompute the star rotation only, keeping the current pole tilt.
    pub fn update_star_rotation(&mut self) {
        if let Some(rotation) = self.mode.calculations().map(SkyCalculations::star_rotation) {
            let zenith = self.painter.north_star_zenith();
            self.painter.set_star_position(zenith, rotation);
        }
    }

    /// Repaint the dome for the current sun position. Works in every mode.
    pub fn update_sky_color(&mut self) {
        self.painter.update_sky_color();
    }

    /// Push the light color for the current sun position to the dome.
    pub fn update_sky_light(&mut self) -> LightData {
        self.painter.update_sky_light()
    }

    pub fn set_sun_position(&mut self, azimuth: f32, zenith: f32) {
        self.painter.set_sun_position(azimuth, zenith);
    }

    pub fn set_moon_position(&mut self, azimuth: f32, zenith: f32) {
        self.painter.set_moon_position(azimuth, zenith);
    }

    pub fn set_moon_phase(&mut self, phase: f32) {
        self.painter.set_moon_phase(phase);
    }

    pub fn set_moon_visibility(&mut self, visibility: f32) {
        self.painter.set_moon_visibility(visibility);
    }

    pub fn set_star_position(&mut self, pole_zenith: f32, rotation: f32) {
        self.painter.set_star_position(pole_zenith, rotation);
    }

    pub fn set_sky_lights(&mut self, keypoints: Vec<LightKeypoint>) {
        self.painter.set_sky_lights(keypoints);
    }

    pub fn calculate_sky_lights(&self) -> LightData {
        self.painter.calculate_sky_lights()
    }

    pub fn sun_position(&self) -> SkyPosition {
        self.painter.sun_position()
    }

    pub fn moon_position(&self) -> SkyPosition {
        self.painter.moon_position()
    }
}
