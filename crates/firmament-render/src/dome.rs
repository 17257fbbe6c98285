//! Capabilities the sky needs from a host renderer.
//!
//! A backend implements [`DomeGeometry`] for whatever owns its dome mesh and
//! moon texture. The color and position math only ever talks to these traits.

use firmament_core::LightData;
use glam::Vec3;

/// Vertex access for the sky dome mesh.
pub trait DomeVertices {
    fn vertex_count(&self) -> usize;

    /// Dome-space position of a vertex (y up).
    fn vertex_position(&self, index: usize) -> Vec3;

    /// Set a vertex color from 8-bit alpha, red, green, blue.
    fn set_vertex_color(&mut self, index: usize, a: u8, r: u8, g: u8, b: u8);
}

/// The host side of a sky: dome mesh, moon texture, and celestial object sinks.
///
/// Lock/unlock pairs bracket every mutation of the mesh or moon texture.
/// They exist for backends that must map GPU buffers; the default is a no-op.
pub trait DomeGeometry {
    fn lock_geometry(&mut self) {}

    fn unlock_geometry(&mut self) {}

    fn vertices(&mut self) -> &mut dyn DomeVertices;

    fn lock_moon_texture(&mut self) {}

    fn unlock_moon_texture(&mut self) {}

    /// Moon texture bytes, width × height × 4, in the texture's pixel format.
    fn moon_texture_pixels(&mut self) -> &mut [u8];

    /// Sun direction on the unit sphere. The host scales it by the dome radius.
    fn set_sun_position(&mut self, unit: Vec3);

    /// Moon direction on the unit sphere.
    fn set_moon_position(&mut self, unit: Vec3);

    /// Star field rotation in radians: x tilts toward the celestial pole,
    /// then y spins about it.
    fn set_star_rotation(&mut self, rotation: Vec3);

    /// Light color sampled for the current sun height. Optional.
    fn set_sky_light(&mut self, _light: &LightData) {}
}

impl<T: DomeGeometry + ?Sized> DomeGeometry for &mut T {
    fn lock_geometry(&mut self) {
        (**self).lock_geometry()
    }

    fn unlock_geometry(&mut self) {
        (**self).unlock_geometry()
    }

    fn vertices(&mut self) -> &mut dyn DomeVertices {
        (**self).vertices()
    }

    fn lock_moon_texture(&mut self) {
        (**self).lock_moon_texture()
    }

    fn unlock_moon_texture(&mut self) {
        (**self).unlock_moon_texture()
    }

    fn moon_texture_pixels(&mut self) -> &mut [u8] {
        (**self).moon_texture_pixels()
    }

    fn set_sun_position(&mut self, unit: Vec3) {
        (**self).set_sun_position(unit)
    }

    fn set_moon_position(&mut self, unit: Vec3) {
        (**self).set_moon_position(unit)
    }

    fn set_star_rotation(&mut self, rotation: Vec3) {
        (**self).set_star_rotation(rotation)
    }

    fn set_sky_light(&mut self, light: &LightData) {
        (**self).set_sky_light(light)
    }
}

/// Run `f` on the dome's vertices between a lock/unlock pair.
pub fn with_vertices<D, R>(dome: &mut D, f: impl FnOnce(&mut dyn DomeVertices) -> R) -> R
where
    D: DomeGeometry + ?Sized,
{
    dome.lock_geometry();
    let result = f(dome.vertices());
    dome.unlock_geometry();
    result
}

/// Run `f` on the moon texture bytes between a lock/unlock pair.
pub fn with_moon_pixels<D, R>(dome: &mut D, f: impl FnOnce(&mut [u8]) -> R) -> R
where
    D: DomeGeometry + ?Sized,
{
    dome.lock_moon_texture();
    let result = f(dome.moon_texture_pixels());
    dome.unlock_moon_texture();
    result
}
