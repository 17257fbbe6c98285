//! Sky painting and procedural sky assets.
//!
//! The [`SkyPainter`] colors a host-owned dome through the [`DomeGeometry`]
//! traits. The generators build the meshes and textures a host needs to
//! create that dome in the first place.

pub mod dome;
pub mod geometry;
pub mod lighting;
pub mod memory;
pub mod moon_phase;
pub mod night_dome;
pub mod painter;
pub mod perez;
pub mod textures;

pub use dome::{with_moon_pixels, with_vertices, DomeGeometry, DomeVertices};
pub use geometry::{create_sky_dome_geometry, create_sky_sphere_geometry};
pub use lighting::LightTable;
pub use memory::{LockCounter, MemoryDome, SkyVertex};
pub use moon_phase::{apply_moon_phase, apply_moon_visibility};
pub use night_dome::create_night_sky_dome_geometry;
pub use painter::SkyPainter;
pub use perez::SkyColorModel;
pub use textures::{
    create_moon_texture, create_night_sky_texture, create_sun_texture, Texture,
};
