//! A dome that lives in plain memory.
//!
//! Stands in for a GPU-backed dome in tests and benchmarks, and doubles as
//! the CPU staging side for hosts that upload vertex data themselves.

use bytemuck::{Pod, Zeroable};
use firmament_core::{LightData, RawGeometry};
use glam::Vec3;

use crate::dome::{DomeGeometry, DomeVertices};
use crate::textures::Texture;

/// One dome vertex as uploaded to a vertex buffer (16 bytes).
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct SkyVertex {
    pub position: [f32; 3],
    /// Alpha, red, green, blue.
    pub color: [u8; 4],
}

#[derive(Debug, Clone, Default)]
struct VertexBuffer {
    vertices: Vec<SkyVertex>,
}

impl DomeVertices for VertexBuffer {
    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn vertex_position(&self, index: usize) -> Vec3 {
        Vec3::from_array(self.vertices[index].position)
    }

    fn set_vertex_color(&mut self, index: usize, a: u8, r: u8, g: u8, b: u8) {
        self.vertices[index].color = [a, r, g, b];
    }
}

/// Lock bookkeeping for one resource.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LockCounter {
    pub locks: u32,
    pub unlocks: u32,
    /// Highest number of outstanding locks seen.
    pub max_depth: u32,
}

impl LockCounter {
    fn lock(&mut self) {
        self.locks += 1;
        self.max_depth = self.max_depth.max(self.depth());
    }

    fn unlock(&mut self) {
        if self.depth() == 0 {
            log::warn!("Unlock without matching lock");
        }
        self.unlocks += 1;
    }

    /// Outstanding locks.
    pub fn depth(&self) -> u32 {
        self.locks.saturating_sub(self.unlocks)
    }

    /// Every lock has been released.
    pub fn is_balanced(&self) -> bool {
        self.locks == self.unlocks
    }
}

/// In-memory [`DomeGeometry`] recording everything the sky sends it.
#[derive(Debug, Clone, Default)]
pub struct MemoryDome {
    buffer: VertexBuffer,
    indices: Vec<u16>,
    moon_pixels: Vec<u8>,
    moon_width: u32,
    moon_height: u32,
    pub geometry_locks: LockCounter,
    pub moon_locks: LockCounter,
    pub sun_position: Option<Vec3>,
    pub moon_position: Option<Vec3>,
    pub star_rotation: Option<Vec3>,
    pub sky_light: Option<LightData>,
}

impl MemoryDome {
    /// Copy a mesh and a moon texture into a new dome. Vertex colors start
    /// out transparent black.
    pub fn from_geometry(geometry: &RawGeometry, moon: &Texture) -> Self {
        let vertices = geometry
            .vertices
            .iter()
            .map(|v| SkyVertex {
                position: v.to_array(),
                color: [0; 4],
            })
            .collect();
        Self {
            buffer: VertexBuffer { vertices },
            indices: geometry.indices.clone(),
            moon_pixels: moon.pixels.clone(),
            moon_width: moon.width,
            moon_height: moon.height,
            ..Self::default()
        }
    }

    pub fn sky_vertices(&self) -> &[SkyVertex] {
        &self.buffer.vertices
    }

    pub fn vertex_color(&self, index: usize) -> [u8; 4] {
        self.buffer.vertices[index].color
    }

    pub fn indices(&self) -> &[u16] {
        &self.indices
    }

    /// Vertex data as raw bytes ready for upload.
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.buffer.vertices)
    }

    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }

    pub fn moon_pixels(&self) -> &[u8] {
        &self.moon_pixels
    }

    pub fn moon_size(&self) -> (u32, u32) {
        (self.moon_width, self.moon_height)
    }

    /// Alpha of a moon texel.
    pub fn moon_alpha(&self, x: u32, y: u32) -> u8 {
        self.moon_pixels[((y * self.moon_width + x) * 4 + 3) as usize]
    }
}

impl DomeGeometry for MemoryDome {
    fn lock_geometry(&mut self) {
        self.geometry_locks.lock();
    }

    fn unlock_geometry(&mut self) {
        self.geometry_locks.unlock();
    }

    fn vertices(&mut self) -> &mut dyn DomeVertices {
        &mut self.buffer
    }

    fn lock_moon_texture(&mut self) {
        self.moon_locks.lock();
    }

    fn unlock_moon_texture(&mut self) {
        self.moon_locks.unlock();
    }

    fn moon_texture_pixels(&mut self) -> &mut [u8] {
        &mut self.moon_pixels
    }

    fn set_sun_position(&mut self, unit: Vec3) {
        self.sun_position = Some(unit);
    }

    fn set_moon_position(&mut self, unit: Vec3) {
        self.moon_position = Some(unit);
    }

    fn set_star_rotation(&mut self, rotation: Vec3) {
        self.star_rotation = Some(rotation);
    }

    fn set_sky_light(&mut self, light: &LightData) {
        self.sky_light = Some(*light);
    }
}
