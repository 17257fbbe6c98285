//! Star field dome.
//!
//! A fixed full sphere with equirectangular UVs for the night sky texture.
//! Each ring repeats its first vertex at u = 1 so the texture seam has its
//! own UVs. The layout never changes, which keeps the vertex and triangle
//! counts stable for hosts that size buffers ahead of time.

use std::f64::consts::{PI, TAU};

use firmament_core::constants::{NIGHT_DOME_TRIANGLE_COUNT, NIGHT_DOME_VERTEX_COUNT};
use firmament_core::RawGeometry;
use glam::{Vec2, Vec3};

const RINGS: u16 = 12;
/// Columns per ring including the seam duplicate.
const COLUMNS: u16 = 12;

/// Build the star dome scaled to `radius`. Vertex 0 is the zenith and the
/// last vertex is the nadir.
pub fn create_night_sky_dome_geometry(radius: f32) -> RawGeometry {
    let mut geom = RawGeometry {
        indices: Vec::with_capacity(NIGHT_DOME_TRIANGLE_COUNT * 3),
        vertices: Vec::with_capacity(NIGHT_DOME_VERTEX_COUNT),
        uvs: Vec::with_capacity(NIGHT_DOME_VERTEX_COUNT),
    };
    let r = radius as f64;
    let spans = (COLUMNS - 1) as f64;

    geom.vertices.push(Vec3::new(0.0, radius, 0.0));
    geom.uvs.push(Vec2::new(0.5, 0.0));

    for i in 0..RINGS {
        let polar = (i + 1) as f64 * PI / (RINGS + 1) as f64;
        let (ring_radius, height) = (polar.sin() * r, polar.cos() * r);
        let v = (i + 1) as f32 / (RINGS + 1) as f32;
        for j in 0..COLUMNS {
            let u = j as f64 / spans;
            let angle = u * TAU;
            geom.vertices.push(Vec3::new(
                (ring_radius * angle.cos()) as f32,
                height as f32,
                (ring_radius * angle.sin()) as f32,
            ));
            geom.uvs.push(Vec2::new(u as f32, v));
        }
    }

    geom.vertices.push(Vec3::new(0.0, -radius, 0.0));
    geom.uvs.push(Vec2::new(0.5, 1.0));

    let ring_start = |i: u16| 1 + i * COLUMNS;
    let nadir = geom.vertices.len() as u16 - 1;

    for j in 0..COLUMNS - 1 {
        geom.indices.extend_from_slice(&[0, ring_start(0) + j, ring_start(0) + j + 1]);
    }
    for i in 0..RINGS - 1 {
        let (upper, lower) = (ring_start(i), ring_start(i + 1));
        for j in 0..COLUMNS - 1 {
            geom.indices.extend_from_slice(&[upper + j, lower + j, lower + j + 1]);
            geom.indices.extend_from_slice(&[upper + j, lower + j + 1, upper + j + 1]);
        }
    }
    let last = ring_start(RINGS - 1);
    for j in 0..COLUMNS - 1 {
        geom.indices.extend_from_slice(&[nadir, last + j + 1, last + j]);
    }

    debug_assert_eq!(geom.vertex_count(), NIGHT_DOME_VERTEX_COUNT);
    debug_assert_eq!(geom.triangle_count(), NIGHT_DOME_TRIANGLE_COUNT);
    geom
}
