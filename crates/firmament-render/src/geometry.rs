//! Procedural sky dome meshes.
//!
//! Vertex 0 is the zenith. Rings of `vertical_segments` vertices follow
//! from the top down, each ring starting at angle 0 on the +x axis.
//! UVs project the dome onto a disk centred at (0.5, 0.5) so a single
//! radial texture covers it.

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use firmament_core::{FirmamentError, RawGeometry};
use glam::{Vec2, Vec3};

const MIN_VERTICAL_SEGMENTS: u32 = 3;
const MIN_HORIZONTAL_SEGMENTS: u32 = 1;

fn check_segments(vertical: u32, horizontal: u32) -> Result<(), FirmamentError> {
    if vertical < MIN_VERTICAL_SEGMENTS {
        return Err(FirmamentError::TooFewSegments {
            axis: "vertical",
            min: MIN_VERTICAL_SEGMENTS,
            actual: vertical,
        });
    }
    if horizontal < MIN_HORIZONTAL_SEGMENTS {
        return Err(FirmamentError::TooFewSegments {
            axis: "horizontal",
            min: MIN_HORIZONTAL_SEGMENTS,
            actual: horizontal,
        });
    }
    Ok(())
}

/// Vertex count for `rings` rings of `segments` plus `poles`, rejected when
/// it cannot be addressed by 16-bit indices. Computed in u64 so huge
/// segment counts cannot wrap.
fn checked_vertex_count(rings: u32, segments: u32, poles: u32) -> Result<usize, FirmamentError> {
    let count = rings as u64 * segments as u64 + poles as u64;
    if count > u16::MAX as u64 + 1 {
        return Err(FirmamentError::TooManyVertices(
            usize::try_from(count).unwrap_or(usize::MAX),
        ));
    }
    Ok(count as usize)
}

/// Disk projection of a dome point. The lower half mirrors the upper so
/// a full sphere maps both caps to the centre.
fn dome_uv(v: Vec3, radius: f32) -> Vec2 {
    let denom = 2.0 * (radius + v.y.abs());
    Vec2::new(v.x / denom + 0.5, v.z / denom + 0.5)
}

/// Push one ring of vertices at `height` above the equator.
fn push_ring(geom: &mut RawGeometry, radius: f64, height: f64, segments: u32) {
    let ring_radius = (radius * radius - height * height).max(0.0).sqrt();
    let step = TAU / segments as f64;
    for j in 0..segments {
        let angle = j as f64 * step;
        let v = Vec3::new(
            (ring_radius * angle.cos()) as f32,
            height as f32,
            (ring_radius * angle.sin()) as f32,
        );
        geom.uvs.push(dome_uv(v, radius as f32));
        geom.vertices.push(v);
    }
}

/// Fan from `apex` to the ring starting at `ring`, closing on the ring's first vertex.
fn push_fan(indices: &mut Vec<u16>, apex: u16, ring: u16, segments: u16, flip: bool) {
    for j in 0..segments {
        let a = ring + j;
        let b = ring + (j + 1) % segments;
        if flip {
            indices.extend_from_slice(&[apex, b, a]);
        } else {
            indices.extend_from_slice(&[apex, a, b]);
        }
    }
}

/// Two triangles per quad between an upper ring and the ring below it.
fn push_band(indices: &mut Vec<u16>, upper: u16, lower: u16, segments: u16) {
    for j in 0..segments {
        let next = (j + 1) % segments;
        let a = upper + j;
        let b = lower + j;
        indices.extend_from_slice(&[a, b, lower + next]);
        indices.extend_from_slice(&[a, lower + next, upper + next]);
    }
}

/// Build a hemisphere of `radius` with `vertical_segments` divisions around
/// and `horizontal_segments` rings from the zenith down to the horizon.
///
/// Produces `H·V + 1` vertices and `(H − 1)·2V + V` triangles. The last
/// ring lies exactly on the horizon.
pub fn create_sky_dome_geometry(
    radius: f32,
    vertical_segments: u32,
    horizontal_segments: u32,
) -> Result<RawGeometry, FirmamentError> {
    check_segments(vertical_segments, horizontal_segments)?;
    let vertex_count = checked_vertex_count(horizontal_segments, vertical_segments, 1)?;

    let triangles = (horizontal_segments as usize * 2 - 1) * vertical_segments as usize;
    let mut geom = RawGeometry {
        indices: Vec::with_capacity(triangles * 3),
        vertices: Vec::with_capacity(vertex_count),
        uvs: Vec::with_capacity(vertex_count),
    };

    let r = radius as f64;
    geom.vertices.push(Vec3::new(0.0, radius, 0.0));
    geom.uvs.push(Vec2::splat(0.5));

    let angle_step = FRAC_PI_2 / horizontal_segments as f64;
    for i in 0..horizontal_segments {
        let height = if i == horizontal_segments - 1 {
            0.0
        } else {
            (FRAC_PI_2 - (i + 1) as f64 * angle_step).sin() * r
        };
        push_ring(&mut geom, r, height, vertical_segments);
    }

    let v = vertical_segments as u16;
    push_fan(&mut geom.indices, 0, 1, v, false);
    for i in 0..(horizontal_segments - 1) as u16 {
        push_band(&mut geom.indices, 1 + i * v, 1 + (i + 1) * v, v);
    }

    log::debug!(
        "Built sky dome: {} vertices, {} triangles",
        geom.vertex_count(),
        geom.triangle_count()
    );
    Ok(geom)
}

/// Build a full sphere. `horizontal_segments` counts latitude divisions
/// from pole to pole and is rounded up to an even number so one ring sits
/// on the horizon.
///
/// Produces `(H − 1)·V + 2` vertices: the zenith, `H − 1` rings, and the nadir last.
pub fn create_sky_sphere_geometry(
    radius: f32,
    vertical_segments: u32,
    horizontal_segments: u32,
) -> Result<RawGeometry, FirmamentError> {
    let horizontal_segments = if horizontal_segments % 2 == 1 {
        horizontal_segments.saturating_add(1)
    } else {
        horizontal_segments.max(2)
    };
    check_segments(vertical_segments, horizontal_segments)?;
    let rings = horizontal_segments - 1;
    let vertex_count = checked_vertex_count(rings, vertical_segments, 2)?;

    let mut geom = RawGeometry {
        indices: Vec::with_capacity((rings as usize) * 2 * vertical_segments as usize * 3),
        vertices: Vec::with_capacity(vertex_count),
        uvs: Vec::with_capacity(vertex_count),
    };

    let r = radius as f64;
    geom.vertices.push(Vec3::new(0.0, radius, 0.0));
    geom.uvs.push(Vec2::splat(0.5));

    let angle_step = PI / horizontal_segments as f64;
    let equator = horizontal_segments / 2 - 1;
    for i in 0..rings {
        let height = if i == equator {
            0.0
        } else {
            (FRAC_PI_2 - (i + 1) as f64 * angle_step).sin() * r
        };
        push_ring(&mut geom, r, height, vertical_segments);
    }

    geom.vertices.push(Vec3::new(0.0, -radius, 0.0));
    geom.uvs.push(Vec2::splat(0.5));

    let v = vertical_segments as u16;
    push_fan(&mut geom.indices, 0, 1, v, false);
    for i in 0..(rings - 1) as u16 {
        push_band(&mut geom.indices, 1 + i * v, 1 + (i + 1) * v, v);
    }
    let nadir = (vertex_count - 1) as u16;
    push_fan(&mut geom.indices, nadir, 1 + (rings as u16 - 1) * v, v, true);

    log::debug!(
        "Built sky sphere: {} vertices, {} triangles",
        geom.vertex_count(),
        geom.triangle_count()
    );
    Ok(geom)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_indices_in_range(geom: &RawGeometry) {
        let count = geom.vertex_count();
        for &i in &geom.indices {
            assert!((i as usize) < count, "index {i} out of range {count}");
        }
    }

    #[test]
    fn test_hemisphere_counts() {
        for (v, h) in [(12, 6), (3, 1), (8, 2), (32, 16), (12, 12)] {
            let geom = create_sky_dome_geometry(1.0, v, h).expect("dome should build");
            assert_eq!(geom.vertex_count(), (h * v + 1) as usize);
            assert_eq!(geom.index_count(), (3 * ((h - 1) * 2 * v + v)) as usize);
            assert_eq!(geom.uvs.len(), geom.vertex_count());
            assert_indices_in_range(&geom);
        }
    }

    #[test]
    fn test_hemisphere_layout_matches_reference_indices() {
        let geom = create_sky_dome_geometry(1.0, 4, 2).expect("dome should build");
        // Cap fan closes on vertex 1.
        assert_eq!(&geom.indices[..12], &[0, 1, 2, 0, 2, 3, 0, 3, 4, 0, 4, 1]);
        // Last quad of the first band wraps to the start of both rings.
        let tail = &geom.indices[geom.index_count() - 6..];
        assert_eq!(tail, &[4, 8, 5, 4, 5, 1]);
    }

    #[test]
    fn test_hemisphere_vertices_on_sphere() {
        let radius = 200.0;
        let geom = create_sky_dome_geometry(radius, 12, 6).expect("dome should build");
        assert_eq!(geom.vertices[0], Vec3::new(0.0, radius, 0.0));
        assert_eq!(geom.uvs[0], Vec2::splat(0.5));
        for v in &geom.vertices {
            assert!((v.length() - radius).abs() < 1e-2, "vertex {v} off sphere");
            assert!(v.y >= 0.0);
        }
        // The last ring is on the horizon.
        for v in &geom.vertices[geom.vertex_count() - 12..] {
            assert_eq!(v.y, 0.0);
        }
    }

    #[test]
    fn test_hemisphere_uv_inside_unit_square() {
        let geom = create_sky_dome_geometry(1.0, 16, 8).expect("dome should build");
        for uv in &geom.uvs {
            assert!((0.0..=1.0).contains(&uv.x) && (0.0..=1.0).contains(&uv.y));
        }
        // A horizon vertex at angle 0 maps to the right edge of the disk.
        let first_horizon = geom.vertex_count() - 16;
        assert!((geom.uvs[first_horizon].x - 1.0).abs() < 1e-6);
        assert!((geom.uvs[first_horizon].y - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_rejects_bad_segments() {
        assert!(matches!(
            create_sky_dome_geometry(1.0, 2, 6),
            Err(FirmamentError::TooFewSegments { axis: "vertical", .. })
        ));
        assert!(matches!(
            create_sky_dome_geometry(1.0, 12, 0),
            Err(FirmamentError::TooFewSegments { axis: "horizontal", .. })
        ));
        assert!(matches!(
            create_sky_dome_geometry(1.0, 512, 256),
            Err(FirmamentError::TooManyVertices(_))
        ));
    }

    #[test]
    fn test_huge_segment_counts_rejected_without_wrapping() {
        // 65536 * 65536 + 1 wraps to 1 in 32 bits.
        assert!(matches!(
            create_sky_dome_geometry(1.0, 65536, 65536),
            Err(FirmamentError::TooManyVertices(n)) if n > u32::MAX as usize
        ));
        assert!(matches!(
            create_sky_dome_geometry(1.0, u32::MAX, u32::MAX),
            Err(FirmamentError::TooManyVertices(_))
        ));
        assert!(matches!(
            create_sky_sphere_geometry(1.0, 3, u32::MAX),
            Err(FirmamentError::TooManyVertices(_))
        ));
    }

    #[test]
    fn test_largest_addressable_dome_builds() {
        let geom = create_sky_dome_geometry(1.0, 255, 257).expect("65536 vertices fit u16 indices");
        assert_eq!(geom.vertex_count(), 65536);
        assert_indices_in_range(&geom);
        assert!(matches!(
            create_sky_dome_geometry(1.0, 255, 258),
            Err(FirmamentError::TooManyVertices(65791))
        ));
    }

    #[test]
    fn test_sphere_counts_and_odd_rounding() {
        let geom = create_sky_sphere_geometry(1.0, 12, 6).expect("sphere should build");
        assert_eq!(geom.vertex_count(), 5 * 12 + 2);
        assert_eq!(geom.triangle_count(), 12 + 4 * 2 * 12 + 12);
        assert_indices_in_range(&geom);

        let odd = create_sky_sphere_geometry(1.0, 12, 5).expect("sphere should build");
        assert_eq!(odd.vertex_count(), geom.vertex_count());
    }

    #[test]
    fn test_sphere_symmetric_with_equator_ring() {
        let radius = 3.0;
        let geom = create_sky_sphere_geometry(radius, 8, 4).expect("sphere should build");
        assert_eq!(geom.vertices[geom.vertex_count() - 1], Vec3::new(0.0, -radius, 0.0));
        let equator = &geom.vertices[1 + 8..1 + 16];
        for v in equator {
            assert_eq!(v.y, 0.0);
            assert!((v.length() - radius).abs() < 1e-4);
        }
        let below = geom.vertices.iter().filter(|v| v.y < 0.0).count();
        let above = geom.vertices.iter().filter(|v| v.y > 0.0).count();
        assert_eq!(below, above);
    }

    #[test]
    fn test_sphere_bottom_fan_uses_nadir() {
        let geom = create_sky_sphere_geometry(1.0, 6, 4).expect("sphere should build");
        let nadir = (geom.vertex_count() - 1) as u16;
        let fan = &geom.indices[geom.index_count() - 18..];
        assert!(fan.chunks(3).all(|t| t[0] == nadir));
    }
}
