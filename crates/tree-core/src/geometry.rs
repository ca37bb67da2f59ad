//! Procedural mesh builders.
//!
//! All builders are pure and return position-only triangle lists. Vertex
//! layouts follow the usual ring-by-ring grid: `(segments + 1)` vertices per
//! ring so the seam carries duplicated positions.

use crate::params::{LightParams, StarParams, TreeParams};
use glam::{Vec2, Vec3};
use std::f32::consts::{PI, TAU};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeshData {
    pub positions: Vec<[f32; 3]>,
    pub indices: Vec<u32>,
}

impl MeshData {
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// Open cone, apex up, centered on the origin. No base cap is generated.
pub fn cone_shell(tree: &TreeParams) -> MeshData {
    let radial = tree.radial_segments;
    let rows = tree.height_segments;
    let half = tree.height * 0.5;
    let mut positions = Vec::with_capacity(((radial + 1) * (rows + 1)) as usize);
    for iy in 0..=rows {
        let v = iy as f32 / rows as f32;
        // radius grows linearly from the apex (v = 0) to the base (v = 1)
        let r = v * tree.radius;
        let y = half - v * tree.height;
        for ix in 0..=radial {
            let theta = ix as f32 / radial as f32 * TAU;
            positions.push([r * theta.sin(), y, r * theta.cos()]);
        }
    }

    let stride = radial + 1;
    let mut indices = Vec::with_capacity((radial * rows * 6) as usize);
    for iy in 0..rows {
        for ix in 0..radial {
            let a = iy * stride + ix;
            let b = (iy + 1) * stride + ix;
            let c = (iy + 1) * stride + ix + 1;
            let d = iy * stride + ix + 1;
            // the apex ring collapses to a point, so its upper triangle is degenerate
            if iy != 0 {
                indices.extend_from_slice(&[a, b, d]);
            }
            indices.extend_from_slice(&[b, c, d]);
        }
    }
    MeshData { positions, indices }
}

/// UV sphere with `width_segments` slices around Y and `height_segments`
/// stacks from pole to pole.
pub fn uv_sphere(radius: f32, width_segments: u32, height_segments: u32) -> MeshData {
    let w = width_segments;
    let h = height_segments;
    let mut positions = Vec::with_capacity(((w + 1) * (h + 1)) as usize);
    for iy in 0..=h {
        let v = iy as f32 / h as f32;
        let (sin_v, cos_v) = (v * PI).sin_cos();
        for ix in 0..=w {
            let (sin_u, cos_u) = (ix as f32 / w as f32 * TAU).sin_cos();
            positions.push([-radius * cos_u * sin_v, radius * cos_v, radius * sin_u * sin_v]);
        }
    }

    let stride = w + 1;
    let mut indices = Vec::new();
    for iy in 0..h {
        for ix in 0..w {
            let a = iy * stride + ix + 1;
            let b = iy * stride + ix;
            let c = (iy + 1) * stride + ix;
            let d = (iy + 1) * stride + ix + 1;
            if iy != 0 {
                indices.extend_from_slice(&[a, b, d]);
            }
            if iy != h - 1 {
                indices.extend_from_slice(&[b, c, d]);
            }
        }
    }
    MeshData { positions, indices }
}

/// Star outline alternating outer and inner radius, first vertex straight up.
pub fn star_outline(star: &StarParams) -> Vec<Vec2> {
    let step = PI / star.points as f32;
    (0..star.points * 2)
        .map(|i| {
            let angle = PI * 0.5 + step * i as f32;
            let r = if i % 2 == 0 {
                star.outer_radius
            } else {
                star.inner_radius
            };
            Vec2::new(angle.cos() * r, angle.sin() * r)
        })
        .collect()
}

/// Filled flat star in the XY plane, triangulated as a fan around the center.
pub fn star_shape(star: &StarParams) -> MeshData {
    let outline = star_outline(star);
    let mut positions = Vec::with_capacity(outline.len() + 1);
    positions.push([0.0, 0.0, 0.0]);
    positions.extend(outline.iter().map(|p| [p.x, p.y, 0.0]));

    let n = outline.len() as u32;
    let mut indices = Vec::with_capacity(outline.len() * 3);
    for i in 0..n {
        indices.extend_from_slice(&[0, i + 1, (i + 1) % n + 1]);
    }
    MeshData { positions, indices }
}

/// One surviving slot of the light helix.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HelixSlot {
    /// Position in the unfiltered sequence.
    pub index: usize,
    pub t: f32,
    pub position: Vec3,
    pub color: u32,
}

/// Point on the helix for parameter `t`, advanced by `phase` radians.
#[inline]
pub fn helix_point(t: f32, windings: f32, max_radius: f32, phase: f64, y: f32) -> Vec3 {
    let angle = t as f64 * std::f64::consts::PI * windings as f64 + phase;
    let radius = ((1.0 - t) * max_radius) as f64;
    Vec3::new((angle.cos() * radius) as f32, y, (angle.sin() * radius) as f32)
}

/// Lay the helix out from apex to base, applying the sparse filter.
pub fn helix_slots(lights: &LightParams, height: f32) -> Vec<HelixSlot> {
    (0..lights.count)
        .filter(|&i| lights.keeps(i))
        .map(|i| {
            let t = i as f32 / lights.count as f32;
            let y = t * height - height * 0.5;
            HelixSlot {
                index: i,
                t,
                position: helix_point(t, lights.windings, lights.max_radius, 0.0, y),
                color: lights.color_for(i),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cone_has_no_base_cap() {
        let tree = TreeParams::default();
        let mesh = cone_shell(&tree);
        let stride = (tree.radial_segments + 1) as usize;
        assert_eq!(mesh.vertex_count(), stride * (tree.height_segments + 1) as usize);
        // no vertex at the base center
        assert!(!mesh
            .positions
            .iter()
            .any(|p| p[1] == -tree.height * 0.5 && p[0] == 0.0 && p[2] == 0.0));
        let expected = (tree.radial_segments * (2 * tree.height_segments - 1)) as usize;
        assert_eq!(mesh.triangle_count(), expected);
    }

    #[test]
    fn cone_apex_and_base_radius() {
        let tree = TreeParams::default();
        let mesh = cone_shell(&tree);
        let apex = mesh.positions[0];
        assert_eq!(apex, [0.0, 4.0, 0.0]);
        let base = mesh.positions.last().copied().unwrap_or_default();
        let r = (base[0] * base[0] + base[2] * base[2]).sqrt();
        assert!((r - 4.0).abs() < 1e-5);
        assert!((base[1] + 4.0).abs() < 1e-6);
    }

    #[test]
    fn sphere_vertices_on_radius() {
        let mesh = uv_sphere(0.08, 10, 10);
        for p in &mesh.positions {
            let len = Vec3::from_array(*p).length();
            assert!((len - 0.08).abs() < 1e-6);
        }
        assert!(mesh.indices.iter().all(|&i| (i as usize) < mesh.vertex_count()));
    }

    #[test]
    fn sphere_segments_are_independent() {
        let mesh = uv_sphere(1.0, 8, 4);
        assert_eq!(mesh.vertex_count(), 9 * 5);
        // poles contribute one triangle per slice, inner stacks two
        assert_eq!(mesh.triangle_count(), 8 * (2 * 4 - 2));
    }

    #[test]
    fn star_fan_indices_wrap() {
        let mesh = star_shape(&StarParams::default());
        assert_eq!(mesh.vertex_count(), 11);
        assert_eq!(mesh.triangle_count(), 10);
        assert_eq!(&mesh.indices[27..30], &[0, 10, 1]);
    }
}
