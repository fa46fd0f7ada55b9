//! Torus knot mesh generation.
//!
//! A (p, q) torus knot swept with a circular tube, emitted as a triangle
//! list with smooth tube normals.

use super::types::MeshVertex;
use super::util::{cross, normalize, sub};

/// Generate a (p, q) = (2, 3) torus knot.
///
/// `radius` is the knot radius, `tube` the tube radius; `tubular` segments
/// run along the curve and `radial` segments around the tube.
pub fn generate_torus_knot(radius: f32, tube: f32, tubular: u32, radial: u32) -> Vec<MeshVertex> {
    const P: f32 = 2.0;
    const Q: f32 = 3.0;

    let tubular = tubular.max(3);
    let radial = radial.max(3);

    // Grid of ring vertices: (tubular + 1) rows × (radial + 1) columns.
    let rows = (tubular + 1) as usize;
    let cols = (radial + 1) as usize;
    let mut grid = Vec::with_capacity(rows * cols);

    for i in 0..=tubular {
        let u = i as f32 / tubular as f32 * P * std::f32::consts::TAU;

        // Frame the curve with a finite-difference tangent.
        let p1 = position_on_curve(u, radius, P, Q);
        let p2 = position_on_curve(u + 0.01, radius, P, Q);
        let tangent = sub(p2, p1);
        let mut bitangent = cross(tangent, [p2[0] + p1[0], p2[1] + p1[1], p2[2] + p1[2]]);
        let mut ring_normal = cross(bitangent, tangent);
        bitangent = normalize(bitangent);
        ring_normal = normalize(ring_normal);

        for j in 0..=radial {
            let v = j as f32 / radial as f32 * std::f32::consts::TAU;
            let cx = -tube * v.cos();
            let cy = tube * v.sin();

            let position = [
                p1[0] + cx * ring_normal[0] + cy * bitangent[0],
                p1[1] + cx * ring_normal[1] + cy * bitangent[1],
                p1[2] + cx * ring_normal[2] + cy * bitangent[2],
            ];
            let normal = normalize(sub(position, p1));
            grid.push(MeshVertex { position, normal });
        }
    }

    // Two triangles per quad.
    let mut vertices = Vec::with_capacity((tubular * radial * 6) as usize);
    for i in 0..tubular as usize {
        for j in 0..radial as usize {
            let a = grid[i * cols + j];
            let b = grid[(i + 1) * cols + j];
            let c = grid[(i + 1) * cols + j + 1];
            let d = grid[i * cols + j + 1];

            vertices.push(a);
            vertices.push(b);
            vertices.push(d);

            vertices.push(b);
            vertices.push(c);
            vertices.push(d);
        }
    }

    vertices
}

/// Point on the (p, q) torus knot curve at parameter `u`.
fn position_on_curve(u: f32, radius: f32, p: f32, q: f32) -> [f32; 3] {
    let cu = u.cos();
    let su = u.sin();
    let qu_over_p = q / p * u;
    let cs = qu_over_p.cos();

    [
        radius * (2.0 + cs) * 0.5 * cu,
        radius * (2.0 + cs) * su * 0.5,
        radius * qu_over_p.sin() * 0.5,
    ]
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::util::length;

    #[test]
    fn torus_knot_vertex_count() {
        let mesh = generate_torus_knot(1.0, 0.3, 100, 16);
        assert_eq!(mesh.len(), (100 * 16 * 6) as usize);
    }

    #[test]
    fn torus_knot_stays_within_bounding_radius() {
        // Curve reaches at most (2 + 1) * 0.5 * radius from origin,
        // plus the tube radius.
        let mesh = generate_torus_knot(1.0, 0.3, 64, 8);
        let bound = 1.5 + 0.3 + 1e-3;
        for v in &mesh {
            assert!(length(v.position) <= bound, "vertex {:?} escapes", v.position);
        }
    }

    #[test]
    fn torus_knot_normals_are_unit() {
        let mesh = generate_torus_knot(1.0, 0.3, 32, 8);
        for v in &mesh {
            assert!((length(v.normal) - 1.0).abs() < 1e-4);
        }
    }

    #[test]
    fn torus_knot_curve_at_zero() {
        // u = 0: cos(0) = 1 everywhere → ((2+1)*0.5, 0, 0)
        let p = position_on_curve(0.0, 1.0, 2.0, 3.0);
        assert!((p[0] - 1.5).abs() < 1e-6);
        assert!(p[1].abs() < 1e-6);
        assert!(p[2].abs() < 1e-6);
    }

    #[test]
    fn torus_knot_minimum_clamp() {
        let mesh = generate_torus_knot(1.0, 0.3, 1, 1);
        assert_eq!(mesh.len(), (3 * 3 * 6) as usize);
    }
}
