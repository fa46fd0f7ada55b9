//! Platonic solid mesh generation.
//!
//! Tetrahedron, octahedron, icosahedron, and dodecahedron, all projected
//! onto the unit circumsphere and flat-shaded (one normal per face).

use super::types::MeshVertex;
use super::util::{cross, normalize, sub};

/// Golden ratio.
const PHI: f32 = 1.618_034;

/// Tetrahedron with unit circumradius.
pub fn generate_tetrahedron() -> Vec<MeshVertex> {
    let vertices: [[f32; 3]; 4] = [
        [1.0, 1.0, 1.0],
        [-1.0, -1.0, 1.0],
        [-1.0, 1.0, -1.0],
        [1.0, -1.0, -1.0],
    ];
    let faces: [[usize; 3]; 4] = [[2, 1, 0], [0, 3, 2], [1, 3, 0], [2, 3, 1]];
    flat_shaded(&vertices, &faces)
}

/// Octahedron with unit circumradius.
pub fn generate_octahedron() -> Vec<MeshVertex> {
    let vertices: [[f32; 3]; 6] = [
        [1.0, 0.0, 0.0],
        [-1.0, 0.0, 0.0],
        [0.0, 1.0, 0.0],
        [0.0, -1.0, 0.0],
        [0.0, 0.0, 1.0],
        [0.0, 0.0, -1.0],
    ];
    let faces: [[usize; 3]; 8] = [
        [0, 2, 4],
        [0, 4, 3],
        [0, 3, 5],
        [0, 5, 2],
        [1, 2, 5],
        [1, 5, 3],
        [1, 3, 4],
        [1, 4, 2],
    ];
    flat_shaded(&vertices, &faces)
}

/// Icosahedron with unit circumradius.
pub fn generate_icosahedron() -> Vec<MeshVertex> {
    let t = PHI;
    let vertices: [[f32; 3]; 12] = [
        [-1.0, t, 0.0],
        [1.0, t, 0.0],
        [-1.0, -t, 0.0],
        [1.0, -t, 0.0],
        [0.0, -1.0, t],
        [0.0, 1.0, t],
        [0.0, -1.0, -t],
        [0.0, 1.0, -t],
        [t, 0.0, -1.0],
        [t, 0.0, 1.0],
        [-t, 0.0, -1.0],
        [-t, 0.0, 1.0],
    ];
    let faces: [[usize; 3]; 20] = [
        [0, 11, 5],
        [0, 5, 1],
        [0, 1, 7],
        [0, 7, 10],
        [0, 10, 11],
        [1, 5, 9],
        [5, 11, 4],
        [11, 10, 2],
        [10, 7, 6],
        [7, 1, 8],
        [3, 9, 4],
        [3, 4, 2],
        [3, 2, 6],
        [3, 6, 8],
        [3, 8, 9],
        [4, 9, 5],
        [2, 4, 11],
        [6, 2, 10],
        [8, 6, 7],
        [9, 8, 1],
    ];
    flat_shaded(&vertices, &faces)
}

/// Dodecahedron with unit circumradius.
///
/// Pentagonal faces arrive pre-triangulated (3 triangles each).
pub fn generate_dodecahedron() -> Vec<MeshVertex> {
    let t = PHI;
    let r = 1.0 / PHI;
    let vertices: [[f32; 3]; 20] = [
        // (±1, ±1, ±1)
        [-1.0, -1.0, -1.0],
        [-1.0, -1.0, 1.0],
        [-1.0, 1.0, -1.0],
        [-1.0, 1.0, 1.0],
        [1.0, -1.0, -1.0],
        [1.0, -1.0, 1.0],
        [1.0, 1.0, -1.0],
        [1.0, 1.0, 1.0],
        // (0, ±1/φ, ±φ)
        [0.0, -r, -t],
        [0.0, -r, t],
        [0.0, r, -t],
        [0.0, r, t],
        // (±1/φ, ±φ, 0)
        [-r, -t, 0.0],
        [-r, t, 0.0],
        [r, -t, 0.0],
        [r, t, 0.0],
        // (±φ, 0, ±1/φ)
        [-t, 0.0, -r],
        [t, 0.0, -r],
        [-t, 0.0, r],
        [t, 0.0, r],
    ];
    let faces: [[usize; 3]; 36] = [
        [3, 11, 7],
        [3, 7, 15],
        [3, 15, 13],
        [7, 19, 17],
        [7, 17, 6],
        [7, 6, 15],
        [17, 4, 8],
        [17, 8, 10],
        [17, 10, 6],
        [8, 0, 16],
        [8, 16, 2],
        [8, 2, 10],
        [0, 12, 1],
        [0, 1, 18],
        [0, 18, 16],
        [6, 10, 2],
        [6, 2, 13],
        [6, 13, 15],
        [2, 16, 18],
        [2, 18, 3],
        [2, 3, 13],
        [18, 1, 9],
        [18, 9, 11],
        [18, 11, 3],
        [4, 14, 12],
        [4, 12, 0],
        [4, 0, 8],
        [11, 9, 5],
        [11, 5, 19],
        [11, 19, 7],
        [19, 5, 14],
        [19, 14, 4],
        [19, 4, 17],
        [1, 12, 14],
        [1, 14, 5],
        [1, 5, 9],
    ];
    flat_shaded(&vertices, &faces)
}

/// Project vertices onto the unit sphere and emit a flat-shaded triangle
/// list (face normal repeated on all three corners).
fn flat_shaded(vertices: &[[f32; 3]], faces: &[[usize; 3]]) -> Vec<MeshVertex> {
    let mut out = Vec::with_capacity(faces.len() * 3);
    for face in faces {
        let a = normalize(vertices[face[0]]);
        let b = normalize(vertices[face[1]]);
        let c = normalize(vertices[face[2]]);
        let normal = normalize(cross(sub(b, a), sub(c, a)));
        for p in [a, b, c] {
            out.push(MeshVertex {
                position: p,
                normal,
            });
        }
    }
    out
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::util::length;

    fn assert_unit_circumradius(mesh: &[MeshVertex]) {
        for v in mesh {
            assert!((length(v.position) - 1.0).abs() < 1e-5);
        }
    }

    fn assert_unit_normals(mesh: &[MeshVertex]) {
        for v in mesh {
            assert!((length(v.normal) - 1.0).abs() < 1e-5);
        }
    }

    fn assert_outward_normals(mesh: &[MeshVertex]) {
        // For a convex solid centered at origin, every face normal points
        // away from the center.
        for tri in mesh.chunks(3) {
            let center = [
                (tri[0].position[0] + tri[1].position[0] + tri[2].position[0]) / 3.0,
                (tri[0].position[1] + tri[1].position[1] + tri[2].position[1]) / 3.0,
                (tri[0].position[2] + tri[1].position[2] + tri[2].position[2]) / 3.0,
            ];
            let n = tri[0].normal;
            let d = center[0] * n[0] + center[1] * n[1] + center[2] * n[2];
            assert!(d > 0.0, "inward-facing normal: {n:?} at {center:?}");
        }
    }

    #[test]
    fn tetrahedron_counts_and_bounds() {
        let mesh = generate_tetrahedron();
        assert_eq!(mesh.len(), 4 * 3);
        assert_unit_circumradius(&mesh);
        assert_unit_normals(&mesh);
        assert_outward_normals(&mesh);
    }

    #[test]
    fn octahedron_counts_and_bounds() {
        let mesh = generate_octahedron();
        assert_eq!(mesh.len(), 8 * 3);
        assert_unit_circumradius(&mesh);
        assert_unit_normals(&mesh);
        assert_outward_normals(&mesh);
    }

    #[test]
    fn icosahedron_counts_and_bounds() {
        let mesh = generate_icosahedron();
        assert_eq!(mesh.len(), 20 * 3);
        assert_unit_circumradius(&mesh);
        assert_unit_normals(&mesh);
        assert_outward_normals(&mesh);
    }

    #[test]
    fn dodecahedron_counts_and_bounds() {
        let mesh = generate_dodecahedron();
        assert_eq!(mesh.len(), 36 * 3);
        assert_unit_circumradius(&mesh);
        assert_unit_normals(&mesh);
        assert_outward_normals(&mesh);
    }

    #[test]
    fn flat_shading_repeats_normal_per_face() {
        let mesh = generate_octahedron();
        for tri in mesh.chunks(3) {
            assert_eq!(tri[0].normal, tri[1].normal);
            assert_eq!(tri[1].normal, tri[2].normal);
        }
    }
}
