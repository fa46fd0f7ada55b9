//! UV sphere mesh generation.
//!
//! Generates a latitude/longitude sphere as a plain triangle list with
//! smooth normals (normal = position / radius).

use super::types::MeshVertex;

/// Generate a UV sphere mesh.
///
/// `n_lat` = number of latitude bands (rows), `n_lon` = number of longitude
/// segments (columns). Each quad is split into 2 triangles, producing
/// `n_lat * n_lon * 6` vertices (no index buffer — simple triangle list).
///
/// The sphere is centered at origin. North pole is (0, radius, 0).
pub fn generate_sphere_mesh(radius: f32, n_lat: u32, n_lon: u32) -> Vec<MeshVertex> {
    let n_lat = n_lat.max(2);
    let n_lon = n_lon.max(3);

    let mut vertices = Vec::with_capacity((n_lat * n_lon * 6) as usize);

    let vertex = |lat: u32, lon: u32| -> MeshVertex {
        let n = sphere_point(lat, lon, n_lat, n_lon);
        MeshVertex {
            position: [n[0] * radius, n[1] * radius, n[2] * radius],
            normal: n,
        }
    };

    for lat in 0..n_lat {
        for lon in 0..n_lon {
            let v00 = vertex(lat, lon);
            let v10 = vertex(lat + 1, lon);
            let v01 = vertex(lat, lon + 1);
            let v11 = vertex(lat + 1, lon + 1);

            vertices.push(v00);
            vertices.push(v10);
            vertices.push(v01);

            vertices.push(v10);
            vertices.push(v11);
            vertices.push(v01);
        }
    }

    vertices
}

/// Compute a point on the unit sphere from latitude/longitude indices.
fn sphere_point(lat: u32, lon: u32, n_lat: u32, n_lon: u32) -> [f32; 3] {
    let theta = std::f32::consts::PI * (lat as f32) / (n_lat as f32);
    let phi = 2.0 * std::f32::consts::PI * (lon as f32) / (n_lon as f32);

    let sin_theta = theta.sin();
    let cos_theta = theta.cos();

    [sin_theta * phi.cos(), cos_theta, sin_theta * phi.sin()]
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sphere_mesh_vertex_count() {
        let mesh = generate_sphere_mesh(1.0, 4, 8);
        // 4 lat bands × 8 lon segments × 6 vertices per quad = 192
        assert_eq!(mesh.len(), 192);
    }

    #[test]
    fn sphere_mesh_first_vertex_is_north_pole() {
        let mesh = generate_sphere_mesh(0.8, 4, 8);
        let v = &mesh[0];
        assert!((v.position[0]).abs() < 1e-6);
        assert!((v.position[1] - 0.8).abs() < 1e-6);
        assert!((v.position[2]).abs() < 1e-6);
    }

    #[test]
    fn sphere_mesh_positions_on_radius() {
        let mesh = generate_sphere_mesh(0.8, 8, 8);
        for v in &mesh {
            let r = (v.position[0] * v.position[0]
                + v.position[1] * v.position[1]
                + v.position[2] * v.position[2])
                .sqrt();
            assert!((r - 0.8).abs() < 1e-5);
        }
    }

    #[test]
    fn sphere_mesh_normals_are_unit() {
        let mesh = generate_sphere_mesh(0.8, 8, 8);
        for v in &mesh {
            let len = (v.normal[0] * v.normal[0]
                + v.normal[1] * v.normal[1]
                + v.normal[2] * v.normal[2])
                .sqrt();
            assert!((len - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn sphere_mesh_minimum_clamp() {
        // n_lat < 2 and n_lon < 3 are clamped
        let mesh = generate_sphere_mesh(1.0, 1, 1);
        assert_eq!(mesh.len(), (2 * 3 * 6) as usize);
    }
}
