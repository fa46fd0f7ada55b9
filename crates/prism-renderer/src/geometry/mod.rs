//! Procedural geometry: the shape catalogue and its mesh generators.
//!
//! All six kinds are generated once at startup and packed into a single
//! shared vertex buffer; each kind maps to a contiguous vertex range.

mod platonic;
mod sphere;
mod torus_knot;
mod types;
mod util;

pub use types::{MeshRange, MeshVertex};

/// The fixed geometry catalogue, in assignment order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryKind {
    TorusKnot,
    Icosahedron,
    Octahedron,
    Dodecahedron,
    Tetrahedron,
    Sphere,
}

impl GeometryKind {
    /// Catalogue order — shape i gets `CATALOGUE[i % CATALOGUE.len()]`.
    pub const CATALOGUE: [GeometryKind; 6] = [
        GeometryKind::TorusKnot,
        GeometryKind::Icosahedron,
        GeometryKind::Octahedron,
        GeometryKind::Dodecahedron,
        GeometryKind::Tetrahedron,
        GeometryKind::Sphere,
    ];

    /// Index into the catalogue (and into `GeometryCatalogue::ranges`).
    pub fn index(self) -> usize {
        match self {
            GeometryKind::TorusKnot => 0,
            GeometryKind::Icosahedron => 1,
            GeometryKind::Octahedron => 2,
            GeometryKind::Dodecahedron => 3,
            GeometryKind::Tetrahedron => 4,
            GeometryKind::Sphere => 5,
        }
    }

    /// Generate the mesh for this kind with its reference parameters.
    pub fn generate(self) -> Vec<MeshVertex> {
        match self {
            GeometryKind::TorusKnot => torus_knot::generate_torus_knot(1.0, 0.3, 100, 16),
            GeometryKind::Icosahedron => platonic::generate_icosahedron(),
            GeometryKind::Octahedron => platonic::generate_octahedron(),
            GeometryKind::Dodecahedron => platonic::generate_dodecahedron(),
            GeometryKind::Tetrahedron => platonic::generate_tetrahedron(),
            GeometryKind::Sphere => sphere::generate_sphere_mesh(0.8, 32, 32),
        }
    }
}

/// All catalogue meshes packed into one vertex array.
pub struct GeometryCatalogue {
    pub vertices: Vec<MeshVertex>,
    pub ranges: [MeshRange; 6],
}

impl GeometryCatalogue {
    /// Generate and pack every catalogue mesh.
    pub fn build() -> Self {
        let mut vertices = Vec::new();
        let mut ranges = [MeshRange { first: 0, count: 0 }; 6];

        for kind in GeometryKind::CATALOGUE {
            let mesh = kind.generate();
            ranges[kind.index()] = MeshRange {
                first: vertices.len() as u32,
                count: mesh.len() as u32,
            };
            vertices.extend(mesh);
        }

        Self { vertices, ranges }
    }

    /// Vertex range for one geometry kind.
    pub fn range(&self, kind: GeometryKind) -> MeshRange {
        self.ranges[kind.index()]
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalogue_has_six_kinds() {
        assert_eq!(GeometryKind::CATALOGUE.len(), 6);
    }

    #[test]
    fn catalogue_indices_match_order() {
        for (i, kind) in GeometryKind::CATALOGUE.iter().enumerate() {
            assert_eq!(kind.index(), i);
        }
    }

    #[test]
    fn packed_ranges_are_contiguous() {
        let catalogue = GeometryCatalogue::build();
        let mut expected_first = 0u32;
        for kind in GeometryKind::CATALOGUE {
            let r = catalogue.range(kind);
            assert_eq!(r.first, expected_first);
            assert!(r.count > 0);
            expected_first += r.count;
        }
        assert_eq!(expected_first as usize, catalogue.vertices.len());
    }

    #[test]
    fn packed_counts_match_generators() {
        let catalogue = GeometryCatalogue::build();
        assert_eq!(
            catalogue.range(GeometryKind::TorusKnot).count,
            100 * 16 * 6
        );
        assert_eq!(catalogue.range(GeometryKind::Icosahedron).count, 20 * 3);
        assert_eq!(catalogue.range(GeometryKind::Octahedron).count, 8 * 3);
        assert_eq!(catalogue.range(GeometryKind::Dodecahedron).count, 36 * 3);
        assert_eq!(catalogue.range(GeometryKind::Tetrahedron).count, 4 * 3);
        assert_eq!(catalogue.range(GeometryKind::Sphere).count, 32 * 32 * 6);
    }
}
