//! The drifting shape population.
//!
//! Shapes are created once at startup and mutated every frame: a cumulative
//! positional drift (a slow random-walk wobble, intentionally unbounded),
//! a constant per-tick rotation, and pulsing material parameters.

use prism_common::Color;
use prism_config::schema::SceneConfig;
use rand::Rng;

use crate::geometry::GeometryKind;
use crate::material::GlassMaterial;
use crate::matrix::{self, Mat4};

/// Base colors cycled over the population, in assignment order.
pub const PALETTE: [Color; 6] = [
    Color::from_rgb(0xff, 0x00, 0x55), // hot pink
    Color::from_rgb(0x00, 0xff, 0xaa), // cyan
    Color::from_rgb(0xff, 0x99, 0x00), // orange
    Color::from_rgb(0xff, 0x00, 0xff), // magenta
    Color::from_rgb(0x00, 0xff, 0x00), // lime
    Color::from_rgb(0x00, 0xff, 0xff), // aqua
];

/// Emissive intensity the population is created with.
const SPAWN_EMISSIVE_INTENSITY: f32 = 0.4;

/// One animated mesh instance.
#[derive(Debug, Clone)]
pub struct Shape {
    pub kind: GeometryKind,
    pub material: GlassMaterial,
    pub position: [f32; 3],
    pub rotation_x: f32,
    pub rotation_y: f32,
    pub scale: f32,
}

impl Shape {
    /// Model matrix: translate × rotate_y × rotate_x × scale.
    pub fn model_matrix(&self) -> Mat4 {
        let t = matrix::translate(self.position[0], self.position[1], self.position[2]);
        let ry = matrix::rotate_y(self.rotation_y);
        let rx = matrix::rotate_x(self.rotation_x);
        let s = matrix::scale(self.scale);
        matrix::mul(&t, &matrix::mul(&ry, &matrix::mul(&rx, &s)))
    }
}

/// Owns the full shape population.
pub struct ShapePool {
    shapes: Vec<Shape>,
}

impl ShapePool {
    /// Populate the pool: deterministic kind/color cycling, randomized
    /// placement and scale.
    pub fn populate(config: &SceneConfig) -> Self {
        let mut rng = rand::thread_rng();
        let count = config.shape_count as usize;
        let spread = config.spread as f32;
        let spread_depth = config.spread_depth as f32;
        let scale_min = config.scale_min as f32;
        let scale_span = (config.scale_max - config.scale_min) as f32;

        let mut shapes = Vec::with_capacity(count);
        for i in 0..count {
            let kind = GeometryKind::CATALOGUE[i % GeometryKind::CATALOGUE.len()];
            let color = PALETTE[i % PALETTE.len()];

            shapes.push(Shape {
                kind,
                material: GlassMaterial::new(color, SPAWN_EMISSIVE_INTENSITY),
                position: [
                    (rng.gen::<f32>() - 0.5) * spread,
                    (rng.gen::<f32>() - 0.5) * spread,
                    (rng.gen::<f32>() - 0.5) * spread_depth,
                ],
                rotation_x: 0.0,
                rotation_y: 0.0,
                scale: scale_min + rng.gen::<f32>() * scale_span,
            });
        }

        Self { shapes }
    }

    /// Advance every shape to time `t`.
    ///
    /// The positional term accumulates (`+=` of a function of t), so the
    /// drift is a running integral, not an absolute offset.
    pub fn update(&mut self, t: f32) {
        for (i, shape) in self.shapes.iter_mut().enumerate() {
            let phase = i as f32;

            shape.position[1] += (t * 2.0 + phase).sin() * 0.01;
            shape.position[0] += (t * 2.0 + phase).cos() * 0.005;

            shape.rotation_x += 0.001;
            shape.rotation_y += 0.001;

            shape.material.emissive_intensity = 0.4 + (t * 3.0 + phase).sin() * 0.2;
            shape.material.transmission = 0.85 + (t * 2.0 + phase).sin() * 0.1;
        }
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn pool() -> ShapePool {
        ShapePool::populate(&SceneConfig::default())
    }

    #[test]
    fn populate_creates_twenty_shapes() {
        assert_eq!(pool().len(), 20);
    }

    #[test]
    fn kind_assignment_cycles_catalogue() {
        let pool = pool();
        for (i, shape) in pool.shapes().iter().enumerate() {
            assert_eq!(shape.kind, GeometryKind::CATALOGUE[i % 6]);
        }
    }

    #[test]
    fn color_assignment_cycles_palette() {
        let pool = pool();
        for (i, shape) in pool.shapes().iter().enumerate() {
            let expected = PALETTE[i % 6].to_linear_f32();
            assert_eq!(shape.material.color, expected);
        }
    }

    #[test]
    fn spawn_positions_inside_bounding_box() {
        // Statistical bound only: placement is unseeded.
        let pool = pool();
        for shape in pool.shapes() {
            assert!(shape.position[0].abs() <= 15.0);
            assert!(shape.position[1].abs() <= 15.0);
            assert!(shape.position[2].abs() <= 7.5);
        }
    }

    #[test]
    fn spawn_scales_in_range() {
        let pool = pool();
        for shape in pool.shapes() {
            assert!(shape.scale >= 1.0);
            assert!(shape.scale < 2.0);
        }
    }

    #[test]
    fn emissive_intensity_formula_at_t_zero() {
        let mut pool = pool();
        pool.update(0.0);
        // Shape 0 at t = 0: 0.4 + sin(0) * 0.2 = 0.4 exactly
        assert!((pool.shapes()[0].material.emissive_intensity - 0.4).abs() < 1e-6);
        // Shape 1 at t = 0: 0.4 + sin(1) * 0.2
        let expected = 0.4 + 1.0f32.sin() * 0.2;
        assert!((pool.shapes()[1].material.emissive_intensity - expected).abs() < 1e-6);
    }

    #[test]
    fn pulsing_stays_bounded_over_long_run() {
        let mut pool = pool();
        let mut t = 0.0f32;
        for _ in 0..10_000 {
            t += 0.003;
            pool.update(t);
            // One ulp of slack: the band edges are not exactly
            // representable in f32.
            for shape in pool.shapes() {
                let e = shape.material.emissive_intensity;
                let tr = shape.material.transmission;
                assert!(e >= 0.2 - 1e-6 && e <= 0.6 + 1e-6, "emissive {e} out of bounds");
                assert!(
                    tr >= 0.75 - 1e-6 && tr <= 0.95 + 1e-6,
                    "transmission {tr} out of bounds"
                );
            }
        }
    }

    #[test]
    fn rotation_accumulates_per_tick() {
        let mut pool = pool();
        pool.update(0.003);
        pool.update(0.006);
        for shape in pool.shapes() {
            assert!((shape.rotation_x - 0.002).abs() < 1e-6);
            assert!((shape.rotation_y - 0.002).abs() < 1e-6);
        }
    }

    #[test]
    fn drift_is_cumulative_not_absolute() {
        let mut pool = pool();
        let start_y = pool.shapes()[0].position[1];

        // Two updates at the same t must move twice, because the offset
        // accumulates rather than being a function of t.
        let delta = (0.1f32 * 2.0).sin() * 0.01;
        pool.update(0.1);
        pool.update(0.1);
        let moved = pool.shapes()[0].position[1] - start_y;
        assert!((moved - 2.0 * delta).abs() < 1e-6);
    }

    #[test]
    fn model_matrix_places_shape_at_position() {
        let shape = Shape {
            kind: GeometryKind::Sphere,
            material: GlassMaterial::with_color(PALETTE[0]),
            position: [3.0, -2.0, 5.0],
            rotation_x: 0.3,
            rotation_y: 0.7,
            scale: 1.5,
        };
        let m = shape.model_matrix();
        // Translation lives in column 3
        assert!((m[12] - 3.0).abs() < 1e-6);
        assert!((m[13] - (-2.0)).abs() < 1e-6);
        assert!((m[14] - 5.0).abs() < 1e-6);
    }

    #[test]
    fn custom_shape_count_respected() {
        let mut config = SceneConfig::default();
        config.shape_count = 7;
        let pool = ShapePool::populate(&config);
        assert_eq!(pool.len(), 7);
    }
}
