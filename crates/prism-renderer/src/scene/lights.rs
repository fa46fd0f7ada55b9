//! Ambient fill plus three orbiting colored spot lights.
//!
//! The three spots start 120° apart on a ring of radius 15 and orbit with
//! time; their intensity pulses around a base of 300. All of them aim at
//! the scene origin.

use prism_common::Color;

/// Ring radius the spots orbit on.
const ORBIT_RADIUS: f32 = 15.0;
/// Depth offset applied to the orbit (initial z, later added to sin·r).
const ORBIT_Z: f32 = 10.0;
/// Base intensity the pulse oscillates around.
const BASE_INTENSITY: f32 = 300.0;

/// Spot colors, in rig order.
const SPOT_COLORS: [Color; 3] = [
    Color::from_rgb(0x4a, 0x9e, 0xff), // blue
    Color::from_rgb(0xff, 0x1b, 0x6b), // pink
    Color::from_rgb(0x00, 0xff, 0x88), // green
];

/// Constant white fill light. Created once, never mutated.
#[derive(Debug, Clone, Copy)]
pub struct AmbientLight {
    pub color: [f32; 3],
    pub intensity: f32,
}

/// One orbiting spot light aimed at the origin.
#[derive(Debug, Clone, Copy)]
pub struct SpotLight {
    pub color: [f32; 3],
    pub position: [f32; 3],
    pub intensity: f32,
    /// Full cone half-angle in radians.
    pub angle: f32,
    /// Fraction of the cone softened at the edge (0 = hard edge).
    pub penumbra: f32,
    /// Falloff exponent with distance.
    pub decay: f32,
    /// Maximum reach; no contribution beyond this distance.
    pub distance: f32,
}

/// The full light rig: ambient fill + three orbiting spots.
pub struct LightRig {
    pub ambient: AmbientLight,
    pub spots: [SpotLight; 3],
}

impl LightRig {
    pub fn new() -> Self {
        let spots = std::array::from_fn(|i| {
            let angle = i as f32 * std::f32::consts::TAU / 3.0;
            SpotLight {
                color: SPOT_COLORS[i].to_linear_f32(),
                position: [
                    angle.cos() * ORBIT_RADIUS,
                    angle.sin() * ORBIT_RADIUS,
                    ORBIT_Z,
                ],
                intensity: BASE_INTENSITY,
                angle: std::f32::consts::FRAC_PI_3,
                penumbra: 0.2,
                decay: 1.5,
                distance: 50.0,
            }
        });

        Self {
            ambient: AmbientLight {
                color: [1.0, 1.0, 1.0],
                intensity: 0.6,
            },
            spots,
        }
    }

    /// Advance the rig to time `t`: orbit in the x/z plane and pulse the
    /// intensity. The y coordinate keeps its spawn value.
    pub fn update(&mut self, t: f32) {
        for (i, spot) in self.spots.iter_mut().enumerate() {
            let phase = i as f32;
            let angle = t + phase * std::f32::consts::TAU / 3.0;

            spot.position[0] = angle.cos() * ORBIT_RADIUS;
            spot.position[2] = angle.sin() * ORBIT_RADIUS + ORBIT_Z;
            spot.intensity = BASE_INTENSITY + (t * 4.0 + phase).sin() * 100.0;
        }
    }
}

impl Default for LightRig {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Tests
// =============================================================================
