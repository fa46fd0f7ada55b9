//! Translucent emissive material used by every shape.
//!
//! The parameter set mirrors a physically-based glass: fixed surface
//! response, per-instance color and emissive intensity. One instance per
//! shape; the animation loop pulses `emissive_intensity` and `transmission`
//! every frame.

use prism_common::Color;

/// Material parameters for one glass shape.
///
/// Colors are stored in linear space, ready for GPU upload.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlassMaterial {
    pub color: [f32; 3],
    pub metalness: f32,
    pub roughness: f32,
    pub transmission: f32,
    pub thickness: f32,
    pub env_map_intensity: f32,
    pub clearcoat: f32,
    pub clearcoat_roughness: f32,
    pub ior: f32,
    pub emissive: [f32; 3],
    pub emissive_intensity: f32,
}

impl GlassMaterial {
    /// Emissive intensity used when none is given.
    pub const DEFAULT_EMISSIVE_INTENSITY: f32 = 0.3;

    /// Build a glass material from a base color and emissive intensity.
    ///
    /// The emissive color always equals the base color; everything else is
    /// the fixed glass response.
    pub fn new(color: Color, emissive_intensity: f32) -> Self {
        let linear = color.to_linear_f32();
        Self {
            color: linear,
            metalness: 0.2,
            roughness: 0.15,
            transmission: 0.85,
            thickness: 0.5,
            env_map_intensity: 1.5,
            clearcoat: 1.0,
            clearcoat_roughness: 0.1,
            ior: 1.5,
            emissive: linear,
            emissive_intensity,
        }
    }

    /// Build a glass material with the default emissive intensity.
    pub fn with_color(color: Color) -> Self {
        Self::new(color, Self::DEFAULT_EMISSIVE_INTENSITY)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glass_material_fixed_parameters() {
        let m = GlassMaterial::new(Color::from_rgb(255, 0, 85), 0.4);
        assert!((m.metalness - 0.2).abs() < f32::EPSILON);
        assert!((m.roughness - 0.15).abs() < f32::EPSILON);
        assert!((m.transmission - 0.85).abs() < f32::EPSILON);
        assert!((m.thickness - 0.5).abs() < f32::EPSILON);
        assert!((m.env_map_intensity - 1.5).abs() < f32::EPSILON);
        assert!((m.clearcoat - 1.0).abs() < f32::EPSILON);
        assert!((m.clearcoat_roughness - 0.1).abs() < f32::EPSILON);
        assert!((m.ior - 1.5).abs() < f32::EPSILON);
        assert!((m.emissive_intensity - 0.4).abs() < f32::EPSILON);
    }

    #[test]
    fn emissive_equals_base_color() {
        let m = GlassMaterial::new(Color::from_rgb(0, 255, 170), 0.4);
        assert_eq!(m.color, m.emissive);
    }

    #[test]
    fn with_color_uses_default_intensity() {
        let m = GlassMaterial::with_color(Color::from_rgb(255, 153, 0));
        assert!((m.emissive_intensity - 0.3).abs() < f32::EPSILON);
    }

    #[test]
    fn color_is_linearized() {
        // Full red survives linearization exactly
        let m = GlassMaterial::with_color(Color::from_rgb(255, 0, 0));
        assert!((m.color[0] - 1.0).abs() < 1e-6);
        assert!(m.color[1].abs() < 1e-6);
    }
}
