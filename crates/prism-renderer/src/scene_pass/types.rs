//! GPU uniform blocks for the scene pass.
//!
//! `SceneUniforms` is uploaded once per frame; `ShapeUniforms` once per
//! shape into a single dynamic-offset buffer. Layouts match the WGSL
//! structs byte for byte.

use crate::camera::PerspectiveCamera;
use crate::material::GlassMaterial;
use crate::scene::{LightRig, Shape, SpotLight};

/// Stride between per-shape uniform blocks in the shared buffer.
///
/// Matches wgpu's default `min_uniform_buffer_offset_alignment`.
pub const SHAPE_UNIFORM_STRIDE: u64 = 256;

/// One spot light as the shader sees it.
///
/// Layout: 3 × vec4 = 48 bytes.
#[repr(C)]
#[derive(Debug, Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SpotLightUniform {
    /// World position (xyz) + unused w.
    pub position: [f32; 4],
    /// Linear color (rgb) + intensity.
    pub color: [f32; 4],
    /// cos(outer angle), cos(inner angle), decay exponent, max distance.
    pub cone: [f32; 4],
}

impl SpotLightUniform {
    pub fn from_light(light: &SpotLight) -> Self {
        Self {
            position: [light.position[0], light.position[1], light.position[2], 0.0],
            color: [light.color[0], light.color[1], light.color[2], light.intensity],
            cone: [
                light.angle.cos(),
                (light.angle * (1.0 - light.penumbra)).cos(),
                light.decay,
                light.distance,
            ],
        }
    }
}

/// Frame-wide uniforms: camera, fog, and the light rig.
///
/// Layout: 64 + 16 + 16 + 16 + 3 × 48 = 256 bytes.
#[repr(C)]
#[derive(Debug, Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SceneUniforms {
    /// Projection × view matrix (column-major).
    pub view_proj: [f32; 16],
    /// Camera world position (xyz) + unused w.
    pub camera_pos: [f32; 4],
    /// Fog color (rgb) + exp² density.
    pub fog: [f32; 4],
    /// Ambient color (rgb) + intensity.
    pub ambient: [f32; 4],
    /// The three orbiting spots.
    pub lights: [SpotLightUniform; 3],
}

impl SceneUniforms {
    pub fn new(
        camera: &PerspectiveCamera,
        rig: &LightRig,
        fog_color: [f32; 3],
        fog_density: f32,
    ) -> Self {
        Self {
            view_proj: camera.view_projection(),
            camera_pos: [
                camera.position[0],
                camera.position[1],
                camera.position[2],
                0.0,
            ],
            fog: [fog_color[0], fog_color[1], fog_color[2], fog_density],
            ambient: [
                rig.ambient.color[0],
                rig.ambient.color[1],
                rig.ambient.color[2],
                rig.ambient.intensity,
            ],
            lights: [
                SpotLightUniform::from_light(&rig.spots[0]),
                SpotLightUniform::from_light(&rig.spots[1]),
                SpotLightUniform::from_light(&rig.spots[2]),
            ],
        }
    }
}

/// Per-shape uniforms: model transform + material.
///
/// Layout: 64 + 4 × 16 = 128 bytes (padded to
/// [`SHAPE_UNIFORM_STRIDE`] inside the shared buffer).
#[repr(C)]
#[derive(Debug, Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ShapeUniforms {
    /// Model matrix (column-major).
    pub model: [f32; 16],
    /// Base color (rgb) + unused w.
    pub color: [f32; 4],
    /// Emissive color (rgb) + emissive intensity.
    pub emissive: [f32; 4],
    /// metalness, roughness, transmission, clearcoat.
    pub params: [f32; 4],
    /// clearcoat roughness, ior, thickness, env-map intensity.
    pub params2: [f32; 4],
}

impl ShapeUniforms {
    pub fn from_shape(shape: &Shape) -> Self {
        let m: &GlassMaterial = &shape.material;
        Self {
            model: shape.model_matrix(),
            color: [m.color[0], m.color[1], m.color[2], 0.0],
            emissive: [
                m.emissive[0],
                m.emissive[1],
                m.emissive[2],
                m.emissive_intensity,
            ],
            params: [m.metalness, m.roughness, m.transmission, m.clearcoat],
            params2: [
                m.clearcoat_roughness,
                m.ior,
                m.thickness,
                m.env_map_intensity,
            ],
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use prism_config::schema::{CameraConfig, SceneConfig};

    use crate::scene::ShapePool;

    #[test]
    fn spot_light_uniform_size_is_48_bytes() {
        assert_eq!(std::mem::size_of::<SpotLightUniform>(), 48);
    }

    #[test]
    fn scene_uniforms_size_is_256_bytes() {
        assert_eq!(std::mem::size_of::<SceneUniforms>(), 256);
    }

    #[test]
    fn shape_uniforms_size_is_128_bytes() {
        assert_eq!(std::mem::size_of::<ShapeUniforms>(), 128);
    }

    #[test]
    fn shape_uniforms_fit_the_stride() {
        assert!(std::mem::size_of::<ShapeUniforms>() as u64 <= SHAPE_UNIFORM_STRIDE);
    }

    #[test]
    fn spot_cone_precomputes_cosines() {
        let rig = LightRig::new();
        let u = SpotLightUniform::from_light(&rig.spots[0]);
        let angle = std::f32::consts::FRAC_PI_3;
        assert!((u.cone[0] - angle.cos()).abs() < 1e-6);
        assert!((u.cone[1] - (angle * 0.8).cos()).abs() < 1e-6);
        // Inner cone is tighter, so its cosine is larger
        assert!(u.cone[1] > u.cone[0]);
        assert!((u.cone[2] - 1.5).abs() < 1e-6);
        assert!((u.cone[3] - 50.0).abs() < 1e-6);
    }

    #[test]
    fn scene_uniforms_capture_camera_and_fog() {
        let camera = PerspectiveCamera::from_config(&CameraConfig::default(), 1.5);
        let rig = LightRig::new();
        let u = SceneUniforms::new(&camera, &rig, [0.05, 0.05, 0.05], 0.015);
        assert_eq!(u.camera_pos[..3], camera.position);
        assert!((u.fog[3] - 0.015).abs() < 1e-6);
        assert!((u.ambient[3] - 0.6).abs() < 1e-6);
    }

    #[test]
    fn shape_uniforms_carry_pulsing_material_state() {
        let mut pool = ShapePool::populate(&SceneConfig::default());
        pool.update(1.0);
        let shape = &pool.shapes()[0];
        let u = ShapeUniforms::from_shape(shape);
        assert!((u.emissive[3] - shape.material.emissive_intensity).abs() < 1e-6);
        assert!((u.params[2] - shape.material.transmission).abs() < 1e-6);
    }

    #[test]
    fn bytemuck_cast_works() {
        let camera = PerspectiveCamera::from_config(&CameraConfig::default(), 1.0);
        let rig = LightRig::new();
        let u = SceneUniforms::new(&camera, &rig, [0.0; 3], 0.0);
        assert_eq!(bytemuck::bytes_of(&u).len(), 256);
    }
}
