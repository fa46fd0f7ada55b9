//! Perspective camera and the pointer-driven orbit controller.

mod controller;

pub use controller::OrbitController;

use prism_config::schema::CameraConfig;

use crate::matrix::{self, Mat4};

/// A perspective camera looking at a fixed target.
///
/// Invariant: `aspect` always equals surface width / height; resize
/// handling restores it before the next frame renders.
#[derive(Debug, Clone)]
pub struct PerspectiveCamera {
    pub fov_y: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    pub position: [f32; 3],
    pub target: [f32; 3],
}

impl PerspectiveCamera {
    /// Create the camera from config with the given surface aspect ratio.
    pub fn from_config(config: &CameraConfig, aspect: f32) -> Self {
        Self {
            fov_y: (config.fov_degrees as f32).to_radians(),
            aspect,
            near: config.near as f32,
            far: config.far as f32,
            position: [0.0, 2.0, 20.0],
            target: [0.0, 0.0, 0.0],
        }
    }

    /// Update the aspect ratio after a surface resize.
    pub fn set_aspect(&mut self, width: u32, height: u32) {
        if height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }

    pub fn projection_matrix(&self) -> Mat4 {
        matrix::perspective(self.fov_y, self.aspect, self.near, self.far)
    }

    pub fn view_matrix(&self) -> Mat4 {
        matrix::look_at(self.position, self.target, [0.0, 1.0, 0.0])
    }

    /// Combined projection × view matrix for uniform upload.
    pub fn view_projection(&self) -> Mat4 {
        matrix::mul(&self.projection_matrix(), &self.view_matrix())
    }
}

// =============================================================================
// Tests
// =============================================================================
