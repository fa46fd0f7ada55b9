//! Damped orbit/zoom controller with idle auto-rotation.
//!
//! Pointer drags orbit the camera around the scene origin in spherical
//! coordinates; scroll/pinch zooms the orbit distance. Rotation input
//! accumulates into a delta that is applied through an exponential damping
//! recurrence, so motion eases out after the pointer stops. While no drag
//! is active the azimuth slowly advances on its own.

use prism_config::schema::CameraConfig;
use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, MouseButton, MouseScrollDelta};

use super::PerspectiveCamera;

/// Keeps the polar angle away from the poles where look-at degenerates.
const POLAR_EPS: f32 = 1e-4;

/// Pixels of scroll treated as one zoom step.
const PIXELS_PER_ZOOM_STEP: f32 = 50.0;

pub struct OrbitController {
    // Configuration
    pub damping: f32,
    pub rotate_speed: f32,
    pub zoom_speed: f32,
    pub auto_rotate: bool,
    pub auto_rotate_speed: f32,
    /// Panning is permanently disabled; the flag documents the contract.
    pub enable_pan: bool,
    min_distance: f32,
    max_distance: f32,

    // Spherical state around the target
    azimuth: f32,
    polar: f32,
    distance: f32,

    // Pending input, consumed by `update`
    delta_azimuth: f32,
    delta_polar: f32,
    pending_zoom: f32,

    // Pointer state
    dragging: bool,
    last_cursor: Option<(f64, f64)>,
    viewport_height: f32,
}

impl OrbitController {
    /// Create a controller from config, adopting the camera's current
    /// position as the initial orbit.
    pub fn new(config: &CameraConfig, camera: &PerspectiveCamera) -> Self {
        let offset = [
            camera.position[0] - camera.target[0],
            camera.position[1] - camera.target[1],
            camera.position[2] - camera.target[2],
        ];
        let distance =
            (offset[0] * offset[0] + offset[1] * offset[1] + offset[2] * offset[2]).sqrt();
        let polar = (offset[1] / distance).acos();
        let azimuth = offset[0].atan2(offset[2]);

        Self {
            damping: config.damping as f32,
            rotate_speed: config.rotate_speed as f32,
            zoom_speed: config.zoom_speed as f32,
            auto_rotate: config.auto_rotate,
            auto_rotate_speed: config.auto_rotate_speed as f32,
            enable_pan: false,
            min_distance: config.min_distance as f32,
            max_distance: config.max_distance as f32,
            azimuth,
            polar,
            distance,
            delta_azimuth: 0.0,
            delta_polar: 0.0,
            pending_zoom: 1.0,
            dragging: false,
            last_cursor: None,
            viewport_height: 1.0,
        }
    }

    /// Tell the controller the surface height; drag distances are measured
    /// against it so a full-height drag is one revolution.
    pub fn set_viewport_height(&mut self, height: u32) {
        if height > 0 {
            self.viewport_height = height as f32;
        }
    }

    /// Left-button press starts a drag; release ends it.
    pub fn handle_mouse_button(&mut self, button: MouseButton, state: ElementState) {
        if button != MouseButton::Left {
            return;
        }
        match state {
            ElementState::Pressed => self.dragging = true,
            ElementState::Released => {
                self.dragging = false;
                self.last_cursor = None;
            }
        }
    }

    /// Cursor movement: rotates while a drag is active.
    pub fn handle_cursor_moved(&mut self, position: PhysicalPosition<f64>) {
        if !self.dragging {
            self.last_cursor = None;
            return;
        }
        if let Some((lx, ly)) = self.last_cursor {
            let dx = (position.x - lx) as f32;
            let dy = (position.y - ly) as f32;
            self.rotate_by(dx, dy);
        }
        self.last_cursor = Some((position.x, position.y));
    }

    /// Scroll wheel / pinch: zooms the orbit distance.
    pub fn handle_scroll(&mut self, delta: MouseScrollDelta) {
        let steps = match delta {
            MouseScrollDelta::LineDelta(_, y) => y,
            MouseScrollDelta::PixelDelta(pos) => pos.y as f32 / PIXELS_PER_ZOOM_STEP,
        };
        self.zoom_by(steps);
    }

    /// Accumulate a rotation from a pointer delta in pixels.
    pub fn rotate_by(&mut self, dx: f32, dy: f32) {
        let k = std::f32::consts::TAU * self.rotate_speed / self.viewport_height;
        self.delta_azimuth -= dx * k;
        self.delta_polar -= dy * k;
    }

    /// Accumulate a zoom; positive steps zoom in.
    pub fn zoom_by(&mut self, steps: f32) {
        self.pending_zoom *= 0.95f32.powf(self.zoom_speed * steps);
    }

    /// Whether a pointer drag is currently active.
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Current orbit distance.
    pub fn distance(&self) -> f32 {
        self.distance
    }

    /// Current azimuth angle in radians.
    pub fn azimuth(&self) -> f32 {
        self.azimuth
    }

    /// Advance the controller one frame and write the camera position.
    ///
    /// Must be called exactly once per animation frame before rendering:
    /// applies idle auto-rotation, the damping recurrence, and any pending
    /// zoom, then recomputes the camera eye from the spherical state.
    pub fn update(&mut self, camera: &mut PerspectiveCamera) {
        if self.auto_rotate && !self.dragging {
            self.delta_azimuth -= self.auto_rotate_angle();
        }

        self.azimuth += self.delta_azimuth * self.damping;
        self.polar += self.delta_polar * self.damping;
        self.polar = self
            .polar
            .clamp(POLAR_EPS, std::f32::consts::PI - POLAR_EPS);

        self.distance =
            (self.distance * self.pending_zoom).clamp(self.min_distance, self.max_distance);

        self.delta_azimuth *= 1.0 - self.damping;
        self.delta_polar *= 1.0 - self.damping;
        self.pending_zoom = 1.0;

        let sp = self.polar.sin();
        camera.position = [
            camera.target[0] + self.distance * sp * self.azimuth.sin(),
            camera.target[1] + self.distance * self.polar.cos(),
            camera.target[2] + self.distance * sp * self.azimuth.cos(),
        ];
    }

    /// Idle rotation per frame: speed 2.0 is one revolution per 30 s at
    /// 60 fps.
    fn auto_rotate_angle(&self) -> f32 {
        std::f32::consts::TAU / 60.0 / 60.0 * self.auto_rotate_speed
    }
}

// =============================================================================
// Tests
// =============================================================================
