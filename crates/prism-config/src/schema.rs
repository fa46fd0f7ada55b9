//! Configuration schema types for prism.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Defaults match the reference scene tuning; override only what you need.

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

// =============================================================================
// Window Config
// =============================================================================

/// Host window configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window title.
    pub title: String,
    /// Initial logical width in pixels (valid range: 1-16384).
    pub width: u32,
    /// Initial logical height in pixels (valid range: 1-16384).
    pub height: u32,
    /// Upper bound on the device pixel ratio (valid range: 0.5-4.0).
    ///
    /// High-DPI displays report ratios of 2 or 3; capping keeps the
    /// offscreen bloom buffers from quadrupling in size.
    pub pixel_ratio_limit: f64,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "prism".into(),
            width: 1280,
            height: 800,
            pixel_ratio_limit: 2.0,
        }
    }
}

// =============================================================================
// Scene Config
// =============================================================================

/// Shape population and atmosphere configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Number of drifting shapes (valid range: 1-256).
    pub shape_count: u32,
    /// Total horizontal/vertical placement spread (valid range: 1.0-500.0).
    pub spread: f64,
    /// Total depth placement spread (valid range: 1.0-500.0).
    pub spread_depth: f64,
    /// Minimum uniform shape scale (valid range: 0.1-10.0).
    pub scale_min: f64,
    /// Maximum uniform shape scale (valid range: 0.1-10.0, > scale_min).
    pub scale_max: f64,
    /// Background / fog color as `#rrggbb`.
    pub background: String,
    /// Exponential-squared fog density (valid range: 0.0-1.0).
    pub fog_density: f64,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            shape_count: 20,
            spread: 30.0,
            spread_depth: 15.0,
            scale_min: 1.0,
            scale_max: 2.0,
            background: "#121212".into(),
            fog_density: 0.015,
        }
    }
}

// =============================================================================
// Camera Config
// =============================================================================

/// Perspective camera and orbit controller configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Vertical field of view in degrees (valid range: 10.0-120.0).
    pub fov_degrees: f64,
    /// Near clip plane (must be > 0).
    pub near: f64,
    /// Far clip plane (must be > near).
    pub far: f64,
    /// Orbit damping factor per frame (valid range: 0.001-1.0).
    pub damping: f64,
    /// Pointer-drag rotation speed multiplier (valid range: 0.0-10.0).
    pub rotate_speed: f64,
    /// Pan speed multiplier (valid range: 0.0-10.0). Panning is disabled
    /// by the controller; the value is kept for config compatibility.
    pub pan_speed: f64,
    /// Scroll/pinch zoom speed multiplier (valid range: 0.0-10.0).
    pub zoom_speed: f64,
    /// Whether the camera slowly orbits while idle.
    pub auto_rotate: bool,
    /// Idle orbit speed; 2.0 ≈ one revolution per 30 s at 60 fps
    /// (valid range: 0.0-10.0).
    pub auto_rotate_speed: f64,
    /// Closest allowed orbit distance (valid range: > 0, < max_distance).
    pub min_distance: f64,
    /// Farthest allowed orbit distance.
    pub max_distance: f64,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_degrees: 75.0,
            near: 0.1,
            far: 1000.0,
            damping: 0.05,
            rotate_speed: 0.8,
            pan_speed: 0.8,
            zoom_speed: 0.8,
            auto_rotate: true,
            auto_rotate_speed: 0.5,
            min_distance: 2.0,
            max_distance: 100.0,
        }
    }
}

// =============================================================================
// Bloom Config
// =============================================================================

/// Bloom post-process configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BloomConfig {
    /// Whether the bloom pass runs at all.
    pub enabled: bool,
    /// Bloom contribution at composite time (valid range: 0.0-5.0).
    pub strength: f64,
    /// Blur kernel spread (valid range: 0.0-1.0).
    pub radius: f64,
    /// Luminance threshold below which pixels do not bloom
    /// (valid range: 0.0-1.0).
    pub threshold: f64,
}

impl Default for BloomConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            strength: 1.5,
            radius: 0.4,
            threshold: 0.85,
        }
    }
}

// =============================================================================
// Logging Config
// =============================================================================

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default tracing filter directive, e.g. `prism=info`.
    pub level: String,
    /// Log the rolling fps once per interval (0 disables).
    pub fps_interval_secs: u32,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "prism=info".into(),
            fps_interval_secs: 5,
        }
    }
}

// =============================================================================
// Root Config
// =============================================================================

/// Root configuration object.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PrismConfig {
    pub window: WindowConfig,
    pub scene: SceneConfig,
    pub camera: CameraConfig,
    pub bloom: BloomConfig,
    pub logging: LoggingConfig,
}

// =============================================================================
// Tests
// =============================================================================
