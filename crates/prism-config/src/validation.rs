//! Full configuration validation.
//!
//! Validates all numeric ranges and color formats, collecting every error
//! before reporting.

use crate::schema::PrismConfig;
use prism_common::{Color, ConfigError};

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &PrismConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    // Window constraints
    validate_range(&mut errors, "window.width", config.window.width, 1, 16384);
    validate_range(&mut errors, "window.height", config.window.height, 1, 16384);
    validate_range_f64(
        &mut errors,
        "window.pixel_ratio_limit",
        config.window.pixel_ratio_limit,
        0.5,
        4.0,
    );

    // Scene constraints
    validate_range(&mut errors, "scene.shape_count", config.scene.shape_count, 1, 256);
    validate_range_f64(&mut errors, "scene.spread", config.scene.spread, 1.0, 500.0);
    validate_range_f64(
        &mut errors,
        "scene.spread_depth",
        config.scene.spread_depth,
        1.0,
        500.0,
    );
    validate_range_f64(&mut errors, "scene.scale_min", config.scene.scale_min, 0.1, 10.0);
    validate_range_f64(&mut errors, "scene.scale_max", config.scene.scale_max, 0.1, 10.0);
    if config.scene.scale_min >= config.scene.scale_max {
        errors.push(format!(
            "scene.scale_min ({}) must be less than scene.scale_max ({})",
            config.scene.scale_min, config.scene.scale_max
        ));
    }
    validate_range_f64(&mut errors, "scene.fog_density", config.scene.fog_density, 0.0, 1.0);
    if Color::from_hex(&config.scene.background).is_none() {
        errors.push(format!(
            "scene.background ({:?}) is not a valid #rrggbb color",
            config.scene.background
        ));
    }

    // Camera constraints
    validate_range_f64(
        &mut errors,
        "camera.fov_degrees",
        config.camera.fov_degrees,
        10.0,
        120.0,
    );
    if config.camera.near <= 0.0 {
        errors.push(format!("camera.near ({}) must be > 0", config.camera.near));
    }
    if config.camera.far <= config.camera.near {
        errors.push(format!(
            "camera.far ({}) must be greater than camera.near ({})",
            config.camera.far, config.camera.near
        ));
    }
    validate_range_f64(&mut errors, "camera.damping", config.camera.damping, 0.001, 1.0);
    validate_range_f64(
        &mut errors,
        "camera.rotate_speed",
        config.camera.rotate_speed,
        0.0,
        10.0,
    );
    validate_range_f64(&mut errors, "camera.pan_speed", config.camera.pan_speed, 0.0, 10.0);
    validate_range_f64(&mut errors, "camera.zoom_speed", config.camera.zoom_speed, 0.0, 10.0);
    validate_range_f64(
        &mut errors,
        "camera.auto_rotate_speed",
        config.camera.auto_rotate_speed,
        0.0,
        10.0,
    );
    if config.camera.min_distance <= 0.0 {
        errors.push(format!(
            "camera.min_distance ({}) must be > 0",
            config.camera.min_distance
        ));
    }
    if config.camera.max_distance <= config.camera.min_distance {
        errors.push(format!(
            "camera.max_distance ({}) must be greater than camera.min_distance ({})",
            config.camera.max_distance, config.camera.min_distance
        ));
    }

    // Bloom constraints
    validate_range_f64(&mut errors, "bloom.strength", config.bloom.strength, 0.0, 5.0);
    validate_range_f64(&mut errors, "bloom.radius", config.bloom.radius, 0.0, 1.0);
    validate_range_f64(&mut errors, "bloom.threshold", config.bloom.threshold, 0.0, 1.0);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

fn validate_range(errors: &mut Vec<String>, field: &str, value: u32, min: u32, max: u32) {
    if value < min || value > max {
        errors.push(format!("{field} ({value}) must be between {min} and {max}"));
    }
}

fn validate_range_f64(errors: &mut Vec<String>, field: &str, value: f64, min: f64, max: f64) {
    if value < min || value > max {
        errors.push(format!("{field} ({value}) must be between {min} and {max}"));
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(validate(&PrismConfig::default()).is_ok());
    }

    #[test]
    fn zero_sized_window_rejected() {
        let mut config = PrismConfig::default();
        config.window.width = 0;
        let err = validate(&config).unwrap_err();
        assert!(err.to_string().contains("window.width"));
    }

    #[test]
    fn bloom_strength_out_of_range_rejected() {
        let mut config = PrismConfig::default();
        config.bloom.strength = 9.0;
        let err = validate(&config).unwrap_err();
        assert!(err.to_string().contains("bloom.strength"));
    }

    #[test]
    fn scale_min_must_be_below_scale_max() {
        let mut config = PrismConfig::default();
        config.scene.scale_min = 3.0;
        config.scene.scale_max = 2.0;
        let err = validate(&config).unwrap_err();
        assert!(err.to_string().contains("scale_min"));
    }

    #[test]
    fn invalid_background_color_rejected() {
        let mut config = PrismConfig::default();
        config.scene.background = "not-a-color".into();
        let err = validate(&config).unwrap_err();
        assert!(err.to_string().contains("scene.background"));
    }

    #[test]
    fn inverted_clip_planes_rejected() {
        let mut config = PrismConfig::default();
        config.camera.far = 0.05;
        let err = validate(&config).unwrap_err();
        assert!(err.to_string().contains("camera.far"));
    }

    #[test]
    fn inverted_zoom_bounds_rejected() {
        let mut config = PrismConfig::default();
        config.camera.max_distance = 1.0;
        let err = validate(&config).unwrap_err();
        assert!(err.to_string().contains("camera.max_distance"));
    }

    #[test]
    fn multiple_errors_collected() {
        let mut config = PrismConfig::default();
        config.window.width = 0;
        config.bloom.radius = 7.0;
        let err = validate(&config).unwrap_err();
        let text = err.to_string();
        assert!(text.contains("window.width"));
        assert!(text.contains("bloom.radius"));
    }
}
