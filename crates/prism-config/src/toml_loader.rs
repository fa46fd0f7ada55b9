//! TOML config file loading and creation.

use crate::schema::PrismConfig;
use crate::validation;
use prism_common::ConfigError;
use std::path::Path;
use tracing::{info, warn};

/// Load config from a specific TOML file path.
///
/// Deserializes the file using serde defaults for any missing fields.
/// After loading, the config is validated; if validation fails, a warning
/// is logged and the default config is returned.
pub fn load_from_path(path: &Path) -> Result<PrismConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;

    let config: PrismConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    // Validate and warn on errors, but still return a usable config
    if let Err(e) = validation::validate(&config) {
        warn!("config validation warning: {e}");
        warn!("falling back to default config");
        return Ok(PrismConfig::default());
    }

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load config from the platform-specific default path.
///
/// On macOS: `~/Library/Application Support/prism/config.toml`
/// On Linux: `~/.config/prism/config.toml`
///
/// If the file does not exist, creates a default config file and returns defaults.
pub fn load_default() -> Result<PrismConfig, ConfigError> {
    let path = default_config_path()?;

    if !path.exists() {
        info!("no config found at {}, creating default", path.display());
        create_default_config(&path)?;
        return Ok(PrismConfig::default());
    }

    load_from_path(&path)
}

/// Get the platform-specific default config file path.
pub fn default_config_path() -> Result<std::path::PathBuf, ConfigError> {
    let config_dir = dirs::config_dir()
        .ok_or_else(|| ConfigError::ParseError("could not determine config directory".into()))?;
    Ok(config_dir.join("prism").join("config.toml"))
}

/// Create a default TOML config file with documentation comments.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            ConfigError::ParseError(format!(
                "failed to create config directory {}: {e}",
                parent.display()
            ))
        })?;
    }

    let content = default_config_toml();

    std::fs::write(path, content).map_err(|e| {
        ConfigError::ParseError(format!(
            "failed to write default config to {}: {e}",
            path.display()
        ))
    })?;

    info!("created default config at {}", path.display());
    Ok(())
}

/// Generate the default TOML config content with comments.
fn default_config_toml() -> String {
    r##"# Prism Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[window]
# title = "prism"
# width = 1280             # 1-16384
# height = 800             # 1-16384
# pixel_ratio_limit = 2.0  # 0.5-4.0

[scene]
# shape_count = 20         # 1-256
# spread = 30.0            # 1.0-500.0, horizontal/vertical placement spread
# spread_depth = 15.0      # 1.0-500.0
# scale_min = 1.0          # 0.1-10.0
# scale_max = 2.0          # 0.1-10.0, must exceed scale_min
# background = "#121212"
# fog_density = 0.015      # 0.0-1.0

[camera]
# fov_degrees = 75.0       # 10.0-120.0
# near = 0.1
# far = 1000.0
# damping = 0.05           # 0.001-1.0
# rotate_speed = 0.8       # 0.0-10.0
# zoom_speed = 0.8         # 0.0-10.0
# auto_rotate = true
# auto_rotate_speed = 0.5  # 0.0-10.0
# min_distance = 2.0
# max_distance = 100.0

[bloom]
# enabled = true
# strength = 1.5           # 0.0-5.0
# radius = 0.4             # 0.0-1.0
# threshold = 0.85         # 0.0-1.0

[logging]
# level = "prism=info"
# fps_interval_secs = 5    # 0 disables the periodic fps log
"##
    .to_string()
}

// =============================================================================
// Tests
// =============================================================================
