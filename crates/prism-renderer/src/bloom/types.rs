//! Bloom pipeline types.

use prism_config::schema::BloomConfig;

/// Per-pass uniforms for the bloom shader.
#[repr(C)]
#[derive(Debug, Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
pub struct BloomUniforms {
    /// 1.0 / texture_width, 1.0 / texture_height.
    pub texel_size: [f32; 2],
    /// Blur kernel spread multiplier.
    pub radius: f32,
    /// Luminance threshold for the prefilter pass.
    pub threshold: f32,
}

/// Bloom configuration derived from app config at pipeline creation.
#[derive(Debug, Clone, Copy)]
pub struct BloomSettings {
    /// Whether the bloom passes run at all.
    pub enabled: bool,
    /// Bloom contribution at composite time.
    pub strength: f32,
    /// Blur kernel spread (0-1).
    pub radius: f32,
    /// Luminance threshold below which pixels do not bloom.
    pub threshold: f32,
}

impl Default for BloomSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            strength: 1.5,
            radius: 0.4,
            threshold: 0.85,
        }
    }
}

impl BloomSettings {
    /// Create bloom settings from the application config.
    pub fn from_config(config: &BloomConfig) -> Self {
        Self {
            enabled: config.enabled,
            strength: config.strength as f32,
            radius: config.radius as f32,
            threshold: config.threshold as f32,
        }
    }

    /// Strength as seen by the composite pass: zero when disabled, so the
    /// (cleared) bloom texture cannot contribute.
    pub fn effective_strength(&self) -> f32 {
        if self.enabled {
            self.strength
        } else {
            0.0
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bloom_uniforms_size_is_16_bytes() {
        assert_eq!(std::mem::size_of::<BloomUniforms>(), 16);
    }

    #[test]
    fn bloom_settings_default() {
        let s = BloomSettings::default();
        assert!(s.enabled);
        assert!((s.strength - 1.5).abs() < f32::EPSILON);
        assert!((s.radius - 0.4).abs() < f32::EPSILON);
        assert!((s.threshold - 0.85).abs() < f32::EPSILON);
    }

    #[test]
    fn bloom_settings_from_default_config() {
        let s = BloomSettings::from_config(&BloomConfig::default());
        assert!(s.enabled);
        assert!((s.strength - 1.5).abs() < f32::EPSILON);
        assert!((s.radius - 0.4).abs() < f32::EPSILON);
        assert!((s.threshold - 0.85).abs() < f32::EPSILON);
    }

    #[test]
    fn bloom_settings_from_config_disabled() {
        let mut config = BloomConfig::default();
        config.enabled = false;
        let s = BloomSettings::from_config(&config);
        assert!(!s.enabled);
    }

    #[test]
    fn effective_strength_zeroes_when_disabled() {
        let mut s = BloomSettings::default();
        assert!((s.effective_strength() - 1.5).abs() < f32::EPSILON);
        s.enabled = false;
        assert!((s.effective_strength() - 0.0).abs() < f32::EPSILON);
    }
}
