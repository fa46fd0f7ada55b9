//! wgpu device/surface setup and surface lifetime management.
//!
//! Fails fast when no GPU adapter is available; the caller decides whether
//! to run without the effect.

use std::sync::Arc;

use winit::window::Window;

use super::types::{PhysicalSize, RendererError};

/// Owns the wgpu instance-level objects: surface, device, queue, and the
/// current surface configuration.
pub struct GpuContext {
    pub surface: wgpu::Surface<'static>,
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
    pub config: wgpu::SurfaceConfiguration,
    /// Current surface size after pixel-ratio capping.
    pub size: PhysicalSize,
    /// Effective device pixel ratio (window scale factor, capped).
    pub pixel_ratio: f64,
    pixel_ratio_limit: f64,
}

impl GpuContext {
    /// Create a surface on `window` and bring up a device for it.
    ///
    /// `pixel_ratio_limit` caps the device pixel ratio used for the surface
    /// and every offscreen buffer derived from it.
    pub async fn new(window: Arc<Window>, pixel_ratio_limit: f64) -> Result<Self, RendererError> {
        let instance = wgpu::Instance::default();

        let inner = window.inner_size();
        let scale_factor = window.scale_factor();

        let surface = instance.create_surface(window)?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or(RendererError::AdapterNotFound)?;

        tracing::info!("using adapter: {}", adapter.get_info().name);

        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    label: Some("prism device"),
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::default(),
                },
                None,
            )
            .await?;

        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| f.is_srgb())
            .unwrap_or(caps.formats[0]);

        let size = effective_surface_size(inner.width, inner.height, scale_factor, pixel_ratio_limit);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width,
            height: size.height,
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode: caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            size,
            pixel_ratio: scale_factor.min(pixel_ratio_limit),
            pixel_ratio_limit,
        })
    }

    /// Reconfigure the surface for new window dimensions.
    ///
    /// `width`/`height` are physical window pixels; `scale_factor` is the
    /// window's current reported scale, re-capped on every call.
    pub fn resize(&mut self, width: u32, height: u32, scale_factor: f64) {
        let size = effective_surface_size(width, height, scale_factor, self.pixel_ratio_limit);
        self.size = size;
        self.pixel_ratio = scale_factor.min(self.pixel_ratio_limit);
        self.config.width = size.width;
        self.config.height = size.height;
        self.surface.configure(&self.device, &self.config);
    }

    /// Acquire the next surface texture.
    pub fn current_texture(&self) -> Result<wgpu::SurfaceTexture, wgpu::SurfaceError> {
        self.surface.get_current_texture()
    }

    /// The configured surface texture format.
    pub fn format(&self) -> wgpu::TextureFormat {
        self.config.format
    }
}

/// Compute the surface size for a window, applying the pixel-ratio cap.
///
/// Window sizes arrive in physical pixels (logical size × scale factor).
/// When the scale factor exceeds the cap, the surface is shrunk so the
/// effective ratio equals the cap.
pub fn effective_surface_size(
    width: u32,
    height: u32,
    scale_factor: f64,
    pixel_ratio_limit: f64,
) -> PhysicalSize {
    let scale = scale_factor.max(0.1);
    let k = scale.min(pixel_ratio_limit) / scale;
    PhysicalSize {
        width: ((width as f64 * k).round() as u32).max(1),
        height: ((height as f64 * k).round() as u32).max(1),
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn effective_size_identity_below_cap() {
        let s = effective_surface_size(800, 600, 1.0, 2.0);
        assert_eq!(s.width, 800);
        assert_eq!(s.height, 600);
    }

    #[test]
    fn effective_size_unchanged_at_cap() {
        let s = effective_surface_size(1600, 1200, 2.0, 2.0);
        assert_eq!(s.width, 1600);
        assert_eq!(s.height, 1200);
    }

    #[test]
    fn effective_size_shrinks_above_cap() {
        // scale 3 capped to 2: surface is 2/3 of the physical size
        let s = effective_surface_size(3000, 1500, 3.0, 2.0);
        assert_eq!(s.width, 2000);
        assert_eq!(s.height, 1000);
    }

    #[test]
    fn effective_size_never_zero() {
        let s = effective_surface_size(0, 0, 1.0, 2.0);
        assert_eq!(s.width, 1);
        assert_eq!(s.height, 1);
    }
}
