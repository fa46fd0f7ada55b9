//! Pass wiring: scene → bloom → composite creation and chained resize.

use prism_config::schema::PrismConfig;

use crate::bloom::{BloomPipeline, BloomSettings};
use crate::compositor::CompositePipeline;
use crate::geometry::GeometryCatalogue;
use crate::scene_pass::ScenePipeline;

/// The full post-processing chain for one mounted scene.
pub struct ScenePasses {
    pub scene: ScenePipeline,
    pub bloom: BloomPipeline,
    pub composite: CompositePipeline,
}

impl ScenePasses {
    /// Create all passes against the current surface dimensions.
    pub fn new(
        device: &wgpu::Device,
        format: wgpu::TextureFormat,
        catalogue: &GeometryCatalogue,
        config: &PrismConfig,
        clear_color: [f32; 3],
        width: u32,
        height: u32,
    ) -> Self {
        let scene = ScenePipeline::new(
            device,
            catalogue,
            config.scene.shape_count,
            width,
            height,
            clear_color,
        );

        let bloom_settings = BloomSettings::from_config(&config.bloom);
        let bloom = BloomPipeline::new(device, &scene.offscreen_view, width, height, bloom_settings);

        let composite = CompositePipeline::new(
            device,
            &scene.offscreen_view,
            bloom.output_view(),
            format,
        );

        Self {
            scene,
            bloom,
            composite,
        }
    }

    /// Resize every offscreen texture and rebuild the dependent bind
    /// groups. Must accompany any camera aspect change so bloom sampling
    /// stays undistorted.
    pub fn resize(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        self.scene.resize(device, width, height);
        self.bloom
            .resize(device, &self.scene.offscreen_view, width, height);
        self.composite
            .resize(device, &self.scene.offscreen_view, self.bloom.output_view());
    }
}
