//! The mounted scene: owns every GPU and CPU resource for one instance.
//!
//! One `SceneRenderer` per window. Nothing in here is global, so several
//! instances can coexist, each with an independent shape population,
//! light rig, camera, and time accumulator.

use std::sync::Arc;
use std::time::Instant;

use prism_common::Color;
use prism_config::schema::PrismConfig;
use winit::window::Window;

use crate::animation::AnimationLoop;
use crate::camera::{OrbitController, PerspectiveCamera};
use crate::geometry::{GeometryCatalogue, GeometryKind};
use crate::gpu::{GpuContext, RendererError};
use crate::passes::ScenePasses;
use crate::perf::FrameTimer;
use crate::scene::{LightRig, ShapePool};
use crate::scene_pass::{SceneUniforms, ShapeUniforms};

pub struct SceneRenderer {
    pub gpu: GpuContext,
    /// Render passes; dropped on teardown so GPU resources release early.
    passes: Option<ScenePasses>,
    pool: ShapePool,
    rig: LightRig,
    camera: PerspectiveCamera,
    pub controller: OrbitController,
    animation: AnimationLoop,
    timer: FrameTimer,
    fog_color: [f32; 3],
    fog_density: f32,
    fps_interval_secs: u32,
    last_fps_log: Instant,
}

impl SceneRenderer {
    /// Create a fully initialized scene bound to `window`.
    ///
    /// Fails fast when no GPU adapter or device is available.
    pub async fn new(window: Arc<Window>, config: &PrismConfig) -> Result<Self, RendererError> {
        let gpu = GpuContext::new(window, config.window.pixel_ratio_limit).await?;

        let fog_color = Color::from_hex(&config.scene.background)
            .unwrap_or(Color::from_rgb(0x12, 0x12, 0x12))
            .to_linear_f32();
        let fog_density = config.scene.fog_density as f32;

        let catalogue = GeometryCatalogue::build();
        let passes = ScenePasses::new(
            &gpu.device,
            gpu.format(),
            &catalogue,
            config,
            fog_color,
            gpu.size.width,
            gpu.size.height,
        );

        let pool = ShapePool::populate(&config.scene);
        let rig = LightRig::new();

        let aspect = gpu.size.width as f32 / gpu.size.height.max(1) as f32;
        let camera = PerspectiveCamera::from_config(&config.camera, aspect);
        let mut controller = OrbitController::new(&config.camera, &camera);
        controller.set_viewport_height(gpu.size.height);

        tracing::info!(
            shapes = pool.len(),
            width = gpu.size.width,
            height = gpu.size.height,
            "scene renderer initialized"
        );

        Ok(Self {
            gpu,
            passes: Some(passes),
            pool,
            rig,
            camera,
            controller,
            animation: AnimationLoop::new(),
            timer: FrameTimer::new(),
            fog_color,
            fog_density,
            fps_interval_secs: config.logging.fps_interval_secs,
            last_fps_log: Instant::now(),
        })
    }

    /// Handle a window resize.
    ///
    /// Updates the camera aspect, reconfigures the surface, and resizes
    /// every offscreen pass in the same call so the bloom buffers always
    /// match the projection. A resize arriving after teardown is a no-op.
    pub fn resize(&mut self, width: u32, height: u32, scale_factor: f64) {
        if width == 0 || height == 0 {
            return;
        }
        let Some(passes) = self.passes.as_mut() else {
            return;
        };

        self.gpu.resize(width, height, scale_factor);
        self.camera
            .set_aspect(self.gpu.size.width, self.gpu.size.height);
        self.controller.set_viewport_height(self.gpu.size.height);
        passes.resize(&self.gpu.device, self.gpu.size.width, self.gpu.size.height);

        tracing::debug!(
            width = self.gpu.size.width,
            height = self.gpu.size.height,
            pixel_ratio = self.gpu.pixel_ratio,
            "resized"
        );
    }

    /// Run one animation tick and render the frame.
    ///
    /// Tick order: advance time, advance controller, update shapes, update
    /// lights, upload uniforms, record scene → bloom → composite, present.
    /// Does nothing once the loop is stopped.
    pub fn render_frame(&mut self) -> Result<(), RendererError> {
        let Some(t) = self.animation.tick() else {
            return Ok(());
        };
        let Some(passes) = self.passes.as_ref() else {
            return Ok(());
        };

        self.timer.begin_frame();

        self.controller.update(&mut self.camera);
        self.pool.update(t);
        self.rig.update(t);

        let scene_uniforms =
            SceneUniforms::new(&self.camera, &self.rig, self.fog_color, self.fog_density);
        passes.scene.update_scene_uniforms(&self.gpu.queue, &scene_uniforms);

        let shape_uniforms: Vec<ShapeUniforms> = self
            .pool
            .shapes()
            .iter()
            .map(ShapeUniforms::from_shape)
            .collect();
        passes
            .scene
            .update_shape_uniforms(&self.gpu.queue, &shape_uniforms);

        passes
            .bloom
            .update_uniforms(&self.gpu.queue, self.gpu.size.width, self.gpu.size.height);
        passes
            .composite
            .update_uniforms(&self.gpu.queue, passes.bloom.settings.effective_strength());

        let output = match self.gpu.current_texture() {
            Ok(t) => t,
            Err(e) => {
                tracing::error!("failed to get surface texture: {e}");
                return Err(RendererError::SurfaceError(e.to_string()));
            }
        };
        let surface_view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("prism frame encoder"),
            });

        let kinds: Vec<GeometryKind> = self.pool.shapes().iter().map(|s| s.kind).collect();
        passes.scene.render(&mut encoder, &kinds);
        passes.bloom.render(&mut encoder);
        passes.composite.render(&mut encoder, &surface_view);

        self.gpu.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        self.log_fps();
        Ok(())
    }

    /// Stop the animation loop and release GPU pass resources.
    ///
    /// Idempotent: safe to call repeatedly and safe to call when mount
    /// only partially completed. Subsequent resize/render calls no-op.
    pub fn teardown(&mut self) {
        self.animation.stop();
        if self.passes.take().is_some() {
            tracing::info!("scene renderer torn down");
        }
    }

    /// Whether the animation loop is still scheduling frames.
    pub fn is_running(&self) -> bool {
        self.animation.is_running()
    }

    /// The camera's current aspect ratio.
    pub fn aspect(&self) -> f32 {
        self.camera.aspect
    }

    fn log_fps(&mut self) {
        if self.fps_interval_secs == 0 {
            return;
        }
        if self.last_fps_log.elapsed().as_secs() >= self.fps_interval_secs as u64 {
            tracing::info!(
                "fps {:.1} ({:.2} ms/frame)",
                self.timer.fps(),
                self.timer.frame_time_ms()
            );
            self.last_fps_log = Instant::now();
        }
    }
}
