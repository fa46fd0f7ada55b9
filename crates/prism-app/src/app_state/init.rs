//! Window creation and renderer initialization.

use std::sync::Arc;

use winit::dpi::LogicalSize;
use winit::event_loop::ActiveEventLoop;
use winit::window::WindowAttributes;

use prism_renderer::SceneRenderer;

use super::core::PrismApp;

impl PrismApp {
    /// Create the window and mount the scene renderer into it.
    /// Returns `false` if initialization failed and the event loop should
    /// exit.
    pub(super) fn initialize_window(&mut self, event_loop: &ActiveEventLoop) -> bool {
        let attrs = WindowAttributes::default()
            .with_title(self.config.window.title.clone())
            .with_inner_size(LogicalSize::new(
                self.config.window.width as f64,
                self.config.window.height as f64,
            ));

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                tracing::error!("failed to create window: {e}");
                return false;
            }
        };

        match pollster::block_on(SceneRenderer::new(window.clone(), &self.config)) {
            Ok(renderer) => {
                self.renderer = Some(renderer);
            }
            Err(e) => {
                tracing::error!("failed to initialize renderer: {e}");
                return false;
            }
        }

        self.window = Some(window);
        tracing::info!("window created and renderer mounted");
        true
    }
}
