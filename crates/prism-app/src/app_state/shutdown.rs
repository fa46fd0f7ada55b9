//! Deterministic teardown of the mounted scene.

use super::core::PrismApp;

impl PrismApp {
    /// Tear down the renderer and detach it from the window.
    ///
    /// Order matters:
    /// 1. Stop the animation loop (no further ticks are scheduled)
    /// 2. Release the render passes (offscreen GPU textures and pipelines)
    /// 3. Drop the renderer (device, queue, surface — before the window)
    ///
    /// Idempotent: safe to call repeatedly, and safe when mount partially
    /// failed and no renderer exists.
    pub(super) fn shutdown(&mut self) {
        if let Some(ref mut renderer) = self.renderer {
            renderer.teardown();
        }
        self.renderer = None;
        self.should_exit = true;

        tracing::info!("shutdown complete");
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use crate::app_state::PrismApp;
    use prism_config::PrismConfig;

    #[test]
    fn shutdown_on_fresh_app_does_not_panic() {
        let mut app = PrismApp::new(PrismConfig::default());

        app.shutdown();

        assert!(app.renderer.is_none());
        assert!(app.should_exit);
    }

    #[test]
    fn shutdown_is_idempotent() {
        let mut app = PrismApp::new(PrismConfig::default());

        app.shutdown();
        app.shutdown(); // second call must not panic

        assert!(app.renderer.is_none());
    }

    #[test]
    fn fresh_app_has_no_window_or_renderer() {
        let app = PrismApp::new(PrismConfig::default());
        assert!(app.window.is_none());
        assert!(app.renderer.is_none());
        assert!(!app.should_exit);
    }
}
