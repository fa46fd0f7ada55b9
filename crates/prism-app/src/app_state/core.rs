//! PrismApp struct definition and constructor.

use std::sync::Arc;

use winit::window::Window;

use prism_config::PrismConfig;
use prism_renderer::SceneRenderer;

/// Top-level application state.
pub struct PrismApp {
    pub(super) config: PrismConfig,

    // Windowing
    pub(super) window: Option<Arc<Window>>,
    pub(super) renderer: Option<SceneRenderer>,

    // Whether the app should exit
    pub(super) should_exit: bool,
}

impl PrismApp {
    pub fn new(config: PrismConfig) -> Self {
        Self {
            config,
            window: None,
            renderer: None,
            should_exit: false,
        }
    }
}
