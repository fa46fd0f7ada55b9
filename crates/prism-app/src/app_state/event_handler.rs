//! `ApplicationHandler` implementation for the winit event loop.

use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::ActiveEventLoop;
use winit::window::WindowId;

use super::core::PrismApp;

impl ApplicationHandler for PrismApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if !self.initialize_window(event_loop) {
            event_loop.exit();
            return;
        }

        if let Some(ref window) = self.window {
            window.request_redraw();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                tracing::info!("window close requested");
                self.shutdown();
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                // Zero-sized (minimized) windows are skipped; the camera
                // aspect stays at its last valid value.
                if size.width > 0 && size.height > 0 {
                    let scale_factor = self
                        .window
                        .as_ref()
                        .map(|w| w.scale_factor())
                        .unwrap_or(1.0);
                    if let Some(ref mut renderer) = self.renderer {
                        renderer.resize(size.width, size.height, scale_factor);
                    }
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                if let Some(ref mut renderer) = self.renderer {
                    renderer.controller.handle_cursor_moved(position);
                }
            }

            WindowEvent::MouseInput { state, button, .. } => {
                if let Some(ref mut renderer) = self.renderer {
                    renderer.controller.handle_mouse_button(button, state);
                }
            }

            WindowEvent::MouseWheel { delta, .. } => {
                if let Some(ref mut renderer) = self.renderer {
                    renderer.controller.handle_scroll(delta);
                }
            }

            WindowEvent::RedrawRequested => {
                if self.should_exit {
                    event_loop.exit();
                    return;
                }
                if let Some(ref mut renderer) = self.renderer {
                    if let Err(e) = renderer.render_frame() {
                        tracing::error!("render error: {e}");
                    }
                }
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.should_exit {
            event_loop.exit();
            return;
        }

        // Keep scheduling frames while the animation loop runs; once
        // stopped, no further redraws are requested.
        let running = self.renderer.as_ref().is_some_and(|r| r.is_running());
        if running {
            if let Some(ref window) = self.window {
                window.request_redraw();
            }
        }
    }
}
