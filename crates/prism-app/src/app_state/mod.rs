//! Top-level application state.
//!
//! Implements `winit::application::ApplicationHandler` to drive the main
//! event loop: mounts the scene renderer into the window, keeps it sized,
//! routes pointer input to the orbit controller, and tears everything
//! down deterministically.

mod core;
mod event_handler;
mod init;
mod shutdown;

pub use core::PrismApp;
