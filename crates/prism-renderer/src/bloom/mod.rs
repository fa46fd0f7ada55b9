//! Bloom post-processing pipeline.
//!
//! Luminance prefilter → horizontal blur → vertical blur. Reads from the
//! scene offscreen texture and produces a soft glow texture for
//! compositing. Disabled when `bloom.enabled = false`.

mod pipeline;
mod types;

pub use pipeline::*;
pub use types::*;
