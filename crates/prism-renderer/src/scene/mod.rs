//! CPU-side scene state: the shape population and the light rig.
//!
//! Everything here is plain data driven by the shared time accumulator —
//! shapes and lights never reference each other.

mod lights;
mod shapes;

pub use lights::{AmbientLight, LightRig, SpotLight};
pub use shapes::{Shape, ShapePool, PALETTE};
