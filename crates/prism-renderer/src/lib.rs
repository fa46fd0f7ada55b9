pub mod animation;
pub mod bloom;
pub mod camera;
pub mod compositor;
pub mod geometry;
pub mod gpu;
pub mod material;
pub mod matrix;
pub mod passes;
pub mod perf;
pub mod renderer;
pub mod scene;
pub mod scene_pass;

pub use animation::{AnimationLoop, LoopState, TIME_STEP};
pub use camera::{OrbitController, PerspectiveCamera};
pub use gpu::{GpuContext, PhysicalSize, RendererError};
pub use material::GlassMaterial;
pub use perf::FrameTimer;
pub use renderer::SceneRenderer;
pub use scene::{LightRig, ShapePool};
