//! wgpu render backend.
//!
//! Draws the frame command stream as instanced line geometry: one unit
//! wireframe sphere mesh and one unit orbit ring mesh, each instanced with a
//! per-draw model matrix and color.
//!
//! # Invariants
//! - The backend never mutates scene state; it consumes draw commands.
//! - All transforms arrive baked into the commands; the only GPU-side
//!   composition is `view_proj * model`.

mod camera;
mod gpu;
mod shaders;

pub use camera::SceneCamera;
pub use gpu::WgpuRenderer;
