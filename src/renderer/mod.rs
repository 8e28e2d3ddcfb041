//! Rendering module
//!
//! `scene` turns game state into drawing commands; `pipeline` draws them with
//! WebGPU as flat colored triangles.

pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use scene::{DrawCommand, Scene, SceneView, build};
