//! Window + runtime loop.
//!
//! Owns the `winit` EventLoop and the `Canvas`, and wires them to the GPU layer.

mod canvas;
mod runtime;
mod state;

pub use canvas::{Canvas, CanvasConfig};
pub use runtime::{Runtime, RuntimeConfig};
pub use state::{CanvasState, LoopState};
