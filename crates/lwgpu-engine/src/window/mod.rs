//! Window + runtime loop.
//!
//! Owns the `winit` EventLoop and the single Window, and wires the window to
//! the GPU layer.

mod runtime;

pub use runtime::{LoopMode, Runtime, RuntimeConfig};
