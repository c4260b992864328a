//! Learn WebGPU engine crate.
//!
//! This crate owns the window runtime and the WebGPU bootstrap used by the
//! example programs: one window, one instance, an optional surface and one
//! adapter.

pub mod core;
pub mod device;
pub mod error;
pub mod window;

pub mod logging;

pub use error::{finish, StartupError};
