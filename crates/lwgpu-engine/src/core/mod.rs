//! Core engine-facing contracts.
//!
//! This module defines the interface between the runtime (platform loop) and
//! the programs built on it.

mod app;

pub use app::{App, AppControl};
