//! WebGPU instance + surface + adapter acquisition.
//!
//! This module is responsible for:
//! - creating the wgpu Instance
//! - creating the Surface bound to the window (optional)
//! - requesting an Adapter and describing what it supports

mod context;
mod init;
mod report;
mod surface;

pub use context::GpuContext;
pub use init::GpuInit;
pub use report::{feature_names, limit_entries, AdapterReport, AdapterSummary, SurfaceSummary};
