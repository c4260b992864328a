//! Opens a window, binds a WebGPU surface to it, acquires an adapter and
//! prints what the adapter supports.

use std::io::Write;
use std::process::ExitCode;

use anyhow::Context;

use lwgpu_engine::core::{App, AppControl};
use lwgpu_engine::device::{AdapterReport, GpuContext, GpuInit};
use lwgpu_engine::logging::{init_logging, LoggingConfig};
use lwgpu_engine::window::{Runtime, RuntimeConfig};

struct AdapterInfoApp;

impl App for AdapterInfoApp {
    fn on_gpu_ready(&mut self, gpu: &GpuContext<'_>) -> AppControl {
        let report = gpu.report();
        log::info!(
            "adapter {:?} exposes {} known features",
            report.adapter.name,
            report.features.len()
        );

        if let Err(e) = print_report(&report) {
            log::warn!("{e:#}");
        }
        AppControl::Continue
    }
}

fn print_report(report: &AdapterReport) -> anyhow::Result<()> {
    let mut out = std::io::stdout().lock();
    write!(out, "{report}").context("failed to write adapter report to stdout")?;
    out.flush().context("failed to flush stdout")?;
    Ok(())
}

fn main() -> ExitCode {
    init_logging(LoggingConfig::default());

    let result = Runtime::run(
        RuntimeConfig::default(),
        Some(GpuInit::from_env()),
        AdapterInfoApp,
    );
    lwgpu_engine::finish(result)
}
