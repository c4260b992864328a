//! Startup failures and process exit reporting.

use std::io::Write;
use std::process::ExitCode;

use thiserror::Error;

/// Exit status used for every startup failure.
pub const FAILURE_EXIT_CODE: u8 = 1;

/// Everything that can stop the runtime before or during the event loop.
///
/// Messages carry no source text; the chain is rendered by [`write_failure`].
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("Could not initialize the windowing system")]
    Windowing(#[source] winit::error::EventLoopError),

    // `OsError` has no public constructor, so this variant is only reachable
    // through a real `create_window` failure.
    #[error("Could not create window")]
    CreateWindow(#[source] winit::error::OsError),

    #[error("window has zero size ({width}x{height})")]
    ZeroSize { width: u32, height: u32 },

    // `CreateSurfaceError` likewise needs a real window handle to produce.
    #[error("Could not create WebGPU surface")]
    Surface(#[source] wgpu::CreateSurfaceError),

    #[error("Could not find a WebGPU adapter")]
    NoAdapter(#[source] wgpu::RequestAdapterError),

    #[error("event loop terminated with error")]
    EventLoop(#[source] winit::error::EventLoopError),
}

impl StartupError {
    /// Process exit status for this failure.
    pub fn exit_code(&self) -> u8 {
        FAILURE_EXIT_CODE
    }
}

/// Converts the runtime result into a process exit code.
///
/// Failures are written to standard error with their full source chain.
pub fn finish(result: Result<(), StartupError>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => write_failure(err, &mut std::io::stderr().lock()),
    }
}

/// Writes `err` to `out` and returns the matching exit code.
pub fn write_failure<W: Write>(err: StartupError, out: &mut W) -> ExitCode {
    let code = err.exit_code();
    let err = anyhow::Error::new(err);

    // env_logger also targets stderr; keep the user-facing line single.
    log::debug!("startup failed: {err:#}");
    // Nothing sensible to do if stderr itself is gone.
    let _ = writeln!(out, "{err:#}");

    ExitCode::from(code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::error::EventLoopError;

    fn rendered(err: StartupError) -> (String, ExitCode) {
        let mut out = Vec::new();
        let code = write_failure(err, &mut out);
        (String::from_utf8(out).unwrap(), code)
    }

    #[test]
    fn windowing_failure_reports_and_exits_with_one() {
        let err = StartupError::Windowing(EventLoopError::RecreationAttempt);
        assert_eq!(err.exit_code(), 1);

        let (text, code) = rendered(err);
        assert!(text.starts_with("Could not initialize the windowing system: "));
        assert!(text.ends_with('\n'));
        assert_eq!(text.lines().count(), 1);
        assert_eq!(code, ExitCode::from(1));
    }

    #[test]
    fn zero_size_message_includes_dimensions() {
        let err = StartupError::ZeroSize { width: 0, height: 480 };
        assert_eq!(err.to_string(), "window has zero size (0x480)");
        assert_eq!(err.exit_code(), FAILURE_EXIT_CODE);
    }

    #[test]
    fn event_loop_failure_keeps_source_in_chain() {
        let err = StartupError::EventLoop(EventLoopError::ExitFailure(3));
        let (text, code) = rendered(err);
        assert!(text.starts_with("event loop terminated with error: "));
        assert!(text.trim_end().len() > "event loop terminated with error: ".len());
        assert_eq!(code, ExitCode::from(1));
    }

    #[test]
    fn success_maps_to_success() {
        assert_eq!(finish(Ok(())), ExitCode::SUCCESS);
    }
}
