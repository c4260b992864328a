//! Opens a window and polls events until it is closed.

use std::process::ExitCode;

use lwgpu_engine::core::App;
use lwgpu_engine::logging::{init_logging, LoggingConfig};
use lwgpu_engine::window::{Runtime, RuntimeConfig};

struct WindowOnly;

impl App for WindowOnly {}

fn main() -> ExitCode {
    init_logging(LoggingConfig::default());

    let result = Runtime::run(RuntimeConfig::default(), None, WindowOnly);
    lwgpu_engine::finish(result)
}
