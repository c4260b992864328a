//! Logging utilities.
//!
//! Logger initialization for the example programs. Library code only talks
//! to the `log` facade; `env_logger` is installed here.

mod init;

pub use init::{init_logging, LoggingConfig};
