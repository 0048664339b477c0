//! Logging utilities.
//!
//! Library code logs through the `log` facade only. Binaries call
//! [`init_logging`] once to install `env_logger`.

mod init;

pub use init::{LOG_ENV_VAR, LoggingConfig, init_logging};
