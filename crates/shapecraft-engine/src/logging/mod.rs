//! Logging utilities.
//!
//! The library itself only talks to the `log` facade. Binaries call
//! [`init_logging`] once at startup to install `env_logger`.

mod init;

pub use init::{LoggingConfig, init_logging};
