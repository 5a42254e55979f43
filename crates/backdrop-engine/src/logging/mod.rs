//! Logging utilities.
//!
//! Library code only talks to the `log` facade. This module wires up
//! `env_logger` for binaries that want it.

mod init;

pub use init::{init_logging, LoggingConfig};
