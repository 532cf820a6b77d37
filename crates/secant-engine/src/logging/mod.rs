//! Logging utilities.
//!
//! Centralizes logger initialization. Everything else in the workspace logs
//! through the `log` facade; `env_logger` is the only backend.

mod init;

pub use init::{LoggingConfig, init_logging};
