//! Logging utilities.
//!
//! Centralizes logger initialization. Library code only uses the `log`
//! facade; `env_logger` is installed here, once, by the application.

mod init;

pub use init::{init_logging, LoggingConfig, LOG_ENV};
