//! Logging utilities.
//!
//! This module centralizes logger initialization. Everything else in the
//! workspace logs through the standard `log` facade.

mod init;

pub use init::{init_logging, LogTarget, LoggingConfig, DEFAULT_FILTER};
