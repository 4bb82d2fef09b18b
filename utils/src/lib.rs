//! Shared utilities for the geoclaim service.

pub mod logging;

pub use logging::{init_logging, LogFormat};
