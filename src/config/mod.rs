//! Application configuration and constants.
//!
//! This module provides:
//! - Hostname syntax constants (lengths, separator, reserved names)
//! - CLI option types and parsing

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Config, ConfigValidationError, FailOn, LogFormat, LogLevel, OutputFormat};
