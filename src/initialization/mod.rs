//! Binary initialization.
//!
//! The library never installs a logger; the `domain_parts` binary calls
//! `init_logger_with()` once at startup.

mod logger;

// Re-export public API
pub use logger::init_logger_with;
