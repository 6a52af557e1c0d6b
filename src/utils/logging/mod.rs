//! Logging utilities for mapping diagnostics

pub mod log;

// Re-export commonly used functions for convenience
pub use self::log::{
    log_configuration_registered, log_configuration_resolved, log_field_write,
    log_unreachable_rules,
};
