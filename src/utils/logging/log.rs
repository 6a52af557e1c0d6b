//! Logging utilities
//!
//! This module provides standardized log messages for mapping operations.

use itertools::Itertools;

use crate::model::{TypeDescriptor, Value};

/// Log a registered configuration with consistent format
///
/// # Arguments
/// * `source_type` - Source type of the pair
/// * `destination_type` - Destination type of the pair
/// * `rules` - Number of exact field rules
pub fn log_configuration_registered(source_type: TypeDescriptor, destination_type: TypeDescriptor, rules: usize) {
    log::debug!("Registered mapping {source_type} -> {destination_type} with {rules} field rules");
}

/// Log the configuration lookup of a mapping call
pub fn log_configuration_resolved(source_type: TypeDescriptor, destination_type: TypeDescriptor, configured: bool) {
    if configured {
        log::debug!("Mapping {source_type} -> {destination_type} using registered configuration");
    } else {
        log::debug!("Mapping {source_type} -> {destination_type} by convention (anonymous source)");
    }
}

/// Warn about rules that name fields the destination does not declare
pub fn log_unreachable_rules(source_type: TypeDescriptor, destination_type: TypeDescriptor, fields: &[&str]) {
    log::warn!(
        "Mapping {source_type} -> {destination_type} declares rules for unknown fields: {}",
        fields.iter().sorted().join(", ")
    );
}

/// Log a single field write
pub fn log_field_write(destination_type: TypeDescriptor, field: &str, value: &Value) {
    log::trace!("Setting {destination_type}.{field} = {value}");
}
