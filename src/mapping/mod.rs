//! Mapping configurations, their builder and their registry

pub mod builder;
pub mod configuration;
pub mod registry;
pub mod rule;

pub use builder::{FieldRuleHandle, MappingBuilder};
pub use configuration::{ALL_FIELDS, MappingConfiguration};
pub use registry::MappingRegistry;
pub use rule::{Factory, FieldRule, Resolution};
