//! Fluent construction of mapping configurations

use std::marker::PhantomData;
use std::sync::Arc;

use super::configuration::{ALL_FIELDS, MappingConfiguration};
use super::rule::{FieldRule, constant_factory, source_field_factory};
use crate::error::{MapperError, Result};
use crate::mapper::Mapper;
use crate::model::{Model, TypeDescriptor, Value};
use crate::utils::logging::{log_configuration_registered, log_unreachable_rules};

/// Which field a handle declares a rule for
#[derive(Debug, Clone)]
enum FieldTarget {
    Field(String),
    All,
}

/// Builder for the configuration of one (source, destination) type pair
///
/// Obtained from [`Mapper::create_map`]. Rules are collected on the builder
/// and only become visible to mappings once [`build`](Self::build) inserts
/// the finished configuration into the registry.
#[must_use = "a mapping builder does nothing until `build` is called"]
pub struct MappingBuilder<'m, S, D> {
    mapper: &'m Mapper,
    configuration: MappingConfiguration,
    _types: PhantomData<fn(&S) -> D>,
}

impl<'m, S, D> MappingBuilder<'m, S, D>
where
    S: Model + Default,
    D: Model + Default,
{
    pub(crate) fn new(mapper: &'m Mapper) -> Self {
        Self {
            mapper,
            configuration: MappingConfiguration::new(),
            _types: PhantomData,
        }
    }

    /// Declare the rule for a destination field
    ///
    /// A field can be configured once per builder.
    pub fn for_field(self, destination_field: &str) -> Result<FieldRuleHandle<'m, S, D>> {
        if self.configuration.has_field_rule(destination_field) {
            return Err(MapperError::DuplicateFieldRule {
                field: destination_field.to_string(),
            });
        }
        Ok(FieldRuleHandle {
            builder: self,
            target: FieldTarget::Field(destination_field.to_string()),
        })
    }

    /// Declare the rule applied to every field without an exact rule
    ///
    /// Usually followed by `ignore()` to switch from "copy everything" to
    /// "copy only what is configured".
    pub fn for_all(self) -> Result<FieldRuleHandle<'m, S, D>> {
        if self.configuration.has_catch_all() {
            return Err(MapperError::DuplicateFieldRule {
                field: ALL_FIELDS.to_string(),
            });
        }
        Ok(FieldRuleHandle {
            builder: self,
            target: FieldTarget::All,
        })
    }

    /// Freeze the configuration and register it
    pub fn build(self) -> Result<Arc<MappingConfiguration>> {
        let source_type = TypeDescriptor::of::<S>();
        let destination_type = TypeDescriptor::of::<D>();

        let declared = D::default().field_names();
        let unreachable: Vec<&str> = self
            .configuration
            .ignored_fields()
            .chain(self.configuration.factory_fields())
            .filter(|field| !declared.iter().any(|name| name == field))
            .collect();
        if !unreachable.is_empty() {
            log_unreachable_rules(source_type, destination_type, &unreachable);
        }

        let configuration = Arc::new(self.configuration);
        self.mapper
            .registry()
            .insert(source_type, destination_type, Arc::clone(&configuration))?;
        log_configuration_registered(source_type, destination_type, configuration.len());
        Ok(configuration)
    }

    fn with_rule(mut self, target: FieldTarget, rule: FieldRule) -> Self {
        match target {
            FieldTarget::Field(field) => self.configuration.insert_rule(field, rule),
            FieldTarget::All => self.configuration.set_catch_all(rule),
        }
        self
    }
}

/// Pending rule for one destination field (or all of them)
#[must_use = "a field rule handle must be completed with ignore, map_from, map_from_fn or constant"]
pub struct FieldRuleHandle<'m, S, D> {
    builder: MappingBuilder<'m, S, D>,
    target: FieldTarget,
}

impl<'m, S, D> FieldRuleHandle<'m, S, D>
where
    S: Model + Default,
    D: Model + Default,
{
    /// Never write the field
    ///
    /// Freshly constructed destinations keep the default value, existing
    /// destinations keep their current value.
    pub fn ignore(self) -> MappingBuilder<'m, S, D> {
        self.builder.with_rule(self.target, FieldRule::Ignore)
    }

    /// Take the value from another source field
    pub fn map_from(self, source_field: &str) -> MappingBuilder<'m, S, D> {
        self.builder
            .with_rule(self.target, FieldRule::Factory(source_field_factory(source_field)))
    }

    /// Compute the value from the source and the destination as passed in
    ///
    /// The mapper argument allows nested mapping, e.g.
    /// `|src, _, mapper| mapper.map_value::<Company>(src)`.
    pub fn map_from_fn<F>(self, factory: F) -> MappingBuilder<'m, S, D>
    where
        F: Fn(&S, &dyn Model, &Mapper) -> Result<Value> + Send + Sync + 'static,
    {
        let factory = Arc::new(move |source: &dyn Model, destination: &dyn Model, mapper: &Mapper| -> Result<Value> {
            let typed = source
                .downcast_ref::<S>()
                .ok_or_else(|| MapperError::SourceTypeMismatch {
                    expected: TypeDescriptor::of::<S>().name().to_string(),
                    found: source.type_descriptor().name().to_string(),
                })?;
            factory(typed, destination, mapper)
        });
        self.builder.with_rule(self.target, FieldRule::Factory(factory))
    }

    /// Always write the same value
    pub fn constant(self, value: impl Into<Value>) -> MappingBuilder<'m, S, D> {
        self.builder
            .with_rule(self.target, FieldRule::Factory(constant_factory(value.into())))
    }
}
