//! The mapping engine
//!
//! [`Mapper`] owns a [`MappingRegistry`] and maps source models into
//! destinations. Every mapping call runs the same steps:
//!
//! 1. resolve the destination instance and its type from the [`Destination`];
//! 2. look up the configuration for (source type, destination type); a named
//!    source without configuration is an error, an anonymous [`Record`]
//!    falls back to the copy convention;
//! 3. compute the value of every destination field, with factories seeing
//!    the destination as it was passed in;
//! 4. write the computed values.
//!
//! [`Record`]: crate::model::Record

pub mod destination;
pub mod global;

use rayon::prelude::*;
use serde::Serialize;

use crate::config::{MapperConfig, MissingSourceField};
use crate::error::{MapperError, Result};
use crate::mapping::{MappingBuilder, MappingRegistry, Resolution};
use crate::model::{Model, TypeDescriptor, Value, value};
use crate::utils::logging::{log_configuration_resolved, log_field_write};

pub use destination::{Destination, Mapped};

/// Object-object mapper
#[derive(Debug, Default)]
pub struct Mapper {
    registry: MappingRegistry,
    config: MapperConfig,
}

impl Mapper {
    /// Create a mapper with an empty registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mapper with an empty registry and custom settings
    #[must_use]
    pub fn with_config(config: MapperConfig) -> Self {
        Self {
            registry: MappingRegistry::new(),
            config,
        }
    }

    /// Settings of this mapper
    #[must_use]
    pub fn config(&self) -> &MapperConfig {
        &self.config
    }

    /// Registry holding the configurations of this mapper
    #[must_use]
    pub fn registry(&self) -> &MappingRegistry {
        &self.registry
    }

    /// Start the configuration of mapping `S` into `D`
    ///
    /// Fails if a configuration already exists for the pair. The
    /// configuration takes effect when the returned builder is built.
    pub fn create_map<S, D>(&self) -> Result<MappingBuilder<'_, S, D>>
    where
        S: Model + Default,
        D: Model + Default,
    {
        let source_type = TypeDescriptor::of::<S>();
        let destination_type = TypeDescriptor::of::<D>();
        if self.registry.contains(source_type, destination_type)? {
            return Err(MapperError::duplicate_mapping(
                source_type.name(),
                destination_type.name(),
            ));
        }
        Ok(MappingBuilder::new(self))
    }

    /// Map `source` into the given destination
    pub fn resolve<'d>(&self, source: &dyn Model, destination: Destination<'d>) -> Result<Mapped<'d>> {
        match destination {
            Destination::NewInstance(destination_type) => {
                let mut instance = destination_type.construct();
                self.apply(source, &mut *instance, destination_type)?;
                Ok(Mapped::Created(instance))
            }
            Destination::ExistingInstance(instance) => {
                let destination_type = Self::infer_destination_type(&*instance)?;
                self.apply(source, &mut *instance, destination_type)?;
                Ok(Mapped::Updated(instance))
            }
            Destination::ExistingInstanceWithType(instance, destination_type) => {
                self.apply(source, &mut *instance, destination_type)?;
                Ok(Mapped::Updated(instance))
            }
        }
    }

    /// Map `source` into a new `D`
    pub fn map<D: Model + Default>(&self, source: &dyn Model) -> Result<D> {
        let mut destination = D::default();
        self.apply(source, &mut destination, TypeDescriptor::of::<D>())?;
        Ok(destination)
    }

    /// Map `source` into a new `D` and return it as a value
    ///
    /// Meant for factories that fill a nested model field.
    pub fn map_value<D: Model + Default + Serialize>(&self, source: &dyn Model) -> Result<Value> {
        let destination = self.map::<D>(source)?;
        value::to_value(&destination)
    }

    /// Map `source` into an existing destination, typed by the destination
    /// itself
    ///
    /// A plain `Record` destination has no discoverable field set and fails
    /// with `UnresolvableDestinationType`.
    pub fn map_into<'d, D: Model>(&self, source: &dyn Model, destination: &'d mut D) -> Result<&'d mut D> {
        let destination_type = Self::infer_destination_type(&*destination)?;
        self.apply(source, &mut *destination, destination_type)?;
        Ok(destination)
    }

    /// Map `source` into an existing destination, treating it as
    /// `destination_type`
    pub fn map_into_as<'d, T: Model>(
        &self,
        source: &dyn Model,
        destination: &'d mut T,
        destination_type: TypeDescriptor,
    ) -> Result<&'d mut T> {
        self.apply(source, &mut *destination, destination_type)?;
        Ok(destination)
    }

    /// Map every source into a new `D`, keeping order
    ///
    /// The first failure aborts the whole batch.
    pub fn map_all<S: Model, D: Model + Default>(&self, sources: &[S]) -> Result<Vec<D>> {
        sources.iter().map(|source| self.map::<D>(source)).collect()
    }

    /// Map every source, in order, into the same existing destination
    pub fn map_all_into<'d, S: Model, D: Model>(&self, sources: &[S], destination: &'d mut D) -> Result<&'d mut D> {
        let destination_type = Self::infer_destination_type(&*destination)?;
        for source in sources {
            self.apply(source, &mut *destination, destination_type)?;
        }
        Ok(destination)
    }

    /// Parallel version of [`map_all`](Self::map_all) on the rayon pool
    pub fn par_map_all<S: Model, D: Model + Default>(&self, sources: &[S]) -> Result<Vec<D>> {
        sources.par_iter().map(|source| self.map::<D>(source)).collect()
    }

    fn infer_destination_type(destination: &dyn Model) -> Result<TypeDescriptor> {
        if destination.is_anonymous() {
            return Err(MapperError::UnresolvableDestinationType);
        }
        Ok(destination.type_descriptor())
    }

    fn apply(&self, source: &dyn Model, destination: &mut dyn Model, destination_type: TypeDescriptor) -> Result<()> {
        let source_type = source.type_descriptor();
        let configuration = self.registry.find(source_type, destination_type)?;
        if configuration.is_none() && !source.is_anonymous() {
            return Err(MapperError::missing_mapping(
                source_type.name(),
                destination_type.name(),
            ));
        }
        log_configuration_resolved(source_type, destination_type, configuration.is_some());

        // Compute everything before writing so factories never observe
        // writes made by this call.
        let fields = destination_type.field_names();
        let mut writes = Vec::with_capacity(fields.len());
        for field in fields {
            let resolution = configuration
                .as_deref()
                .map_or(Resolution::Copy, |configuration| configuration.resolve(&field));
            let value = match resolution {
                Resolution::Ignore => continue,
                Resolution::Factory(factory) => factory(source, &*destination, self)?,
                Resolution::Copy => match source.get_field(&field)? {
                    Some(value) => value,
                    None if self.config.missing_source_field == MissingSourceField::Keep => continue,
                    None => Value::Null,
                },
            };
            writes.push((field, value));
        }

        for (field, value) in writes {
            if self.config.log_field_writes {
                log_field_write(destination_type, &field, &value);
            }
            destination.set_field(&field, value)?;
        }
        Ok(())
    }
}
