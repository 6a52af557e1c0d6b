//! Process-wide mapper
//!
//! The global mapper is created empty on first use and lives for the rest of
//! the process. Register configurations during start-up, then map from
//! anywhere. Tests that need isolation should build their own [`Mapper`].

use lazy_static::lazy_static;

use super::Mapper;
use crate::error::Result;
use crate::mapping::MappingBuilder;
use crate::model::{Model, TypeDescriptor};

lazy_static! {
    static ref GLOBAL_MAPPER: Mapper = Mapper::new();
}

impl Mapper {
    /// The process-wide mapper
    #[must_use]
    pub fn global() -> &'static Mapper {
        &GLOBAL_MAPPER
    }
}

/// Start a configuration on the global mapper
pub fn create_map<S, D>() -> Result<MappingBuilder<'static, S, D>>
where
    S: Model + Default,
    D: Model + Default,
{
    Mapper::global().create_map::<S, D>()
}

/// Map into a new `D` with the global mapper
pub fn map<D: Model + Default>(source: &dyn Model) -> Result<D> {
    Mapper::global().map::<D>(source)
}

/// Map into an existing destination with the global mapper
pub fn map_into<'d, D: Model>(source: &dyn Model, destination: &'d mut D) -> Result<&'d mut D> {
    Mapper::global().map_into(source, destination)
}

/// Map into an existing destination of an explicit type with the global
/// mapper
pub fn map_into_as<'d, T: Model>(
    source: &dyn Model,
    destination: &'d mut T,
    destination_type: TypeDescriptor,
) -> Result<&'d mut T> {
    Mapper::global().map_into_as(source, destination, destination_type)
}

/// Map every source into a new `D` with the global mapper
pub fn map_all<S: Model, D: Model + Default>(sources: &[S]) -> Result<Vec<D>> {
    Mapper::global().map_all::<S, D>(sources)
}
