//! Field rules: how one destination field gets its value

use std::fmt;
use std::sync::Arc;

use crate::error::Result;
use crate::mapper::Mapper;
use crate::model::{Model, Value};

/// Type-erased field factory
///
/// Called with the source, the destination as passed in to the mapping call,
/// and the mapper running it (for nested mapping).
pub type Factory = Arc<dyn Fn(&dyn Model, &dyn Model, &Mapper) -> Result<Value> + Send + Sync>;

/// Rule declared for a destination field
#[derive(Clone)]
pub enum FieldRule {
    /// Never written by the mapper
    Ignore,
    /// Written with the factory's result
    Factory(Factory),
}

impl FieldRule {
    /// Whether this rule ignores the field
    #[must_use]
    pub fn is_ignore(&self) -> bool {
        matches!(self, Self::Ignore)
    }
}

impl fmt::Debug for FieldRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ignore => f.write_str("Ignore"),
            Self::Factory(_) => f.write_str("Factory(..)"),
        }
    }
}

/// Outcome of rule lookup for one field
#[derive(Clone, Copy)]
pub enum Resolution<'a> {
    /// Leave the destination field untouched
    Ignore,
    /// Write the factory's result
    Factory(&'a Factory),
    /// Copy the same-named source field
    Copy,
}

impl fmt::Debug for Resolution<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ignore => f.write_str("Ignore"),
            Self::Factory(_) => f.write_str("Factory(..)"),
            Self::Copy => f.write_str("Copy"),
        }
    }
}

/// Factory reading `source_field` off the source; absent fields yield `Null`
#[must_use]
pub fn source_field_factory(source_field: &str) -> Factory {
    let source_field = source_field.to_string();
    Arc::new(move |source: &dyn Model, _destination: &dyn Model, _mapper: &Mapper| -> Result<Value> {
        Ok(source.get_field(&source_field)?.unwrap_or(Value::Null))
    })
}

/// Factory returning a clone of `value` every time
#[must_use]
pub fn constant_factory(value: Value) -> Factory {
    Arc::new(move |_source: &dyn Model, _destination: &dyn Model, _mapper: &Mapper| -> Result<Value> {
        Ok(value.clone())
    })
}
