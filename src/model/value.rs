//! Field values and the conversions between them and model fields
//!
//! Values are `serde_json::Value`s. `Null` is the absence sentinel: writing it
//! into a field stores the field type's default.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{MapperError, Result};

pub use serde_json::Value;

/// Bound on the type parameters of generic models
///
/// `#[derive(Model)]` adds it to every type parameter, since a parameter can
/// end up inside a field that is read, written or default-constructed.
pub trait FieldType: Serialize + DeserializeOwned + Default + Send + Sync + 'static {}

impl<T> FieldType for T where T: Serialize + DeserializeOwned + Default + Send + Sync + 'static {}

/// Convert any serializable value into a field value
pub fn to_value<T: Serialize + ?Sized>(value: &T) -> Result<Value> {
    Ok(serde_json::to_value(value)?)
}

/// Read a model field as a value
pub fn read_field<T: Serialize + ?Sized>(model: &str, field: &str, value: &T) -> Result<Value> {
    serde_json::to_value(value).map_err(|source| MapperError::FieldRead {
        model: model.to_string(),
        field: field.to_string(),
        source,
    })
}

/// Convert a value into the type of a model field
///
/// `Null` yields `T::default()`; anything else must deserialize into `T`
/// as-is.
pub fn write_field<T: DeserializeOwned + Default>(model: &str, field: &str, value: Value) -> Result<T> {
    if value.is_null() {
        return Ok(T::default());
    }
    serde_json::from_value(value).map_err(|source| MapperError::FieldAssignment {
        model: model.to_string(),
        field: field.to_string(),
        source,
    })
}
