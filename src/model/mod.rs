//! Capability interface between the mapper and the models it maps
//!
//! The mapper never inspects concrete types. Everything it needs from a model
//! (identity, field enumeration, reading and writing fields by name) goes
//! through the [`Model`] trait, usually implemented with `#[derive(Model)]`.

pub mod descriptor;
pub mod record;
pub mod value;

use std::any::Any;

use crate::error::Result;

pub use descriptor::TypeDescriptor;
pub use record::Record;
pub use value::Value;

/// Access to the concrete type behind a `dyn Model`
pub trait AsAny: Any {
    /// Borrow as `Any`
    fn as_any(&self) -> &dyn Any;

    /// Borrow mutably as `Any`
    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Convert a boxed value into a boxed `Any`
    fn into_any(self: Box<Self>) -> Box<dyn Any>;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

/// A value the mapper can read from and write into
///
/// Field names are the names the model exposes for mapping, which are not
/// necessarily the Rust identifiers (see `#[mapper(name = "...")]`).
pub trait Model: AsAny + Send + Sync {
    /// Runtime type identity of this instance
    fn type_descriptor(&self) -> TypeDescriptor;

    /// Names of the fields exposed for mapping, in declaration order
    fn field_names(&self) -> Vec<String>;

    /// Read a field; `Ok(None)` when the model has no such field
    fn get_field(&self, field: &str) -> Result<Option<Value>>;

    /// Write a field
    fn set_field(&mut self, field: &str, value: Value) -> Result<()>;

    /// Whether this is a plain untyped data record rather than a named model
    fn is_anonymous(&self) -> bool {
        false
    }
}

impl dyn Model {
    /// Downcast to a concrete model type
    #[must_use]
    pub fn downcast_ref<T: Model>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }

    /// Downcast mutably to a concrete model type
    pub fn downcast_mut<T: Model>(&mut self) -> Option<&mut T> {
        self.as_any_mut().downcast_mut::<T>()
    }

    /// Whether the concrete type behind this model is `T`
    #[must_use]
    pub fn is<T: Model>(&self) -> bool {
        self.as_any().is::<T>()
    }
}
