//! Anonymous plain data records

use super::{Model, TypeDescriptor, Value};
use crate::error::Result;

/// A plain untyped data record: its fields are whatever keys it holds
pub type Record = serde_json::Map<String, Value>;

impl Model for Record {
    fn type_descriptor(&self) -> TypeDescriptor {
        TypeDescriptor::of::<Self>()
    }

    fn field_names(&self) -> Vec<String> {
        self.keys().cloned().collect()
    }

    fn get_field(&self, field: &str) -> Result<Option<Value>> {
        Ok(self.get(field).cloned())
    }

    fn set_field(&mut self, field: &str, value: Value) -> Result<()> {
        self.insert(field.to_string(), value);
        Ok(())
    }

    fn is_anonymous(&self) -> bool {
        true
    }
}

/// Build a `Record` from a JSON object literal
///
/// Returns `None` unless `value` is an object.
#[must_use]
pub fn record_from(value: Value) -> Option<Record> {
    match value {
        Value::Object(map) => Some(map),
        _ => None,
    }
}
