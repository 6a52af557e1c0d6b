//! Type identity for models

use std::any::TypeId;
use std::fmt;
use std::hash::{Hash, Hasher};

use super::Model;

/// Stable identity of a model type
///
/// Two descriptors are equal iff they describe the same Rust type. The
/// descriptor also knows how to build a default instance of its type, which
/// is how the mapper discovers the field set of a destination type.
#[derive(Clone, Copy)]
pub struct TypeDescriptor {
    id: TypeId,
    name: &'static str,
    full_name: &'static str,
    constructor: fn() -> Box<dyn Model>,
}

fn construct_default<T: Model + Default>() -> Box<dyn Model> {
    Box::new(T::default())
}

/// Strip module paths, keeping generic arguments readable
fn short_type_name(full: &'static str) -> &'static str {
    let head = full.split('<').next().unwrap_or(full);
    match head.rfind("::") {
        Some(pos) => &full[pos + 2..],
        None => full,
    }
}

impl TypeDescriptor {
    /// Descriptor of the model type `T`
    #[must_use]
    pub fn of<T: Model + Default>() -> Self {
        let full_name = std::any::type_name::<T>();
        Self {
            id: TypeId::of::<T>(),
            name: short_type_name(full_name),
            full_name,
            constructor: construct_default::<T>,
        }
    }

    /// Short name of the type, for messages
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Fully qualified type name, telling apart types that share a short name
    #[must_use]
    pub fn full_name(&self) -> &'static str {
        self.full_name
    }

    /// Underlying `TypeId`
    #[must_use]
    pub fn type_id(&self) -> TypeId {
        self.id
    }

    /// Whether this descriptor identifies `T`
    #[must_use]
    pub fn is<T: 'static>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }

    /// Construct a new default-initialised instance
    #[must_use]
    pub fn construct(&self) -> Box<dyn Model> {
        (self.constructor)()
    }

    /// Field set of the type, taken from a freshly constructed instance
    #[must_use]
    pub fn field_names(&self) -> Vec<String> {
        self.construct().field_names()
    }
}

impl PartialEq for TypeDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeDescriptor {}

impl Hash for TypeDescriptor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TypeDescriptor").field(&self.full_name).finish()
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}
