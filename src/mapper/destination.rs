//! Destination specifications and mapping results

use std::fmt;

use crate::model::{Model, TypeDescriptor};

/// Where a mapping writes to
pub enum Destination<'d> {
    /// Construct a fresh default instance of the type
    NewInstance(TypeDescriptor),
    /// Mutate an existing instance; its type comes from the instance itself
    ExistingInstance(&'d mut dyn Model),
    /// Mutate an existing instance, using the given type to find the
    /// configuration and the fields to populate
    ExistingInstanceWithType(&'d mut dyn Model, TypeDescriptor),
}

impl<'d> Destination<'d> {
    /// Destination that constructs a new `T`
    #[must_use]
    pub fn new_instance<T: Model + Default>() -> Self {
        Self::NewInstance(TypeDescriptor::of::<T>())
    }

    /// Destination that mutates `instance`
    pub fn existing(instance: &'d mut dyn Model) -> Self {
        Self::ExistingInstance(instance)
    }

    /// Destination that mutates `instance` as if it were a `T`
    pub fn existing_as<T: Model + Default>(instance: &'d mut dyn Model) -> Self {
        Self::ExistingInstanceWithType(instance, TypeDescriptor::of::<T>())
    }
}

impl fmt::Debug for Destination<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NewInstance(ty) => f.debug_tuple("NewInstance").field(ty).finish(),
            Self::ExistingInstance(instance) => f
                .debug_tuple("ExistingInstance")
                .field(&instance.type_descriptor())
                .finish(),
            Self::ExistingInstanceWithType(instance, ty) => f
                .debug_tuple("ExistingInstanceWithType")
                .field(&instance.type_descriptor())
                .field(ty)
                .finish(),
        }
    }
}

/// Result of a mapping call
pub enum Mapped<'d> {
    /// A newly constructed instance
    Created(Box<dyn Model>),
    /// The existing instance that was passed in, now mutated
    Updated(&'d mut dyn Model),
}

impl Mapped<'_> {
    /// Borrow the destination
    #[must_use]
    pub fn as_model(&self) -> &dyn Model {
        match self {
            Self::Created(instance) => &**instance,
            Self::Updated(instance) => &**instance,
        }
    }

    /// Whether the destination was freshly constructed
    #[must_use]
    pub fn is_created(&self) -> bool {
        matches!(self, Self::Created(_))
    }

    /// Take ownership of a created destination of type `T`
    ///
    /// Returns `None` for updated destinations or a different type.
    #[must_use]
    pub fn into_created<T: Model>(self) -> Option<T> {
        match self {
            Self::Created(instance) => instance.into_any().downcast::<T>().ok().map(|boxed| *boxed),
            Self::Updated(_) => None,
        }
    }
}

impl fmt::Debug for Mapped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = if self.is_created() { "Created" } else { "Updated" };
        f.debug_tuple(name).field(&self.as_model().type_descriptor()).finish()
    }
}
