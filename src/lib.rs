//! An object-object mapper.
//!
//! Maps a source model into a destination model by copying same-named
//! fields, with per-field rules (ignore, map from another field, compute
//! with a factory, constant) registered per (source, destination) type pair.
//!
//! ```ignore
//! use automap::{Mapper, Model};
//!
//! #[derive(Debug, Default, Model, serde::Serialize, serde::Deserialize)]
//! struct Person {
//!     first_name: String,
//!     last_name: String,
//! }
//!
//! let mapper = Mapper::new();
//! mapper.create_map::<User, Person>()?.build()?;
//! let person: Person = mapper.map(&user)?;
//! ```

// Lets `#[derive(Model)]` refer to `::automap` inside this crate too
extern crate self as automap;

pub mod config;
pub mod error;
pub mod mapper;
pub mod mapping;
pub mod model;
pub mod utils;

// Re-export the most common types for easier use
pub use config::{MapperConfig, MissingSourceField};
pub use error::{MapperError, Result};
pub use mapper::global::{create_map, map, map_all, map_into, map_into_as};
pub use mapper::{Destination, Mapped, Mapper};
pub use mapping::{FieldRuleHandle, MappingBuilder, MappingConfiguration, MappingRegistry};
pub use model::{Model, Record, TypeDescriptor, Value};

// Derive macro for the `Model` trait
pub use automap_macros::Model;
