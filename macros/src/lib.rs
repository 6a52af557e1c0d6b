//! Procedural macros for the automap crate
//!
//! This crate provides the `Model` derive, which generates the field
//! enumeration and by-name field access the mapper relies on.

use proc_macro::TokenStream;

// Import modules
mod model_impl;
mod utils;


/// Model derive macro
///
/// Implements `automap::Model` for a struct with named fields. Every field
/// is exposed for mapping under its Rust name unless renamed or skipped.
/// Field types must implement `Serialize`, `DeserializeOwned` and `Default`,
/// and the struct itself must implement `Default`. Type parameters are
/// bounded by `automap::model::value::FieldType`; lifetime parameters are
/// not supported.
///
/// # Example
///
/// ```rust,ignore
/// #[derive(Default, Model, Serialize, Deserialize)]
/// struct User {
///     #[mapper(name = "firstName")]
///     first_name: String,
///
///     #[mapper(skip)]
///     password_hash: String,
/// }
/// ```
#[proc_macro_derive(Model, attributes(mapper))]
pub fn derive_model(input: TokenStream) -> TokenStream {
    model_impl::process_derive_model(input)
}
