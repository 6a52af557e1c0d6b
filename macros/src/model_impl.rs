//! Model derive macro implementation
//!
//! This module contains the implementation of the Model derive macro, which
//! generates by-name field access for struct fields.

use darling::{ast, FromDeriveInput, FromField};
use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, parse_quote, DeriveInput};

use crate::utils;

/// Receiver for the struct that derives Model
#[derive(Debug, FromDeriveInput)]
#[darling(attributes(mapper), supports(struct_named))]
pub struct ModelReceiver {
    /// The struct identifier
    pub ident: syn::Ident,
    /// Generics of the struct
    pub generics: syn::Generics,
    /// The struct data with parsed fields
    pub data: ast::Data<(), ModelFieldReceiver>,
}

/// Receiver for the fields in the struct
#[derive(Debug, FromField)]
#[darling(attributes(mapper))]
pub struct ModelFieldReceiver {
    /// The field identifier
    pub ident: Option<syn::Ident>,
    /// The field type
    pub ty: syn::Type,
    /// Name the field is exposed under
    #[darling(default)]
    pub name: Option<String>,
    /// Hide the field from the mapper
    #[darling(default)]
    pub skip: bool,
}

/// Process the Model derive macro
pub fn process_derive_model(input: TokenStream) -> TokenStream {
    // Parse the input tokens into a syntax tree
    let input = parse_macro_input!(input as DeriveInput);

    match expand(&input) {
        Ok(expanded) => TokenStream::from(expanded),
        Err(err) => err.write_errors().into(),
    }
}

/// Parse and expand a derive input
pub fn expand(input: &DeriveInput) -> darling::Result<proc_macro2::TokenStream> {
    let receiver = ModelReceiver::from_derive_input(input)?;
    generate_model_impl(&receiver)
}

/// Generics of the impl: every type parameter bounded by `FieldType`
///
/// Models are `'static`, so lifetime parameters are rejected.
fn model_generics(generics: &syn::Generics) -> darling::Result<syn::Generics> {
    if let Some(param) = generics.lifetimes().next() {
        return Err(darling::Error::custom(
            "`Model` cannot be derived for structs with lifetime parameters",
        )
        .with_span(&param.lifetime));
    }

    let mut generics = generics.clone();
    let params: Vec<syn::Ident> = generics.type_params().map(|param| param.ident.clone()).collect();
    let where_clause = generics.make_where_clause();
    for param in params {
        where_clause
            .predicates
            .push(parse_quote!(#param: ::automap::model::value::FieldType));
    }
    Ok(generics)
}

/// Generate the Model implementation
pub fn generate_model_impl(receiver: &ModelReceiver) -> darling::Result<proc_macro2::TokenStream> {
    let ast::Data::Struct(fields) = &receiver.data else {
        unreachable!("Darling ensures this is a struct")
    };

    let exposed = utils::exposed_fields(fields)?;
    let names = exposed.iter().map(|(name, _)| name);

    let struct_name = &receiver.ident;
    let model_name = struct_name.to_string();
    let generics = model_generics(&receiver.generics)?;
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let getters = exposed.iter().map(|(name, ident)| {
        quote! {
            #name => ::automap::model::value::read_field(#model_name, field, &self.#ident)
                .map(::std::option::Option::Some),
        }
    });
    let setters = exposed.iter().map(|(name, ident)| {
        quote! {
            #name => {
                self.#ident = ::automap::model::value::write_field(#model_name, field, value)?;
                ::std::result::Result::Ok(())
            }
        }
    });

    Ok(quote! {
        impl #impl_generics ::automap::Model for #struct_name #ty_generics #where_clause {
            fn type_descriptor(&self) -> ::automap::TypeDescriptor {
                ::automap::TypeDescriptor::of::<Self>()
            }

            fn field_names(&self) -> ::std::vec::Vec<::std::string::String> {
                ::std::vec![#(::std::string::String::from(#names)),*]
            }

            fn get_field(
                &self,
                field: &str,
            ) -> ::automap::Result<::std::option::Option<::automap::Value>> {
                match field {
                    #(#getters)*
                    _ => ::std::result::Result::Ok(::std::option::Option::None),
                }
            }

            #[allow(unused_variables)]
            fn set_field(&mut self, field: &str, value: ::automap::Value) -> ::automap::Result<()> {
                match field {
                    #(#setters)*
                    _ => ::std::result::Result::Err(::automap::MapperError::unknown_field(#model_name, field)),
                }
            }
        }
    })
}
