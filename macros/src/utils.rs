//! Utility functions for procedural macros
//!
//! Field name resolution for the Model derive.

use std::collections::HashSet;

use darling::ast;
use syn::ext::IdentExt;

use crate::model_impl::ModelFieldReceiver;

/// Name a field is exposed under: the rename if given, else the identifier
/// without any `r#` prefix
pub fn exposed_name(field: &ModelFieldReceiver) -> Option<String> {
    let ident = field.ident.as_ref()?;
    Some(
        field
            .name
            .clone()
            .unwrap_or_else(|| ident.unraw().to_string()),
    )
}

/// Collect (exposed name, identifier) pairs of all non-skipped fields
///
/// Two fields exposed under the same name are rejected.
pub fn exposed_fields(
    fields: &ast::Fields<ModelFieldReceiver>,
) -> darling::Result<Vec<(String, &syn::Ident)>> {
    let mut errors = darling::Error::accumulator();
    let mut seen = HashSet::new();
    let mut exposed = Vec::new();

    for field in fields.iter().filter(|field| !field.skip) {
        let (Some(ident), Some(name)) = (field.ident.as_ref(), exposed_name(field)) else {
            continue;
        };
        if !seen.insert(name.clone()) {
            errors.push(
                darling::Error::custom(format!("duplicate mapper field name `{name}`"))
                    .with_span(ident),
            );
            continue;
        }
        exposed.push((name, ident));
    }

    errors.finish_with(exposed)
}
