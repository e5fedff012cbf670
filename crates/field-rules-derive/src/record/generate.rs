// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Code generation for `#[derive(Record)]`.
//!
//! For
//!
//! ```rust,ignore
//! #[derive(Record)]
//! pub struct User {
//!     #[validate(rules = "required")]
//!     pub name: String,
//!     secret: String
//! }
//! ```
//!
//! the output is
//!
//! ```rust,ignore
//! impl ::field_rules::Record for User {
//!     fn descriptors(&self) -> &'static [::field_rules::FieldDescriptor] {
//!         const FIELDS: &[::field_rules::FieldDescriptor] = &[
//!             ::field_rules::FieldDescriptor::exported("name", "required"),
//!             ::field_rules::FieldDescriptor::private("secret")
//!         ];
//!         FIELDS
//!     }
//!
//!     fn field(&self, name: &str) -> Option<::field_rules::FieldValue<'_>> {
//!         match name {
//!             "name" => Some(::field_rules::Inspect::view(&self.name)),
//!             _ => None
//!         }
//!     }
//! }
//!
//! impl ::field_rules::Inspect for User {
//!     fn view(&self) -> ::field_rules::FieldValue<'_> {
//!         ::field_rules::FieldValue::Record(self)
//!     }
//! }
//! ```

use proc_macro2::TokenStream;
use quote::quote;
use syn::{WhereClause, parse_quote};

use super::parse::RecordDef;

/// Generate both trait impls.
pub fn generate(record: &RecordDef) -> TokenStream {
    let krate = &record.krate;
    let ident = &record.ident;
    let (impl_generics, ty_generics, _) = record.generics.split_for_impl();
    let where_clause = where_clause(record);

    let descriptors = record.fields.iter().map(|field| {
        let key = &field.key;
        if field.exported {
            let rules = &field.rules;
            quote! { #krate::FieldDescriptor::exported(#key, #rules) }
        } else {
            quote! { #krate::FieldDescriptor::private(#key) }
        }
    });

    let arms = record.exported_fields().map(|field| {
        let key = &field.key;
        let name = &field.ident;
        quote! {
            #key => ::core::option::Option::Some(#krate::Inspect::view(&self.#name)),
        }
    });

    quote! {
        #[automatically_derived]
        impl #impl_generics #krate::Record for #ident #ty_generics #where_clause {
            fn descriptors(&self) -> &'static [#krate::FieldDescriptor] {
                const FIELDS: &[#krate::FieldDescriptor] = &[#(#descriptors),*];
                FIELDS
            }

            fn field(&self, name: &str) -> ::core::option::Option<#krate::FieldValue<'_>> {
                match name {
                    #(#arms)*
                    _ => ::core::option::Option::None
                }
            }
        }

        #[automatically_derived]
        impl #impl_generics #krate::Inspect for #ident #ty_generics #where_clause {
            fn view(&self) -> #krate::FieldValue<'_> {
                #krate::FieldValue::Record(self)
            }
        }
    }
}

/// Declared where clause plus an `Inspect` bound per exported field type
/// when the struct is generic.
fn where_clause(record: &RecordDef) -> Option<WhereClause> {
    if record.generics.params.is_empty() {
        return record.generics.where_clause.clone();
    }

    let krate = &record.krate;
    let mut clause = record
        .generics
        .where_clause
        .clone()
        .unwrap_or_else(|| parse_quote!(where));
    for field in record.exported_fields() {
        let ty = &field.ty;
        clause.predicates.push(parse_quote!(#ty: #krate::Inspect));
    }
    Some(clause)
}
