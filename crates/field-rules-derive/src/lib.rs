// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Procedural macro behind `field-rules`.
//!
//! Depend on `field-rules` instead; it re-exports [`macro@Record`] next to
//! the runtime the generated code refers to.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(
    missing_docs,
    rustdoc::missing_crate_level_docs,
    rustdoc::broken_intra_doc_links,
    rust_2018_idioms
)]
#![deny(unsafe_code)]

mod record;

use proc_macro::TokenStream;

/// Derive `Record` and `Inspect` for a struct with named fields.
///
/// # Field Attributes
///
/// | Attribute | Description |
/// |-----------|-------------|
/// | `#[validate(rules = "...")]` | Rule tag, e.g. `"required\|len:>=,3"` |
/// | `#[validate(rename = "...")]` | Field name used in error keys |
/// | `#[validate(skip)]` | Leave the field out of validation entirely |
///
/// # Container Attributes
///
/// | Attribute | Default | Description |
/// |-----------|---------|-------------|
/// | `rename_all` | none | `snake_case`, `kebab-case`, `camelCase`, `PascalCase`, `lowercase`, `UPPERCASE` |
/// | `crate` | `::field_rules` | Path to the runtime crate |
///
/// Only `pub` fields are validated. Fields without `pub` are described as
/// private and never read. A field whose type is itself a record is
/// validated recursively, with its name prepended to every error key.
///
/// # Example
///
/// ```rust,ignore
/// use field_rules::Record;
///
/// #[derive(Record)]
/// #[validate(rename_all = "camelCase")]
/// pub struct Signup {
///     #[validate(rules = "required|len:>=,3")]
///     pub user_name: String,
///
///     #[validate(rules = "email")]
///     pub email: String,
///
///     pub address: Address,
///
///     password_hash: String
/// }
/// ```
///
/// # Errors
///
/// Compile errors for tuple structs, unit structs, enums and unions, for an
/// unknown `rename_all` value, and for `rules` on a `skip` field.
#[proc_macro_derive(Record, attributes(validate))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    record::derive(input)
}
