// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Attribute parsing for `#[derive(Record)]`.
//!
//! darling reads the raw attributes into [`RecordAttrs`] and
//! [`FieldAttrs`]; [`RecordDef::from_derive_input`] then resolves names,
//! drops skipped fields and reports every misuse at once.

use std::collections::HashSet;

use convert_case::{Case, Casing};
use darling::{FromDeriveInput, FromField, FromMeta, ast, util::Ignored};
use syn::{DeriveInput, Generics, Ident, Type, Visibility, ext::IdentExt};

/// Default runtime path used by generated code.
pub fn default_crate_path() -> syn::Path {
    syn::parse_quote!(::field_rules)
}

/// Case conversion applied by `rename_all`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenameRule {
    /// `snake_case`
    Snake,
    /// `kebab-case`
    Kebab,
    /// `camelCase`
    Camel,
    /// `PascalCase`
    Pascal,
    /// `lowercase`
    Lower,
    /// `UPPERCASE`
    Upper
}

impl RenameRule {
    /// Convert a field name.
    pub fn apply(self, name: &str) -> String {
        match self {
            Self::Snake => name.to_case(Case::Snake),
            Self::Kebab => name.to_case(Case::Kebab),
            Self::Camel => name.to_case(Case::Camel),
            Self::Pascal => name.to_case(Case::Pascal),
            Self::Lower => name.to_lowercase(),
            Self::Upper => name.to_uppercase()
        }
    }
}

impl FromMeta for RenameRule {
    fn from_string(value: &str) -> darling::Result<Self> {
        match value {
            "snake_case" => Ok(Self::Snake),
            "kebab-case" => Ok(Self::Kebab),
            "camelCase" => Ok(Self::Camel),
            "PascalCase" => Ok(Self::Pascal),
            "lowercase" => Ok(Self::Lower),
            "UPPERCASE" => Ok(Self::Upper),
            _ => Err(darling::Error::unknown_value(value))
        }
    }
}

/// Raw `#[validate(...)]` on a field.
#[derive(Debug, FromField)]
#[darling(attributes(validate))]
pub struct FieldAttrs {
    pub ident: Option<Ident>,
    pub vis:   Visibility,
    pub ty:    Type,

    /// Rule tag.
    #[darling(default)]
    pub rules: Option<String>,

    /// Explicit error-key name.
    #[darling(default)]
    pub rename: Option<String>,

    /// Leave the field out of the descriptors.
    #[darling(default)]
    pub skip: bool
}

/// Raw `#[validate(...)]` on the struct.
#[derive(Debug, FromDeriveInput)]
#[darling(attributes(validate), supports(struct_named))]
pub struct RecordAttrs {
    pub ident:    Ident,
    pub generics: Generics,
    pub data:     ast::Data<Ignored, FieldAttrs>,

    #[darling(default)]
    pub rename_all: Option<RenameRule>,

    #[darling(rename = "crate", default)]
    pub krate: Option<syn::Path>
}

/// One described field.
#[derive(Debug)]
pub struct FieldDef {
    /// Rust identifier.
    pub ident:    Ident,
    /// Declared type.
    pub ty:       Type,
    /// Name used by the validator and in error keys.
    pub key:      String,
    /// Rule tag, empty when none.
    pub rules:    String,
    /// Declared `pub`.
    pub exported: bool
}

/// Parsed struct, ready for generation.
#[derive(Debug)]
pub struct RecordDef {
    pub ident:    Ident,
    pub generics: Generics,
    /// Runtime crate path.
    pub krate:    syn::Path,
    /// Non-skipped fields in declaration order.
    pub fields:   Vec<FieldDef>
}

impl RecordDef {
    /// Parse and check a derive input.
    ///
    /// # Errors
    ///
    /// Shape errors from darling, unknown attribute values, `rules` on a
    /// skipped field and two fields resolving to one name.
    pub fn from_derive_input(input: &DeriveInput) -> darling::Result<Self> {
        let attrs = RecordAttrs::from_derive_input(input)?;
        let mut errors = darling::Error::accumulator();

        let raw_fields = match attrs.data {
            ast::Data::Struct(fields) => fields.fields,
            ast::Data::Enum(_) => {
                return Err(darling::Error::custom("Record can only be derived for structs")
                    .with_span(&input.ident));
            }
        };

        let mut seen = HashSet::new();
        let mut fields = Vec::with_capacity(raw_fields.len());

        for field in raw_fields {
            let Some(ident) = field.ident else {
                errors.push(darling::Error::custom("Record fields must be named").with_span(&field.ty));
                continue;
            };

            if field.skip {
                if field.rules.is_some() {
                    errors.push(
                        darling::Error::custom("`rules` has no effect on a skipped field")
                            .with_span(&ident)
                    );
                }
                continue;
            }

            let key = match (field.rename, attrs.rename_all) {
                (Some(rename), _) => rename,
                (None, Some(rule)) => rule.apply(&ident.unraw().to_string()),
                (None, None) => ident.unraw().to_string()
            };

            if !seen.insert(key.clone()) {
                errors.push(
                    darling::Error::custom(format!("duplicate field name `{}`", key))
                        .with_span(&ident)
                );
                continue;
            }

            fields.push(FieldDef {
                ident,
                ty: field.ty,
                key,
                rules: field.rules.unwrap_or_default(),
                exported: matches!(field.vis, Visibility::Public(_))
            });
        }

        errors.finish()?;

        Ok(Self {
            ident: attrs.ident,
            generics: attrs.generics,
            krate: attrs.krate.unwrap_or_else(default_crate_path),
            fields
        })
    }

    /// Fields the validator reads.
    pub fn exported_fields(&self) -> impl Iterator<Item = &FieldDef> {
        self.fields.iter().filter(|f| f.exported)
    }
}
