// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Static field metadata for records.
//!
//! A record describes its fields once per type through a
//! `&'static [FieldDescriptor]` and answers field lookups by name. The
//! `#[derive(Record)]` macro writes both; manual implementations look like
//! this:
//!
//! ```rust
//! use field_rules_core::{FieldDescriptor, FieldValue, Inspect, Record};
//!
//! struct Login {
//!     pub user: String,
//!     secret:   String
//! }
//!
//! impl Record for Login {
//!     fn descriptors(&self) -> &'static [FieldDescriptor] {
//!         const FIELDS: &[FieldDescriptor] = &[
//!             FieldDescriptor::exported("user", "required|len:>=,3"),
//!             FieldDescriptor::private("secret")
//!         ];
//!         FIELDS
//!     }
//!
//!     fn field(&self, name: &str) -> Option<FieldValue<'_>> {
//!         match name {
//!             "user" => Some(self.user.view()),
//!             _ => None
//!         }
//!     }
//! }
//!
//! impl Inspect for Login {
//!     fn view(&self) -> FieldValue<'_> {
//!         FieldValue::Record(self)
//!     }
//! }
//! ```

use crate::{error::LogicError, value::FieldValue};

/// Whether the engine may see a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Visibility {
    /// Visible to the engine and to rules.
    Exported,
    /// Invisible; skipped during traversal.
    Private
}

/// Declaration of one record field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldDescriptor {
    /// Name used for lookups and as the error key segment.
    pub name:       &'static str,
    /// Declarative rule string, empty when the field carries none.
    pub rules:      &'static str,
    /// Engine visibility.
    pub visibility: Visibility
}

impl FieldDescriptor {
    /// Describe an exported field.
    pub const fn exported(name: &'static str, rules: &'static str) -> Self {
        Self {
            name,
            rules,
            visibility: Visibility::Exported
        }
    }

    /// Describe a private field.
    pub const fn private(name: &'static str) -> Self {
        Self {
            name,
            rules: "",
            visibility: Visibility::Private
        }
    }

    /// Check if the engine may see this field.
    pub const fn is_exported(&self) -> bool {
        matches!(self.visibility, Visibility::Exported)
    }

    /// Check if the field carries declarative rules.
    pub const fn has_rules(&self) -> bool {
        !self.rules.is_empty()
    }
}

/// A value with named, described fields.
pub trait Record {
    /// Field declarations in declaration order.
    fn descriptors(&self) -> &'static [FieldDescriptor];

    /// Current value of an exported field, `None` for unknown or private
    /// names.
    fn field(&self, name: &str) -> Option<FieldValue<'_>>;
}

/// Read a field for a rule.
///
/// # Errors
///
/// [`LogicError::FieldNotFound`] when the record does not expose `field`.
pub fn lookup<'a>(record: &'a dyn Record, field: &str) -> Result<FieldValue<'a>, LogicError> {
    record
        .field(field)
        .ok_or_else(|| LogicError::FieldNotFound(field.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Inspect;

    struct Account {
        pub name: String,
        #[allow(dead_code)]
        token:    String
    }

    impl Record for Account {
        fn descriptors(&self) -> &'static [FieldDescriptor] {
            const FIELDS: &[FieldDescriptor] = &[
                FieldDescriptor::exported("name", "required"),
                FieldDescriptor::private("token")
            ];
            FIELDS
        }

        fn field(&self, name: &str) -> Option<FieldValue<'_>> {
            match name {
                "name" => Some(self.name.view()),
                _ => None
            }
        }
    }

    fn account() -> Account {
        Account {
            name:  "ann".to_string(),
            token: "t".to_string()
        }
    }

    #[test]
    fn descriptor_constructors() {
        let exported = FieldDescriptor::exported("a", "required");
        assert!(exported.is_exported());
        assert!(exported.has_rules());

        let private = FieldDescriptor::private("b");
        assert!(!private.is_exported());
        assert!(!private.has_rules());
    }

    #[test]
    fn lookup_exported_field() {
        let record = account();
        let value = lookup(&record, "name").unwrap();
        assert_eq!(value.as_str(), Some("ann"));
    }

    #[test]
    fn lookup_private_field_fails() {
        let record = account();
        let err = lookup(&record, "token").unwrap_err();
        assert!(matches!(err, LogicError::FieldNotFound(ref f) if f == "token"));
    }
}
