// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Runtime for field-rules: tag parser, rule registry and validation engine.
//!
//! Records describe their fields through [`Record`]; each exported field may
//! carry a rule tag such as `"required|len:>=,3"`. A [`Validator`] walks the
//! record, resolves every rule by name and collects the outcome in a
//! [`ValidationResult`].
//!
//! # Overview
//!
//! - [`Record`] / [`Inspect`] — Read-only access to fields and values
//! - [`parse_tag`] — Tag grammar: `rule[:params]{sep rule[:params]}`
//! - [`Rule`] / [`RuleRegistry`] — Named validation logic
//! - [`Validator`] / [`validate`] — Traversal and error collection
//! - [`rules`] — Built-in rules
//! - [`prelude`] — Convenient re-exports
//!
//! # Error Tiers
//!
//! ```text
//! Rule::validate
//! │
//! ├── Ok ──────────► next rule
//! ├── Input ───────► FieldErrors (run continues)
//! └── Logic/panic ─► logic_error (run aborts)
//! ```
//!
//! Most users should depend on `field-rules`, which adds `#[derive(Record)]`.
//! Records can also be implemented by hand:
//!
//! ```rust
//! use field_rules_core::{FieldDescriptor, FieldValue, Inspect, Record, validate};
//!
//! struct Login {
//!     pub user: String
//! }
//!
//! impl Record for Login {
//!     fn descriptors(&self) -> &'static [FieldDescriptor] {
//!         const FIELDS: &[FieldDescriptor] = &[FieldDescriptor::exported("user", "required")];
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
//!
//! let result = validate(&Login {
//!     user: String::new()
//! });
//! assert_eq!(
//!     result.errors_for("user").unwrap()[0].message(),
//!     "a value is required for user"
//! );
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod config;
mod engine;
mod error;
mod parse;
pub mod prelude;
mod record;
mod registry;
mod report;
mod rule;
pub mod rules;
mod value;

pub use config::ValidatorConfig;
pub use engine::{Validator, ValidatorBuilder, validate};
pub use error::{InputError, LogicError, RuleError};
pub use parse::{DEFAULT_SEPARATOR, NamedParams, RuleInvocation, parse_tag};
pub use record::{FieldDescriptor, Record, Visibility, lookup};
pub use registry::{RuleRegistry, register_rule};
pub use report::{FieldErrors, ValidationFailure, ValidationResult};
pub use rule::Rule;
pub use value::{FieldValue, Inspect};
