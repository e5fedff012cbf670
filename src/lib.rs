// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]

//! # field-rules
//!
//! One crate, all features. Re-exports:
//! - [`Record`](macro@Record) derive macro from `field-rules-derive`
//! - All types from `field-rules-core` ([`Validator`], [`RuleRegistry`],
//!   [`ValidationResult`], [`rules`])
//!
//! # Quick Start
//!
//! ```rust
//! use field_rules::{Record, validate};
//!
//! #[derive(Record)]
//! pub struct Signup {
//!     #[validate(rules = "required|len:>=,3")]
//!     pub name: String
//! }
//!
//! let result = validate(&Signup {
//!     name: "Al".into()
//! });
//! assert_eq!(
//!     result.errors_for("name").unwrap()[0].message(),
//!     "The field name should have a length greater than, or equal to 3. Actual length: 2"
//! );
//! ```

pub use field_rules_core::*;
pub use field_rules_derive::Record;
