// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Convenient re-exports for common usage.
//!
//! # Usage
//!
//! ```rust
//! use field_rules_core::prelude::*;
//! ```

pub use crate::{
    FieldDescriptor, FieldErrors, FieldValue, InputError, Inspect, LogicError, NamedParams,
    Record, Rule, RuleError, RuleRegistry, ValidationFailure, ValidationResult, Validator,
    ValidatorConfig, lookup, register_rule, validate
};
