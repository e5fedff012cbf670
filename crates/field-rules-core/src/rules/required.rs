// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `required` rule.

use crate::{
    error::RuleError,
    parse::NamedParams,
    record::{Record, lookup},
    rule::Rule
};

/// Fails when the field holds the zero value of its type.
///
/// Zero values: empty string, `0`, `0.0`, `'\0'`, `None`, empty sequence or
/// map. `Some(_)` is never zero, whatever it wraps.
#[derive(Debug, Clone, Copy, Default)]
pub struct Required;

impl Rule for Required {
    fn validate(
        &self,
        record: &dyn Record,
        field: &str,
        _params: &[String],
        _named: &NamedParams
    ) -> Result<(), RuleError> {
        if lookup(record, field)?.is_zero() {
            return Err(RuleError::input(format!("a value is required for {}", field)));
        }
        Ok(())
    }
}
