// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Substring rules: `contains`, `hasPrefix`, `hasSuffix`.
//!
//! Each takes exactly one positional parameter and lets an empty value
//! pass; pair with `required` to reject empty input.

use super::single_param;
use crate::{
    error::RuleError,
    parse::NamedParams,
    record::{Record, lookup},
    rule::Rule
};

/// Shared body of the substring rules.
fn check(
    record: &dyn Record,
    field: &str,
    params: &[String],
    matches: fn(&str, &str) -> bool,
    verb: &str
) -> Result<(), RuleError> {
    let param = single_param(params)?;
    let value = lookup(record, field)?.stringify()?;
    if value.is_empty() || matches(&value, param) {
        return Ok(());
    }
    Err(RuleError::input(format!(
        "The field {} = {} should {} {}.",
        field, value, verb, param
    )))
}

/// Fails when the value does not contain the parameter.
#[derive(Debug, Clone, Copy, Default)]
pub struct Contains;

impl Rule for Contains {
    fn validate(
        &self,
        record: &dyn Record,
        field: &str,
        params: &[String],
        _named: &NamedParams
    ) -> Result<(), RuleError> {
        check(record, field, params, |v, p| v.contains(p), "contain")
    }
}

/// Fails when the value does not start with the parameter.
#[derive(Debug, Clone, Copy, Default)]
pub struct HasPrefix;

impl Rule for HasPrefix {
    fn validate(
        &self,
        record: &dyn Record,
        field: &str,
        params: &[String],
        _named: &NamedParams
    ) -> Result<(), RuleError> {
        check(record, field, params, |v, p| v.starts_with(p), "start with")
    }
}

/// Fails when the value does not end with the parameter.
#[derive(Debug, Clone, Copy, Default)]
pub struct HasSuffix;

impl Rule for HasSuffix {
    fn validate(
        &self,
        record: &dyn Record,
        field: &str,
        params: &[String],
        _named: &NamedParams
    ) -> Result<(), RuleError> {
        check(record, field, params, |v, p| v.ends_with(p), "end with")
    }
}
