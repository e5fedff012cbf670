// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `len` / `length` rule.
//!
//! # Syntax
//!
//! ```text
//! len:5       length equal to 5
//! len:>=,3    length greater than, or equal to 3
//! ```
//!
//! | Operator | Literal in messages |
//! |----------|---------------------|
//! | `=` | equal to |
//! | `>` | greater than |
//! | `>=` | greater than, or equal to |
//! | `<` | lower than |
//! | `<=` | lower than, or equal to |
//!
//! Length is the number of Unicode scalar values in the stringified field.

use crate::{
    error::{LogicError, RuleError},
    parse::NamedParams,
    record::{Record, lookup},
    rule::Rule
};

/// Compares the rune count of a field against a bound.
#[derive(Debug, Clone, Copy, Default)]
pub struct Length;

impl Rule for Length {
    fn validate(
        &self,
        record: &dyn Record,
        field: &str,
        params: &[String],
        _named: &NamedParams
    ) -> Result<(), RuleError> {
        let (op, bound) = match params {
            [bound] => ("=", bound.as_str()),
            [op, bound] => (op.as_str(), bound.as_str()),
            _ => {
                return Err(LogicError::ParamCount(
                    "this rule needs one or two params: [operator,] length"
                )
                .into());
            }
        };

        let required: i64 = bound.parse().map_err(|e: std::num::ParseIntError| {
            LogicError::InvalidParam {
                param:  bound.to_string(),
                reason: e.to_string()
            }
        })?;

        let length = lookup(record, field)?.stringify()?.chars().count() as i64;

        let (ok, literal) = match op {
            "=" => (length == required, "equal to"),
            ">" => (length > required, "greater than"),
            ">=" => (length >= required, "greater than, or equal to"),
            "<" => (length < required, "lower than"),
            "<=" => (length <= required, "lower than, or equal to"),
            _ => return Err(RuleError::input("Invalid operator"))
        };

        if ok {
            return Ok(());
        }
        Err(RuleError::input(format!(
            "The field {} should have a length {} {}. Actual length: {}",
            field, literal, required, length
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::InputError,
        record::FieldDescriptor,
        value::{FieldValue, Inspect}
    };

    struct Name(&'static str);

    impl Record for Name {
        fn descriptors(&self) -> &'static [FieldDescriptor] {
            &[]
        }

        fn field(&self, name: &str) -> Option<FieldValue<'_>> {
            (name == "Name").then(|| self.0.view())
        }
    }

    fn check(value: &'static str, params: &[&str]) -> Result<(), RuleError> {
        let params: Vec<String> = params.iter().map(|p| p.to_string()).collect();
        Length.validate(&Name(value), "Name", &params, &NamedParams::new())
    }

    fn input(result: Result<(), RuleError>) -> InputError {
        match result {
            Err(RuleError::Input(e)) => e,
            other => panic!("expected input error, got {:?}", other)
        }
    }

    #[test]
    fn single_param_means_equal() {
        assert!(check("Jon", &["3"]).is_ok());
        assert!(check("Jon", &["=", "3"]).is_ok());
    }

    #[test]
    fn counts_runes_not_bytes() {
        assert!(check("héllo", &["5"]).is_ok());
        assert!(check("日本", &["<=", "2"]).is_ok());
    }

    #[test]
    fn operators() {
        assert!(check("Basil", &["<", "7"]).is_ok());
        assert!(check("Basil", &[">", "4"]).is_ok());
        assert!(check("Basil", &[">=", "5"]).is_ok());
        assert!(check("Basil", &["<=", "5"]).is_ok());
        assert!(check("Basil", &["<=", "4"]).is_err());
    }

    #[test]
    fn failure_message() {
        let err = input(check("Johnny", &["=", "3"]));
        assert_eq!(
            err.message(),
            "The field Name should have a length equal to 3. Actual length: 6"
        );
    }

    #[test]
    fn unknown_operator_is_input_error() {
        let err = input(check("Johnny", &["x", "3"]));
        assert_eq!(err.message(), "Invalid operator");
    }

    #[test]
    fn wrong_param_count_is_logic_error() {
        let result = check("Jon", &[">=", "3", "zz"]);
        assert!(matches!(result, Err(RuleError::Logic(LogicError::ParamCount(_)))));
        let result = check("Jon", &[]);
        assert!(matches!(result, Err(RuleError::Logic(LogicError::ParamCount(_)))));
    }

    #[test]
    fn non_numeric_bound_is_logic_error() {
        let result = check("Jon", &[">=", "x"]);
        assert!(matches!(
            result,
            Err(RuleError::Logic(LogicError::InvalidParam { ref param, .. })) if param == "x"
        ));
    }
}
