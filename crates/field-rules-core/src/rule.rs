// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! The rule contract.

use crate::{error::RuleError, parse::NamedParams, record::Record};

/// A unit of validation logic.
///
/// `record` is the enclosing record, not the field value; the rule reads the
/// field itself (see [`lookup`](crate::lookup)) and may read sibling fields
/// for cross-field checks. Rules are shared by every caller and must not
/// keep unguarded mutable state.
///
/// # Outcomes
///
/// | Return | Effect |
/// |--------|--------|
/// | `Ok(())` | Field passes this rule |
/// | `Err(RuleError::Input(_))` | Recorded against the field, run continues |
/// | `Err(RuleError::Logic(_))` | Whole run aborts |
///
/// Closures with the same signature are rules:
///
/// ```rust
/// use field_rules_core::{NamedParams, Record, RuleError, RuleRegistry, lookup};
///
/// let registry = RuleRegistry::new();
/// registry.register(
///     "even",
///     |record: &dyn Record, field: &str, _: &[String], _: &NamedParams| -> Result<(), RuleError> {
///         match lookup(record, field)?.stringify()?.parse::<i64>() {
///             Ok(n) if n % 2 == 0 => Ok(()),
///             _ => Err(RuleError::input(format!("{field} must be even")))
///         }
///     }
/// );
/// assert!(registry.contains("even"));
/// ```
pub trait Rule: Send + Sync {
    /// Check one field of `record`.
    fn validate(
        &self,
        record: &dyn Record,
        field: &str,
        params: &[String],
        named: &NamedParams
    ) -> Result<(), RuleError>;
}

impl<F> Rule for F
where
    F: Fn(&dyn Record, &str, &[String], &NamedParams) -> Result<(), RuleError> + Send + Sync
{
    fn validate(
        &self,
        record: &dyn Record,
        field: &str,
        params: &[String],
        named: &NamedParams
    ) -> Result<(), RuleError> {
        self(record, field, params, named)
    }
}
