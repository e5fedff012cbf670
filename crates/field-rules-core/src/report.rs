// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Outcome of one validation run.
//!
//! A [`ValidationResult`] carries at most one [`LogicError`] and the
//! accumulated [`FieldErrors`]. The two are never mixed: a run that aborts
//! on a logic error reports no field errors.
//!
//! # Consumer Policy
//!
//! | Outcome | Typical HTTP mapping |
//! |---------|----------------------|
//! | `logic_error` set | 500, a defect on the server side |
//! | `field_errors` non-empty | 400/422, bad client data |
//! | [`is_ok`](ValidationResult::is_ok) | proceed |

use std::fmt;

use indexmap::IndexMap;

use crate::error::{InputError, LogicError};

/// Input errors keyed by dot-joined field path.
///
/// Paths iterate in the order their first error was recorded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(transparent))]
pub struct FieldErrors {
    errors: IndexMap<String, Vec<InputError>>
}

impl FieldErrors {
    /// Create an empty error list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error for `path`.
    pub fn push(&mut self, path: impl Into<String>, error: InputError) {
        self.errors.entry(path.into()).or_default().push(error);
    }

    /// Errors recorded for `path`.
    pub fn get(&self, path: &str) -> Option<&[InputError]> {
        self.errors.get(path).map(Vec::as_slice)
    }

    /// Check if `path` has errors.
    pub fn contains(&self, path: &str) -> bool {
        self.errors.contains_key(path)
    }

    /// Number of paths with errors.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Total number of individual errors.
    pub fn total(&self) -> usize {
        self.errors.values().map(Vec::len).sum()
    }

    /// Check if no error was recorded.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Iterate over `(path, errors)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[InputError])> {
        self.errors.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Field paths with errors.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.errors.keys().map(String::as_str)
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (path, errors) in &self.errors {
            write!(f, "{}: ", path)?;
            for (i, error) in errors.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{}", error)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a FieldErrors {
    type Item = (&'a String, &'a Vec<InputError>);
    type IntoIter = indexmap::map::Iter<'a, String, Vec<InputError>>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

/// Complete outcome of one validation run.
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    /// Fatal configuration defect that aborted the run.
    pub logic_error:  Option<LogicError>,
    /// Accumulated input errors.
    pub field_errors: FieldErrors
}

impl ValidationResult {
    /// Result of a run that passed or collected input errors.
    pub fn from_errors(field_errors: FieldErrors) -> Self {
        Self {
            logic_error: None,
            field_errors
        }
    }

    /// Result of an aborted run.
    pub fn from_logic(error: LogicError) -> Self {
        Self {
            logic_error:  Some(error),
            field_errors: FieldErrors::new()
        }
    }

    /// Check if there is neither a logic error nor any field error.
    pub fn is_ok(&self) -> bool {
        self.logic_error.is_none() && self.field_errors.is_empty()
    }

    /// Check if the run aborted.
    pub const fn has_logic_error(&self) -> bool {
        self.logic_error.is_some()
    }

    /// Errors recorded for a field path.
    pub fn errors_for(&self, path: &str) -> Option<&[InputError]> {
        self.field_errors.get(path)
    }

    /// Convert into a `Result` for `?`-style handling.
    ///
    /// # Errors
    ///
    /// [`ValidationFailure::Logic`] when the run aborted,
    /// [`ValidationFailure::Input`] when fields failed.
    pub fn into_result(self) -> Result<(), ValidationFailure> {
        match self.logic_error {
            Some(error) => Err(ValidationFailure::Logic(error)),
            None if self.field_errors.is_empty() => Ok(()),
            None => Err(ValidationFailure::Input(self.field_errors))
        }
    }
}

/// Failed validation, split by tier.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ValidationFailure {
    /// The run aborted on a configuration defect.
    #[error("validation aborted: {0}")]
    Logic(LogicError),

    /// One or more fields hold bad data.
    #[error("validation failed for {} field(s)", .0.len())]
    Input(FieldErrors)
}

impl ValidationFailure {
    /// Check if this is a configuration defect.
    pub const fn is_logic(&self) -> bool {
        matches!(self, Self::Logic(_))
    }
}
