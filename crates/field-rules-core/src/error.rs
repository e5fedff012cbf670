// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Two-tier error model.
//!
//! | Tier | Type | Meaning | Propagation |
//! |------|------|---------|-------------|
//! | Logic | [`LogicError`] | Configuration or programming defect | Aborts the whole run |
//! | Input | [`InputError`] | Bad user data for one field | Accumulated per field |
//!
//! Rules report either tier through [`RuleError`], which converts from both
//! so `?` works inside rule bodies.

use std::{error::Error as StdError, fmt, sync::Arc};

/// Fatal, non-accumulating error signaling a configuration defect.
///
/// A run that hits a logic error returns it as its only outcome; any field
/// errors collected so far are discarded.
#[derive(Debug, Clone, thiserror::Error)]
pub enum LogicError {
    /// A tag references a rule name that no registry knows.
    #[error("rule not found: {0}")]
    RuleNotFound(String),

    /// The value handed to the engine is not a record.
    #[error("the underlying type of the validation data must be a record or a reference to one")]
    StructExpected,

    /// A rule received a value kind it cannot work with.
    #[error("unsupported type for rule: {0}")]
    UnsupportedType(String),

    /// A rule asked for a field the record does not expose.
    #[error("field not found: {0}")]
    FieldNotFound(String),

    /// Wrong number of rule parameters.
    #[error("{0}")]
    ParamCount(&'static str),

    /// A parameter could not be interpreted (e.g. a non-numeric length).
    #[error("invalid parameter {param:?}: {reason}")]
    InvalidParam {
        /// Raw parameter text.
        param:  String,
        /// Why the parameter was rejected.
        reason: String
    },

    /// A regular expression parameter failed to compile.
    #[error("invalid pattern {pattern:?}: {reason}")]
    InvalidPattern {
        /// Raw pattern text.
        pattern: String,
        /// Compiler message.
        reason:  String
    },

    /// A rule panicked; the payload message is preserved.
    #[error("{0}")]
    Panic(String),

    /// A foreign error raised by a rule.
    #[error(transparent)]
    Rule(Arc<dyn StdError + Send + Sync>),

    /// Free-form logic error for custom rules.
    #[error("{0}")]
    Custom(String)
}

impl LogicError {
    /// Create a free-form logic error.
    pub fn custom(message: impl Into<String>) -> Self {
        Self::Custom(message.into())
    }

    /// Wrap a foreign error.
    pub fn rule<E>(error: E) -> Self
    where
        E: StdError + Send + Sync + 'static
    {
        Self::Rule(Arc::new(error))
    }
}

/// Recoverable validation failure for one field.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(transparent))]
pub struct InputError {
    message: String
}

impl InputError {
    /// Create a new input error.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into()
        }
    }

    /// Human readable message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl StdError for InputError {}

/// Outcome of a failed rule invocation.
#[derive(Debug, Clone)]
pub enum RuleError {
    /// Configuration defect, aborts the run.
    Logic(LogicError),
    /// Bad user data, recorded against the field.
    Input(InputError)
}

impl RuleError {
    /// Shorthand for an input error with the given message.
    pub fn input(message: impl Into<String>) -> Self {
        Self::Input(InputError::new(message))
    }

    /// Check if this is a logic error.
    pub const fn is_logic(&self) -> bool {
        matches!(self, Self::Logic(_))
    }

    /// Check if this is an input error.
    pub const fn is_input(&self) -> bool {
        matches!(self, Self::Input(_))
    }
}

impl From<LogicError> for RuleError {
    fn from(error: LogicError) -> Self {
        Self::Logic(error)
    }
}

impl From<InputError> for RuleError {
    fn from(error: InputError) -> Self {
        Self::Input(error)
    }
}

impl fmt::Display for RuleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Logic(e) => write!(f, "logic error: {}", e),
            Self::Input(e) => write!(f, "input error: {}", e)
        }
    }
}

impl StdError for RuleError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::Logic(e) => Some(e),
            Self::Input(e) => Some(e)
        }
    }
}
