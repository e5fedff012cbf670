// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Validation engine.
//!
//! # Traversal
//!
//! ```text
//! validate(value)
//! │
//! ├── peel indirection ──► not a record? ──► StructExpected
//! │
//! └── for each descriptor, in declaration order
//!     ├── private ─────────────► skip
//!     ├── nested record ───────► push name, recurse, pop
//!     ├── no rules ────────────► skip
//!     └── parse_tag ──► for each invocation, left to right
//!                       ├── lookup ── missing ──► RuleNotFound (abort)
//!                       └── run under catch_unwind
//!                           ├── Ok ───────► next
//!                           ├── Input ────► record under field path
//!                           └── Logic/panic ► abort
//! ```
//!
//! Every call owns its traversal state, so one [`Validator`] can serve many
//! threads at once.

use std::{
    any::{Any, type_name},
    error::Error as StdError,
    panic::{self, AssertUnwindSafe},
    sync::Arc
};

use once_cell::sync::Lazy;

use crate::{
    config::ValidatorConfig,
    error::{LogicError, RuleError},
    parse::{RuleInvocation, parse_tag},
    record::Record,
    registry::RuleRegistry,
    report::{FieldErrors, ValidationResult},
    rule::Rule,
    value::Inspect
};

static DEFAULT: Lazy<Validator> = Lazy::new(|| {
    Validator::builder()
        .registry(Arc::clone(RuleRegistry::global()))
        .global_fallback(false)
        .build()
});

/// Validate `value` with the process-wide default validator.
///
/// The default validator reads the global registry, so rules added with
/// [`register_rule`](crate::register_rule) are visible here.
pub fn validate<T>(value: &T) -> ValidationResult
where
    T: Inspect + ?Sized
{
    DEFAULT.validate(value)
}

/// Rule-driven record validator.
#[derive(Debug, Clone)]
pub struct Validator {
    registry: Arc<RuleRegistry>,
    config:   ValidatorConfig
}

impl Validator {
    /// Create a validator with an empty instance registry that falls back to
    /// the global registry.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Create a validator with its own built-in rules and no global
    /// fallback.
    pub fn isolated() -> Self {
        Self::builder().builtins(true).global_fallback(false).build()
    }

    /// Start configuring a validator.
    pub fn builder() -> ValidatorBuilder {
        ValidatorBuilder::default()
    }

    /// New validator sharing this one's registry and configuration.
    pub fn copy(&self) -> Self {
        self.clone()
    }

    /// Instance registry.
    pub fn registry(&self) -> &Arc<RuleRegistry> {
        &self.registry
    }

    /// Active configuration.
    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Register a rule in the instance registry.
    pub fn register_rule<R>(&self, name: impl Into<String>, rule: R)
    where
        R: Rule + 'static
    {
        self.registry.register(name, rule);
    }

    /// Resolve a rule name: instance registry first, then the global one
    /// when fallback is enabled.
    pub fn rule(&self, name: &str) -> Option<Arc<dyn Rule>> {
        self.registry.get(name).or_else(|| {
            if self.config.global_fallback {
                RuleRegistry::global().get(name)
            } else {
                None
            }
        })
    }

    /// Validate a record, or a reference to one.
    ///
    /// # Example
    ///
    /// ```rust
    /// use field_rules_core::{FieldDescriptor, FieldValue, Inspect, Record, Validator};
    ///
    /// struct Signup {
    ///     pub name: String
    /// }
    ///
    /// impl Record for Signup {
    ///     fn descriptors(&self) -> &'static [FieldDescriptor] {
    ///         const FIELDS: &[FieldDescriptor] = &[FieldDescriptor::exported("name", "contains:foo")];
    ///         FIELDS
    ///     }
    ///
    ///     fn field(&self, name: &str) -> Option<FieldValue<'_>> {
    ///         (name == "name").then(|| self.name.view())
    ///     }
    /// }
    ///
    /// impl Inspect for Signup {
    ///     fn view(&self) -> FieldValue<'_> {
    ///         FieldValue::Record(self)
    ///     }
    /// }
    ///
    /// let result = Validator::new().validate(&Signup { name: "Bar".into() });
    /// assert_eq!(
    ///     result.errors_for("name").unwrap()[0].message(),
    ///     "The field name = Bar should contain foo."
    /// );
    /// ```
    pub fn validate<T>(&self, value: &T) -> ValidationResult
    where
        T: Inspect + ?Sized
    {
        let target = type_name::<T>();
        tracing::debug!(target_type = target, "validation started");

        let view = match guarded(|| value.view()) {
            Ok(view) => view,
            Err(error) => return ValidationResult::from_logic(error)
        };
        let Some(record) = view.as_record() else {
            tracing::warn!(target_type = target, "validation target is not a record");
            return ValidationResult::from_logic(LogicError::StructExpected);
        };

        let mut walk = Walk {
            validator: self,
            path:      FieldPath::default(),
            errors:    FieldErrors::new()
        };

        match walk.record(record) {
            Ok(()) => {
                tracing::debug!(
                    target_type = target,
                    failed_fields = walk.errors.len(),
                    "validation finished"
                );
                ValidationResult::from_errors(walk.errors)
            }
            Err(error) => {
                tracing::warn!(target_type = target, %error, "validation aborted");
                ValidationResult::from_logic(error)
            }
        }
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for [`Validator`].
#[derive(Debug, Default)]
pub struct ValidatorBuilder {
    config:   ValidatorConfig,
    registry: Option<Arc<RuleRegistry>>,
    builtins: bool
}

impl ValidatorBuilder {
    /// Replace the whole configuration.
    pub fn config(mut self, config: ValidatorConfig) -> Self {
        self.config = config;
        self
    }

    /// Rule separator inside tags. An empty separator falls back to the
    /// default `|`.
    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.config.separator = separator.into();
        self
    }

    /// Whether to consult the global registry for unknown names.
    pub fn global_fallback(mut self, enabled: bool) -> Self {
        self.config.global_fallback = enabled;
        self
    }

    /// Share an existing registry instead of creating one.
    pub fn registry(mut self, registry: Arc<RuleRegistry>) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Install the built-in rules into the instance registry.
    pub fn builtins(mut self, enabled: bool) -> Self {
        self.builtins = enabled;
        self
    }

    /// Finish building.
    pub fn build(self) -> Validator {
        let registry = self.registry.unwrap_or_default();
        if self.builtins {
            crate::rules::install(&registry);
        }
        Validator {
            registry,
            config: self.config
        }
    }
}

/// Stack of enclosing field names during traversal.
#[derive(Debug, Default)]
struct FieldPath {
    segments: Vec<&'static str>
}

impl FieldPath {
    fn push(&mut self, segment: &'static str) {
        self.segments.push(segment);
    }

    fn pop(&mut self) {
        self.segments.pop();
    }

    /// Dot-joined key for `field` under the current path.
    fn key(&self, field: &str) -> String {
        let mut key = String::new();
        for segment in &self.segments {
            key.push_str(segment);
            key.push('.');
        }
        key.push_str(field);
        key
    }
}

/// Per-call traversal state.
struct Walk<'v> {
    validator: &'v Validator,
    path:      FieldPath,
    errors:    FieldErrors
}

impl Walk<'_> {
    fn record(&mut self, record: &dyn Record) -> Result<(), LogicError> {
        for descriptor in guarded(|| record.descriptors())? {
            if !descriptor.is_exported() {
                continue;
            }

            let value = guarded(|| record.field(descriptor.name))?
                .ok_or_else(|| LogicError::FieldNotFound(descriptor.name.to_string()))?;

            if let Some(nested) = value.as_record() {
                if descriptor.has_rules() {
                    tracing::trace!(field = descriptor.name, "rules on nested record ignored");
                }
                self.path.push(descriptor.name);
                let outcome = self.record(nested);
                self.path.pop();
                outcome?;
                continue;
            }

            let invocations = parse_tag(
                descriptor.name,
                descriptor.rules,
                self.validator.config.effective_separator()
            );
            for invocation in &invocations {
                self.apply(record, invocation)?;
            }
        }
        Ok(())
    }

    fn apply(&mut self, record: &dyn Record, invocation: &RuleInvocation) -> Result<(), LogicError> {
        let rule = self
            .validator
            .rule(&invocation.rule)
            .ok_or_else(|| LogicError::RuleNotFound(invocation.rule.clone()))?;

        tracing::trace!(
            rule = %invocation.rule,
            field = %invocation.field,
            params = ?invocation.params,
            "applying rule"
        );

        let outcome = guarded(|| {
            rule.validate(
                record,
                &invocation.field,
                &invocation.params,
                &invocation.named_params
            )
        })?;

        match outcome {
            Ok(()) => Ok(()),
            Err(RuleError::Input(error)) => {
                self.errors.push(self.path.key(&invocation.field), error);
                Ok(())
            }
            Err(RuleError::Logic(error)) => Err(error)
        }
    }
}

/// Run caller code (a rule, an accessor), turning a panic into a logic
/// error.
fn guarded<T, F>(run: F) -> Result<T, LogicError>
where
    F: FnOnce() -> T
{
    panic::catch_unwind(AssertUnwindSafe(run)).map_err(|payload| {
        let error = recover(payload);
        tracing::warn!(%error, "caller code panicked");
        error
    })
}

fn recover(payload: Box<dyn Any + Send>) -> LogicError {
    let payload = match payload.downcast::<LogicError>() {
        Ok(error) => return *error,
        Err(other) => other
    };
    let payload = match payload.downcast::<Box<dyn StdError + Send + Sync>>() {
        Ok(error) => return LogicError::Rule(Arc::from(*error)),
        Err(other) => other
    };

    if let Some(message) = payload.downcast_ref::<&str>() {
        LogicError::Panic((*message).to_string())
    } else if let Some(message) = payload.downcast_ref::<String>() {
        LogicError::Panic(message.clone())
    } else {
        LogicError::Panic("panic recovered".to_string())
    }
}
