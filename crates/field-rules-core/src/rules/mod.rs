// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Built-in rules.
//!
//! | Name | Params | Fails when |
//! |------|--------|------------|
//! | `required` | none | value is the zero value of its type |
//! | `len`, `length` | `N` or `op,N` | rune count does not satisfy `op N` |
//! | `contains` | `text` | value does not contain `text` |
//! | `hasPrefix` | `text` | value does not start with `text` |
//! | `hasSuffix` | `text` | value does not end with `text` |
//! | `email` | none | value is not an email address |
//! | `url` | none | value is not an http(s) URL |
//! | `regexp` | `pattern[,allowEmpty:1]` | value does not match `pattern` |
//!
//! Nothing is registered implicitly; [`install`] is the bootstrap step used
//! by [`RuleRegistry::with_builtins`](crate::RuleRegistry::with_builtins)
//! and the global registry.

mod length;
mod pattern;
mod required;
mod text;

use std::sync::Arc;

pub use length::Length;
pub use pattern::{EMAIL_PATTERN, PatternRule, RegexpRule, URL_PATTERN};
pub use required::Required;
pub use text::{Contains, HasPrefix, HasSuffix};

use crate::{error::LogicError, registry::RuleRegistry};

/// Register every built-in rule in `registry`.
pub fn install(registry: &RuleRegistry) {
    let length: Arc<dyn crate::Rule> = Arc::new(Length);
    registry.register_shared("len", Arc::clone(&length));
    registry.register_shared("length", length);

    registry.register("required", Required);
    registry.register("contains", Contains);
    registry.register("hasPrefix", HasPrefix);
    registry.register("hasSuffix", HasSuffix);
    registry.register("email", PatternRule::email());
    registry.register("url", PatternRule::url());
    registry.register("regexp", RegexpRule::default());
}

/// The single positional parameter of a one-parameter rule.
fn single_param(params: &[String]) -> Result<&str, LogicError> {
    match params {
        [param] => Ok(param),
        _ => Err(LogicError::ParamCount("this rule needs one mandatory parameter"))
    }
}
