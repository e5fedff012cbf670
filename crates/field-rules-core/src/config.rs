// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Validator configuration.

use crate::parse::DEFAULT_SEPARATOR;

/// Settings for a [`Validator`](crate::Validator).
///
/// With the `serde` feature the config can be loaded from application
/// settings; missing keys take their defaults.
///
/// ```rust
/// use field_rules_core::ValidatorConfig;
///
/// let config = ValidatorConfig::default().separator(";");
/// assert_eq!(config.separator, ";");
/// assert!(config.global_fallback);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct ValidatorConfig {
    /// String separating rules inside one tag. An empty string means
    /// [`DEFAULT_SEPARATOR`].
    pub separator:       String,
    /// Consult the global registry for names the instance registry lacks.
    pub global_fallback: bool
}

impl ValidatorConfig {
    /// Set the rule separator. An empty separator falls back to
    /// [`DEFAULT_SEPARATOR`].
    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Separator used when splitting tags.
    ///
    /// ```rust
    /// use field_rules_core::ValidatorConfig;
    ///
    /// assert_eq!(ValidatorConfig::default().separator("").effective_separator(), "|");
    /// ```
    pub fn effective_separator(&self) -> &str {
        if self.separator.is_empty() {
            DEFAULT_SEPARATOR
        } else {
            &self.separator
        }
    }

    /// Enable or disable the global registry fallback.
    pub fn global_fallback(mut self, enabled: bool) -> Self {
        self.global_fallback = enabled;
        self
    }
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            separator:       DEFAULT_SEPARATOR.to_string(),
            global_fallback: true
        }
    }
}
