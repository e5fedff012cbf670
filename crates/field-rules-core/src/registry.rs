// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Name → rule lookup table.
//!
//! Lookups take a shared lock and registration an exclusive one, so
//! registering while validations run is race-free. Registering a name that
//! already exists replaces the previous rule.
//!
//! # Global Registry
//!
//! [`RuleRegistry::global`] is created on first use with every built-in
//! rule installed. [`register_rule`] adds to it. Finish registration
//! during application bootstrap, before validation traffic starts, so every
//! request sees the same rule set.

use std::{collections::HashMap, fmt, sync::Arc};

use once_cell::sync::Lazy;
use parking_lot::RwLock;

use crate::{rule::Rule, rules};

static GLOBAL: Lazy<Arc<RuleRegistry>> = Lazy::new(|| Arc::new(RuleRegistry::with_builtins()));

/// Register a rule in the global registry.
pub fn register_rule<R>(name: impl Into<String>, rule: R)
where
    R: Rule + 'static
{
    RuleRegistry::global().register(name, rule);
}

/// Concurrency-safe rule table.
#[derive(Default)]
pub struct RuleRegistry {
    rules: RwLock<HashMap<String, Arc<dyn Rule>>>
}

impl RuleRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding every built-in rule.
    pub fn with_builtins() -> Self {
        let registry = Self::new();
        rules::install(&registry);
        registry
    }

    /// Process-wide registry.
    pub fn global() -> &'static Arc<RuleRegistry> {
        &GLOBAL
    }

    /// Register `rule` under `name`, replacing any previous entry.
    pub fn register<R>(&self, name: impl Into<String>, rule: R)
    where
        R: Rule + 'static
    {
        self.register_shared(name, Arc::new(rule));
    }

    /// Register an already shared rule, e.g. one instance under two names.
    pub fn register_shared(&self, name: impl Into<String>, rule: Arc<dyn Rule>) {
        let name = name.into();
        let previous = self.rules.write().insert(name.clone(), rule);
        if previous.is_some() {
            tracing::debug!(rule = %name, "rule overwritten");
        } else {
            tracing::debug!(rule = %name, "rule registered");
        }
    }

    /// Remove a rule, returning it if present.
    pub fn unregister(&self, name: &str) -> Option<Arc<dyn Rule>> {
        self.rules.write().remove(name)
    }

    /// Look up a rule by name.
    pub fn get(&self, name: &str) -> Option<Arc<dyn Rule>> {
        self.rules.read().get(name).cloned()
    }

    /// Check if a rule is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.rules.read().contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<_> = self.rules.read().keys().cloned().collect();
        names.sort();
        names
    }

    /// Number of registered rules.
    pub fn len(&self) -> usize {
        self.rules.read().len()
    }

    /// Check if no rule is registered.
    pub fn is_empty(&self) -> bool {
        self.rules.read().is_empty()
    }
}

impl fmt::Debug for RuleRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleRegistry")
            .field("rules", &self.names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use super::*;
    use crate::{
        error::RuleError,
        parse::NamedParams,
        record::Record
    };

    struct Fixed(&'static str);

    impl Rule for Fixed {
        fn validate(
            &self,
            _: &dyn Record,
            _: &str,
            _: &[String],
            _: &NamedParams
        ) -> Result<(), RuleError> {
            Err(RuleError::input(self.0))
        }
    }

    fn message(rule: &Arc<dyn Rule>) -> String {
        struct Empty;
        impl Record for Empty {
            fn descriptors(&self) -> &'static [crate::record::FieldDescriptor] {
                &[]
            }

            fn field(&self, _: &str) -> Option<crate::value::FieldValue<'_>> {
                None
            }
        }

        match rule.validate(&Empty, "f", &[], &NamedParams::new()) {
            Err(RuleError::Input(e)) => e.to_string(),
            other => panic!("unexpected outcome: {:?}", other)
        }
    }

    #[test]
    fn register_and_get() {
        let registry = RuleRegistry::new();
        assert!(registry.is_empty());

        registry.register("a", Fixed("first"));
        assert!(registry.contains("a"));
        assert_eq!(registry.len(), 1);
        assert!(registry.get("missing").is_none());
    }

    #[test]
    fn last_registration_wins() {
        let registry = RuleRegistry::new();
        registry.register("a", Fixed("first"));
        registry.register("a", Fixed("second"));

        let rule = registry.get("a").unwrap();
        assert_eq!(message(&rule), "second");
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn unregister_removes() {
        let registry = RuleRegistry::new();
        registry.register("a", Fixed("first"));
        assert!(registry.unregister("a").is_some());
        assert!(!registry.contains("a"));
    }

    #[test]
    fn builtins_are_installed() {
        let registry = RuleRegistry::with_builtins();
        assert_eq!(
            registry.names(),
            vec![
                "contains",
                "email",
                "hasPrefix",
                "hasSuffix",
                "len",
                "length",
                "regexp",
                "required",
                "url"
            ]
        );
    }

    #[test]
    fn global_has_builtins() {
        assert!(RuleRegistry::global().contains("required"));
    }

    #[test]
    fn concurrent_register_and_get() {
        let registry = Arc::new(RuleRegistry::new());

        thread::scope(|scope| {
            for i in 0..8 {
                let registry = Arc::clone(&registry);
                scope.spawn(move || {
                    for j in 0..100 {
                        registry.register(format!("r{}_{}", i, j), Fixed("x"));
                        let _ = registry.get(&format!("r{}_{}", (i + 1) % 8, j));
                    }
                });
            }
        });

        assert_eq!(registry.len(), 800);
    }
}
