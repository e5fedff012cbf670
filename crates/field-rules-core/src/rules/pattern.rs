// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Regular-expression rules: `email`, `url` and ad-hoc `regexp`.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use parking_lot::RwLock;
use regex::Regex;

use super::single_param;
use crate::{
    error::{LogicError, RuleError},
    parse::NamedParams,
    record::{Record, lookup},
    rule::Rule
};

/// Pattern behind the `email` rule.
pub const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9_.+-]+@[a-zA-Z0-9-]+\.[a-zA-Z0-9.-]+$";

/// Pattern behind the `url` rule.
pub const URL_PATTERN: &str = r"^(https?://)?([\da-z.-]+)\.([a-z.]{2,6})([/\w .-]*)*/?$";

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(EMAIL_PATTERN).expect("email pattern compiles"));

static URL_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(URL_PATTERN).expect("url pattern compiles"));

fn mismatch(field: &str, regex: &Regex) -> RuleError {
    RuleError::input(format!(
        "The value of field {} does not match regexp {}",
        field,
        regex.as_str()
    ))
}

/// Fixed-pattern rule. An empty value passes.
#[derive(Debug, Clone)]
pub struct PatternRule {
    regex: Regex
}

impl PatternRule {
    /// Compile a rule from a pattern.
    ///
    /// # Errors
    ///
    /// [`LogicError::InvalidPattern`] when the pattern does not compile.
    pub fn new(pattern: &str) -> Result<Self, LogicError> {
        let regex = Regex::new(pattern).map_err(|e| LogicError::InvalidPattern {
            pattern: pattern.to_string(),
            reason:  e.to_string()
        })?;
        Ok(Self {
            regex
        })
    }

    /// Rule built from an already compiled regex.
    pub fn from_regex(regex: Regex) -> Self {
        Self {
            regex
        }
    }

    /// The `email` rule.
    pub fn email() -> Self {
        Self::from_regex(EMAIL_REGEX.clone())
    }

    /// The `url` rule.
    pub fn url() -> Self {
        Self::from_regex(URL_REGEX.clone())
    }

    /// Underlying regex.
    pub fn regex(&self) -> &Regex {
        &self.regex
    }
}

impl Rule for PatternRule {
    fn validate(
        &self,
        record: &dyn Record,
        field: &str,
        _params: &[String],
        _named: &NamedParams
    ) -> Result<(), RuleError> {
        let value = lookup(record, field)?.stringify()?;
        if value.is_empty() || self.regex.is_match(&value) {
            return Ok(());
        }
        Err(mismatch(field, &self.regex))
    }
}

/// `regexp:<pattern>[,allowEmpty:1]`.
///
/// The pattern cannot contain `,`, `:` or the rule separator. An empty
/// value is matched against the pattern unless `allowEmpty` is `1` or
/// `true`. Compiled patterns are cached per rule instance.
#[derive(Debug, Default)]
pub struct RegexpRule {
    cache: RwLock<HashMap<String, Regex>>
}

impl RegexpRule {
    fn compiled(&self, pattern: &str) -> Result<Regex, LogicError> {
        if let Some(regex) = self.cache.read().get(pattern) {
            return Ok(regex.clone());
        }

        let regex = Regex::new(pattern).map_err(|e| LogicError::InvalidPattern {
            pattern: pattern.to_string(),
            reason:  e.to_string()
        })?;
        self.cache
            .write()
            .insert(pattern.to_string(), regex.clone());
        Ok(regex)
    }
}

impl Rule for RegexpRule {
    fn validate(
        &self,
        record: &dyn Record,
        field: &str,
        params: &[String],
        named: &NamedParams
    ) -> Result<(), RuleError> {
        let regex = self.compiled(single_param(params)?)?;
        let value = lookup(record, field)?.stringify()?;

        let allow_empty = matches!(
            named.get("allowEmpty").map(String::as_str),
            Some("1" | "true")
        );
        if value.is_empty() && allow_empty {
            return Ok(());
        }
        if regex.is_match(&value) {
            return Ok(());
        }
        Err(mismatch(field, &regex))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        record::FieldDescriptor,
        value::{FieldValue, Inspect}
    };

    struct Field(&'static str);

    impl Record for Field {
        fn descriptors(&self) -> &'static [FieldDescriptor] {
            &[]
        }

        fn field(&self, name: &str) -> Option<FieldValue<'_>> {
            (name == "Field").then(|| self.0.view())
        }
    }

    fn run(
        rule: &dyn Rule,
        value: &'static str,
        params: &[&str],
        named: &[(&str, &str)]
    ) -> Result<(), RuleError> {
        let params: Vec<String> = params.iter().map(|p| p.to_string()).collect();
        let named: NamedParams = named
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        rule.validate(&Field(value), "Field", &params, &named)
    }

    #[test]
    fn email_pattern() {
        for (text, expected) in [
            ("cucu", false),
            ("me@gmail.com", true),
            ("john.doe@localhost", false),
            ("john.doe-himself@localhost.com", true)
        ] {
            assert_eq!(EMAIL_REGEX.is_match(text), expected, "{}", text);
        }
    }

    #[test]
    fn url_pattern() {
        for (text, expected) in [
            ("cucu", false),
            ("http://google.com", true),
            ("https://google.com", true),
            ("http://00.sub01.domain-name.barcelona", true),
            ("htt://localhost", false),
            ("http://localhost", false)
        ] {
            assert_eq!(URL_REGEX.is_match(text), expected, "{}", text);
        }
    }

    #[test]
    fn pattern_rule_skips_empty() {
        assert!(run(&PatternRule::email(), "", &[], &[]).is_ok());
    }

    #[test]
    fn pattern_rule_message() {
        let result = run(&PatternRule::email(), "cucu", &[], &[]);
        match result {
            Err(RuleError::Input(e)) => assert_eq!(
                e.message(),
                format!("The value of field Field does not match regexp {}", EMAIL_PATTERN)
            ),
            other => panic!("expected input error, got {:?}", other)
        }
    }

    #[test]
    fn pattern_rule_rejects_bad_pattern() {
        assert!(matches!(PatternRule::new("(("), Err(LogicError::InvalidPattern { .. })));
    }

    #[test]
    fn regexp_match_and_mismatch() {
        let rule = RegexpRule::default();
        let pattern = r"^[0-9a-z]+@[0-9a-z]+(\.[0-9a-z]+)+$";
        assert!(run(&rule, "foo@mail.com", &[pattern], &[("allowEmpty", "1")]).is_ok());
        assert!(matches!(
            run(&rule, "foo", &[pattern], &[("allowEmpty", "1")]),
            Err(RuleError::Input(_))
        ));
    }

    #[test]
    fn regexp_compile_error_is_logic_error() {
        let rule = RegexpRule::default();
        assert!(matches!(
            run(&rule, "foo", &["(("], &[("allowEmpty", "1")]),
            Err(RuleError::Logic(LogicError::InvalidPattern { .. }))
        ));
    }

    #[test]
    fn regexp_allow_empty() {
        let rule = RegexpRule::default();
        assert!(run(&rule, "", &["^a+$"], &[("allowEmpty", "1")]).is_ok());
        assert!(run(&rule, "", &["^a+$"], &[]).is_err());
    }

    #[test]
    fn regexp_caches_compiled_patterns() {
        let rule = RegexpRule::default();
        assert!(run(&rule, "aaa", &["^a+$"], &[]).is_ok());
        assert!(run(&rule, "aa", &["^a+$"], &[]).is_ok());
        assert_eq!(rule.cache.read().len(), 1);
    }
}
