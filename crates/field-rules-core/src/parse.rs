// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Tag parser for the rule mini-language.
//!
//! # Grammar
//!
//! ```text
//! tag       := rule (sep rule)*
//! rule      := name [":" paramList]
//! paramList := token ("," token)*
//! token     := value | key ":" value
//! ```
//!
//! `sep` defaults to `"|"`. There is no escaping: parameters cannot contain
//! `,`, `:` or the separator.
//!
//! # Parsing Flow
//!
//! ```text
//! "len:>=,3|contains:foo,mode:ci"
//!        │
//!        ├── split on sep ──────► ["len:>=,3", "contains:foo,mode:ci"]
//!        ├── split on first ":" ► ("len", ">=,3"), ("contains", "foo,mode:ci")
//!        ├── split on ","  ─────► [">=", "3"], ["foo", "mode:ci"]
//!        └── classify ──────────► params [">=", "3"]
//!                                 params ["foo"], named {mode: ci}
//! ```
//!
//! The parser never fails. A malformed segment yields an invocation whose
//! rule lookup or arity check fails later, at execution time.

use std::collections::HashMap;

/// Named parameters of one invocation.
pub type NamedParams = HashMap<String, String>;

/// Separator used when none is configured.
pub const DEFAULT_SEPARATOR: &str = "|";

/// One parsed rule application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleInvocation {
    /// Registry name of the rule.
    pub rule:         String,
    /// Field the rule applies to.
    pub field:        String,
    /// Positional parameters in source order.
    pub params:       Vec<String>,
    /// Named parameters; a repeated key keeps its last value.
    pub named_params: NamedParams
}

/// Parse one field's tag into rule invocations, in execution order.
///
/// An empty `tag` yields no invocations. A segment without `":"` has no
/// parameters at all.
///
/// # Example
///
/// ```rust
/// use field_rules_core::parse_tag;
///
/// let rules = parse_tag("name", "required|len:>=,3", "|");
/// assert_eq!(rules.len(), 2);
/// assert_eq!(rules[1].rule, "len");
/// assert_eq!(rules[1].params, vec![">=", "3"]);
/// ```
pub fn parse_tag(field: &str, tag: &str, separator: &str) -> Vec<RuleInvocation> {
    if tag.is_empty() {
        return Vec::new();
    }

    tag.split(separator)
        .map(|segment| parse_segment(field, segment))
        .collect()
}

fn parse_segment(field: &str, segment: &str) -> RuleInvocation {
    let (rule, params_text) = segment.split_once(':').unwrap_or((segment, ""));

    let mut params = Vec::new();
    let mut named_params = NamedParams::new();

    if !params_text.is_empty() {
        for token in params_text.split(',') {
            match token.split_once(':') {
                Some((key, value)) => {
                    named_params.insert(key.to_string(), value.to_string());
                }
                None => params.push(token.to_string())
            }
        }
    }

    RuleInvocation {
        rule: rule.to_string(),
        field: field.to_string(),
        params,
        named_params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(pairs: &[(&str, &str)]) -> NamedParams {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn empty_tag_yields_nothing() {
        assert!(parse_tag("name", "", DEFAULT_SEPARATOR).is_empty());
    }

    #[test]
    fn bare_rule_has_no_params() {
        let rules = parse_tag("name", "required", DEFAULT_SEPARATOR);
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].rule, "required");
        assert_eq!(rules[0].field, "name");
        assert!(rules[0].params.is_empty());
        assert!(rules[0].named_params.is_empty());
    }

    #[test]
    fn positional_and_named_params() {
        let rules = parse_tag("Name", "ruleA:a,b,c,foo:bar|ruleB:1,2,k:v", DEFAULT_SEPARATOR);
        assert_eq!(
            rules,
            vec![
                RuleInvocation {
                    rule:         "ruleA".to_string(),
                    field:        "Name".to_string(),
                    params:       vec!["a".into(), "b".into(), "c".into()],
                    named_params: named(&[("foo", "bar")])
                },
                RuleInvocation {
                    rule:         "ruleB".to_string(),
                    field:        "Name".to_string(),
                    params:       vec!["1".into(), "2".into()],
                    named_params: named(&[("k", "v")])
                },
            ]
        );
    }

    #[test]
    fn extra_positional_tokens_are_kept() {
        let rules = parse_tag("name", "len:>=,3,zz", DEFAULT_SEPARATOR);
        assert_eq!(rules[0].params, vec![">=", "3", "zz"]);
    }

    #[test]
    fn named_value_splits_on_first_colon() {
        let rules = parse_tag("name", "rule:k:v:w", DEFAULT_SEPARATOR);
        assert!(rules[0].params.is_empty());
        assert_eq!(rules[0].named_params, named(&[("k", "v:w")]));
    }

    #[test]
    fn last_named_key_wins() {
        let rules = parse_tag("name", "rule:k:1,k:2", DEFAULT_SEPARATOR);
        assert_eq!(rules[0].named_params, named(&[("k", "2")]));
    }

    #[test]
    fn empty_tokens_between_commas_are_kept() {
        let rules = parse_tag("name", "rule:a,,b", DEFAULT_SEPARATOR);
        assert_eq!(rules[0].params, vec!["a", "", "b"]);
    }

    #[test]
    fn trailing_colon_yields_no_params() {
        let rules = parse_tag("name", "contains:", DEFAULT_SEPARATOR);
        assert_eq!(rules[0].rule, "contains");
        assert!(rules[0].params.is_empty());
    }

    #[test]
    fn empty_segment_becomes_nameless_rule() {
        let rules = parse_tag("name", "required||len:3", DEFAULT_SEPARATOR);
        assert_eq!(rules.len(), 3);
        assert_eq!(rules[1].rule, "");
    }

    #[test]
    fn custom_separator() {
        let rules = parse_tag("name", "required;len:3", ";");
        assert_eq!(rules.len(), 2);
        assert_eq!(rules[1].params, vec!["3"]);
    }

    #[test]
    fn order_is_preserved() {
        let rules = parse_tag("name", "c|b|a", DEFAULT_SEPARATOR);
        let names: Vec<_> = rules.iter().map(|r| r.rule.as_str()).collect();
        assert_eq!(names, ["c", "b", "a"]);
    }
}
