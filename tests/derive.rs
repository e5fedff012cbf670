// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Descriptors and accessors produced by `#[derive(Record)]`.

use field_rules::{FieldValue, Record, Visibility, validate};

#[derive(Record)]
#[validate(rename_all = "kebab-case")]
pub struct Account {
    #[validate(rules = "required")]
    pub user_name: String,

    #[validate(rename = "mail", rules = "email")]
    pub email_address: String,

    #[validate(skip)]
    pub session: Vec<u8>,

    #[validate(rules = "required")]
    secret: String
}

fn account(user_name: &str, email: &str) -> Account {
    Account {
        user_name:     user_name.into(),
        email_address: email.into(),
        session:       Vec::new(),
        secret:        String::new()
    }
}

#[test]
fn descriptors_follow_declaration_order() {
    let record = account("bob", "bob@example.com");
    let names: Vec<_> = record.descriptors().iter().map(|d| d.name).collect();
    assert_eq!(names, ["user-name", "mail", "secret"]);
    assert_eq!(record.descriptors()[0].rules, "required");
    assert_eq!(record.descriptors()[2].visibility, Visibility::Private);
}

#[test]
fn accessor_reads_exported_fields_only() {
    let record = account("bob", "bob@example.com");
    assert_eq!(
        record.field("user-name").and_then(|v| v.as_str()),
        Some("bob")
    );
    assert!(record.field("secret").is_none());
    assert!(record.field("session").is_none());
    assert!(record.field("user_name").is_none());
}

#[test]
fn private_field_is_never_validated() {
    let result = validate(&account("bob", "bob@example.com"));
    assert!(result.is_ok());
}

#[test]
fn renamed_keys_in_errors() {
    let result = validate(&account("", "not-an-email"));
    let paths: Vec<_> = result.field_errors.paths().collect();
    assert_eq!(paths, ["user-name", "mail"]);
    assert_eq!(
        result.errors_for("user-name").unwrap()[0].message(),
        "a value is required for user-name"
    );
}

#[test]
fn record_inspects_as_record() {
    let record = account("bob", "bob@example.com");
    let value = field_rules::Inspect::view(&record);
    assert!(matches!(value, FieldValue::Record(_)));
}
