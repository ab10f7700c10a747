//! Declarative validation rules for the sign-up form.
//!
//! DESIGN
//! ======
//! Rules are data (`FieldRules`) evaluated against `FormValues`, so the form
//! reducer never hardcodes per-field checks. Each field reports at most one
//! message: the first rule that fails, in declaration order.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use std::collections::BTreeMap;

use crate::state::form::{Field, FormValues};

/// Minimum accepted password length, in characters.
pub const MIN_PASSWORD_LEN: usize = 6;

/// A single check applied to a text field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rule {
    /// Value must be non-empty.
    Required,
    /// Value must not start or end with whitespace.
    Trimmed,
    /// Value must look like an email address.
    Email,
    /// Value must have at least this many characters.
    MinLength(usize),
}

/// Ordered rules for one field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldRules {
    pub field: Field,
    pub rules: Vec<Rule>,
}

/// Per-field error messages. Absent key means the field is valid.
pub type FieldErrors = BTreeMap<Field, String>;

/// The sign-up schema: username, email, and password are required; `tos` is unchecked.
pub fn sign_up_schema() -> Vec<FieldRules> {
    vec![
        FieldRules { field: Field::Username, rules: vec![Rule::Required, Rule::Trimmed] },
        FieldRules { field: Field::Email, rules: vec![Rule::Required, Rule::Email] },
        FieldRules { field: Field::Password, rules: vec![Rule::Required, Rule::MinLength(MIN_PASSWORD_LEN)] },
    ]
}

/// Evaluate the sign-up schema against `values`.
pub fn validate(values: &FormValues) -> FieldErrors {
    validate_with(&sign_up_schema(), values)
}

/// Evaluate an arbitrary rule set against `values`.
pub fn validate_with(schema: &[FieldRules], values: &FormValues) -> FieldErrors {
    let mut errors = FieldErrors::new();
    for entry in schema {
        let Some(text) = values.text(entry.field) else {
            continue;
        };
        if let Some(rule) = entry.rules.iter().find(|rule| !rule_passes(**rule, text)) {
            errors.insert(entry.field, rule_message(*rule, entry.field));
        }
    }
    errors
}

fn rule_passes(rule: Rule, text: &str) -> bool {
    match rule {
        Rule::Required => !text.is_empty(),
        Rule::Trimmed => text.trim() == text,
        Rule::Email => is_valid_email(text),
        Rule::MinLength(min) => text.chars().count() >= min,
    }
}

/// Human-readable message for a failed rule.
pub fn rule_message(rule: Rule, field: Field) -> String {
    let name = field.name();
    match rule {
        Rule::Required => format!("{name} is a required field"),
        Rule::Trimmed => format!("{name} must be a trimmed string"),
        Rule::Email => format!("{name} must be a valid email"),
        Rule::MinLength(min) => format!("{name} must be at least {min} characters"),
    }
}

/// Basic address shape check: `local@domain.tld`, no whitespace, one `@`.
#[must_use]
pub fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let labels = domain.split('.').collect::<Vec<_>>();
    labels.len() >= 2 && labels.iter().all(|label| !label.is_empty())
}
