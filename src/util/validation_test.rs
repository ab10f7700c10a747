use super::*;

fn values(username: &str, email: &str, password: &str) -> FormValues {
    FormValues {
        username: username.to_owned(),
        email: email.to_owned(),
        password: password.to_owned(),
        tos: false,
    }
}

fn error(errors: &FieldErrors, field: Field) -> Option<&str> {
    errors.get(&field).map(String::as_str)
}

// =============================================================
// Schema
// =============================================================

#[test]
fn schema_covers_text_fields_in_order() {
    let fields = sign_up_schema().iter().map(|r| r.field).collect::<Vec<_>>();
    assert_eq!(fields, vec![Field::Username, Field::Email, Field::Password]);
}

#[test]
fn valid_values_produce_no_errors() {
    let errors = validate(&values("Lillian", "lillian@example.com", "secret1"));
    assert!(errors.is_empty());
}

#[test]
fn empty_values_report_required_for_each_text_field() {
    let errors = validate(&FormValues::default());
    assert_eq!(error(&errors, Field::Username), Some("username is a required field"));
    assert_eq!(error(&errors, Field::Email), Some("email is a required field"));
    assert_eq!(error(&errors, Field::Password), Some("password is a required field"));
    assert_eq!(error(&errors, Field::Tos), None);
}

// =============================================================
// Username
// =============================================================

#[test]
fn username_with_surrounding_whitespace_is_rejected() {
    let errors = validate(&values(" Lillian ", "lillian@example.com", "secret1"));
    assert_eq!(error(&errors, Field::Username), Some("username must be a trimmed string"));
}

#[test]
fn whitespace_only_username_is_rejected() {
    let errors = validate(&values("   ", "lillian@example.com", "secret1"));
    assert_eq!(error(&errors, Field::Username), Some("username must be a trimmed string"));
}

#[test]
fn username_inner_whitespace_is_allowed() {
    let errors = validate(&values("Lillian Rose", "lillian@example.com", "secret1"));
    assert_eq!(error(&errors, Field::Username), None);
}

// =============================================================
// Email
// =============================================================

#[test]
fn invalid_email_reports_message() {
    let errors = validate(&values("Lillian", "not-an-email", "secret1"));
    assert_eq!(error(&errors, Field::Email), Some("email must be a valid email"));
}

#[test]
fn is_valid_email_accepts_common_shapes() {
    assert!(is_valid_email("lillian@example.com"));
    assert!(is_valid_email("first.last+tag@mail.example.co.uk"));
}

#[test]
fn is_valid_email_rejects_bad_shapes() {
    assert!(!is_valid_email("not-an-email"));
    assert!(!is_valid_email("@example.com"));
    assert!(!is_valid_email("user@"));
    assert!(!is_valid_email("user@example"));
    assert!(!is_valid_email("user@example."));
    assert!(!is_valid_email("user@.com"));
    assert!(!is_valid_email("a@b@c.com"));
    assert!(!is_valid_email("us er@example.com"));
    assert!(!is_valid_email(" user@example.com"));
}

// =============================================================
// Password
// =============================================================

#[test]
fn short_password_reports_min_length() {
    let errors = validate(&values("Lillian", "lillian@example.com", "abc12"));
    assert_eq!(error(&errors, Field::Password), Some("password must be at least 6 characters"));
}

#[test]
fn password_length_counts_characters() {
    let errors = validate(&values("Lillian", "lillian@example.com", "\u{e9}\u{e9}\u{e9}"));
    assert!(errors.contains_key(&Field::Password));
    let errors = validate(&values("Lillian", "lillian@example.com", "\u{e9}\u{e9}\u{e9}\u{e9}\u{e9}\u{e9}"));
    assert!(!errors.contains_key(&Field::Password));
}

// =============================================================
// Rule evaluation
// =============================================================

#[test]
fn first_failing_rule_wins() {
    let schema = vec![FieldRules {
        field: Field::Email,
        rules: vec![Rule::Required, Rule::Email, Rule::MinLength(50)],
    }];
    let errors = validate_with(&schema, &values("", "", ""));
    assert_eq!(error(&errors, Field::Email), Some("email is a required field"));
    let errors = validate_with(&schema, &values("", "short@x.io", ""));
    assert_eq!(error(&errors, Field::Email), Some("email must be at least 50 characters"));
}

#[test]
fn rules_on_checkbox_are_ignored() {
    let schema = vec![FieldRules { field: Field::Tos, rules: vec![Rule::Required] }];
    assert!(validate_with(&schema, &FormValues::default()).is_empty());
}

#[test]
fn rule_message_formats() {
    assert_eq!(rule_message(Rule::MinLength(8), Field::Password), "password must be at least 8 characters");
    assert_eq!(rule_message(Rule::Trimmed, Field::Username), "username must be a trimmed string");
}
