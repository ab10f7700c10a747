use super::*;

#[test]
fn text_fields_follow_render_order() {
    let fields = TEXT_FIELDS.iter().map(|s| s.field).collect::<Vec<_>>();
    assert_eq!(fields, vec![Field::Username, Field::Email, Field::Password]);
}

#[test]
fn text_fields_use_matching_input_types() {
    let types = TEXT_FIELDS.iter().map(|s| s.input_type).collect::<Vec<_>>();
    assert_eq!(types, vec!["text", "email", "password"]);
}

#[test]
fn text_field_labels_and_placeholders() {
    assert_eq!(TEXT_FIELDS[0].label, "Name");
    assert_eq!(TEXT_FIELDS[0].placeholder, "first name");
    assert_eq!(TEXT_FIELDS[1].placeholder, "lillian@example.com");
    assert_eq!(TEXT_FIELDS[2].placeholder, "letters and numbers");
}

#[test]
fn submit_label_reflects_pending_state() {
    assert_eq!(submit_label(false), "Sign Up");
    assert_eq!(submit_label(true), "Signing up...");
}
