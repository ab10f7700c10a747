//! Sign-up form controller state.
//!
//! DESIGN
//! ======
//! `FormState` is a plain struct updated by reducer methods for change, blur,
//! and submit events. Components hold it in a `RwSignal` and call reducers via
//! `update`, which keeps the render path free of hidden mutable state.
//!
//! Invariant: `errors == validate(&values)` after every reducer.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use std::collections::BTreeSet;

use crate::net::types::SignUpRequest;
use crate::util::validation::{FieldErrors, validate};

/// Form fields, ordered as rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Username,
    Email,
    Password,
    Tos,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Username, Field::Email, Field::Password, Field::Tos];

    /// Stable name used for element ids and error messages.
    pub fn name(self) -> &'static str {
        match self {
            Field::Username => "username",
            Field::Email => "email",
            Field::Password => "password",
            Field::Tos => "tos",
        }
    }
}

/// New value for a single field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Checked(bool),
}

/// Current input values.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormValues {
    pub username: String,
    pub email: String,
    pub password: String,
    pub tos: bool,
}

impl FormValues {
    /// Text content of a text field, or `None` for the checkbox.
    pub fn text(&self, field: Field) -> Option<&str> {
        match field {
            Field::Username => Some(&self.username),
            Field::Email => Some(&self.email),
            Field::Password => Some(&self.password),
            Field::Tos => None,
        }
    }

    fn set(&mut self, field: Field, value: FieldValue) {
        match (field, value) {
            (Field::Username, FieldValue::Text(v)) => self.username = v,
            (Field::Email, FieldValue::Text(v)) => self.email = v,
            (Field::Password, FieldValue::Text(v)) => self.password = v,
            (Field::Tos, FieldValue::Checked(v)) => self.tos = v,
            (field, value) => {
                log::warn!("ignoring mismatched value {value:?} for field {}", field.name());
            }
        }
    }

    /// Wire payload for the sign-up endpoint.
    pub fn to_request(&self) -> SignUpRequest {
        SignUpRequest {
            username: self.username.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
            tos: self.tos,
        }
    }
}

/// Values, validation output, visit tracking, and submit lifecycle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormState {
    pub values: FormValues,
    pub errors: FieldErrors,
    pub touched: BTreeSet<Field>,
    pub submitting: bool,
    pub submit_error: Option<String>,
}

impl Default for FormState {
    fn default() -> Self {
        let values = FormValues::default();
        Self {
            errors: validate(&values),
            values,
            touched: BTreeSet::new(),
            submitting: false,
            submit_error: None,
        }
    }
}

impl FormState {
    /// Apply a keystroke or checkbox toggle.
    pub fn change(&mut self, field: Field, value: FieldValue) {
        self.values.set(field, value);
        self.errors = validate(&self.values);
        self.submit_error = None;
    }

    /// Record that the user left `field`.
    pub fn blur(&mut self, field: Field) {
        self.touched.insert(field);
    }

    /// Start a submission.
    ///
    /// Marks every field touched so all errors become visible. Returns the
    /// values to send, or `None` when the form is invalid or a request is
    /// already in flight.
    pub fn begin_submit(&mut self) -> Option<FormValues> {
        self.touched.extend(Field::ALL);
        self.errors = validate(&self.values);
        if self.submitting || !self.errors.is_empty() {
            return None;
        }
        self.submitting = true;
        self.submit_error = None;
        Some(self.values.clone())
    }

    /// Reset to defaults after the endpoint accepted the values.
    pub fn submit_succeeded(&mut self) {
        *self = Self::default();
    }

    /// Keep values and touched state, surface `message` to the user.
    pub fn submit_failed(&mut self, message: String) {
        self.submitting = false;
        self.submit_error = Some(message);
    }

    /// Error for `field`, only once the field has been visited.
    pub fn visible_error(&self, field: Field) -> Option<&str> {
        if !self.touched.contains(&field) {
            return None;
        }
        self.errors.get(&field).map(String::as_str)
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn can_submit(&self) -> bool {
        !self.submitting
    }
}
