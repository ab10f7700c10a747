//! Sign-up form bound to a `FormState` signal.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders inputs from `TEXT_FIELDS`, routes input/blur/submit events into the
//! form reducers, and hands successful records to the session user list.

#[cfg(test)]
#[path = "sign_up_form_test.rs"]
mod sign_up_form_test;

use leptos::prelude::*;

use crate::config::SignUpConfig;
use crate::net::api::{HttpSignUpEndpoint, SubmitError};
use crate::net::types::UserRecord;
use crate::state::form::{Field, FieldValue, FormState};
use crate::state::session::SessionUsers;
use crate::state::submission::finish_submission;

/// Static description of one text input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSpec {
    pub field: Field,
    pub label: &'static str,
    pub input_type: &'static str,
    pub placeholder: &'static str,
}

pub const TEXT_FIELDS: [FieldSpec; 3] = [
    FieldSpec { field: Field::Username, label: "Name", input_type: "text", placeholder: "first name" },
    FieldSpec { field: Field::Email, label: "Email", input_type: "email", placeholder: "lillian@example.com" },
    FieldSpec {
        field: Field::Password,
        label: "Password",
        input_type: "password",
        placeholder: "letters and numbers",
    },
];

pub const TOS_LABEL: &str = "I did not read the Terms of Service";

fn submit_label(submitting: bool) -> &'static str {
    if submitting { "Signing up..." } else { "Sign Up" }
}

#[component]
pub fn SignUpForm(form: RwSignal<FormState>, users: RwSignal<SessionUsers>) -> impl IntoView {
    let config = use_context::<SignUpConfig>().unwrap_or_default();

    let finish = move |result: Result<UserRecord, SubmitError>| {
        users.update(|u| {
            form.update(|f| {
                finish_submission(f, u, result);
            });
        });
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(values) = form.try_update(FormState::begin_submit).flatten() else {
            return;
        };
        log::debug!("submitting sign up for {}", values.username);
        let endpoint = HttpSignUpEndpoint::new(config.endpoint.clone());

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            use crate::net::api::SignUpEndpoint;
            let result = endpoint.submit(&values.to_request()).await;
            finish(result);
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = (endpoint, values);
            finish(Err(SubmitError::Unavailable));
        }
    };

    let text_inputs = TEXT_FIELDS
        .into_iter()
        .map(|spec| {
            let field = spec.field;
            view! {
                <Show when=move || form.with(|f| f.visible_error(field).is_some())>
                    <p class="sign-up-form__error">
                        {move || form.with(|f| f.visible_error(field).unwrap_or_default().to_owned())}
                    </p>
                </Show>
                <label class="sign-up-form__label" for=field.name()>{spec.label}</label>
                <input
                    class="sign-up-form__input"
                    id=field.name()
                    name=field.name()
                    type=spec.input_type
                    placeholder=spec.placeholder
                    prop:value=move || form.with(|f| f.values.text(field).unwrap_or_default().to_owned())
                    on:input=move |ev| form.update(|f| f.change(field, FieldValue::Text(event_target_value(&ev))))
                    on:blur=move |_| form.update(|f| f.blur(field))
                />
            }
        })
        .collect_view();

    view! {
        <form class="sign-up-form" on:submit=on_submit novalidate=true>
            {text_inputs}
            <div class="checkbox">
                <input
                    id=Field::Tos.name()
                    name=Field::Tos.name()
                    type="checkbox"
                    prop:checked=move || form.with(|f| f.values.tos)
                    on:change=move |ev| form.update(|f| f.change(Field::Tos, FieldValue::Checked(event_target_checked(&ev))))
                    on:blur=move |_| form.update(|f| f.blur(Field::Tos))
                />
                <label for=Field::Tos.name()>{TOS_LABEL}</label>
            </div>
            <Show when=move || form.with(|f| f.submit_error.is_some())>
                <p class="sign-up-form__alert" role="alert">
                    {move || form.with(|f| f.submit_error.clone().unwrap_or_default())}
                </p>
            </Show>
            <button
                class="btn btn-primary btn-lg"
                type="submit"
                disabled=move || form.with(|f| !f.can_submit())
            >
                {move || submit_label(form.with(|f| f.submitting))}
            </button>
        </form>
    }
}
