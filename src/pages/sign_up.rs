//! Sign-up page: the form plus the users created this session.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the session user collection and the form state. The form appends to
//! the collection; the list only reads it.

use leptos::prelude::*;

use crate::components::sign_up_form::SignUpForm;
use crate::components::user_list::UserList;
use crate::state::form::FormState;
use crate::state::session::SessionUsers;

#[component]
pub fn SignUpPage() -> impl IntoView {
    let users = RwSignal::new(SessionUsers::default());
    let form = RwSignal::new(FormState::default());

    view! {
        <main class="sign-up-page">
            <section class="sign-up-page__form">
                <h1>"Sign Up"</h1>
                <SignUpForm form=form users=users/>
            </section>
            <section class="sign-up-page__users">
                <h2>"Users"</h2>
                <UserList users=users/>
            </section>
        </main>
    }
}
