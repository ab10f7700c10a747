//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::SignUpConfig;
use crate::pages::sign_up::SignUpPage;

/// Root application component using the default configuration.
#[component]
pub fn App() -> impl IntoView {
    view! { <ConfiguredApp config=SignUpConfig::default()/> }
}

/// Root component with an explicit configuration, provided to all children.
#[component]
pub fn ConfiguredApp(config: SignUpConfig) -> impl IntoView {
    provide_meta_context();
    provide_context(config);

    view! {
        <Title text="Sign Up"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=SignUpPage/>
            </Routes>
        </Router>
    }
}
