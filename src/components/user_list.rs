//! Paginated list of users created this session.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads `SessionUsers` without mutating it and owns a local `Pagination`.
//! Controls that would leave the valid page range are rendered disabled.

#[cfg(test)]
#[path = "user_list_test.rs"]
mod user_list_test;

use leptos::prelude::*;

use crate::config::SignUpConfig;
use crate::net::types::UserRecord;
use crate::state::pagination::Pagination;
use crate::state::session::SessionUsers;

fn summary_text(len: usize) -> String {
    match len {
        1 => "1 user".to_owned(),
        n => format!("{n} users"),
    }
}

fn page_status(pagination: Pagination, len: usize) -> String {
    let count = pagination.page_count(len);
    if count == 0 {
        return String::new();
    }
    format!("Page {} of {count}", pagination.current_page() + 1)
}

#[component]
pub fn UserList(#[prop(into)] users: Signal<SessionUsers>) -> impl IntoView {
    let page_size = use_context::<SignUpConfig>().unwrap_or_default().page_size;
    let page = RwSignal::new(Pagination::new(page_size));

    let len = move || users.with(SessionUsers::len);

    // Keep the page in range when the list changes length.
    Effect::new(move || {
        let len = len();
        page.update(|p| p.resync(len));
    });

    let visible = move || {
        let pagination = page.get();
        users.with(|u| pagination.visible(u.as_slice()).to_vec())
    };

    view! {
        <section class="user-list">
            <div class="user-list__summary">
                <span>{move || summary_text(len())}</span>
                <span class="user-list__page">{move || page_status(page.get(), len())}</span>
            </div>
            <Show
                when=move || { len() > 0 }
                fallback=move || view! { <p class="user-list__empty">"No users yet."</p> }
            >
                {move || visible().into_iter().map(|user| view! { <UserCard user=user/> }).collect_view()}
            </Show>
            <nav class="pagination" aria-label="User pages">
                <ul class="pagination__list">
                    <li
                        class="pagination__item"
                        class:pagination__item--disabled=move || page.get().prev_disabled()
                    >
                        <button
                            class="pagination__link"
                            disabled=move || page.get().prev_disabled()
                            on:click=move |_| {
                                page.update(|p| {
                                    p.previous(len());
                                });
                            }
                        >
                            "Previous"
                        </button>
                    </li>
                    {move || {
                        page.get()
                            .indicators(len())
                            .into_iter()
                            .map(|indicator| {
                                view! {
                                    <li
                                        class="pagination__item"
                                        class:pagination__item--active=indicator.active
                                    >
                                        <button
                                            class="pagination__link"
                                            aria-current=indicator.active.then_some("page")
                                            on:click=move |_| {
                                                page.update(|p| {
                                                    p.go_to_page(indicator.index, len());
                                                });
                                            }
                                        >
                                            {indicator.label}
                                        </button>
                                    </li>
                                }
                            })
                            .collect_view()
                    }}
                    <li
                        class="pagination__item"
                        class:pagination__item--disabled=move || page.get().next_disabled(len())
                    >
                        <button
                            class="pagination__link"
                            disabled=move || page.get().next_disabled(len())
                            on:click=move |_| {
                                page.update(|p| {
                                    p.next(len());
                                });
                            }
                        >
                            "Next"
                        </button>
                    </li>
                </ul>
            </nav>
        </section>
    }
}

/// One user rendered as a card. The password is masked.
#[component]
fn UserCard(user: UserRecord) -> impl IntoView {
    let masked = user.masked_password();
    view! {
        <article class="user-card">
            <h2 class="user-card__title">{user.username}</h2>
            <p class="user-card__text">{user.email}</p>
            <p class="user-card__text user-card__text--mono">{masked}</p>
        </article>
    }
}
