//! Pagination Bar Component
//!
//! Previous/next controls and the page indicator. Hidden while a fetch
//! is in flight and whenever there is only a single page.

use leptos::prelude::*;

use crate::actions::change_page;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn PaginationBar() -> impl IntoView {
    let store = use_app_store();

    let current = move || store.current_page().get();
    let total = move || store.total_pages().get();
    let visible = move || !store.loading().get() && total() > 1;

    view! {
        <Show when=visible>
            <div class="pagination">
                <button
                    class="page-btn"
                    disabled=move || current() <= 1
                    on:click=move |_| change_page(store, current() as i64 - 1)
                >
                    "Previous"
                </button>
                <span class="page-info">{move || format!("Page {} of {}", current(), total())}</span>
                <button
                    class="page-btn"
                    disabled=move || current() >= total()
                    on:click=move |_| change_page(store, current() as i64 + 1)
                >
                    "Next"
                </button>
            </div>
        </Show>
    }
}
