//! Filter Bar Component
//!
//! Free-text search with debounce, the three selector filters, and the
//! apply/reset actions.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::actions::{apply_filters, reset_filters};
use crate::filters::ANY;
use crate::store::{use_app_store, AppStateStoreFields};

/// Quiet period after the last keystroke before the search fires
const SEARCH_DEBOUNCE_MS: u32 = 500;

/// Selector options as (value, label)
const STATUS_OPTIONS: &[(&str, &str)] = &[
    (ANY, "All statuses"),
    ("alive", "Alive"),
    ("dead", "Dead"),
    ("unknown", "Unknown"),
];

const SPECIES_OPTIONS: &[(&str, &str)] = &[
    (ANY, "All species"),
    ("human", "Human"),
    ("alien", "Alien"),
    ("humanoid", "Humanoid"),
    ("robot", "Robot"),
    ("animal", "Animal"),
    ("mythological creature", "Mythological Creature"),
    ("cronenberg", "Cronenberg"),
    ("unknown", "Unknown"),
];

const GENDER_OPTIONS: &[(&str, &str)] = &[
    (ANY, "All genders"),
    ("female", "Female"),
    ("male", "Male"),
    ("genderless", "Genderless"),
    ("unknown", "Unknown"),
];

/// Search input plus selectors; selector changes take effect on apply,
/// typing re-fetches on its own after the quiet period
#[component]
pub fn FilterBar() -> impl IntoView {
    let store = use_app_store();

    // Pending debounce timer; each keystroke cancels and reschedules,
    // so only the newest pending apply ever fires
    let pending_search = StoredValue::new_local(None::<Timeout>);

    let on_search_input = move |ev: web_sys::Event| {
        store.filters().write().name = event_target_value(&ev);
        let timeout = Timeout::new(SEARCH_DEBOUNCE_MS, move || apply_filters(store));
        pending_search.update_value(|slot| {
            if let Some(prev) = slot.replace(timeout) {
                prev.cancel();
            }
        });
    };

    view! {
        <div class="filter-bar">
            <input
                type="text"
                class="search-input"
                placeholder="Search by name..."
                prop:value=move || store.filters().get().name
                on:input=on_search_input
            />

            <FilterSelect
                options=STATUS_OPTIONS
                value=Signal::derive(move || store.filters().get().status)
                on_change=move |v: String| store.filters().write().status = v
            />
            <FilterSelect
                options=SPECIES_OPTIONS
                value=Signal::derive(move || store.filters().get().species)
                on_change=move |v: String| store.filters().write().species = v
            />
            <FilterSelect
                options=GENDER_OPTIONS
                value=Signal::derive(move || store.filters().get().gender)
                on_change=move |v: String| store.filters().write().gender = v
            />

            <button class="apply-btn" on:click=move |_| apply_filters(store)>
                "Apply filters"
            </button>
            <button class="reset-btn" on:click=move |_| reset_filters(store)>
                "Reset"
            </button>
        </div>
    }
}

/// One selector bound to a filter field
#[component]
fn FilterSelect(
    options: &'static [(&'static str, &'static str)],
    value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <select
            class="filter-select"
            prop:value=move || value.get()
            on:change=move |ev| on_change.run(event_target_value(&ev))
        >
            {options
                .iter()
                .map(|(value, label)| view! { <option value=*value>{*label}</option> })
                .collect_view()}
        </select>
    }
}
