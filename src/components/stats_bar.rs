//! Stats Bar Component
//!
//! Total / alive / dead / unknown counters for the current page buffer.

use leptos::prelude::*;

use crate::stats::StatusTally;
use crate::store::{use_app_store, AppStateStoreFields};

/// Counter tiles, recomputed whenever the page buffer is replaced
#[component]
pub fn StatsBar() -> impl IntoView {
    let store = use_app_store();
    let tally = Memo::new(move |_| StatusTally::from_characters(&store.characters().read()));

    view! {
        <div class="stats-bar">
            <StatTile label="Total" value=Signal::derive(move || tally.get().total) />
            <StatTile label="Alive" value=Signal::derive(move || tally.get().alive) />
            <StatTile label="Dead" value=Signal::derive(move || tally.get().dead) />
            <StatTile label="Unknown" value=Signal::derive(move || tally.get().unknown) />
        </div>
    }
}

#[component]
fn StatTile(label: &'static str, value: Signal<usize>) -> impl IntoView {
    view! {
        <div class="stat-tile">
            <span class="stat-value">{move || value.get()}</span>
            <span class="stat-label">{label}</span>
        </div>
    }
}
