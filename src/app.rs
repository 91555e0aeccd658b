//! Character Catalog App
//!
//! Root component: owns the global store and triggers the initial load.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::actions::fetch_page;
use crate::components::{CharacterGrid, CharacterModal, FilterBar, PaginationBar, StatsBar};
use crate::store::{AppState, AppStore};

#[component]
pub fn App() -> impl IntoView {
    let store: AppStore = Store::new(AppState::new());
    provide_context(store);

    // Load the unfiltered first page on mount
    Effect::new(move |_| {
        fetch_page(store, 1);
    });

    view! {
        <div class="app-layout">
            <header class="app-header">
                <h1>"Character Catalog"</h1>
            </header>

            <StatsBar />
            <FilterBar />
            <CharacterGrid />
            <PaginationBar />
            <CharacterModal />
        </div>
    }
}
