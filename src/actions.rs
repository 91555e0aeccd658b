//! User-Triggered Actions
//!
//! The fetch / filter / pagination operations behind the UI controls.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::filters::CharacterFilters;
use crate::store::{store_apply_fetch_error, store_apply_page, AppStateStoreFields, AppStore};

/// Message shown in the results region when a fetch fails
pub const FETCH_ERROR_MESSAGE: &str = "Failed to load characters. Try again later.";

/// Fetch one page and apply it, unless a newer request supersedes this one
pub fn fetch_page(store: AppStore, page: u32) {
    spawn_local(load_page(store, page));
}

/// Re-fetch from page 1 with the filter values currently held in the store
pub fn apply_filters(store: AppStore) {
    fetch_page(store, 1);
}

/// Clear every filter back to its sentinel and re-fetch page 1
pub fn reset_filters(store: AppStore) {
    store.filters().set(CharacterFilters::default());
    fetch_page(store, 1);
}

/// Navigate to `target` if it is within the known page bounds, then bring
/// the results region back into view. Out-of-range targets are ignored
/// without a network call.
pub fn change_page(store: AppStore, target: i64) {
    if !page_in_bounds(target, store.total_pages().get_untracked()) {
        return;
    }
    spawn_local(async move {
        load_page(store, target as u32).await;
        if let Some(el) = document().get_element_by_id("characters-container") {
            el.scroll_into_view();
        }
    });
}

fn page_in_bounds(target: i64, total_pages: u32) -> bool {
    target >= 1 && target <= total_pages as i64
}

async fn load_page(store: AppStore, page: u32) {
    let seq = store.fetch_seq().get_untracked() + 1;
    store.fetch_seq().set(seq);
    store.loading().set(true);
    store.error().set(None);

    let filters = store.filters().get_untracked();
    let result = api::fetch_character_page(page, &filters).await;

    // Superseded by a newer request; that one owns the state now.
    if store.fetch_seq().get_untracked() != seq {
        return;
    }

    match result {
        Ok(data) => {
            web_sys::console::log_1(
                &format!("[FETCH] page {}: {} results", page, data.results.len()).into(),
            );
            store_apply_page(&store, page, data);
        }
        Err(detail) => {
            web_sys::console::error_1(&format!("[FETCH] page {}: {}", page, detail).into());
            store_apply_fetch_error(&store, FETCH_ERROR_MESSAGE.to_string());
        }
    }
    store.loading().set(false);
}
