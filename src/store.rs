//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::filters::CharacterFilters;
use crate::models::{Character, CharacterPage};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Page buffer: characters from the most recent successful fetch
    pub characters: Vec<Character>,
    /// Active filter constraints
    pub filters: CharacterFilters,
    /// Current page number (1-based)
    pub current_page: u32,
    /// Total page count from the last successful response
    pub total_pages: u32,
    /// A fetch is in flight
    pub loading: bool,
    /// User-visible message for the last failed fetch
    pub error: Option<String>,
    /// Character shown in the detail modal
    pub selected: Option<Character>,
    /// Request generation; only the newest request may apply its result
    pub fetch_seq: u64,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            current_page: 1,
            total_pages: 1,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace pagination state and page buffer together from one response
pub fn store_apply_page(store: &AppStore, page: u32, data: CharacterPage) {
    let total = data.info.pages.max(1);
    store.total_pages().set(total);
    store.current_page().set(page.min(total));
    store.characters().set(data.results);
    store.error().set(None);
}

/// Record a failed fetch: empty results, generic message, stale pagination
pub fn store_apply_fetch_error(store: &AppStore, message: String) {
    store.characters().set(Vec::new());
    store.error().set(Some(message));
}
