//! Character Grid Component
//!
//! The results region: loading indicator, error message, empty-state
//! placeholder, or one card per character in API order.

use leptos::prelude::*;

use crate::components::CharacterCard;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn CharacterGrid() -> impl IntoView {
    let store = use_app_store();

    view! {
        <section class="characters-section">
            <Show when=move || store.loading().get()>
                <div class="loading">
                    <div class="spinner"></div>
                    <p>"Loading characters..."</p>
                </div>
            </Show>

            <Show when=move || !store.loading().get()>
                <div id="characters-container" class="characters-grid">
                    {move || {
                        if let Some(message) = store.error().get() {
                            view! {
                                <div class="error-message">
                                    <p>{message}</p>
                                </div>
                            }
                            .into_any()
                        } else if store.characters().read().is_empty() {
                            view! {
                                <div class="no-results">
                                    <p>"No characters match the selected filters."</p>
                                </div>
                            }
                            .into_any()
                        } else {
                            view! {
                                <For
                                    each=move || store.characters().get()
                                    key=|character| character.id
                                    children=move |character| {
                                        view! { <CharacterCard character=character /> }
                                    }
                                />
                            }
                            .into_any()
                        }
                    }}
                </div>
            </Show>
        </section>
    }
}
