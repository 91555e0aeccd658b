//! Character Detail Modal
//!
//! Full record for one character, taken from the page buffer without a
//! network call. Closes on the close control, a backdrop click, or Escape.

use leptos::ev;
use leptos::prelude::*;

use crate::models::capitalize_first;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn CharacterModal() -> impl IntoView {
    let store = use_app_store();
    let close = move || store.selected().set(None);

    let escape_handle = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" {
            close();
        }
    });
    on_cleanup(move || escape_handle.remove());

    view! {
        {move || {
            store
                .selected()
                .get()
                .map(|character| {
                    let status_class = character.status_class();
                    view! {
                        <div class="modal" on:click=move |_| close()>
                            // Clicks inside the content must not reach the backdrop
                            <div class="modal-content" on:click=|ev| ev.stop_propagation()>
                                <button class="close-modal" on:click=move |_| close()>
                                    "×"
                                </button>
                                <div class="modal-character">
                                    <img src=character.image.clone() alt=character.name.clone() />
                                    <h3>{character.name.clone()}</h3>
                                    <div class="modal-details">
                                        <div class="detail-item">
                                            <span class=status_class></span>
                                            <strong>"Status: "</strong>
                                            {capitalize_first(&character.status)}
                                        </div>
                                        <div class="detail-item">
                                            <strong>"Species: "</strong>
                                            {character.species.clone()}
                                        </div>
                                        <div class="detail-item">
                                            <strong>"Gender: "</strong>
                                            {capitalize_first(&character.gender)}
                                        </div>
                                        <div class="detail-item">
                                            <strong>"Origin: "</strong>
                                            {character.origin.name.clone()}
                                        </div>
                                        <div class="detail-item">
                                            <strong>"Location: "</strong>
                                            {character.location.name.clone()}
                                        </div>
                                        <div class="detail-item">
                                            <strong>"Episodes: "</strong>
                                            {character.episode_count()}
                                        </div>
                                        <div class="detail-item">
                                            <strong>"Created: "</strong>
                                            {character.created_display()}
                                        </div>
                                    </div>
                                </div>
                            </div>
                        </div>
                    }
                })
        }}
    }
}
