//! Character Card Component
//!
//! One summary card in the results grid; clicking it opens the detail
//! modal for the already-fetched character.

use leptos::prelude::*;

use crate::models::{capitalize_first, Character};
use crate::store::{use_app_store, AppStateStoreFields};

/// Display width for origin/location names on a card
const LOCATION_DISPLAY_LEN: usize = 20;

/// Cut a name down to the card's display width, marking the cut with "..."
fn truncate_name(name: &str, max_chars: usize) -> String {
    if name.chars().count() <= max_chars {
        name.to_string()
    } else {
        let cut: String = name.chars().take(max_chars).collect();
        format!("{}...", cut)
    }
}

#[component]
pub fn CharacterCard(character: Character) -> impl IntoView {
    let store = use_app_store();

    let status_class = character.status_class();
    let status_line = format!(
        "{} - {}",
        capitalize_first(&character.status),
        character.species
    );
    let gender = capitalize_first(&character.gender);
    let origin = truncate_name(&character.origin.name, LOCATION_DISPLAY_LEN);
    let location = truncate_name(&character.location.name, LOCATION_DISPLAY_LEN);

    let open_details = {
        let character = character.clone();
        move |_| store.selected().set(Some(character.clone()))
    };

    view! {
        <div class="character-card" on:click=open_details>
            <img src=character.image.clone() alt=character.name.clone() class="character-image" />
            <div class="character-info">
                <h3 class="character-name">{character.name.clone()}</h3>
                <div class="character-details">
                    <div class="detail-item">
                        <span class=status_class></span>
                        <span>{status_line}</span>
                    </div>
                    <div class="detail-item">{gender}</div>
                    <div class="detail-item">{origin}</div>
                    <div class="detail-item">{location}</div>
                </div>
            </div>
        </div>
    }
}
