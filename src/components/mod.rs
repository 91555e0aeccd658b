//! UI Components
//!
//! Reusable Leptos components.

mod character_card;
mod character_grid;
mod character_modal;
mod filter_bar;
mod pagination_bar;
mod stats_bar;

pub use character_card::CharacterCard;
pub use character_grid::CharacterGrid;
pub use character_modal::CharacterModal;
pub use filter_bar::FilterBar;
pub use pagination_bar::PaginationBar;
pub use stats_bar::StatsBar;
