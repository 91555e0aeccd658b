//! Catalog API
//!
//! Fetch wrapper around the remote character endpoint.

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

use crate::filters::{character_page_url, CharacterFilters};
use crate::models::CharacterPage;

/// Remote catalog root
pub const BASE_URL: &str = "https://rickandmortyapi.com/api";

/// Fetch one page of characters under the given filters.
///
/// A 404 is the API's answer to an over-constrained filter and comes back
/// as a valid empty page; any other non-success status or a transport
/// failure is an error.
pub async fn fetch_character_page(
    page: u32,
    filters: &CharacterFilters,
) -> Result<CharacterPage, String> {
    let url = character_page_url(BASE_URL, page, filters);
    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;

    let response = JsFuture::from(window.fetch_with_str(&url))
        .await
        .map_err(|e| format!("network error: {:?}", e))?;
    let response: Response = response
        .dyn_into()
        .map_err(|_| "fetch returned a non-Response value".to_string())?;

    if response.status() == 404 {
        return Ok(CharacterPage::empty());
    }
    if !response.ok() {
        return Err(format!("request failed with status {}", response.status()));
    }

    let body: js_sys::Promise = response.json().map_err(|e| format!("{:?}", e))?;
    let json = JsFuture::from(body)
        .await
        .map_err(|e| format!("invalid response body: {:?}", e))?;
    serde_wasm_bindgen::from_value(json).map_err(|e| e.to_string())
}
