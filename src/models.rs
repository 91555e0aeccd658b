//! Catalog Models
//!
//! Data structures matching the remote character API envelope.

use chrono::DateTime;
use serde::{Deserialize, Serialize};

/// One character as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    pub id: u32,
    pub name: String,
    pub status: String,
    pub species: String,
    pub gender: String,
    pub image: String,
    pub origin: LocationRef,
    pub location: LocationRef,
    #[serde(default)]
    pub episode: Vec<String>,
    pub created: String,
}

/// Named reference to a location (origin or current)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationRef {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

/// Pagination block of the response envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageInfo {
    #[serde(default)]
    pub count: u32,
    pub pages: u32,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub prev: Option<String>,
}

/// Full response envelope for one page of characters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterPage {
    pub info: PageInfo,
    pub results: Vec<Character>,
}

impl CharacterPage {
    /// The zero-result page the API signals with a 404
    pub fn empty() -> Self {
        Self {
            info: PageInfo {
                count: 0,
                pages: 1,
                next: None,
                prev: None,
            },
            results: Vec::new(),
        }
    }
}

impl Character {
    pub fn episode_count(&self) -> usize {
        self.episode.len()
    }

    /// Creation timestamp rendered as dd/mm/yyyy.
    /// Falls back to the raw string if the API sends something unparseable.
    pub fn created_display(&self) -> String {
        DateTime::parse_from_rfc3339(&self.created)
            .map(|d| d.format("%d/%m/%Y").to_string())
            .unwrap_or_else(|_| self.created.clone())
    }

    /// CSS class pair for the colored status dot
    pub fn status_class(&self) -> String {
        format!("status-indicator status-{}", self.status.to_lowercase())
    }
}

/// Upper-case the first letter for display (API values are lowercase-ish)
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_deserializes() {
        let json = r#"{
            "info": { "count": 826, "pages": 42, "next": "https://example.org/api/character/?page=2", "prev": null },
            "results": [{
                "id": 1,
                "name": "Rick Sanchez",
                "status": "Alive",
                "species": "Human",
                "gender": "Male",
                "image": "https://example.org/api/character/avatar/1.jpeg",
                "origin": { "name": "Earth (C-137)", "url": "https://example.org/api/location/1" },
                "location": { "name": "Citadel of Ricks", "url": "https://example.org/api/location/3" },
                "episode": ["https://example.org/api/episode/1", "https://example.org/api/episode/2"],
                "created": "2017-11-04T18:48:46.250Z"
            }]
        }"#;

        let page: CharacterPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.info.pages, 42);
        assert_eq!(page.results.len(), 1);

        let rick = &page.results[0];
        assert_eq!(rick.name, "Rick Sanchez");
        assert_eq!(rick.origin.name, "Earth (C-137)");
        assert_eq!(rick.episode_count(), 2);
        assert_eq!(rick.created_display(), "04/11/2017");
    }

    #[test]
    fn test_empty_page_keeps_one_page() {
        let page = CharacterPage::empty();
        assert_eq!(page.info.pages, 1);
        assert!(page.results.is_empty());
    }

    #[test]
    fn test_created_display_falls_back_on_garbage() {
        let mut c = sample_character();
        c.created = "not a timestamp".to_string();
        assert_eq!(c.created_display(), "not a timestamp");
    }

    #[test]
    fn test_capitalize_first() {
        assert_eq!(capitalize_first("alive"), "Alive");
        assert_eq!(capitalize_first("unknown"), "Unknown");
        assert_eq!(capitalize_first(""), "");
    }

    pub(crate) fn sample_character() -> Character {
        Character {
            id: 1,
            name: "Rick Sanchez".to_string(),
            status: "Alive".to_string(),
            species: "Human".to_string(),
            gender: "Male".to_string(),
            image: String::new(),
            origin: LocationRef {
                name: "Earth (C-137)".to_string(),
                url: String::new(),
            },
            location: LocationRef {
                name: "Citadel of Ricks".to_string(),
                url: String::new(),
            },
            episode: Vec::new(),
            created: "2017-11-04T18:48:46.250Z".to_string(),
        }
    }
}
