//! Filter Set
//!
//! User-selected constraints and their query-string form. Selector fields
//! use the sentinel value "all" for "no constraint"; the text filter is
//! unconstrained when it trims to empty. Sentinels never reach the URL.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

/// Characters escaped inside a query value
const QUERY_VALUE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'&')
    .add(b'=')
    .add(b'+')
    .add(b'%')
    .add(b'?');

/// Selector value meaning "no constraint"
pub const ANY: &str = "all";

/// Active filter constraints for a character fetch
#[derive(Debug, Clone, PartialEq)]
pub struct CharacterFilters {
    pub name: String,
    pub status: String,
    pub species: String,
    pub gender: String,
}

impl Default for CharacterFilters {
    fn default() -> Self {
        Self {
            name: String::new(),
            status: ANY.to_string(),
            species: ANY.to_string(),
            gender: ANY.to_string(),
        }
    }
}

impl CharacterFilters {
    /// Query pairs for every non-sentinel field, in a fixed order
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        let name = self.name.trim();
        if !name.is_empty() {
            pairs.push(("name", name.to_string()));
        }
        for (key, value) in [
            ("status", &self.status),
            ("species", &self.species),
            ("gender", &self.gender),
        ] {
            if value != ANY {
                pairs.push((key, value.clone()));
            }
        }
        pairs
    }
}

/// Full request URL for one page under the given filters
pub fn character_page_url(base: &str, page: u32, filters: &CharacterFilters) -> String {
    let mut url = format!("{}/character/?page={}", base, page);
    for (key, value) in filters.query_pairs() {
        url.push('&');
        url.push_str(key);
        url.push('=');
        url.push_str(&utf8_percent_encode(&value, QUERY_VALUE).to_string());
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://example.org/api";

    #[test]
    fn test_unconstrained_filters_emit_only_page() {
        let filters = CharacterFilters::default();
        assert_eq!(
            character_page_url(BASE, 1, &filters),
            "https://example.org/api/character/?page=1"
        );
    }

    #[test]
    fn test_whitespace_name_is_unconstrained() {
        let filters = CharacterFilters {
            name: "   ".to_string(),
            ..Default::default()
        };
        assert!(filters.query_pairs().is_empty());
    }

    #[test]
    fn test_active_filters_emit_exactly_their_pairs() {
        let filters = CharacterFilters {
            name: "rick".to_string(),
            status: "alive".to_string(),
            species: ANY.to_string(),
            gender: ANY.to_string(),
        };
        assert_eq!(
            character_page_url(BASE, 3, &filters),
            "https://example.org/api/character/?page=3&name=rick&status=alive"
        );
    }

    #[test]
    fn test_name_is_trimmed_and_escaped() {
        let filters = CharacterFilters {
            name: "  rick sanchez ".to_string(),
            ..Default::default()
        };
        assert_eq!(
            character_page_url(BASE, 1, &filters),
            "https://example.org/api/character/?page=1&name=rick%20sanchez"
        );
    }

    #[test]
    fn test_reserved_characters_are_escaped() {
        let filters = CharacterFilters {
            name: "a&b=c".to_string(),
            ..Default::default()
        };
        assert_eq!(
            character_page_url(BASE, 1, &filters),
            "https://example.org/api/character/?page=1&name=a%26b%3Dc"
        );
    }

    #[test]
    fn test_all_selectors_active() {
        let filters = CharacterFilters {
            name: String::new(),
            status: "dead".to_string(),
            species: "human".to_string(),
            gender: "female".to_string(),
        };
        assert_eq!(
            filters.query_pairs(),
            vec![
                ("status", "dead".to_string()),
                ("species", "human".to_string()),
                ("gender", "female".to_string()),
            ]
        );
    }
}
