//! Status Tally
//!
//! Aggregate counters over the current page buffer.

use crate::models::Character;

/// Per-status counts for the most recently fetched page.
/// Anything that is neither "alive" nor "dead" lands in `unknown`,
/// so the three buckets always sum to `total`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusTally {
    pub total: usize,
    pub alive: usize,
    pub dead: usize,
    pub unknown: usize,
}

impl StatusTally {
    pub fn from_characters(characters: &[Character]) -> Self {
        let mut tally = Self {
            total: characters.len(),
            ..Self::default()
        };
        for character in characters {
            if character.status.eq_ignore_ascii_case("alive") {
                tally.alive += 1;
            } else if character.status.eq_ignore_ascii_case("dead") {
                tally.dead += 1;
            } else {
                tally.unknown += 1;
            }
        }
        tally
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Character, LocationRef};

    fn make_character(id: u32, status: &str) -> Character {
        Character {
            id,
            name: format!("Character {}", id),
            status: status.to_string(),
            species: "Human".to_string(),
            gender: "unknown".to_string(),
            image: String::new(),
            origin: LocationRef {
                name: "Earth".to_string(),
                url: String::new(),
            },
            location: LocationRef {
                name: "Earth".to_string(),
                url: String::new(),
            },
            episode: Vec::new(),
            created: String::new(),
        }
    }

    #[test]
    fn test_tally_buckets_sum_to_total() {
        let characters = vec![
            make_character(1, "Alive"),
            make_character(2, "alive"),
            make_character(3, "Dead"),
            make_character(4, "unknown"),
            make_character(5, "Presumed dead"), // not an exact match
        ];

        let tally = StatusTally::from_characters(&characters);
        assert_eq!(tally.total, 5);
        assert_eq!(tally.alive, 2);
        assert_eq!(tally.dead, 1);
        assert_eq!(tally.unknown, 2);
        assert_eq!(tally.alive + tally.dead + tally.unknown, tally.total);
    }

    #[test]
    fn test_empty_buffer_is_all_zero() {
        assert_eq!(StatusTally::from_characters(&[]), StatusTally::default());
    }
}
