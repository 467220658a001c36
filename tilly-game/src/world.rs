//! The house-and-yard map Tilly hides in.
//!
//! A static lookup table: eight rooms in a ring, each with a puzzle topic,
//! two exits, and a few flavor lines for "look around". Immutable after
//! load; [`WorldMap::validate`] checks referential integrity and
//! connectivity once at startup.

use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet, VecDeque};

use crate::topic::Topic;

/// Room every game starts in.
pub const START_LOCATION: &str = "home";

/// One room of the map. All fields are static authored content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    pub key: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub topic: Topic,
    pub exits: &'static [&'static str],
    /// Flavor lines served one at a time by "look around".
    pub details: &'static [&'static str],
}

const LOCATIONS: &[Location] = &[
    Location {
        key: "home",
        name: "Home",
        description: "This is where Tilly lives. Where could she be hiding?",
        topic: Topic::Alphabet,
        exits: &["garden", "kitchen"],
        details: &[
            "You notice some alphabet blocks on the floor.",
            "There's a counting chart on the wall.",
            "You see some math flashcards on the table.",
        ],
    },
    Location {
        key: "garden",
        name: "Garden",
        description: "A beautiful garden with flowers and butterflies.",
        topic: Topic::Numbers,
        exits: &["home", "treehouse"],
        details: &[
            "The flowers are arranged in numbered rows.",
            "There are alphabet stones in the garden path.",
            "You see numbers painted on the garden gnomes.",
        ],
    },
    Location {
        key: "kitchen",
        name: "Kitchen",
        description: "The kitchen smells like cookies! Maybe Tilly is looking for a snack.",
        topic: Topic::Addition,
        exits: &["home", "dining_room"],
        details: &[
            "There's a recipe with numbers on the counter.",
            "Alphabet magnets are on the fridge.",
            "You see measuring cups with numbers.",
        ],
    },
    Location {
        key: "dining_room",
        name: "Dining Room",
        description: "A fancy dining room with a big table.",
        topic: Topic::Alphabet,
        exits: &["kitchen", "bedroom"],
        details: &[
            "The placemats have numbers on them.",
            "There are alphabet soup cans on the shelf.",
            "You see numbered plates in the cabinet.",
        ],
    },
    Location {
        key: "bedroom",
        name: "Bedroom",
        description: "A cozy bedroom with a soft bed.",
        topic: Topic::Numbers,
        exits: &["dining_room", "closet"],
        details: &[
            "There's an alphabet poster on the wall.",
            "You see numbered building blocks on the shelf.",
            "There's a counting book on the bed.",
        ],
    },
    Location {
        key: "closet",
        name: "Closet",
        description: "A dark closet full of clothes and toys.",
        topic: Topic::Addition,
        exits: &["bedroom", "playground"],
        details: &[
            "The hangers are numbered in order.",
            "There are alphabet labels on the storage boxes.",
            "You see numbered shoe cubbies.",
        ],
    },
    Location {
        key: "playground",
        name: "Playground",
        description: "A fun playground with swings and slides.",
        topic: Topic::Alphabet,
        exits: &["closet", "treehouse"],
        details: &[
            "The hopscotch has numbers painted on it.",
            "There are alphabet tiles on the play wall.",
            "You see numbered steps on the slide.",
        ],
    },
    Location {
        key: "treehouse",
        name: "Treehouse",
        description: "A cool treehouse high up in a tree.",
        topic: Topic::Numbers,
        exits: &["garden", "playground"],
        details: &[
            "There's a number puzzle on the floor.",
            "You see alphabet flags hanging from the ceiling.",
            "There's a math game on the small table.",
        ],
    },
];

/// Keyed view over the authored rooms.
#[derive(Debug)]
pub struct WorldMap {
    by_key: HashMap<&'static str, &'static Location>,
    keys: Vec<&'static str>,
}

impl WorldMap {
    fn from_locations(locations: &'static [Location]) -> Self {
        Self {
            by_key: locations.iter().map(|loc| (loc.key, loc)).collect(),
            keys: locations.iter().map(|loc| loc.key).collect(),
        }
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&'static Location> {
        self.by_key.get(key).copied()
    }

    /// All room keys, in authored order.
    #[must_use]
    pub fn location_keys(&self) -> &[&'static str] {
        &self.keys
    }

    /// Graph integrity: every exit names an existing room, and every room is
    /// reachable from [`START_LOCATION`].
    #[must_use]
    pub fn validate(&self) -> bool {
        for location in self.by_key.values() {
            if !location.exits.iter().all(|exit| self.by_key.contains_key(exit)) {
                return false;
            }
        }
        let mut seen: HashSet<&str> = HashSet::new();
        let mut queue: VecDeque<&str> = VecDeque::new();
        if self.by_key.contains_key(START_LOCATION) {
            seen.insert(START_LOCATION);
            queue.push_back(START_LOCATION);
        }
        while let Some(key) = queue.pop_front() {
            if let Some(location) = self.by_key.get(key) {
                for exit in location.exits {
                    if seen.insert(*exit) {
                        queue.push_back(*exit);
                    }
                }
            }
        }
        seen.len() == self.by_key.len()
    }
}

/// The shared authored map.
pub fn world() -> &'static WorldMap {
    static WORLD: Lazy<WorldMap> = Lazy::new(|| WorldMap::from_locations(LOCATIONS));
    &WORLD
}

/// Turn a snake_case room key into a display name, for keys that are not in
/// the map (the authored rooms carry their own `name`).
#[must_use]
pub fn format_location_name(key: &str) -> String {
    key.split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_has_eight_connected_rooms() {
        let map = world();
        assert_eq!(map.location_keys().len(), 8);
        assert!(map.validate());
        assert!(map.get(START_LOCATION).is_some());
    }

    #[test]
    fn exits_are_symmetric() {
        let map = world();
        for key in map.location_keys() {
            let location = map.get(key).unwrap();
            for exit in location.exits {
                let neighbor = map.get(exit).unwrap();
                assert!(
                    neighbor.exits.contains(key),
                    "{exit} does not link back to {key}"
                );
            }
        }
    }

    #[test]
    fn every_room_has_flavor_content() {
        let map = world();
        for key in map.location_keys() {
            let location = map.get(key).unwrap();
            assert!(!location.description.is_empty());
            assert!(!location.details.is_empty());
            assert_eq!(location.exits.len(), 2);
        }
    }

    #[test]
    fn unknown_keys_format_readably() {
        assert_eq!(format_location_name("dining_room"), "Dining Room");
        assert_eq!(format_location_name("home"), "Home");
    }
}
