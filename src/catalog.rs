//! Compiled-in cheese catalog.
//!
//! The catalog is fixed at build time and never mutated. Names are unique when
//! compared case-insensitively, which is what guess matching relies on.

/// One cheese entry: the answer, a picture and a few facts shown as hints.
#[derive(Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Item {
    pub name: &'static str,
    pub image_ref: &'static str,
    pub facts: &'static [&'static str],
}

impl Item {
    /// Case-insensitive name match. No trimming: `" brie"` is not `"Brie"`.
    pub fn matches(&self, guess: &str) -> bool {
        guess.to_lowercase() == self.name.to_lowercase()
    }
}

pub static CATALOG: [Item; 5] = [
    Item {
        name: "Cheddar",
        image_ref: "https://upload.wikimedia.org/wikipedia/commons/thumb/1/18/Somerset-Cheddar.jpg/220px-Somerset-Cheddar.jpg",
        facts: &[
            "Cheddar cheese was first made in England.",
            "Cheddar cheese can range in taste from mild to sharp, depending on its age.",
            "Cheddar cheese is one of the most popular types of cheese in the world.",
        ],
    },
    Item {
        name: "Brie",
        image_ref: "https://upload.wikimedia.org/wikipedia/commons/thumb/8/88/Brie_01.jpg/220px-Brie_01.jpg",
        facts: &[
            "Brie cheese was named after the French region where it was first made.",
            "Brie cheese has a soft, creamy texture and a mild flavor.",
            "Brie cheese is often served with crackers and fruit.",
        ],
    },
    Item {
        name: "Blue",
        image_ref: "https://upload.wikimedia.org/wikipedia/commons/thumb/a/a8/Bleu_de_Gex.jpg/220px-Bleu_de_Gex.jpg",
        facts: &[
            "Blue cheese is known for its blue or green veins, which are created by adding mold spores to the cheese.",
            "Blue cheese has a strong, pungent flavor.",
            "Blue cheese is often crumbled over salads or used as a dip for vegetables.",
        ],
    },
    Item {
        name: "Gouda",
        image_ref: "https://upload.wikimedia.org/wikipedia/commons/thumb/d/d1/WikiCheese_-_Gouda_36_mois_03.jpg/220px-WikiCheese_-_Gouda_36_mois_03.jpg",
        facts: &[
            "Gouda cheese originated in the Netherlands.",
            "Gouda cheese has a nutty flavor and a firm, creamy texture.",
            "Gouda cheese is often used in sandwiches and melted on top of burgers.",
        ],
    },
    Item {
        name: "Feta",
        image_ref: "https://upload.wikimedia.org/wikipedia/commons/thumb/2/28/Feta_Cheese.jpg/250px-Feta_Cheese.jpg",
        facts: &[
            "Feta cheese is a Greek cheese made from sheep or goat milk.",
            "Feta cheese has a tangy, salty flavor and a crumbly texture.",
            "Feta cheese is often used in Greek salads and on top of pizzas.",
        ],
    },
];

/// Look up a catalog item by name, ignoring case.
pub fn find(name: &str) -> Option<&'static Item> {
    CATALOG.iter().find(|item| item.matches(name))
}
