//! Domain configuration: the closed item lists an investigation ranges over.
//!
//! The domain is an explicit value handed to `Investigation::new` rather
//! than process-wide state, which also makes the universe size and content a
//! test-controlled parameter.

use crate::error::{VerdictError, VerdictResult};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Upper bound on the combined symbol universe. Exhaustive enumeration is
/// 2^n, so the engine refuses domains it could not brute-force comfortably.
pub const MAX_UNIVERSE_SYMBOLS: usize = 24;

/// One of the three closed, mutually exclusive question categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Suspect,
    Weapon,
    Room,
}

impl Category {
    /// All categories, in the fixed suspect/weapon/room order used for the
    /// symbol universe and for reports.
    pub const ALL: [Category; 3] = [Category::Suspect, Category::Weapon, Category::Room];

    /// One-letter tag used to keep symbol names disjoint across categories.
    pub fn tag(self) -> char {
        match self {
            Category::Suspect => 'S',
            Category::Weapon => 'W',
            Category::Room => 'R',
        }
    }

    /// Plural heading for display.
    pub fn heading(self) -> &'static str {
        match self {
            Category::Suspect => "Suspects",
            Category::Weapon => "Weapons",
            Category::Room => "Rooms",
        }
    }

    /// The symbol name for an item in this category, e.g. `S_Lord Alaric`.
    pub fn symbol_name(self, item: &str) -> String {
        format!("{}_{}", self.tag(), item)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Suspect => "suspect",
            Category::Weapon => "weapon",
            Category::Room => "room",
        };
        write!(f, "{}", name)
    }
}

/// The three item lists an investigation ranges over.
///
/// Validated at construction: every category non-empty, no item name repeated
/// within or across categories, and the combined universe small enough to
/// enumerate. Deserialization goes through the same validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawDomain")]
pub struct Domain {
    suspects: Vec<String>,
    weapons: Vec<String>,
    rooms: Vec<String>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawDomain {
    suspects: Vec<String>,
    weapons: Vec<String>,
    rooms: Vec<String>,
}

impl TryFrom<RawDomain> for Domain {
    type Error = VerdictError;

    fn try_from(raw: RawDomain) -> VerdictResult<Self> {
        Domain::new(raw.suspects, raw.weapons, raw.rooms)
    }
}

impl Domain {
    /// Build a validated domain from three item name lists.
    pub fn new(
        suspects: Vec<String>,
        weapons: Vec<String>,
        rooms: Vec<String>,
    ) -> VerdictResult<Self> {
        let domain = Self {
            suspects,
            weapons,
            rooms,
        };

        for category in Category::ALL {
            if domain.items(category).is_empty() {
                return Err(VerdictError::EmptyCategory(category));
            }
        }

        let mut seen = HashSet::new();
        for category in Category::ALL {
            for item in domain.items(category) {
                if !seen.insert(item.clone()) {
                    return Err(VerdictError::DuplicateItem(item.clone()));
                }
            }
        }

        let size = domain.universe_size();
        if size > MAX_UNIVERSE_SYMBOLS {
            return Err(VerdictError::UniverseTooLarge {
                size,
                max: MAX_UNIVERSE_SYMBOLS,
            });
        }

        Ok(domain)
    }

    /// The classic mansion case: three suspects, three weapons, three rooms.
    pub fn classic() -> Self {
        // Static lists sized well under MAX_UNIVERSE_SYMBOLS; validation
        // cannot fail here.
        Self {
            suspects: to_names(&["Lord Alaric", "Lady Morgana", "Butler Edwin"]),
            weapons: to_names(&["Silver Dagger", "Broken Wine Bottle", "Piano Wire"]),
            rooms: to_names(&["Library", "Dining Hall", "Rose Garden"]),
        }
    }

    /// The item names of one category, in declaration order.
    pub fn items(&self, category: Category) -> &[String] {
        match category {
            Category::Suspect => &self.suspects,
            Category::Weapon => &self.weapons,
            Category::Room => &self.rooms,
        }
    }

    /// Does `item` exist (exact name) in the given category?
    pub fn contains(&self, category: Category, item: &str) -> bool {
        self.items(category).iter().any(|name| name == item)
    }

    /// Total number of symbols across all categories.
    pub fn universe_size(&self) -> usize {
        self.suspects.len() + self.weapons.len() + self.rooms.len()
    }

    /// Symbol names for the full universe, suspects first, then weapons,
    /// then rooms, each in declaration order.
    pub fn universe(&self) -> Vec<String> {
        Category::ALL
            .iter()
            .flat_map(|&category| {
                self.items(category)
                    .iter()
                    .map(move |item| category.symbol_name(item))
            })
            .collect()
    }
}

fn to_names(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}
