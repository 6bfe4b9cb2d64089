//! Card records normalized from the Card Conjurer import

use crate::core::cost::{color_of, converted_cost, ColorCategory};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Index of a card in the repository's backing store.
///
/// Every collection (deck piles, draft piles, working sets) holds ids, never
/// card copies, so a card can only ever exist once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardId(u32);

impl CardId {
    pub fn new(n: u32) -> Self {
        CardId(n)
    }

    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

/// One rules line and its associated value.
///
/// The number is the life change for avatar abilities or the time counters
/// for tale chapters; empty for ordinary rules text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ability {
    pub text: String,
    pub number: String,
}

impl Ability {
    pub fn text_only(text: impl Into<String>) -> Self {
        Ability {
            text: text.into(),
            number: String::new(),
        }
    }
}

/// A single imported card. Immutable once normalized.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Card {
    pub name: String,

    /// Compact mana notation, e.g. `{2}{u}{u}`.
    pub cost: String,

    pub type_line: String,

    /// Power/toughness for creatures, health for avatars, time counter
    /// total for tales, empty otherwise.
    pub stats: String,

    pub abilities: SmallVec<[Ability; 4]>,

    pub art_url: String,
    pub artist: String,
    pub flavor: String,
}

impl Card {
    pub fn new(
        name: impl Into<String>,
        cost: impl Into<String>,
        type_line: impl Into<String>,
    ) -> Self {
        Card {
            name: name.into(),
            cost: cost.into(),
            type_line: type_line.into(),
            ..Card::default()
        }
    }

    pub fn color_category(&self) -> ColorCategory {
        color_of(&self.cost)
    }

    pub fn converted_cost(&self) -> u32 {
        converted_cost(&self.cost)
    }

    /// All rules text lines joined, for rules-field queries.
    pub fn rules_text(&self) -> String {
        self.abilities
            .iter()
            .map(|a| a.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
