//! Draft session bookkeeping
//!
//! One session at a time. The pool is shuffled once at start and dealt from
//! the front; each pick moves exactly one card to the main deck and the
//! rest of the pack to the passed pile, then deals a fresh pack. At every
//! point a card id is in exactly one of pool, choices, passed, or the main
//! deck.

use crate::core::CardId;
use crate::repository::{CardList, CardRepository};

/// Cards offered per pick unless overridden on the command line.
pub const DEFAULT_PACK_SIZE: usize = 5;

#[derive(Debug, Clone)]
pub struct DraftSession {
    pub pool: CardList,
    pub choices: CardList,
    pub passed: CardList,
    pack_size: usize,
}

/// Outcome of a successful pick.
#[derive(Debug)]
pub struct PickOutcome {
    pub picked: CardId,
    /// True when the pool could not fill another pack; the draft cannot
    /// continue.
    pub pool_exhausted: bool,
}

/// Why a pick was rejected. Session state is untouched on any of these.
#[derive(Debug, PartialEq, Eq)]
pub enum PickError {
    NoMatch,
    Ambiguous(usize),
}

impl DraftSession {
    /// Start a session over the given pool, shuffled once. Deals the first
    /// pack immediately.
    pub fn start(pool_ids: Vec<CardId>, pack_size: usize, rng: &mut impl rand::Rng) -> Self {
        let mut pool = CardList::from(pool_ids);
        pool.shuffle(rng);

        let mut session = DraftSession {
            pool,
            choices: CardList::new(),
            passed: CardList::new(),
            pack_size,
        };
        session.deal_pack();
        session
    }

    /// Deal `min(pack_size, pool.len())` cards into `choices`. Returns the
    /// dealt size.
    fn deal_pack(&mut self) -> usize {
        debug_assert!(self.choices.is_empty());
        for id in self.pool.deal(self.pack_size) {
            self.choices.add(id);
        }
        self.choices.len()
    }

    /// Pick the single card in the current pack whose name contains
    /// `needle` (case-insensitive). The match moves to `deck_main`, the
    /// rest of the pack moves to `passed`, and a new pack is dealt.
    pub fn pick(
        &mut self,
        needle: &str,
        repo: &CardRepository,
        deck_main: &mut CardList,
    ) -> Result<PickOutcome, PickError> {
        let needle = needle.to_lowercase();
        let matches: Vec<CardId> = self
            .choices
            .cards
            .iter()
            .copied()
            .filter(|&id| repo.get(id).name.to_lowercase().contains(&needle))
            .collect();

        let picked = match matches.as_slice() {
            [] => return Err(PickError::NoMatch),
            [one] => *one,
            many => return Err(PickError::Ambiguous(many.len())),
        };

        for &id in &self.choices.cards {
            if id != picked {
                self.passed.add(id);
            }
        }
        self.choices.clear();
        deck_main.add(picked);

        let dealt = self.deal_pack();
        Ok(PickOutcome {
            picked,
            pool_exhausted: dealt == 0,
        })
    }
}
