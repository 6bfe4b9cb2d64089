//! Card ownership and collections
//!
//! The repository is the sole owner of every imported card. Named
//! collections (deck piles, draft piles) and transient working sets hold
//! `CardId`s into it, never copies that could diverge.

use crate::core::{Card, CardId};
use serde::{Deserialize, Serialize};

/// Owner of all cards in the loaded cube.
#[derive(Debug, Clone)]
pub struct CardRepository {
    cards: Vec<Card>,
}

impl CardRepository {
    pub fn new(cards: Vec<Card>) -> Self {
        CardRepository { cards }
    }

    pub fn get(&self, id: CardId) -> &Card {
        &self.cards[id.index()]
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Ids of every card in the cube, in import order.
    pub fn all_ids(&self) -> Vec<CardId> {
        (0..self.cards.len() as u32).map(CardId::new).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (CardId, &Card)> {
        self.cards
            .iter()
            .enumerate()
            .map(|(i, card)| (CardId::new(i as u32), card))
    }

    /// First card whose name matches exactly, ignoring case.
    pub fn find_exact(&self, name: &str) -> Option<CardId> {
        let name = name.to_lowercase();
        self.iter()
            .find(|(_, card)| card.name.to_lowercase() == name)
            .map(|(id, _)| id)
    }
}

/// An ordered list of card ids.
///
/// Order matters for the draft pool (it is shuffled once and dealt from the
/// front) and for deck listings, so removal preserves relative order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CardList {
    pub cards: Vec<CardId>,
}

impl CardList {
    pub fn new() -> Self {
        CardList { cards: Vec::new() }
    }

    pub fn add(&mut self, id: CardId) {
        self.cards.push(id);
    }

    pub fn remove(&mut self, id: CardId) -> bool {
        if let Some(pos) = self.cards.iter().position(|&c| c == id) {
            self.cards.remove(pos);
            true
        } else {
            false
        }
    }

    pub fn contains(&self, id: CardId) -> bool {
        self.cards.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn clear(&mut self) {
        self.cards.clear();
    }

    /// Shuffle in place (for the draft pool, once per session).
    pub fn shuffle(&mut self, rng: &mut impl rand::Rng) {
        use rand::seq::SliceRandom;
        self.cards.shuffle(rng);
    }

    /// Remove and return up to `n` ids from the front.
    pub fn deal(&mut self, n: usize) -> Vec<CardId> {
        let n = n.min(self.cards.len());
        self.cards.drain(..n).collect()
    }
}

impl From<Vec<CardId>> for CardList {
    fn from(cards: Vec<CardId>) -> Self {
        CardList { cards }
    }
}

/// The persistent deck: survives draft sessions and save/load wholesale.
#[derive(Debug, Clone, Default)]
pub struct Deck {
    pub main: CardList,
    pub side: CardList,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Card;

    fn sample_repo() -> CardRepository {
        CardRepository::new(vec![
            Card::new("Alpha Wolf", "{1}{g}", "creature - wolf"),
            Card::new("Beta Bolt", "{r}", "instant"),
            Card::new("Gamma Gate", "", "land"),
        ])
    }

    #[test]
    fn test_repository_lookup() {
        let repo = sample_repo();
        assert_eq!(repo.len(), 3);
        let ids = repo.all_ids();
        assert_eq!(ids.len(), 3);
        assert_eq!(repo.get(ids[1]).name, "Beta Bolt");
    }

    #[test]
    fn test_find_exact_ignores_case() {
        let repo = sample_repo();
        let id = repo.find_exact("beta bolt").unwrap();
        assert_eq!(repo.get(id).name, "Beta Bolt");
        assert!(repo.find_exact("beta").is_none());
    }

    #[test]
    fn test_card_list_ops() {
        let mut list = CardList::new();
        let a = CardId::new(0);
        let b = CardId::new(1);

        list.add(a);
        list.add(b);
        assert_eq!(list.len(), 2);
        assert!(list.contains(a));

        assert!(list.remove(a));
        assert!(!list.remove(a));
        assert_eq!(list.len(), 1);
        assert!(!list.contains(a));
    }

    #[test]
    fn test_deal_clamps_to_remaining() {
        let mut list = CardList::from(vec![CardId::new(0), CardId::new(1)]);
        let dealt = list.deal(5);
        assert_eq!(dealt.len(), 2);
        assert!(list.is_empty());
        assert!(list.deal(5).is_empty());
    }
}
