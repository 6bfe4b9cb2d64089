//! Deck persistence (.deck.json)
//!
//! The on-disk shape is a flat JSON dump of card names; ids are resolved
//! against the loaded cube on the way back in. Loading either succeeds and
//! replaces the deck wholesale or fails and leaves the caller's deck alone.

use crate::repository::{CardList, CardRepository, Deck};
use crate::Result;
use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// On-disk deck shape.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct DeckFile {
    pub main: Vec<String>,
    pub side: Vec<String>,
}

/// Deck save/load against user-named files.
pub struct DeckStore;

impl DeckStore {
    /// File path for a user-given deck name.
    pub fn path_for(name: &str) -> PathBuf {
        PathBuf::from(format!("{name}.deck.json"))
    }

    pub fn save(deck: &Deck, repo: &CardRepository, path: &Path) -> Result<()> {
        let file = DeckFile {
            main: names_of(&deck.main, repo),
            side: names_of(&deck.side, repo),
        };
        let json = serde_json::to_string_pretty(&file)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Load a deck, resolving names against the cube.
    ///
    /// Names that no longer resolve are skipped with a warning; they are a
    /// data problem, not a reason to throw the rest of the deck away.
    pub fn load(repo: &CardRepository, path: &Path) -> Result<Deck> {
        let content = fs::read_to_string(path)?;
        let file: DeckFile = serde_json::from_str(&content)
            .map_err(|e| crate::CubeError::InvalidDeckFile(e.to_string()))?;

        let mut deck = Deck::default();
        resolve_into(&mut deck.main, &file.main, repo);
        resolve_into(&mut deck.side, &file.side, repo);
        Ok(deck)
    }
}

fn names_of(list: &CardList, repo: &CardRepository) -> Vec<String> {
    list.cards
        .iter()
        .map(|&id| repo.get(id).name.clone())
        .collect()
}

fn resolve_into(list: &mut CardList, names: &[String], repo: &CardRepository) {
    for name in names {
        match repo.find_exact(name) {
            // A name listed twice resolves to the same card; keeping both
            // entries would put one id in the deck twice.
            Some(id) if list.contains(id) => {
                eprintln!("{}", format!("{name} is already in the deck, skipped").yellow());
            }
            Some(id) => list.add(id),
            None => {
                eprintln!("{}", format!("{name} is not in the cube, skipped").yellow());
            }
        }
    }
}
