//! Cube import and deck persistence
//!
//! Parsers for the Card Conjurer save format (.cardconjurer) and the flat
//! JSON deck dump (.deck.json)

pub mod cube;
pub mod deck;

pub use cube::CubeLoader;
pub use deck::{DeckFile, DeckStore};
