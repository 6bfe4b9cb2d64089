//! Core card types

pub mod card;
pub mod cost;

pub use card::{Ability, Card, CardId};
pub use cost::{color_of, converted_cost, ColorCategory};
