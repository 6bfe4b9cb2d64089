//! Card Conjurer save-file import (.cardconjurer)
//!
//! The save file is a JSON array of card designs. Each design carries its
//! display text in named fields plus planeswalker/saga ability tables; some
//! exports wrap each design in a `data` envelope. Normalization selects the
//! stats source by type line, splits flavor text out of the rules field, and
//! pairs ability lines with their associated values.

use crate::core::{Ability, Card};
use crate::{CubeError, Result};
use colored::Colorize;
use serde::Deserialize;
use smallvec::SmallVec;
use std::fs;
use std::path::Path;

/// Marker separating flavor text from rules text inside the rules field.
const FLAVOR_SEPARATOR: &str = "{flavor}";

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConjuredCard {
    #[serde(rename = "artSource")]
    art_source: String,
    #[serde(rename = "infoArtist")]
    info_artist: String,
    text: CardText,
    planeswalker: AbilityTable,
    saga: AbilityTable,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CardText {
    mana: TextField,
    title: TextField,
    #[serde(rename = "type")]
    type_line: TextField,
    rules: TextField,
    pt: TextField,
    ability0: TextField,
    ability1: TextField,
    ability2: TextField,
    ability3: TextField,
    loyalty: TextField,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct TextField {
    text: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct AbilityTable {
    abilities: Vec<String>,
    count: usize,
}

/// Cube loader for .cardconjurer files
pub struct CubeLoader;

impl CubeLoader {
    /// Load and normalize a cube save file.
    pub fn load_from_file(path: &Path) -> Result<Vec<Card>> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse the save file content.
    ///
    /// Records that fail to normalize are skipped with a warning; an
    /// unparsable file as a whole is an error.
    pub fn parse(content: &str) -> Result<Vec<Card>> {
        let records: Vec<serde_json::Value> = serde_json::from_str(content)?;
        let mut cards = Vec::with_capacity(records.len());

        for (i, record) in records.into_iter().enumerate() {
            match normalize(record) {
                Ok(card) => cards.push(card),
                Err(e) => {
                    eprintln!("{}", format!("skipping record {i}: {e}").yellow());
                }
            }
        }

        Ok(cards)
    }
}

fn normalize(record: serde_json::Value) -> Result<Card> {
    // Some exports wrap the design in a `data` envelope.
    let record = match record {
        serde_json::Value::Object(mut map) if map.contains_key("data") => map
            .remove("data")
            .unwrap_or(serde_json::Value::Null),
        other => other,
    };

    let conjured: ConjuredCard = serde_json::from_value(record)?;
    if conjured.text.title.text.trim().is_empty() {
        return Err(CubeError::InvalidCardRecord("missing title".to_string()));
    }

    Ok(convert(conjured))
}

fn convert(mut c: ConjuredCard) -> Card {
    let mut art_url = std::mem::take(&mut c.art_source);
    if art_url.starts_with("data:image") {
        // Embedded image blobs are useless on a terminal; drop them.
        println!("{} image data loaded", c.text.title.text);
        art_url.clear();
    }

    let type_line = c.text.type_line.text.clone();
    if type_line.contains("tale") || type_line.contains("avatar") {
        return convert_ability_card(c, art_url);
    }

    let stats = if type_line.contains("creature") {
        c.text.pt.text.clone()
    } else {
        String::new()
    };

    // Flavor rides in the rules field behind a fixed separator.
    let mut rules = c.text.rules.text.clone();
    let mut flavor = String::new();
    if let Some(idx) = rules.find(FLAVOR_SEPARATOR) {
        flavor = rules[idx + FLAVOR_SEPARATOR.len()..].to_string();
        rules.truncate(idx);
    }

    let abilities: SmallVec<[Ability; 4]> = rules
        .lines()
        .map(|line| Ability::text_only(line.trim()))
        .collect();

    Card {
        name: c.text.title.text,
        cost: c.text.mana.text,
        type_line,
        stats,
        abilities,
        art_url,
        artist: c.info_artist,
        flavor,
    }
}

/// Avatars and tales keep their rules in the numbered ability slots, paired
/// with values from the planeswalker/saga table.
fn convert_ability_card(c: ConjuredCard, art_url: String) -> Card {
    let type_line = c.text.type_line.text.clone();
    let is_tale = type_line.contains("tale");
    let table = if is_tale { c.saga } else { c.planeswalker };

    let texts = [
        c.text.ability0.text,
        c.text.ability1.text,
        c.text.ability2.text,
        c.text.ability3.text,
    ];
    let abilities: SmallVec<[Ability; 4]> = texts
        .into_iter()
        .zip(
            table
                .abilities
                .into_iter()
                .chain(std::iter::repeat(String::new())),
        )
        .take(table.count.min(4))
        .map(|(text, number)| Ability { text, number })
        .collect();

    let stats = if is_tale {
        abilities
            .iter()
            .map(|a| a.number.trim().parse::<i64>().unwrap_or(0))
            .sum::<i64>()
            .to_string()
    } else {
        c.text.loyalty.text.clone()
    };

    Card {
        name: c.text.title.text,
        cost: c.text.mana.text,
        type_line,
        stats,
        abilities,
        art_url,
        artist: c.info_artist,
        flavor: String::new(),
    }
}
