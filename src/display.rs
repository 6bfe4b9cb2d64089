//! Terminal rendering for cards and messages
//!
//! Pure card-to-text conversion; nothing here feeds back into interpreter
//! state. Colors follow the card's cost-derived category.

use crate::core::{Card, ColorCategory};
use colored::{Color, Colorize};

/// Terminal color for a card's color category. `None` for cards without
/// color symbols, which print unstyled.
pub fn category_color(category: ColorCategory) -> Option<Color> {
    match category {
        ColorCategory::None => None,
        ColorCategory::Blue => Some(Color::Blue),
        ColorCategory::Red => Some(Color::Red),
        ColorCategory::Green => Some(Color::Green),
        ColorCategory::White => Some(Color::Yellow),
        ColorCategory::Colorless => Some(Color::Magenta),
        ColorCategory::Multicolor => Some(Color::Cyan),
    }
}

/// One-line entry for `list` output: the card name in its category color.
pub fn list_line(card: &Card) -> String {
    match category_color(card.color_category()) {
        Some(color) => card.name.color(color).to_string(),
        None => card.name.clone(),
    }
}

/// Multi-line `info` block: name, cost, type and stats on the head line,
/// abilities indented beneath (bullet lines one level deeper).
pub fn info_block(card: &Card) -> String {
    let mut head = vec![list_line(card)];
    for field in [&card.cost, &card.type_line, &card.stats] {
        if !field.is_empty() {
            head.push(field.clone());
        }
    }

    let mut block = head.join("    ");
    for ability in &card.abilities {
        if ability.text.is_empty() {
            continue;
        }
        let indent = if ability.text.starts_with('\u{2022}') {
            "        "
        } else {
            "    "
        };
        block.push('\n');
        block.push_str(indent);
        block.push_str(&ability.text);
    }
    block
}

/// Styled working-set size for `count` output.
pub fn count_line(n: usize) -> String {
    n.to_string().green().underline().to_string()
}

/// Single-line user-facing error.
pub fn error_line(msg: &str) -> String {
    msg.red().to_string()
}
