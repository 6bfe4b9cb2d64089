//! Mana cost utilities: color categories and converted cost
//!
//! Costs use Card Conjurer's compact notation, e.g. `{2}{u}{u}` or `{pr}`.
//! Both derivations here are recomputed on demand from the cost string; no
//! color or cost total is stored on the card itself.

use std::fmt;

/// Color identity derived from a card's cost string.
///
/// The `{c}` symbol is its own category in the source data, distinct from a
/// cost with no color symbols at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorCategory {
    None,
    Blue,
    Red,
    Green,
    White,
    Colorless,
    Multicolor,
}

impl fmt::Display for ColorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorCategory::None => write!(f, "-"),
            ColorCategory::Blue => write!(f, "u"),
            ColorCategory::Red => write!(f, "r"),
            ColorCategory::Green => write!(f, "g"),
            ColorCategory::White => write!(f, "w"),
            ColorCategory::Colorless => write!(f, "c"),
            ColorCategory::Multicolor => write!(f, "m"),
        }
    }
}

/// Derive the color category of a cost string.
///
/// A single color symbol anywhere in the cost selects that color; two or
/// more distinct symbols make the card multicolor.
pub fn color_of(cost: &str) -> ColorCategory {
    let cost = cost.trim().to_lowercase();
    let mut found = ColorCategory::None;

    for (ch, category) in [
        ('u', ColorCategory::Blue),
        ('r', ColorCategory::Red),
        ('g', ColorCategory::Green),
        ('w', ColorCategory::White),
        ('c', ColorCategory::Colorless),
    ] {
        if !cost.contains(ch) {
            continue;
        }
        if found != ColorCategory::None {
            return ColorCategory::Multicolor;
        }
        found = category;
    }

    found
}

/// Total mana value of a cost string.
///
/// Numeric symbols add their value, phyrexian symbols (leading `p`) add
/// nothing, and every other symbol adds one.
pub fn converted_cost(cost: &str) -> u32 {
    cost.split(['{', '}'])
        .map(str::trim)
        .filter(|sym| !sym.is_empty())
        .map(|sym| {
            let sym = sym.to_lowercase();
            if sym.starts_with('p') {
                0
            } else if let Ok(n) = sym.parse::<u32>() {
                n
            } else {
                1
            }
        })
        .sum()
}
