//! Query-narrowing engine
//!
//! Consumes a token stream left to right against a working set of card ids.
//! Field filters only ever remove members; once a terminal command runs the
//! rest of the line is ignored. When the stream runs out without a terminal
//! command, one is chosen from the result size: smaller sets get more
//! detail (0 -> count, 1..=5 -> info, 6..=20 -> list, larger -> count).

use crate::core::{Card, CardId};
use crate::display;
use crate::repl::{report, Token};
use crate::repository::CardRepository;
use crate::Result;
use std::collections::VecDeque;
use std::io::Write;

/// Largest working set that still prints full info blocks by default.
const INFO_LIMIT: usize = 5;
/// Largest working set that still prints a name list by default.
const LIST_LIMIT: usize = 20;

/// The card fields a query can narrow on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Cost,
    Type,
    Rules,
    Stats,
}

impl Field {
    fn text(self, card: &Card) -> String {
        match self {
            Field::Name => card.name.clone(),
            Field::Cost => card.cost.clone(),
            Field::Type => card.type_line.clone(),
            Field::Rules => card.rules_text(),
            Field::Stats => card.stats.clone(),
        }
    }
}

/// Run one query line to completion against `working`.
pub fn run_query(
    mut tokens: VecDeque<Token>,
    mut working: Vec<CardId>,
    repo: &CardRepository,
    out: &mut dyn Write,
) -> Result<()> {
    while let Some(token) = tokens.pop_front() {
        if token.literal {
            // A quoted value in command position is never a command.
            return report(out, "unexpected symbol");
        }

        match token.text.as_str() {
            "n" | "c" | "t" | "r" | "pt" => {
                let field = match token.text.as_str() {
                    "n" => Field::Name,
                    "c" => Field::Cost,
                    "t" => Field::Type,
                    "pt" => Field::Stats,
                    _ => Field::Rules,
                };
                let Some(arg) = tokens.pop_front() else {
                    return report(out, "missing argument");
                };
                let needle = arg.text.to_lowercase();
                working.retain(|&id| {
                    field.text(repo.get(id)).to_lowercase().contains(&needle)
                });
            }
            op @ ("m<" | "m>" | "m=") => {
                let Some(arg) = tokens.pop_front() else {
                    return report(out, "missing argument");
                };
                let Ok(value) = arg.text.parse::<u32>() else {
                    return report(out, "expected a number");
                };
                working.retain(|&id| {
                    let cmc = repo.get(id).converted_cost();
                    match op {
                        "m<" => cmc < value,
                        "m>" => cmc > value,
                        _ => cmc == value,
                    }
                });
            }
            "s" | "sort" => {
                let Some(arg) = tokens.pop_front() else {
                    return report(out, "missing argument");
                };
                if arg.text == "mana" {
                    working.sort_by_key(|&id| repo.get(id).converted_cost());
                }
            }
            "count" => return print_count(out, working.len()),
            "list" => return print_list(out, &working, repo),
            "info" => return print_info(out, &working, repo),
            _ => return report(out, "unexpected symbol"),
        }
    }

    // Stream exhausted without an explicit terminal command.
    match working.len() {
        0 => print_count(out, 0),
        n if n <= INFO_LIMIT => print_info(out, &working, repo),
        n if n <= LIST_LIMIT => print_list(out, &working, repo),
        n => print_count(out, n),
    }
}

fn print_count(out: &mut dyn Write, n: usize) -> Result<()> {
    writeln!(out, "{}", display::count_line(n))?;
    Ok(())
}

fn print_list(out: &mut dyn Write, working: &[CardId], repo: &CardRepository) -> Result<()> {
    for &id in working {
        writeln!(out, "{}", display::list_line(repo.get(id)))?;
    }
    Ok(())
}

fn print_info(out: &mut dyn Write, working: &[CardId], repo: &CardRepository) -> Result<()> {
    for (i, &id) in working.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        writeln!(out, "{}", display::info_block(repo.get(id)))?;
    }
    Ok(())
}
