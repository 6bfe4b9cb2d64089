//! Query end-to-end tests
//!
//! Drive full command lines through the session dispatcher and check the
//! rendered output.

use cube_cli::core::Card;
use cube_cli::repl::{Control, ReplSession};
use cube_cli::repository::CardRepository;

fn session_with(cards: Vec<Card>) -> ReplSession {
    colored::control::set_override(false);
    ReplSession::new(CardRepository::new(cards), Some(1), 5)
}

fn run(session: &mut ReplSession, line: &str) -> String {
    let mut out = Vec::new();
    let control = session.handle_line(line, &mut out).unwrap();
    assert_eq!(control, Control::Continue);
    String::from_utf8(out).unwrap()
}

fn named_cards(n: usize) -> Vec<Card> {
    (0..n)
        .map(|i| Card::new(format!("Filler {i:02}"), "{1}", "sorcery"))
        .collect()
}

#[test]
fn test_narrowing_pipeline_to_count() {
    let mut cards = named_cards(10);
    cards.push(Card::new("Legendary Dragon", "{4}{r}{r}", "legendary creature - dragon"));
    cards.push(Card::new("Dragon Whelp", "{2}{r}", "creature - dragon"));
    let mut session = session_with(cards);

    assert_eq!(run(&mut session, "type dragon count").trim(), "2");
    assert_eq!(
        run(&mut session, "type \"legendary creature\" t dragon count").trim(),
        "1"
    );
}

#[test]
fn test_default_terminal_by_size() {
    let mut session = session_with(named_cards(50));

    // One match: a full info block.
    let output = run(&mut session, "n \"filler 0\" n \"filler 01\"");
    assert!(output.contains("Filler 01"));
    assert!(output.contains("sorcery"));

    // Ten matches: one list line per card.
    let output = run(&mut session, "name \"filler 1\"");
    assert_eq!(output.lines().count(), 10);

    // All 50: just the count.
    let output = run(&mut session, "cube");
    assert_eq!(output.trim(), "50");
}

#[test]
fn test_long_and_short_forms_agree() {
    let mut session = session_with(named_cards(30));
    let long = run(&mut session, "name \"filler 2\" count");
    let short = run(&mut session, "n \"filler 2\" count");
    assert_eq!(long, short);
}

#[test]
fn test_errors_do_not_stop_the_session() {
    let mut session = session_with(named_cards(5));

    assert!(run(&mut session, "n").contains("missing argument"));
    assert!(run(&mut session, "blorb").contains("unexpected symbol"));

    // Still responsive afterwards.
    assert_eq!(run(&mut session, "count").trim(), "5");
}

#[test]
fn test_selector_scopes_working_set() {
    let mut session = session_with(named_cards(25));
    assert_eq!(run(&mut session, "cube count").trim(), "25");
    assert_eq!(run(&mut session, "deck count").trim(), "0");
    assert_eq!(run(&mut session, "side count").trim(), "0");
}
