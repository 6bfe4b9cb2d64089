//! Deck persistence end-to-end tests
//!
//! Save a drafted deck through the session commands and load it back.

use cube_cli::core::Card;
use cube_cli::repl::ReplSession;
use cube_cli::repository::CardRepository;

fn session(seed: u64) -> ReplSession {
    colored::control::set_override(false);
    let cards = (0..12)
        .map(|i| Card::new(format!("Card {i:02}"), "{1}", "sorcery"))
        .collect();
    ReplSession::new(CardRepository::new(cards), Some(seed), 5)
}

fn run(session: &mut ReplSession, line: &str) -> String {
    let mut out = Vec::new();
    session.handle_line(line, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_save_then_load_replaces_wholesale() {
    let dir = tempfile::tempdir().unwrap();
    let deck_name = dir.path().join("drafted").to_string_lossy().to_string();

    // Draft two cards into the deck.
    let mut first = session(5);
    run(&mut first, "start");
    for _ in 0..2 {
        let id = first.draft().unwrap().choices.cards[0];
        let name = first.repo().get(id).name.clone();
        run(&mut first, &format!("p \"{name}\""));
    }
    run(&mut first, "stop");
    let saved_names: Vec<String> = first
        .deck()
        .main
        .cards
        .iter()
        .map(|&id| first.repo().get(id).name.clone())
        .collect();

    let output = run(&mut first, &format!("save {deck_name}"));
    assert!(output.contains("deck saved"));

    // A fresh session over the same cube loads the identical deck.
    let mut second = session(6);
    assert!(second.deck().main.is_empty());
    let output = run(&mut second, &format!("load {deck_name}"));
    assert!(output.contains("deck loaded"));

    let loaded_names: Vec<String> = second
        .deck()
        .main
        .cards
        .iter()
        .map(|&id| second.repo().get(id).name.clone())
        .collect();
    assert_eq!(loaded_names, saved_names);
    assert!(second.deck().side.is_empty());
}

#[test]
fn test_load_with_duplicate_names_keeps_draft_accounting() {
    let dir = tempfile::tempdir().unwrap();
    let deck_name = dir.path().join("doubled").to_string_lossy().to_string();
    std::fs::write(
        dir.path().join("doubled.deck.json"),
        r#"{ "main": ["Card 03", "Card 03"], "side": [] }"#,
    )
    .unwrap();

    let mut s = session(5);
    let output = run(&mut s, &format!("load {deck_name}"));
    assert!(output.contains("deck loaded"));
    assert_eq!(s.deck().main.len(), 1);

    // Every card stays in exactly one collection once a draft begins.
    run(&mut s, "start");
    let draft = s.draft().unwrap();
    let total = draft.pool.len() + draft.choices.len() + draft.passed.len() + s.deck().main.len();
    assert_eq!(total, s.repo().len());
}

#[test]
fn test_failed_load_leaves_deck_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("never-saved").to_string_lossy().to_string();

    let mut s = session(5);
    run(&mut s, "start");
    let id = s.draft().unwrap().choices.cards[0];
    let name = s.repo().get(id).name.clone();
    run(&mut s, &format!("p \"{name}\""));
    run(&mut s, "stop");
    assert_eq!(s.deck().main.len(), 1);

    let output = run(&mut s, &format!("load {missing}"));
    assert!(output.contains("load failed"));
    assert_eq!(s.deck().main.len(), 1);
}
