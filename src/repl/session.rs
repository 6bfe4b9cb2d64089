//! Command dispatch and the interactive loop
//!
//! One session owns the repository, the persistent deck, and the optional
//! draft. Each input line is tokenized, checked for draft/persistence
//! verbs, and otherwise handed to the query engine against the selected
//! collection. Every line runs to completion (or a reported error) before
//! the next is read.

use crate::core::CardId;
use crate::display;
use crate::loader::DeckStore;
use crate::repl::draft::{DraftSession, PickError};
use crate::repl::query::run_query;
use crate::repl::tokenizer::{tokenize, Token};
use crate::repl::report;
use crate::repository::{CardRepository, Deck};
use crate::Result;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::VecDeque;
use std::io::{BufRead, Write};

/// Whether the loop should keep reading lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

pub struct ReplSession {
    repo: CardRepository,
    deck: Deck,
    draft: Option<DraftSession>,
    rng: ChaCha8Rng,
    pack_size: usize,
}

impl ReplSession {
    /// Create a session. A fixed seed makes draft shuffles deterministic.
    pub fn new(repo: CardRepository, seed: Option<u64>, pack_size: usize) -> Self {
        let rng = match seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        ReplSession {
            repo,
            deck: Deck::default(),
            draft: None,
            rng,
            pack_size,
        }
    }

    pub fn repo(&self) -> &CardRepository {
        &self.repo
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn draft(&self) -> Option<&DraftSession> {
        self.draft.as_ref()
    }

    /// Read-eval-print loop: one command per line until an exit token or
    /// end of input.
    pub fn run(&mut self, input: &mut impl BufRead, out: &mut dyn Write) -> Result<()> {
        loop {
            write!(out, "> ")?;
            out.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                return Ok(());
            }
            if self.handle_line(line.trim_end(), out)? == Control::Quit {
                return Ok(());
            }
        }
    }

    /// Dispatch one input line.
    pub fn handle_line(&mut self, line: &str, out: &mut dyn Write) -> Result<Control> {
        let mut tokens: VecDeque<Token> = tokenize(line).into();
        let Some(first) = tokens.front().cloned() else {
            return Ok(Control::Continue);
        };

        if !first.literal {
            match first.text.as_str() {
                "q" | "exit" => return Ok(Control::Quit),
                "start" => {
                    self.start_draft(out)?;
                    return Ok(Control::Continue);
                }
                "stop" => {
                    self.stop_draft(out)?;
                    return Ok(Control::Continue);
                }
                "p" => {
                    tokens.pop_front();
                    let arg = tokens.pop_front();
                    self.pick(arg, out)?;
                    return Ok(Control::Continue);
                }
                "save" => {
                    tokens.pop_front();
                    let arg = tokens.pop_front();
                    self.save_deck(arg, out)?;
                    return Ok(Control::Continue);
                }
                "load" => {
                    tokens.pop_front();
                    let arg = tokens.pop_front();
                    self.load_deck(arg, out)?;
                    return Ok(Control::Continue);
                }
                _ => {}
            }
        }

        let Some(working) = self.select_collection(&mut tokens, out)? else {
            return Ok(Control::Continue);
        };
        run_query(tokens, working, &self.repo, out)?;
        Ok(Control::Continue)
    }

    /// Resolve an optional leading collection selector into a working set.
    /// Defaults to the whole cube. `None` means the error was already
    /// reported.
    fn select_collection(
        &self,
        tokens: &mut VecDeque<Token>,
        out: &mut dyn Write,
    ) -> Result<Option<Vec<CardId>>> {
        let selector = match tokens.front() {
            Some(token) if !token.literal => token.text.clone(),
            _ => return Ok(Some(self.repo.all_ids())),
        };

        let working = match selector.as_str() {
            "cube" => self.repo.all_ids(),
            "deck" => self.deck.main.cards.clone(),
            "side" => self.deck.side.cards.clone(),
            "pool" | "choices" | "passed" => {
                let Some(draft) = &self.draft else {
                    report(out, "no draft in progress")?;
                    return Ok(None);
                };
                match selector.as_str() {
                    "pool" => draft.pool.cards.clone(),
                    "choices" => draft.choices.cards.clone(),
                    _ => draft.passed.cards.clone(),
                }
            }
            _ => return Ok(Some(self.repo.all_ids())),
        };

        tokens.pop_front();
        Ok(Some(working))
    }

    fn start_draft(&mut self, out: &mut dyn Write) -> Result<()> {
        if self.draft.is_some() {
            return report(out, "draft already in progress");
        }

        // Cards already drafted into the deck are not reintroduced.
        let pool: Vec<CardId> = self
            .repo
            .all_ids()
            .into_iter()
            .filter(|&id| !self.deck.main.contains(id))
            .collect();
        if pool.is_empty() {
            return report(out, "no cards left to draft");
        }

        let session = DraftSession::start(pool, self.pack_size, &mut self.rng);
        self.show_pack(&session, out)?;
        self.draft = Some(session);
        Ok(())
    }

    fn stop_draft(&mut self, out: &mut dyn Write) -> Result<()> {
        if self.draft.take().is_none() {
            return report(out, "use start first");
        }
        writeln!(out, "draft stopped, {} cards in deck", self.deck.main.len())?;
        Ok(())
    }

    fn pick(&mut self, arg: Option<Token>, out: &mut dyn Write) -> Result<()> {
        let Some(arg) = arg else {
            return report(out, "missing argument");
        };
        let Some(draft) = self.draft.as_mut() else {
            return report(out, "no draft in progress");
        };

        match draft.pick(&arg.text, &self.repo, &mut self.deck.main) {
            Ok(outcome) => {
                writeln!(
                    out,
                    "picked {}",
                    display::list_line(self.repo.get(outcome.picked))
                )?;
                if outcome.pool_exhausted {
                    writeln!(out, "pool exhausted")?;
                } else if let Some(draft) = &self.draft {
                    self.show_pack(draft, out)?;
                }
                Ok(())
            }
            Err(PickError::NoMatch) => report(out, "no card in the pack matches"),
            Err(PickError::Ambiguous(n)) => {
                report(out, &format!("{n} cards match, be more specific"))
            }
        }
    }

    fn show_pack(&self, session: &DraftSession, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "pack of {}:", session.choices.len())?;
        for &id in &session.choices.cards {
            writeln!(out, "{}", display::list_line(self.repo.get(id)))?;
        }
        Ok(())
    }

    fn save_deck(&self, arg: Option<Token>, out: &mut dyn Write) -> Result<()> {
        let Some(arg) = arg else {
            return report(out, "missing argument");
        };
        let path = DeckStore::path_for(&arg.text);
        match DeckStore::save(&self.deck, &self.repo, &path) {
            Ok(()) => {
                writeln!(out, "deck saved to {}", path.display())?;
                Ok(())
            }
            Err(e) => report(out, &format!("save failed: {e}")),
        }
    }

    fn load_deck(&mut self, arg: Option<Token>, out: &mut dyn Write) -> Result<()> {
        let Some(arg) = arg else {
            return report(out, "missing argument");
        };
        // A loaded deck could overlap the live pool and break the draft
        // partition.
        if self.draft.is_some() {
            return report(out, "finish the draft first");
        }

        let path = DeckStore::path_for(&arg.text);
        match DeckStore::load(&self.repo, &path) {
            Ok(deck) => {
                self.deck = deck;
                writeln!(out, "deck loaded from {}", path.display())?;
                Ok(())
            }
            // The in-memory deck is untouched on any failure.
            Err(e) => report(out, &format!("load failed: {e}")),
        }
    }
}
