//! The command interpreter
//!
//! Tokenizer, query-narrowing engine, draft state machine, and the
//! line-oriented dispatch loop that ties them together.

pub mod draft;
pub mod query;
pub mod session;
pub mod tokenizer;

pub use draft::{DraftSession, PickError, DEFAULT_PACK_SIZE};
pub use session::{Control, ReplSession};
pub use tokenizer::{tokenize, Token};

use std::io::Write;

/// Print a single-line user-facing error. Callers leave state unchanged
/// after reporting; the loop continues.
pub(crate) fn report(out: &mut dyn Write, msg: &str) -> crate::Result<()> {
    writeln!(out, "{}", crate::display::error_line(msg))?;
    Ok(())
}
