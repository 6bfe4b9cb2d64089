//! Input-line tokenizer
//!
//! Splits a command line on spaces, keeps double-quoted substrings together
//! as single literal tokens, and collapses long command names to their short
//! aliases. Literals are never aliased, so a query argument can never be
//! reinterpreted as a command.

/// A single input token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    /// True for quoted tokens; these skip aliasing and never act as
    /// commands.
    pub literal: bool,
}

impl Token {
    pub fn word(text: impl Into<String>) -> Self {
        Token {
            text: text.into(),
            literal: false,
        }
    }

    pub fn literal(text: impl Into<String>) -> Self {
        Token {
            text: text.into(),
            literal: true,
        }
    }
}

/// Tokenize one input line. Total over every input: empty input yields an
/// empty sequence, and an unterminated quote degrades to one literal token
/// covering the rest of the line.
pub fn tokenize(line: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut rest = line.trim();

    while !rest.is_empty() {
        if let Some(body) = rest.strip_prefix('"') {
            match body.find('"') {
                Some(end) => {
                    tokens.push(Token::literal(&body[..end]));
                    rest = body[end + 1..].trim_start();
                }
                None => {
                    tokens.push(Token::literal(body));
                    rest = "";
                }
            }
        } else {
            let end = rest.find(' ').unwrap_or(rest.len());
            tokens.push(Token::word(desugar(&rest[..end])));
            rest = rest[end..].trim_start();
        }
    }

    tokens
}

/// Collapse a long-form command word to its short alias.
fn desugar(token: &str) -> &str {
    match token {
        "name" => "n",
        "cost" => "c",
        "type" => "t",
        "rules" => "r",
        "pick" => "p",
        "quit" => "q",
        other => other,
    }
}
