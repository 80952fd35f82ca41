//! Pericope citation parser
//!
//! Turns free-text scripture citations ("John 3:16-18", "Gen. 1:1ff",
//! "Rom 8:28; 9:1-5") into a small closed AST. Book names are carried as
//! written; matching them against a canon happens later, in
//! `pericope-core`.

pub mod ast;
pub mod error;
pub mod grammar;
pub mod verse;

pub use ast::{Following, Reference};
pub use error::{ParseError, ParseResult, ValidationError};
pub use verse::Verse;

use tracing::trace;

/// Parse a book-qualified citation.
///
/// Tries the single-book rule first and falls back to the `;`-separated
/// rule only when the first attempt stopped with input left over. Text that
/// is nothing but a book name cites the whole book.
pub fn parse(text: &str) -> ParseResult<Reference> {
    match parse_proper(text) {
        Err(ParseError::TrailingInput { rest, .. }) => {
            trace!(text, rest = rest.as_str(), "retrying as multiple citation");
            parse_multiple(text)
        }
        Err(err @ ParseError::NoMatch { .. }) => {
            parse_whole_book(text).map_err(|_| err)
        }
        other => other,
    }
}

/// Parse a bare book name as a citation of the whole book
pub fn parse_whole_book(text: &str) -> ParseResult<Reference> {
    grammar::run(grammar::whole_book(), text)
}

/// Parse `BookName Related`
pub fn parse_proper(text: &str) -> ParseResult<Reference> {
    grammar::run(grammar::proper(), text)
}

/// Parse `Proper (';' (Proper | Related))*`
pub fn parse_multiple(text: &str) -> ParseResult<Reference> {
    grammar::run(grammar::multiple(), text)
}

/// Parse a comma-separated list of book-less references
pub fn parse_related(text: &str) -> ParseResult<Reference> {
    grammar::run(grammar::related(), text)
}

/// Parse one book-less reference (range, and-following or single)
pub fn parse_relative(text: &str) -> ParseResult<Reference> {
    grammar::run(grammar::relative(), text)
}
