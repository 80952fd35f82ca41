//! Parser error types

use crate::verse::Verse;
use thiserror::Error;

/// Failure to turn citation text into a reference.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The grammar rule did not match at all
    #[error("not a citation: {input:?} ({message})")]
    NoMatch { input: String, message: String },

    /// A prefix matched but input remained afterwards
    #[error("unexpected trailing input {rest:?} in {input:?}")]
    TrailingInput { input: String, rest: String },

    /// The text parsed but describes an impossible reference
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Structural problems found in a parsed (or hand-built) reference.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("chapter and verse numbers must be positive, got {0}")]
    NonPositive(Verse),

    #[error("range {first}-{last} runs backwards")]
    ReversedRange { first: Verse, last: Verse },

    #[error("verse {verse} appears before any chapter in a chapter-qualified list")]
    VerseBeforeChapter { verse: Verse },

    #[error("empty {0} reference")]
    Empty(&'static str),

    #[error("book name is empty")]
    EmptyBookName,

    #[error("{node} cannot appear inside {parent}")]
    MisplacedNode {
        node: &'static str,
        parent: &'static str,
    },
}

/// Specialized Result type for parse operations
pub type ParseResult<T> = Result<T, ParseError>;

impl ParseError {
    /// Create a no-match error
    pub fn no_match(input: impl Into<String>, message: impl Into<String>) -> Self {
        Self::NoMatch {
            input: input.into(),
            message: message.into(),
        }
    }

    /// The unconsumed suffix, when a prefix of the input did parse
    pub fn trailing(&self) -> Option<&str> {
        match self {
            Self::TrailingInput { rest, .. } => Some(rest),
            _ => None,
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}
