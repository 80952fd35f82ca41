//! Error types for resolution, filtering and random selection

use pericope_parser::{ParseError, ValidationError, Verse};
use thiserror::Error;

/// Failure to match a book name against the abbreviation table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("no book matches {0:?}")]
    NotFound(String),

    /// Candidates are sorted by book name
    #[error("{query:?} is ambiguous: could be {}", .candidates.join(", "))]
    MultipleMatch {
        query: String,
        candidates: Vec<String>,
    },
}

/// Failure to anchor a reference to a canon.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Lookup(#[from] LookupError),

    #[error("book {0:?} is not part of this canon")]
    BookNotFound(String),

    #[error("{reference} does not name a book")]
    MissingBook { reference: String },

    #[error("{book} has no chapter {chapter}")]
    ChapterNotFound { book: String, chapter: u16 },

    #[error("{book} has no verse {verse}")]
    VerseNotFound { book: String, verse: Verse },

    /// A chapter-qualified address used with a verse-only book, or the reverse
    #[error("{book} is cited {expected}, got {verse}")]
    Mismatch {
        book: String,
        verse: Verse,
        expected: &'static str,
    },

    #[error("{book} {first}-{last} runs backwards")]
    ReversedRange {
        book: String,
        first: Verse,
        last: Verse,
    },
}

impl ResolveError {
    /// The reference is well formed but absent from the canon
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::BookNotFound(_)
                | Self::ChapterNotFound { .. }
                | Self::VerseNotFound { .. }
                | Self::Lookup(LookupError::NotFound(_))
        )
    }

    /// The reference is malformed regardless of canon
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::Validation(_) | Self::Parse(ParseError::Validation(_)) | Self::ReversedRange { .. }
        )
    }
}

/// Failure while deriving a filtered canon.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    #[error("cannot exclude {citation:?}: {source}")]
    Exclusion {
        citation: String,
        #[source]
        source: ResolveError,
    },

    #[error("category {category:?} member {member:?} does not resolve: {source}")]
    Category {
        category: String,
        member: String,
        #[source]
        source: ResolveError,
    },

    /// A resolved verse was missing from the copy being spliced. This is an
    /// internal invariant violation, not bad input.
    #[error("internal error: {book} {verse} vanished while splicing")]
    MissingVerse { book: String, verse: Verse },
}

/// Failure to pick a random passage.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RandomError {
    #[error("canon has no books")]
    EmptyCanon,

    #[error("unknown category {0:?}")]
    UnknownCategory(String),

    #[error("category {0:?} has no verses")]
    EmptyCategory(String),

    #[error("passage length bounds {min}..={max} are invalid")]
    InvalidBounds { min: usize, max: usize },

    #[error("category {category:?} member {member:?} does not resolve: {source}")]
    Category {
        category: String,
        member: String,
        #[source]
        source: ResolveError,
    },
}

/// Specialized Result type for resolution
pub type ResolveResult<T> = Result<T, ResolveError>;
