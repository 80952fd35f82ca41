//! Verse addresses
//!
//! A book is cited either by chapter and verse (`3:16`) or, for the short
//! single-chapter books, by verse alone (`Jude 3`). The two shapes never mix
//! inside one book, so they are kept as two variants of one closed type and
//! only compare with each other when they share a variant.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// A single verse address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Verse {
    /// Chapter-qualified verse, e.g. `3:16`
    ChapterVerse { chapter: u16, verse: u16 },
    /// Verse in a book without chapter numbers, e.g. `Obadiah 4`
    JustVerse { verse: u16 },
}

impl Verse {
    /// Create a chapter-qualified verse
    pub const fn cv(chapter: u16, verse: u16) -> Self {
        Self::ChapterVerse { chapter, verse }
    }

    /// Create a verse-only address
    pub const fn v(verse: u16) -> Self {
        Self::JustVerse { verse }
    }

    /// The chapter, if this address carries one
    pub fn chapter(&self) -> Option<u16> {
        match self {
            Self::ChapterVerse { chapter, .. } => Some(*chapter),
            Self::JustVerse { .. } => None,
        }
    }

    /// The verse number
    pub fn verse(&self) -> u16 {
        match self {
            Self::ChapterVerse { verse, .. } | Self::JustVerse { verse } => *verse,
        }
    }

    pub fn is_chapter_qualified(&self) -> bool {
        matches!(self, Self::ChapterVerse { .. })
    }

    /// Citation text for this address (`"3:16"` or `"4"`).
    pub fn reference(&self) -> String {
        self.to_string()
    }

    /// Strictly precedes `other` in citation order.
    ///
    /// Addresses of different shapes are unordered, so this is `false` for
    /// them in both directions.
    pub fn before(&self, other: &Verse) -> bool {
        matches!(self.partial_cmp(other), Some(Ordering::Less))
    }

    /// Reinterpret a verse-only address inside `chapter`.
    ///
    /// Chapter-qualified addresses are returned unchanged.
    pub fn relative_to(&self, chapter: u16) -> Verse {
        match *self {
            Self::JustVerse { verse } => Self::ChapterVerse { chapter, verse },
            cv @ Self::ChapterVerse { .. } => cv,
        }
    }

    /// Whether any number in this address is zero
    pub(crate) fn has_zero(&self) -> bool {
        match *self {
            Self::ChapterVerse { chapter, verse } => chapter == 0 || verse == 0,
            Self::JustVerse { verse } => verse == 0,
        }
    }
}

impl PartialOrd for Verse {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (
                Self::ChapterVerse { chapter: c1, verse: v1 },
                Self::ChapterVerse { chapter: c2, verse: v2 },
            ) => Some(c1.cmp(c2).then(v1.cmp(v2))),
            (Self::JustVerse { verse: v1 }, Self::JustVerse { verse: v2 }) => Some(v1.cmp(v2)),
            _ => None,
        }
    }
}

impl fmt::Display for Verse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ChapterVerse { chapter, verse } => write!(f, "{}:{}", chapter, verse),
            Self::JustVerse { verse } => write!(f, "{}", verse),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_text() {
        assert_eq!(Verse::cv(3, 16).reference(), "3:16");
        assert_eq!(Verse::v(4).reference(), "4");
    }

    #[test]
    fn test_ordering_within_shape() {
        assert!(Verse::cv(3, 16).before(&Verse::cv(3, 17)));
        assert!(Verse::cv(3, 36).before(&Verse::cv(4, 1)));
        assert!(!Verse::cv(4, 1).before(&Verse::cv(3, 36)));
        assert!(Verse::v(2).before(&Verse::v(10)));
        assert!(!Verse::v(2).before(&Verse::v(2)));
    }

    #[test]
    fn test_mixed_shapes_are_unordered() {
        assert_eq!(Verse::cv(1, 1).partial_cmp(&Verse::v(1)), None);
        assert!(!Verse::cv(1, 1).before(&Verse::v(2)));
        assert!(!Verse::v(2).before(&Verse::cv(1, 1)));
        assert_ne!(Verse::cv(1, 1), Verse::v(1));
    }

    #[test]
    fn test_relative_to() {
        assert_eq!(Verse::v(18).relative_to(3), Verse::cv(3, 18));
        assert_eq!(Verse::cv(4, 2).relative_to(3), Verse::cv(4, 2));
    }

    #[test]
    fn test_serde_shape() {
        let json = serde_json::to_string(&Verse::cv(3, 16)).unwrap();
        assert_eq!(json, r#"{"chapter":3,"verse":16}"#);
        let back: Verse = serde_json::from_str(r#"{"verse":4}"#).unwrap();
        assert_eq!(back, Verse::v(4));
    }
}
