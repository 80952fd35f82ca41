//! Reference AST
//!
//! The parser produces one of these per citation. Nodes are plain data:
//! nothing here knows which books exist. [`Reference::validate`] checks only
//! what can be decided from the text itself (positive numbers, forward
//! ranges, chapter context inside lists); whether a verse exists is the
//! resolver's business.

use crate::error::ValidationError;
use crate::verse::Verse;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How far an "and following" (`ff`) citation extends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Following {
    /// Plain `ff`; resolves like [`Following::Chapter`]
    #[default]
    None,
    /// `ffc`: to the end of the chapter
    Chapter,
    /// `ffb`: to the end of the book
    Book,
}

/// A parsed citation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Reference {
    /// `3:16`, or `3` (a whole chapter, or a verse in a verse-only book)
    Single(Verse),
    /// `3:16-18`, `3:16-4:2`, `1-3`
    Range(Verse, Verse),
    /// `3:16ff`, `3:16ffb`
    AndFollowing(Verse, Following),
    /// `3:16, 18, 20-22`: relative references sharing one book
    Related(Vec<Reference>),
    /// `John 3:16`: a book name plus a relative reference
    Proper(String, Box<Reference>),
    /// `Gen 1:1; 2:3; Exod 3`: first element is always `Proper`
    Multiple(Vec<Reference>),
}

impl Reference {
    /// Build a `Proper` reference
    pub fn proper(book: impl Into<String>, relative: Reference) -> Self {
        Self::Proper(book.into(), Box::new(relative))
    }

    /// Node name used in error messages
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Single(_) => "single",
            Self::Range(..) => "range",
            Self::AndFollowing(..) => "and-following",
            Self::Related(_) => "related",
            Self::Proper(..) => "proper",
            Self::Multiple(_) => "multiple",
        }
    }

    /// Single, range or and-following: a reference with no book of its own
    pub fn is_relative(&self) -> bool {
        matches!(
            self,
            Self::Single(_) | Self::Range(..) | Self::AndFollowing(..)
        )
    }

    /// The first verse address written in a relative reference
    pub fn leading_verse(&self) -> Option<Verse> {
        match self {
            Self::Single(v) | Self::Range(v, _) | Self::AndFollowing(v, _) => Some(*v),
            _ => None,
        }
    }

    /// Chapter in effect after this relative reference, for the entries
    /// that follow it in a list.
    pub fn chapter_context(&self) -> Option<u16> {
        match self {
            Self::Single(v) | Self::AndFollowing(v, _) => v.chapter(),
            Self::Range(first, last) => last.chapter().or_else(|| first.chapter()),
            _ => None,
        }
    }

    /// Reinterpret verse-only addresses of a relative reference inside
    /// `chapter`. Other nodes are returned unchanged.
    pub fn relative_to(&self, chapter: u16) -> Reference {
        match self {
            Self::Single(v) => Self::Single(v.relative_to(chapter)),
            Self::Range(first, last) => {
                let first = first.relative_to(chapter);
                // A verse-only end of a range already inherits the start's chapter.
                let last = match first.chapter() {
                    Some(c) if !last.is_chapter_qualified() => last.relative_to(c),
                    _ => *last,
                };
                Self::Range(first, last)
            }
            Self::AndFollowing(v, following) => Self::AndFollowing(v.relative_to(chapter), *following),
            other => other.clone(),
        }
    }

    /// Check the reference for structural consistency.
    pub fn validate(&self) -> Result<(), ValidationError> {
        match self {
            Self::Single(v) | Self::AndFollowing(v, _) => positive(v),
            Self::Range(first, last) => validate_range(first, last),
            Self::Related(refs) => validate_related(refs),
            Self::Proper(book, relative) => {
                if book.trim().is_empty() {
                    return Err(ValidationError::EmptyBookName);
                }
                match relative.as_ref() {
                    Self::Related(refs) => validate_related(refs),
                    r if r.is_relative() => r.validate(),
                    other => Err(ValidationError::MisplacedNode {
                        node: other.kind(),
                        parent: "proper",
                    }),
                }
            }
            Self::Multiple(refs) => {
                let (head, rest) = refs.split_first().ok_or(ValidationError::Empty("multiple"))?;
                if !matches!(head, Self::Proper(..)) {
                    return Err(ValidationError::MisplacedNode {
                        node: head.kind(),
                        parent: "the head of multiple",
                    });
                }
                head.validate()?;
                for r in rest {
                    match r {
                        Self::Multiple(_) => {
                            return Err(ValidationError::MisplacedNode {
                                node: "multiple",
                                parent: "multiple",
                            })
                        }
                        other => other.validate()?,
                    }
                }
                Ok(())
            }
        }
    }
}

fn positive(v: &Verse) -> Result<(), ValidationError> {
    if v.has_zero() {
        Err(ValidationError::NonPositive(*v))
    } else {
        Ok(())
    }
}

fn validate_range(first: &Verse, last: &Verse) -> Result<(), ValidationError> {
    positive(first)?;
    positive(last)?;
    let forward = match (first, last) {
        // `3:16-18` ends in the start's chapter
        (Verse::ChapterVerse { chapter, .. }, Verse::JustVerse { .. }) => {
            first.before(&last.relative_to(*chapter))
        }
        // `3-4:2` can only mean chapter 3 through 4:2
        (Verse::JustVerse { verse }, Verse::ChapterVerse { chapter, .. }) => verse <= chapter,
        _ => first.before(last),
    };
    if forward {
        Ok(())
    } else {
        Err(ValidationError::ReversedRange {
            first: *first,
            last: *last,
        })
    }
}

fn validate_related(refs: &[Reference]) -> Result<(), ValidationError> {
    if refs.is_empty() {
        return Err(ValidationError::Empty("related"));
    }
    let qualified = refs
        .iter()
        .any(|r| r.leading_verse().is_some_and(|v| v.is_chapter_qualified()));
    let mut seen_chapter = false;
    for r in refs {
        let Some(leading) = r.leading_verse() else {
            return Err(ValidationError::MisplacedNode {
                node: r.kind(),
                parent: "related",
            });
        };
        r.validate()?;
        if leading.is_chapter_qualified() {
            seen_chapter = true;
        } else if qualified && !seen_chapter {
            return Err(ValidationError::VerseBeforeChapter { verse: leading });
        }
    }
    Ok(())
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single(v) => write!(f, "{}", v),
            Self::Range(first, last) => write!(f, "{}-{}", first, last),
            Self::AndFollowing(v, following) => {
                let suffix = match following {
                    Following::None => "",
                    Following::Chapter => "c",
                    Following::Book => "b",
                };
                write!(f, "{}ff{}", v, suffix)
            }
            Self::Related(refs) => write_joined(f, refs, ", "),
            Self::Proper(book, relative) => write!(f, "{} {}", book, relative),
            Self::Multiple(refs) => write_joined(f, refs, "; "),
        }
    }
}

fn write_joined(f: &mut fmt::Formatter<'_>, refs: &[Reference], sep: &str) -> fmt::Result {
    for (i, r) in refs.iter().enumerate() {
        if i > 0 {
            f.write_str(sep)?;
        }
        write!(f, "{}", r)?;
    }
    Ok(())
}
