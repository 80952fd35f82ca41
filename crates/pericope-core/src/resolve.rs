//! Anchoring parsed references to a canon
//!
//! Resolution turns a [`Reference`] into one [`Resolved`] span per cited
//! piece. Every verse named must exist in the book; any failure aborts the
//! whole reference.

use crate::abbreviations::AbbrTrie;
use crate::canon::{Book, Canon};
use crate::error::{ResolveError, ResolveResult};
use crate::format::{CitationStyle, Formatter};
use pericope_parser::{Following, Reference, ValidationError, Verse};
use serde::ser::{Serialize, SerializeStruct, Serializer};
use std::fmt;
use std::sync::Arc;
use tracing::trace;

/// A validated span of consecutive verses in one book.
///
/// Cloning is cheap: the book is shared, not copied.
#[derive(Debug, Clone)]
pub struct Resolved {
    book: Arc<Book>,
    start: usize,
    end: usize,
}

impl Resolved {
    /// Span from `first` to `last` inclusive. Both must exist in `book`.
    pub fn new(book: Arc<Book>, first: Verse, last: Verse) -> ResolveResult<Self> {
        let start = locate(&book, &first)?;
        let end = locate(&book, &last)?;
        if end < start {
            return Err(ResolveError::ReversedRange {
                book: book.name().to_string(),
                first,
                last,
            });
        }
        Ok(Self { book, start, end })
    }

    /// Callers guarantee `start <= end < book.len()`
    pub(crate) fn from_indices(book: Arc<Book>, start: usize, end: usize) -> Self {
        debug_assert!(start <= end && end < book.len());
        Self { book, start, end }
    }

    pub fn book(&self) -> &Arc<Book> {
        &self.book
    }

    pub fn first(&self) -> Verse {
        self.book.verses()[self.start]
    }

    pub fn last(&self) -> Verse {
        self.book.verses()[self.end]
    }

    /// Every verse in the span, in order
    pub fn verses(&self) -> &[Verse] {
        &self.book.verses()[self.start..=self.end]
    }

    pub fn len(&self) -> usize {
        self.end - self.start + 1
    }

    pub fn contains(&self, verse: &Verse) -> bool {
        self.book
            .position(verse)
            .is_some_and(|i| (self.start..=self.end).contains(&i))
    }

    /// Inclusive index range into the book's verses
    pub(crate) fn bounds(&self) -> (usize, usize) {
        (self.start, self.end)
    }

    pub(crate) fn same_book(&self, other: &Resolved) -> bool {
        Arc::ptr_eq(&self.book, &other.book) || self.book.name() == other.book.name()
    }
}

fn locate(book: &Book, verse: &Verse) -> ResolveResult<usize> {
    book.position(verse).ok_or_else(|| ResolveError::VerseNotFound {
        book: book.name().to_string(),
        verse: *verse,
    })
}

impl PartialEq for Resolved {
    fn eq(&self, other: &Self) -> bool {
        self.book.name() == other.book.name()
            && self.first() == other.first()
            && self.last() == other.last()
    }
}

impl Eq for Resolved {}

impl fmt::Display for Resolved {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&Formatter::new(CitationStyle::Canonical).format_one(self))
    }
}

impl Serialize for Resolved {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Resolved", 4)?;
        state.serialize_field("book", self.book.name())?;
        state.serialize_field("first", &self.first())?;
        state.serialize_field("last", &self.last())?;
        state.serialize_field("reference", &self.to_string())?;
        state.end()
    }
}

/// How book names are matched during resolution.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResolveOptions<'a> {
    /// Match names through the abbreviation trie; exact names only when `None`
    pub abbreviations: Option<&'a AbbrTrie>,
}

impl<'a> ResolveOptions<'a> {
    pub fn with_abbreviations(abbreviations: &'a AbbrTrie) -> Self {
        Self {
            abbreviations: Some(abbreviations),
        }
    }
}

impl Canon {
    /// Resolve a parsed reference to its spans, in citation order.
    pub fn resolve(
        &self,
        reference: &Reference,
        options: &ResolveOptions<'_>,
    ) -> ResolveResult<Vec<Resolved>> {
        reference.validate()?;
        match reference {
            Reference::Multiple(refs) => {
                let mut current: Option<Arc<Book>> = None;
                let mut spans = Vec::new();
                for r in refs {
                    match r {
                        Reference::Proper(name, relative) => {
                            let book = self.lookup_book(name, options)?;
                            spans.extend(resolve_in(&book, relative)?);
                            current = Some(book);
                        }
                        other => {
                            let book = current.as_ref().ok_or_else(|| ResolveError::MissingBook {
                                reference: other.to_string(),
                            })?;
                            spans.extend(resolve_in(book, other)?);
                        }
                    }
                }
                Ok(spans)
            }
            Reference::Proper(name, relative) => {
                let book = self.lookup_book(name, options)?;
                resolve_in(&book, relative)
            }
            other => Err(ResolveError::MissingBook {
                reference: other.to_string(),
            }),
        }
    }

    /// Parse `text` and resolve it.
    pub fn resolve_str(
        &self,
        text: &str,
        options: &ResolveOptions<'_>,
    ) -> ResolveResult<Vec<Resolved>> {
        let reference = pericope_parser::parse(text)?;
        self.resolve(&reference, options)
    }

    /// Re-anchor an already resolved span to this canon, checking that its
    /// book and both endpoints are present here.
    pub fn revalidate(&self, resolved: &Resolved) -> ResolveResult<Resolved> {
        let name = resolved.book().name();
        let book = self
            .book(name)
            .ok_or_else(|| ResolveError::BookNotFound(name.to_string()))?;
        Resolved::new(Arc::clone(book), resolved.first(), resolved.last())
    }

    fn lookup_book(&self, name: &str, options: &ResolveOptions<'_>) -> ResolveResult<Arc<Book>> {
        let canonical = match options.abbreviations {
            Some(trie) => trie.book_name(name)?,
            None => name,
        };
        trace!(query = name, book = canonical, "looked up book");
        self.book(canonical)
            .cloned()
            .ok_or_else(|| ResolveError::BookNotFound(canonical.to_string()))
    }
}

fn resolve_in(book: &Arc<Book>, relative: &Reference) -> ResolveResult<Vec<Resolved>> {
    match relative {
        Reference::Related(refs) => resolve_related(book, refs),
        other => Ok(vec![resolve_relative(book, other)?]),
    }
}

/// Later verse-only entries take the chapter of the entry before them once
/// a chapter has been named: `3:16, 18` is 3:16 and 3:18.
fn resolve_related(book: &Arc<Book>, refs: &[Reference]) -> ResolveResult<Vec<Resolved>> {
    let mut context: Option<u16> = None;
    let mut spans = Vec::with_capacity(refs.len());
    for r in refs {
        let r = match context {
            Some(chapter) if !book.just_verse() => r.relative_to(chapter),
            _ => r.clone(),
        };
        spans.push(resolve_relative(book, &r)?);
        if let Some(chapter) = r.chapter_context() {
            context = Some(chapter);
        }
    }
    Ok(spans)
}

fn resolve_relative(book: &Arc<Book>, relative: &Reference) -> ResolveResult<Resolved> {
    trace!(book = book.name(), reference = %relative, kind = relative.kind(), "resolving");
    match relative {
        Reference::Single(verse) => resolve_single(book, verse),
        Reference::AndFollowing(verse, following) => resolve_following(book, verse, *following),
        Reference::Range(first, last) => resolve_range(book, first, last),
        other => Err(ValidationError::MisplacedNode {
            node: other.kind(),
            parent: "proper",
        }
        .into()),
    }
}

/// A bare number against a book with chapters names a chapter
fn is_whole_chapter(book: &Book, verse: &Verse) -> bool {
    !book.just_verse() && !verse.is_chapter_qualified()
}

fn chapter_bounds(book: &Book, chapter: u16) -> ResolveResult<(usize, usize)> {
    book.chapter_bounds(chapter)
        .ok_or_else(|| ResolveError::ChapterNotFound {
            book: book.name().to_string(),
            chapter,
        })
}

/// Index of an exact verse, rejecting the wrong address shape for the book
fn exact(book: &Book, verse: &Verse) -> ResolveResult<usize> {
    if book.just_verse() && verse.is_chapter_qualified() {
        return Err(ResolveError::Mismatch {
            book: book.name().to_string(),
            verse: *verse,
            expected: "by verse only",
        });
    }
    locate(book, verse)
}

fn resolve_single(book: &Arc<Book>, verse: &Verse) -> ResolveResult<Resolved> {
    if is_whole_chapter(book, verse) {
        let chapter = verse.verse();
        trace!(book = book.name(), chapter, "bare number read as whole chapter");
        let (start, end) = chapter_bounds(book, chapter)?;
        return Ok(Resolved::from_indices(Arc::clone(book), start, end));
    }
    let index = exact(book, verse)?;
    Ok(Resolved::from_indices(Arc::clone(book), index, index))
}

/// `3:16ff` runs to the end of the chapter, `3:16ffb` to the end of the
/// book. A bare number starts at the top of that chapter.
///
/// `1ffb` is the whole book (`Matthew` = `Matthew 1ffb`) and takes every
/// verse still present, even when the first chapter or verse was filtered
/// out.
fn resolve_following(
    book: &Arc<Book>,
    verse: &Verse,
    following: Following,
) -> ResolveResult<Resolved> {
    let last = book
        .len()
        .checked_sub(1)
        .ok_or_else(|| ResolveError::VerseNotFound {
            book: book.name().to_string(),
            verse: *verse,
        })?;
    let start = match following {
        Following::Book if *verse == Verse::v(1) => 0,
        _ if is_whole_chapter(book, verse) => chapter_bounds(book, verse.verse())?.0,
        _ => exact(book, verse)?,
    };
    let end = match following {
        Following::Book => last,
        Following::Chapter | Following::None => book.chapter_end(start),
    };
    Ok(Resolved::from_indices(Arc::clone(book), start, end))
}

fn resolve_range(book: &Arc<Book>, first: &Verse, last: &Verse) -> ResolveResult<Resolved> {
    let (start, end) = if is_whole_chapter(book, first) {
        let start = chapter_bounds(book, first.verse())?.0;
        let end = if last.is_chapter_qualified() {
            exact(book, last)?
        } else {
            chapter_bounds(book, last.verse())?.1
        };
        (start, end)
    } else {
        let start = exact(book, first)?;
        let last = match first.chapter() {
            Some(chapter) => last.relative_to(chapter),
            None => *last,
        };
        (start, exact(book, &last)?)
    };

    if end < start {
        return Err(ResolveError::ReversedRange {
            book: book.name().to_string(),
            first: *first,
            last: *last,
        });
    }
    Ok(Resolved::from_indices(Arc::clone(book), start, end))
}
