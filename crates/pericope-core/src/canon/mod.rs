//! Books and canons
//!
//! A [`Canon`] is an ordered list of books plus named categories. Each
//! [`Book`] holds its verses in citation order, which is the order every
//! range and splice in this crate is measured against.

mod data;

use pericope_parser::Verse;
use std::collections::BTreeMap;
use std::sync::Arc;

/// One book: its name and every verse address, in order.
///
/// A filtered copy keeps the verse list it was first built with, shared
/// with the original, so citations can still be written against the full
/// book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    name: String,
    just_verse: bool,
    verses: Vec<Verse>,
    full: Arc<[Verse]>,
}

impl Book {
    pub fn new(name: impl Into<String>, just_verse: bool, verses: Vec<Verse>) -> Self {
        Self {
            name: name.into(),
            just_verse,
            full: Arc::from(verses.as_slice()),
            verses,
        }
    }

    /// Build a book from the verse count of each chapter.
    ///
    /// A verse-only book numbers its verses straight through.
    pub fn from_chapters(name: impl Into<String>, just_verse: bool, chapters: &[u16]) -> Self {
        let verses = if just_verse {
            let total: u16 = chapters.iter().sum();
            (1..=total).map(Verse::v).collect()
        } else {
            chapters
                .iter()
                .zip(1u16..)
                .flat_map(|(&count, chapter)| (1..=count).map(move |verse| Verse::cv(chapter, verse)))
                .collect()
        };
        Self::new(name, just_verse, verses)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Cited by verse alone (`Jude 3`)
    pub fn just_verse(&self) -> bool {
        self.just_verse
    }

    pub fn verses(&self) -> &[Verse] {
        &self.verses
    }

    pub fn len(&self) -> usize {
        self.verses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.verses.is_empty()
    }

    pub fn first_verse(&self) -> Option<Verse> {
        self.verses.first().copied()
    }

    pub fn last_verse(&self) -> Option<Verse> {
        self.verses.last().copied()
    }

    /// Index of `verse`, if the book has it
    pub fn position(&self, verse: &Verse) -> Option<usize> {
        find(&self.verses, verse)
    }

    pub fn contains(&self, verse: &Verse) -> bool {
        self.position(verse).is_some()
    }

    /// First and last index of the verses in `chapter`
    pub fn chapter_bounds(&self, chapter: u16) -> Option<(usize, usize)> {
        if self.just_verse {
            return None;
        }
        chapter_range(&self.verses, chapter)
    }

    /// Every verse the book was built with, including any filtered out since
    pub fn full_verses(&self) -> &[Verse] {
        &self.full
    }

    /// Index of `verse` in [`Book::full_verses`]
    pub fn full_position(&self, verse: &Verse) -> Option<usize> {
        find(&self.full, verse)
    }

    /// [`Book::chapter_bounds`] over [`Book::full_verses`]
    pub fn full_chapter_bounds(&self, chapter: u16) -> Option<(usize, usize)> {
        if self.just_verse {
            return None;
        }
        chapter_range(&self.full, chapter)
    }

    /// Index of the last verse in the same chapter as the verse at `index`.
    pub fn chapter_end(&self, index: usize) -> usize {
        let Some(chapter) = self.verses.get(index).map(Verse::chapter) else {
            return index;
        };
        let mut end = index;
        while self
            .verses
            .get(end + 1)
            .is_some_and(|next| next.chapter() == chapter)
        {
            end += 1;
        }
        end
    }

    pub(crate) fn verses_mut(&mut self) -> &mut Vec<Verse> {
        &mut self.verses
    }
}

fn find(verses: &[Verse], verse: &Verse) -> Option<usize> {
    verses
        .binary_search_by(|probe| probe.partial_cmp(verse).unwrap_or(std::cmp::Ordering::Less))
        .ok()
}

fn chapter_range(verses: &[Verse], chapter: u16) -> Option<(usize, usize)> {
    let start = verses.partition_point(|v| v.chapter().is_some_and(|c| c < chapter));
    let end = verses.partition_point(|v| v.chapter().is_some_and(|c| c <= chapter));
    (start < end).then(|| (start, end - 1))
}

/// An ordered set of books with named categories.
///
/// Books are shared with every [`crate::Resolved`] that points into them, so
/// a canon is never mutated once built; [`Canon::filtered`] returns a new one.
#[derive(Debug, Clone)]
pub struct Canon {
    name: String,
    books: Vec<Arc<Book>>,
    categories: BTreeMap<String, Vec<String>>,
}

impl Canon {
    pub fn new(
        name: impl Into<String>,
        books: Vec<Book>,
        categories: BTreeMap<String, Vec<String>>,
    ) -> Self {
        Self {
            name: name.into(),
            books: books.into_iter().map(Arc::new).collect(),
            categories,
        }
    }

    /// The 66-book Protestant canon with KJV versification.
    pub fn canonical() -> Self {
        let books = data::BOOKS
            .iter()
            .map(|(name, chapters)| {
                Book::from_chapters(*name, data::JUST_VERSE.contains(name), chapters)
            })
            .collect();
        let categories = data::CATEGORIES
            .iter()
            .map(|(name, members)| {
                (
                    name.to_string(),
                    members.iter().map(|m| m.to_string()).collect(),
                )
            })
            .collect();
        Self::new("Protestant", books, categories)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn books(&self) -> &[Arc<Book>] {
        &self.books
    }

    /// Book by exact canonical name
    pub fn book(&self, name: &str) -> Option<&Arc<Book>> {
        self.books.iter().find(|b| b.name() == name)
    }

    pub fn categories(&self) -> &BTreeMap<String, Vec<String>> {
        &self.categories
    }

    /// Member citations of a category
    pub fn category(&self, name: &str) -> Option<&[String]> {
        self.categories.get(name).map(Vec::as_slice)
    }

    /// Total number of verses across all books
    pub fn verse_count(&self) -> usize {
        self.books.iter().map(|b| b.len()).sum()
    }

    pub(crate) fn from_parts(
        name: String,
        books: Vec<Arc<Book>>,
        categories: BTreeMap<String, Vec<String>>,
    ) -> Self {
        Self {
            name,
            books,
            categories,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_shape() {
        let canon = Canon::canonical();
        assert_eq!(canon.books().len(), 66);
        assert_eq!(canon.verse_count(), 31102);
        assert_eq!(canon.books()[0].name(), "Genesis");
        assert_eq!(canon.books()[65].name(), "Revelation");
        assert_eq!(canon.categories().len(), 9);
        assert_eq!(
            canon.category("Gospels").unwrap(),
            ["Matthew", "Mark", "Luke", "John", "Acts"]
        );
    }

    #[test]
    fn test_just_verse_books() {
        let canon = Canon::canonical();
        let jude = canon.book("Jude").unwrap();
        assert!(jude.just_verse());
        assert_eq!(jude.first_verse(), Some(Verse::v(1)));
        assert_eq!(jude.last_verse(), Some(Verse::v(25)));
        assert_eq!(jude.chapter_bounds(1), None);

        let obadiah = canon.book("Obadiah").unwrap();
        assert_eq!(obadiah.len(), 21);
        assert!(!canon.book("Genesis").unwrap().just_verse());
    }

    #[test]
    fn test_position_and_chapters() {
        let book = Book::from_chapters("Test", false, &[3, 2]);
        assert_eq!(book.position(&Verse::cv(2, 1)), Some(3));
        assert_eq!(book.position(&Verse::cv(2, 3)), None);
        assert_eq!(book.position(&Verse::v(1)), None);
        assert_eq!(book.chapter_bounds(1), Some((0, 2)));
        assert_eq!(book.chapter_bounds(2), Some((3, 4)));
        assert_eq!(book.chapter_bounds(3), None);
        assert_eq!(book.chapter_end(1), 2);
        assert_eq!(book.chapter_end(3), 4);
    }

    #[test]
    fn test_chapter_bounds_with_gaps() {
        let book = Book::new(
            "Spliced",
            false,
            vec![Verse::cv(1, 16), Verse::cv(1, 17), Verse::cv(3, 1)],
        );
        assert_eq!(book.chapter_bounds(1), Some((0, 1)));
        assert_eq!(book.chapter_bounds(2), None);
        assert_eq!(book.chapter_bounds(3), Some((2, 2)));
    }

    #[test]
    fn test_full_verses_survive_splicing() {
        let mut book = Book::from_chapters("Test", false, &[3, 2]);
        book.verses_mut().drain(0..2);
        assert_eq!(book.len(), 3);
        assert_eq!(book.full_verses().len(), 5);
        assert_eq!(book.chapter_bounds(1), Some((0, 0)));
        assert_eq!(book.full_chapter_bounds(1), Some((0, 2)));
        assert_eq!(book.full_position(&Verse::cv(1, 1)), Some(0));
        assert_eq!(book.position(&Verse::cv(1, 1)), None);
    }
}
