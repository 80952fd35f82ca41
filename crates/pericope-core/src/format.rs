//! Rendering resolved spans as citation text
//!
//! Every style shares one elision scheme, so a span is always written in
//! its shortest unambiguous form:
//!
//! | Span                               | Output                 |
//! |------------------------------------|------------------------|
//! | one verse                          | `John 3:16`            |
//! | the whole book                     | `Obadiah`              |
//! | one whole chapter                  | `Psalm 23`             |
//! | part of one chapter                | `John 3:16-18`         |
//! | several whole chapters             | `Isaiah 24-27`         |
//! | anything else                      | `Colossians 1:16-4:18` |

use crate::abbreviations::AbbrTrie;
use crate::canon::Book;
use crate::resolve::Resolved;
use pericope_config::FormatConfig;

pub use pericope_config::CitationStyle;

/// Renders [`Resolved`] spans in one [`CitationStyle`].
#[derive(Debug, Clone, Copy)]
pub struct Formatter<'a> {
    style: CitationStyle,
    abbreviations: Option<&'a AbbrTrie>,
    singular: bool,
}

impl<'a> Formatter<'a> {
    pub fn new(style: CitationStyle) -> Self {
        Self {
            style,
            abbreviations: None,
            singular: true,
        }
    }

    pub fn from_config(config: &FormatConfig, abbreviations: Option<&'a AbbrTrie>) -> Self {
        Self {
            style: config.style,
            abbreviations,
            singular: config.singular,
        }
    }

    /// Source of preferred abbreviations and singular names
    pub fn with_abbreviations(mut self, abbreviations: &'a AbbrTrie) -> Self {
        self.abbreviations = Some(abbreviations);
        self
    }

    pub fn with_singular(mut self, singular: bool) -> Self {
        self.singular = singular;
        self
    }

    pub fn style(&self) -> CitationStyle {
        self.style
    }

    /// Book name as this style writes it. `one_chapter` selects the
    /// singular form ("Psalm") where the style uses full names.
    pub fn display_name(&self, book: &Book, one_chapter: bool) -> String {
        let name = book.name();
        let entry = self.abbreviations.and_then(|t| t.abbreviation(name));
        match self.style {
            CitationStyle::Canonical => match entry {
                Some(entry) if one_chapter && self.singular => entry.singular_name().to_string(),
                _ => name.to_string(),
            },
            CitationStyle::Abbreviated => entry
                .map(|e| e.preferred.clone())
                .unwrap_or_else(|| name.to_string()),
            CitationStyle::TwoLetter => truncate(name, 2, false),
            CitationStyle::TwoLetterDot => truncate(name, 2, true),
            CitationStyle::ThreeLetter => truncate(name, 3, false),
            CitationStyle::ThreeLetterDot => truncate(name, 3, true),
        }
    }

    /// Render one span.
    ///
    /// Whole-book and whole-chapter forms are measured against the book's
    /// full verse list, and only used when no verse inside the span has
    /// been filtered out, so the text never cites more than the span holds.
    pub fn format_one(&self, resolved: &Resolved) -> String {
        let book = resolved.book();
        let (first, last) = (resolved.first(), resolved.last());
        let one_chapter = first.chapter().is_some() && first.chapter() == last.chapter();

        if first == last {
            return format!("{} {}", self.display_name(book, one_chapter), first);
        }

        // span as indices into the full book, if nothing inside it is missing
        let intact = match (book.full_position(&first), book.full_position(&last)) {
            (Some(lo), Some(hi)) if hi - lo + 1 == resolved.len() => Some((lo, hi)),
            _ => None,
        };
        if intact.is_some_and(|(lo, hi)| lo == 0 && hi + 1 == book.full_verses().len()) {
            return self.display_name(book, false);
        }

        let (Some(first_chapter), Some(last_chapter)) = (first.chapter(), last.chapter()) else {
            return format!("{} {}-{}", self.display_name(book, false), first, last);
        };
        let starts_chapter = intact.is_some_and(|(lo, _)| {
            book.full_chapter_bounds(first_chapter)
                .is_some_and(|(s, _)| s == lo)
        });
        let ends_chapter = intact.is_some_and(|(_, hi)| {
            book.full_chapter_bounds(last_chapter)
                .is_some_and(|(_, e)| e == hi)
        });

        if one_chapter {
            let name = self.display_name(book, true);
            if starts_chapter && ends_chapter {
                format!("{} {}", name, first_chapter)
            } else {
                format!("{} {}:{}-{}", name, first_chapter, first.verse(), last.verse())
            }
        } else if starts_chapter && ends_chapter {
            format!("{} {}-{}", self.display_name(book, false), first_chapter, last_chapter)
        } else {
            format!("{} {}-{}", self.display_name(book, false), first, last)
        }
    }

    /// Render several spans joined with `"; "`
    pub fn format(&self, spans: &[Resolved]) -> String {
        spans
            .iter()
            .map(|r| self.format_one(r))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// First `letters` letters of the name, keeping an ordinal prefix
/// ("1 Sa"). The period is added only when something was cut off.
fn truncate(name: &str, letters: usize, dot: bool) -> String {
    let (prefix, rest) = match name.split_once(' ') {
        Some((number, rest)) if number.chars().all(|c| c.is_ascii_digit()) => {
            (format!("{} ", number), rest)
        }
        _ => (String::new(), name),
    };
    let kept: String = rest
        .chars()
        .filter(|c| c.is_alphabetic())
        .take(letters)
        .collect();
    let cut = rest.chars().filter(|c| !c.is_whitespace()).count() > kept.chars().count();
    format!("{}{}{}", prefix, kept, if dot && cut { "." } else { "" })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canon::Canon;
    use crate::resolve::ResolveOptions;
    use test_case::test_case;

    fn render(style: CitationStyle, text: &str) -> String {
        let canon = Canon::canonical();
        let trie = AbbrTrie::standard();
        let spans = canon
            .resolve_str(text, &ResolveOptions::with_abbreviations(&trie))
            .unwrap();
        Formatter::new(style).with_abbreviations(&trie).format(&spans)
    }

    #[test_case("John 3:16", "John 3:16" ; "single verse")]
    #[test_case("Obadiah 1-21", "Obadiah" ; "whole verse-only book")]
    #[test_case("Genesis 1:1-50:26", "Genesis" ; "whole book")]
    #[test_case("Ps 23", "Psalm 23" ; "whole chapter uses singular")]
    #[test_case("Ps 23:1-3", "Psalm 23:1-3" ; "partial chapter")]
    #[test_case("Ps 1-3", "Psalms 1-3" ; "chapters stay plural")]
    #[test_case("Isa 24:1-27:13", "Isaiah 24-27" ; "whole chapters")]
    #[test_case("Col 1:16-4:18", "Colossians 1:16-4:18" ; "mixed span")]
    #[test_case("Jude 3-5", "Jude 3-5" ; "verse-only range")]
    #[test_case("Gen 1:1; Exod 3", "Genesis 1:1; Exodus 3" ; "joined spans")]
    fn canonical_elision(text: &str, expected: &str) {
        assert_eq!(render(CitationStyle::Canonical, text), expected);
    }

    #[test_case(CitationStyle::Canonical, "1 Samuel 3:1-4" ; "canonical")]
    #[test_case(CitationStyle::Abbreviated, "1 Sam. 3:1-4" ; "abbr")]
    #[test_case(CitationStyle::TwoLetter, "1 Sa 3:1-4" ; "two letter")]
    #[test_case(CitationStyle::TwoLetterDot, "1 Sa. 3:1-4" ; "two letter dot")]
    #[test_case(CitationStyle::ThreeLetter, "1 Sam 3:1-4" ; "three letter")]
    #[test_case(CitationStyle::ThreeLetterDot, "1 Sam. 3:1-4" ; "three letter dot")]
    fn styles(style: CitationStyle, expected: &str) {
        assert_eq!(render(style, "1 Sam 3:1-4"), expected);
    }

    #[test]
    fn test_whole_book_is_bare_name_in_every_style() {
        for style in CitationStyle::ALL {
            let text = render(style, "Obadiah");
            let expected = match style {
                CitationStyle::Canonical => "Obadiah",
                CitationStyle::Abbreviated => "Obad.",
                CitationStyle::TwoLetter => "Ob",
                CitationStyle::TwoLetterDot => "Ob.",
                CitationStyle::ThreeLetter => "Oba",
                CitationStyle::ThreeLetterDot => "Oba.",
            };
            assert_eq!(text, expected, "{style}");
        }
    }

    #[test]
    fn test_short_names_take_no_period() {
        assert_eq!(truncate("Job", 3, true), "Job");
        assert_eq!(truncate("Song of Solomon", 3, true), "Son.");
        assert_eq!(truncate("2 John", 2, true), "2 Jo.");
    }

    #[test]
    fn test_singular_can_be_disabled() {
        let canon = Canon::canonical();
        let trie = AbbrTrie::standard();
        let spans = canon
            .resolve_str("Psalm 23", &ResolveOptions::with_abbreviations(&trie))
            .unwrap();
        let formatter = Formatter::new(CitationStyle::Canonical)
            .with_abbreviations(&trie)
            .with_singular(false);
        assert_eq!(formatter.format(&spans), "Psalms 23");
        // Without a table there is no singular form to use
        assert_eq!(Formatter::new(CitationStyle::Canonical).format(&spans), "Psalms 23");
    }

    #[test]
    fn test_filtered_spans_keep_their_gaps() {
        let trie = AbbrTrie::standard();
        let options = ResolveOptions::with_abbreviations(&trie);
        let filtered = Canon::canonical()
            .filtered(&["Psalms 23:1", "Col 1:1-15"], &options)
            .unwrap();
        let render = |text: &str| {
            let spans = filtered.resolve_str(text, &options).unwrap();
            Formatter::new(CitationStyle::Canonical)
                .with_abbreviations(&trie)
                .format(&spans)
        };
        assert_eq!(render("Ps 23:2-6"), "Psalm 23:2-6");
        assert_eq!(render("Ps 23"), "Psalm 23:2-6");
        assert_eq!(render("Col 1:16-4:18"), "Colossians 1:16-4:18");
        assert_eq!(render("Colossians"), "Colossians 1:16-4:18");
        // untouched chapters still elide
        assert_eq!(render("Ps 24"), "Psalm 24");
        assert_eq!(render("Col 2-4"), "Colossians 2-4");
    }

    #[test]
    fn test_span_with_a_hole_is_written_out() {
        let trie = AbbrTrie::standard();
        let options = ResolveOptions::with_abbreviations(&trie);
        let filtered = Canon::canonical()
            .filtered(&["Obadiah 10", "Ps 23:3"], &options)
            .unwrap();
        let formatter = Formatter::new(CitationStyle::Canonical).with_abbreviations(&trie);
        let render = |text: &str| formatter.format(&filtered.resolve_str(text, &options).unwrap());
        assert_eq!(render("Obadiah"), "Obadiah 1-21");
        assert_eq!(render("Ps 23"), "Psalm 23:1-6");
    }

    #[test]
    fn test_from_config() {
        let trie = AbbrTrie::standard();
        let config = FormatConfig {
            style: CitationStyle::Abbreviated,
            singular: true,
        };
        let formatter = Formatter::from_config(&config, Some(&trie));
        assert_eq!(formatter.style(), CitationStyle::Abbreviated);
    }
}
