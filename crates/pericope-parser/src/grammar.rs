//! Citation grammar.
//!
//! ```text
//! number       := digit+
//! CV           := number (':'|'.') number
//! V            := number
//! Single       := CV | V
//! AndFollowing := Single 'f' 'f' ('b'|'c')?
//! Range        := Single '-' Single
//! Relative     := Range | AndFollowing | Single
//! Related      := Relative (',' Relative)*
//! Proper       := BookName Related
//! Multiple     := Proper (';' (Proper | Related))*
//! WholeBook    := BookName
//! ```
//!
//! Alternatives are tried in order and the first that matches wins; there
//! is no backtracking into an alternative once it has succeeded. Whitespace
//! is allowed around the punctuation.

use crate::ast::{Following, Reference};
use crate::error::{ParseError, ParseResult};
use crate::verse::Verse;
use chumsky::extra;
use chumsky::prelude::*;

/// Extra type for parsers - uses Rich errors for better messages
pub type Extra<'src> = extra::Err<Rich<'src, char>>;

// ============================================================================
// Primitive parsers
// ============================================================================

/// Parser for an unsigned chapter or verse number
pub fn number<'src>() -> impl Parser<'src, &'src str, u16, Extra<'src>> + Clone {
    any()
        .filter(|c: &char| c.is_ascii_digit())
        .repeated()
        .at_least(1)
        .to_slice()
        .try_map(|s: &str, span| {
            s.parse::<u16>()
                .map_err(|_| Rich::custom(span, "number out of range"))
        })
        .labelled("number")
}

/// Parser for `chapter:verse` (or `chapter.verse`)
pub fn chapter_verse<'src>() -> impl Parser<'src, &'src str, Verse, Extra<'src>> + Clone {
    number()
        .then_ignore(one_of(":.").padded())
        .then(number())
        .map(|(chapter, verse)| Verse::cv(chapter, verse))
        .labelled("chapter:verse")
}

/// Parser for a single verse address, chapter-qualified first
pub fn single<'src>() -> impl Parser<'src, &'src str, Verse, Extra<'src>> + Clone {
    chapter_verse()
        .or(number().map(Verse::v))
        .labelled("verse")
}

// ============================================================================
// Relative references
// ============================================================================

/// Parser for `3:16ff`, `3:16ffc`, `3:16ffb`
pub fn and_following<'src>() -> impl Parser<'src, &'src str, Reference, Extra<'src>> + Clone {
    single()
        .then_ignore(text::whitespace())
        .then_ignore(just("ff"))
        .then(one_of("bc").or_not())
        .map(|(verse, kind)| {
            let following = match kind {
                Some('b') => Following::Book,
                Some(_) => Following::Chapter,
                None => Following::None,
            };
            Reference::AndFollowing(verse, following)
        })
        .labelled("and-following like 3:16ff")
}

/// Parser for `3:16-18`, `1-3`, `3:16-4:2`
pub fn range<'src>() -> impl Parser<'src, &'src str, Reference, Extra<'src>> + Clone {
    single()
        .then_ignore(one_of("-\u{2013}").padded())
        .then(single())
        .map(|(first, last)| Reference::Range(first, last))
        .labelled("range like 3:16-18")
}

/// Parser for any reference without a book name
pub fn relative<'src>() -> impl Parser<'src, &'src str, Reference, Extra<'src>> + Clone {
    choice((range(), and_following(), single().map(Reference::Single)))
}

/// Parser for a comma-separated list of relative references.
///
/// A one-element list yields that element rather than a `Related` node.
pub fn related<'src>() -> impl Parser<'src, &'src str, Reference, Extra<'src>> + Clone {
    relative()
        .separated_by(just(',').padded())
        .at_least(1)
        .collect::<Vec<_>>()
        .map(collapse)
}

fn collapse(mut refs: Vec<Reference>) -> Reference {
    if refs.len() == 1 {
        refs.remove(0)
    } else {
        Reference::Related(refs)
    }
}

// ============================================================================
// Book-qualified references
// ============================================================================

/// Parser for a book name: a letter or `1`-`9`, then letters, periods and
/// whitespace. Runs of whitespace collapse to a single space.
pub fn book_name<'src>() -> impl Parser<'src, &'src str, String, Extra<'src>> + Clone {
    any()
        .filter(|c: &char| c.is_alphabetic() || ('1'..='9').contains(c))
        .then(
            any()
                .filter(|c: &char| c.is_alphabetic() || *c == '.' || c.is_whitespace())
                .repeated(),
        )
        .to_slice()
        .map(|s: &str| s.split_whitespace().collect::<Vec<_>>().join(" "))
        .labelled("book name")
}

/// Parser for `John 3:16, 18`
pub fn proper<'src>() -> impl Parser<'src, &'src str, Reference, Extra<'src>> + Clone {
    book_name()
        .then(related())
        .map(|(book, relative)| Reference::Proper(book, Box::new(relative)))
        .labelled("book and verse like John 3:16")
}

/// Parser for a bare book name such as `Matthew`, read as `Matthew 1ffb`.
///
/// The name must contain a letter, so `3` alone is not a book.
pub fn whole_book<'src>() -> impl Parser<'src, &'src str, Reference, Extra<'src>> + Clone {
    book_name()
        .try_map(|name, span| {
            if name.chars().any(char::is_alphabetic) {
                Ok(name)
            } else {
                Err(Rich::custom(span, "book name needs a letter"))
            }
        })
        .map(|name| Reference::proper(name, Reference::AndFollowing(Verse::v(1), Following::Book)))
        .labelled("book name like Matthew")
}

/// Parser for `Gen 1:1; 2:3; Exod 3`
pub fn multiple<'src>() -> impl Parser<'src, &'src str, Reference, Extra<'src>> + Clone {
    proper()
        .then(
            just(';')
                .padded()
                .ignore_then(choice((proper(), related())))
                .repeated()
                .collect::<Vec<_>>(),
        )
        .map(|(head, tail)| {
            let mut refs = Vec::with_capacity(tail.len() + 1);
            refs.push(head);
            refs.extend(tail);
            Reference::Multiple(refs)
        })
}

// ============================================================================
// Entry points
// ============================================================================

/// Run `parser` over the whole of `input`, then validate the result.
///
/// A parse that stops early reports the unconsumed suffix as
/// [`ParseError::TrailingInput`] so callers can retry with a broader rule.
pub fn run<'src, P>(parser: P, input: &'src str) -> ParseResult<Reference>
where
    P: Parser<'src, &'src str, Reference, Extra<'src>>,
{
    let input = input.trim();
    let (output, errors) = parser
        .then(any().repeated().to_slice())
        .parse(input)
        .into_output_errors();

    match output {
        Some((reference, rest)) if errors.is_empty() => {
            let rest = rest.trim();
            if !rest.is_empty() {
                return Err(ParseError::TrailingInput {
                    input: input.to_string(),
                    rest: rest.to_string(),
                });
            }
            reference.validate()?;
            Ok(reference)
        }
        _ => Err(ParseError::no_match(input, format_errors(&errors, input))),
    }
}

/// Format chumsky errors for human consumption
pub fn format_errors(errs: &[Rich<'_, char>], input: &str) -> String {
    if errs.is_empty() {
        return "no citation found".to_string();
    }
    errs.iter()
        .map(|e| {
            let start = e.span().start;
            let found = e
                .found()
                .map_or("end of input".to_string(), |c| format!("'{}'", c));
            let near = input.get(start..).unwrap_or_default();
            format!("column {}: {} (found {} in {:?})", start + 1, e.reason(), found, near)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number() {
        assert_eq!(number().parse("42").into_result().unwrap(), 42);
        assert!(number().parse("x").into_result().is_err());
        assert!(number().parse("99999999").into_result().is_err());
    }

    #[test]
    fn test_single_prefers_chapter_verse() {
        assert_eq!(single().parse("3:16").into_result().unwrap(), Verse::cv(3, 16));
        assert_eq!(single().parse("3.16").into_result().unwrap(), Verse::cv(3, 16));
        assert_eq!(single().parse("3").into_result().unwrap(), Verse::v(3));
    }

    #[test]
    fn test_and_following_kinds() {
        let parse = |s| and_following().parse(s).into_result().unwrap();
        assert_eq!(parse("1:1ff"), Reference::AndFollowing(Verse::cv(1, 1), Following::None));
        assert_eq!(parse("1:1ffc"), Reference::AndFollowing(Verse::cv(1, 1), Following::Chapter));
        assert_eq!(parse("1:1 ffb"), Reference::AndFollowing(Verse::cv(1, 1), Following::Book));
    }

    #[test]
    fn test_relative_tries_range_first() {
        let parse = |s| relative().parse(s).into_result().unwrap();
        assert_eq!(parse("3:16-18"), Reference::Range(Verse::cv(3, 16), Verse::v(18)));
        assert_eq!(parse("3:16"), Reference::Single(Verse::cv(3, 16)));
        assert_eq!(parse("3:16ff"), Reference::AndFollowing(Verse::cv(3, 16), Following::None));
    }

    #[test]
    fn test_book_name_collapses_whitespace() {
        let parse = |s| book_name().parse(s).into_result().unwrap();
        assert_eq!(parse("Song  of\tSolomon "), "Song of Solomon");
        assert_eq!(parse("1 John"), "1 John");
        assert_eq!(parse("Gen."), "Gen.");
        assert!(book_name().parse("0 Kings").into_result().is_err());
    }

    #[test]
    fn test_related_collapses_single_entry() {
        assert_eq!(
            related().parse("3:16").into_result().unwrap(),
            Reference::Single(Verse::cv(3, 16))
        );
        assert_eq!(
            related().parse("3:16, 18").into_result().unwrap(),
            Reference::Related(vec![
                Reference::Single(Verse::cv(3, 16)),
                Reference::Single(Verse::v(18)),
            ])
        );
    }

    #[test]
    fn test_whole_book() {
        assert_eq!(
            run(whole_book(), "1 John").unwrap(),
            Reference::proper("1 John", Reference::AndFollowing(Verse::v(1), Following::Book))
        );
        assert!(run(whole_book(), "2").is_err());
    }

    #[test]
    fn test_run_reports_trailing_input() {
        let err = run(proper(), "John 3:16; 17").unwrap_err();
        assert_eq!(err.trailing(), Some("; 17"));
    }

    #[test]
    fn test_run_reports_no_match() {
        let err = run(proper(), ":16").unwrap_err();
        assert!(matches!(err, ParseError::NoMatch { .. }));
    }
}
