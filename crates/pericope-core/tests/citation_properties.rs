//! End-to-end behaviour of the canonical canon: parse, resolve, filter,
//! format.

use pericope_config::ConfigLoader;
use pericope_core::random::random;
use pericope_core::{
    AbbrTrie, Canon, CitationStyle, FilterError, Formatter, LookupError, RandomOptions,
    ResolveError, ResolveOptions, Resolved, Verse,
};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn resolve(canon: &Canon, text: &str) -> Result<Vec<Resolved>, ResolveError> {
    let trie = AbbrTrie::standard();
    canon.resolve_str(text, &ResolveOptions::with_abbreviations(&trie))
}

#[test]
fn first_and_last_verse_of_every_book_round_trip() {
    let canon = Canon::canonical();
    let exact = ResolveOptions::default();
    for book in canon.books() {
        for verse in [book.first_verse().unwrap(), book.last_verse().unwrap()] {
            let text = format!("{} {}", book.name(), verse.reference());
            let spans = canon.resolve_str(&text, &exact).unwrap();
            assert_eq!(spans.len(), 1, "{text}");
            assert_eq!(spans[0].first(), verse, "{text}");
            assert_eq!(spans[0].last(), verse, "{text}");
        }
    }
}

#[test]
fn whole_book_formats_as_bare_name() {
    let canon = Canon::canonical();
    for book in canon.books() {
        let whole = Resolved::new(
            book.clone(),
            book.first_verse().unwrap(),
            book.last_verse().unwrap(),
        )
        .unwrap();
        assert_eq!(
            Formatter::new(CitationStyle::Canonical).format_one(&whole),
            book.name()
        );
    }
    let obadiah = resolve(&canon, "Obadiah 1-21").unwrap();
    for style in CitationStyle::ALL {
        let text = Formatter::new(style).format(&obadiah);
        assert!(!text.contains(' '), "{style}: {text}");
    }
}

#[test]
fn exact_spelling_beats_prefix() {
    let trie = AbbrTrie::standard();
    assert_eq!(trie.book_name("Jn"), Ok("John"));
    assert_eq!(trie.book_name("Jnh"), Ok("Jonah"));
    assert_eq!(trie.book_name("1 Jn"), Ok("1 John"));
    assert_eq!(trie.book_name("III John"), Ok("3 John"));
    assert_eq!(trie.book_name("I"), Ok("Isaiah"));
    assert_eq!(trie.book_name("Ez"), Ok("Ezra"));
    assert_eq!(trie.book_name("Ps"), Ok("Psalms"));
    assert_eq!(
        trie.book_name("Ph"),
        Err(LookupError::MultipleMatch {
            query: "Ph".to_string(),
            candidates: vec!["Philemon".to_string(), "Philippians".to_string()],
        })
    );
}

#[test]
fn overlapping_exclusions_remove_each_verse_once() {
    let canon = Canon::canonical();
    let filtered = canon
        .filtered(&["Colossians 1:1-14", "Colossians 1:10-15"], &ResolveOptions::default())
        .unwrap();
    let col = filtered.book("Colossians").unwrap();
    assert_eq!(col.first_verse(), Some(Verse::cv(1, 16)));
    assert!(!col.contains(&Verse::cv(1, 15)));
    assert_eq!(filtered.verse_count(), canon.verse_count() - 15);
}

#[test]
fn adjacent_exclusions_merge() {
    let canon = Canon::canonical();
    let filtered = canon
        .filtered(&["Colossians 1:1-10", "Colossians 1:11-20"], &ResolveOptions::default())
        .unwrap();
    assert_eq!(
        filtered.book("Colossians").unwrap().first_verse(),
        Some(Verse::cv(1, 21))
    );
    assert_eq!(filtered.verse_count(), canon.verse_count() - 20);
}

#[test]
fn removing_gospels_repairs_the_category() {
    let filtered = Canon::canonical()
        .filtered(&["Matthew", "Mark"], &ResolveOptions::default())
        .unwrap();
    assert_eq!(filtered.category("Gospels").unwrap(), ["Luke", "John", "Acts"]);
}

#[test]
fn filtered_canon_resolves_what_is_left() {
    let canon = Canon::canonical();
    let trie = AbbrTrie::standard();
    let options = ResolveOptions::with_abbreviations(&trie);
    let filtered = canon.filtered(&["Col 1:1-15", "Jude"], &options).unwrap();

    assert!(matches!(
        filtered.resolve_str("Col 1:3", &options),
        Err(ResolveError::VerseNotFound { .. })
    ));
    assert_eq!(
        filtered.resolve_str("Col 1", &options).unwrap()[0].first(),
        Verse::cv(1, 16)
    );
    assert_eq!(
        filtered.resolve_str("Jude 3", &options),
        Err(ResolveError::BookNotFound("Jude".to_string()))
    );
    assert!(matches!(
        canon.filtered(&["Col 1:99"], &options),
        Err(FilterError::Exclusion { .. })
    ));
}

#[test]
fn bare_chapter_equals_explicit_range() {
    let canon = Canon::canonical();
    assert_eq!(
        resolve(&canon, "Isaiah 33").unwrap(),
        resolve(&canon, "Isaiah 33:1-33:24").unwrap()
    );
}

#[test]
fn reversed_ranges_never_swap() {
    let canon = Canon::canonical();
    let err = resolve(&canon, "John 3:18-16").unwrap_err();
    assert!(err.is_validation(), "{err}");
    let err = resolve(&canon, "Psalms 5-3").unwrap_err();
    assert!(err.is_validation(), "{err}");
}

#[test]
fn configured_pipeline() {
    let config = ConfigLoader::from_toml_str(
        r#"
        [format]
        style = "abbr"

        [random]
        min_verses = 2
        max_verses = 4
        category = "Gospels"

        [filter]
        exclude = ["Mark"]
        "#,
    )
    .unwrap();

    let canon = Canon::canonical();
    let trie = AbbrTrie::standard();
    let options = ResolveOptions::with_abbreviations(&trie);
    let working = canon.filtered(&config.filter.exclude, &options).unwrap();

    let formatter = Formatter::from_config(&config.format, Some(&trie));
    let spans = working.resolve_str("Lk 2:1-7", &options).unwrap();
    assert_eq!(formatter.format(&spans), "Luke 2:1-7");

    let mut rng = StdRng::seed_from_u64(3);
    let picked = random(&working, &RandomOptions::from(&config.random), &mut rng).unwrap();
    assert_ne!(picked.book().name(), "Mark");
    assert!(picked.len() <= 4);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn resolved_spans_run_forward(chapter in 1u16..=150, first in 1u16..=6, span in 0u16..=4) {
        let canon = Canon::canonical();
        let text = if span == 0 {
            format!("Psalms {}:{}", chapter, first)
        } else {
            format!("Psalms {}:{}-{}", chapter, first, first + span)
        };
        // Psalm 117 has two verses, so some of these are not found
        if let Ok(spans) = resolve(&canon, &text) {
            for r in spans {
                prop_assert!(r.first() == r.last() || r.first().before(&r.last()));
            }
        }
    }
}
