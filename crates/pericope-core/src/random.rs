//! Random passage selection
//!
//! Passage lengths are drawn uniformly from `[min, max]` and clamped at the
//! end of the book (or category extract), so spans near the end come out
//! shorter. That bias is accepted; this is not a uniform sampler over all
//! valid spans.

use crate::canon::{Book, Canon};
use crate::error::RandomError;
use crate::resolve::{ResolveOptions, Resolved};
use pericope_config::RandomConfig;
use rand::Rng;
use std::sync::Arc;
use tracing::debug;

/// Bounds and source for [`random`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RandomOptions {
    pub min_verses: usize,
    pub max_verses: usize,
    /// Draw from this category, weighted by verse count
    pub category: Option<String>,
}

impl Default for RandomOptions {
    fn default() -> Self {
        Self {
            min_verses: 1,
            max_verses: 5,
            category: None,
        }
    }
}

impl From<&RandomConfig> for RandomOptions {
    fn from(config: &RandomConfig) -> Self {
        Self {
            min_verses: config.min_verses,
            max_verses: config.max_verses,
            category: config.category.clone(),
        }
    }
}

fn check_bounds(min: usize, max: usize) -> Result<(), RandomError> {
    if min == 0 || min > max {
        Err(RandomError::InvalidBounds { min, max })
    } else {
        Ok(())
    }
}

/// Uniformly chosen book
pub fn random_book<R: Rng + ?Sized>(canon: &Canon, rng: &mut R) -> Result<Arc<Book>, RandomError> {
    let books = canon.books();
    if books.is_empty() {
        return Err(RandomError::EmptyCanon);
    }
    Ok(Arc::clone(&books[rng.random_range(0..books.len())]))
}

/// A passage of `min..=max` verses starting anywhere in `book`.
pub fn random_passage<R: Rng + ?Sized>(
    book: &Arc<Book>,
    min: usize,
    max: usize,
    rng: &mut R,
) -> Result<Resolved, RandomError> {
    check_bounds(min, max)?;
    if book.is_empty() {
        return Err(RandomError::EmptyCanon);
    }
    Ok(passage_within(book, 0, book.len() - 1, min, max, rng))
}

/// Start uniformly in `[lo, hi]`, extend by a uniform length, clamp at `hi`
fn passage_within<R: Rng + ?Sized>(
    book: &Arc<Book>,
    lo: usize,
    hi: usize,
    min: usize,
    max: usize,
    rng: &mut R,
) -> Resolved {
    let start = rng.random_range(lo..=hi);
    let length = rng.random_range(min..=max);
    let end = (start + length - 1).min(hi);
    Resolved::from_indices(Arc::clone(book), start, end)
}

/// A passage from `category`, choosing each member span with probability
/// proportional to its verse count.
pub fn random_in_category<R: Rng + ?Sized>(
    canon: &Canon,
    category: &str,
    min: usize,
    max: usize,
    rng: &mut R,
) -> Result<Resolved, RandomError> {
    check_bounds(min, max)?;
    let members = canon
        .category(category)
        .ok_or_else(|| RandomError::UnknownCategory(category.to_string()))?;

    let exact = ResolveOptions::default();
    let mut spans = Vec::new();
    for member in members {
        let resolved = canon
            .resolve_str(member, &exact)
            .map_err(|source| RandomError::Category {
                category: category.to_string(),
                member: member.clone(),
                source,
            })?;
        spans.extend(resolved);
    }

    // one tally per verse
    let total: usize = spans.iter().map(Resolved::len).sum();
    if total == 0 {
        return Err(RandomError::EmptyCategory(category.to_string()));
    }
    let mut tally = rng.random_range(0..total);
    let span = spans
        .iter()
        .find(|span| {
            if tally < span.len() {
                true
            } else {
                tally -= span.len();
                false
            }
        })
        .ok_or_else(|| RandomError::EmptyCategory(category.to_string()))?;
    debug!(category, span = %span, total, "picked category span");

    let (lo, hi) = span.bounds();
    Ok(passage_within(span.book(), lo, hi, min, max, rng))
}

/// A random passage according to `options`.
pub fn random<R: Rng + ?Sized>(
    canon: &Canon,
    options: &RandomOptions,
    rng: &mut R,
) -> Result<Resolved, RandomError> {
    check_bounds(options.min_verses, options.max_verses)?;
    match &options.category {
        Some(category) => random_in_category(
            canon,
            category,
            options.min_verses,
            options.max_verses,
            rng,
        ),
        None => {
            let book = random_book(canon, rng)?;
            random_passage(&book, options.min_verses, options.max_verses, rng)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_passage_respects_bounds() {
        let canon = Canon::canonical();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let r = random(&canon, &RandomOptions::default(), &mut rng).unwrap();
            assert!(r.len() <= 5);
            assert!(!r.last().before(&r.first()));
        }
    }

    #[test]
    fn test_passage_clamps_at_book_end() {
        let book = Arc::new(Book::from_chapters("Tiny", true, &[3]));
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..50 {
            let r = random_passage(&book, 5, 10, &mut rng).unwrap();
            assert!(r.len() <= 3);
        }
    }

    #[test]
    fn test_category_stays_inside_members() {
        let canon = Canon::canonical();
        let mut rng = StdRng::seed_from_u64(42);
        let options = RandomOptions {
            min_verses: 1,
            max_verses: 3,
            category: Some("Apocalyptic".to_string()),
        };
        for _ in 0..100 {
            let r = random(&canon, &options, &mut rng).unwrap();
            let ok = match r.book().name() {
                "Isaiah" => (24..=27).contains(&r.first().chapter().unwrap_or(0))
                    && (24..=27).contains(&r.last().chapter().unwrap_or(0)),
                "Daniel" => r.first().chapter() >= Some(7),
                "Zechariah" => r.first().chapter() >= Some(9),
                "Revelation" => true,
                other => panic!("{other} is not apocalyptic"),
            };
            assert!(ok, "{r} escaped its category");
        }
    }

    #[test]
    fn test_errors() {
        let canon = Canon::canonical();
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            random_in_category(&canon, "Poetry", 1, 2, &mut rng),
            Err(RandomError::UnknownCategory("Poetry".to_string()))
        );
        let inverted = RandomOptions {
            min_verses: 4,
            max_verses: 2,
            category: None,
        };
        assert_eq!(
            random(&canon, &inverted, &mut rng),
            Err(RandomError::InvalidBounds { min: 4, max: 2 })
        );
        let empty = Canon::new("Empty", vec![], Default::default());
        assert_eq!(random_book(&empty, &mut rng), Err(RandomError::EmptyCanon));
    }

    #[test]
    fn test_options_from_config() {
        let config = RandomConfig {
            min_verses: 2,
            max_verses: 9,
            category: Some("Wisdom".to_string()),
        };
        let options = RandomOptions::from(&config);
        assert_eq!(options.max_verses, 9);
        assert_eq!(options.category.as_deref(), Some("Wisdom"));
    }

    proptest! {
        #[test]
        fn prop_first_never_after_last(seed in any::<u64>(), min in 1usize..10, extra in 0usize..20) {
            let canon = Canon::canonical();
            let mut rng = StdRng::seed_from_u64(seed);
            let options = RandomOptions { min_verses: min, max_verses: min + extra, category: None };
            let r = random(&canon, &options, &mut rng).unwrap();
            prop_assert!(r.first() == r.last() || r.first().before(&r.last()));
            prop_assert!(r.len() <= min + extra);
        }
    }
}
