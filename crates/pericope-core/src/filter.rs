//! Interval algebra over resolved spans, and filtered canons
//!
//! Spans are compared by their index range in the book they were resolved
//! against, so adjacency means "no verse in between" regardless of chapter
//! boundaries.

use crate::canon::{Book, Canon};
use crate::error::FilterError;
use crate::format::{CitationStyle, Formatter};
use crate::resolve::{ResolveOptions, Resolved};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::debug;

/// Coalesce overlapping and adjacent spans until no pair can be merged.
///
/// The result is unordered; spans from different books are never merged.
pub fn merge_spans(mut spans: Vec<Resolved>) -> Vec<Resolved> {
    while let Some((i, j, merged)) = find_mergeable(&spans) {
        spans[i] = merged;
        spans.remove(j);
    }
    spans
}

fn find_mergeable(spans: &[Resolved]) -> Option<(usize, usize, Resolved)> {
    for (i, a) in spans.iter().enumerate() {
        for (j, b) in spans.iter().enumerate().skip(i + 1) {
            if let Some(merged) = coalesce(a, b) {
                return Some((i, j, merged));
            }
        }
    }
    None
}

fn coalesce(a: &Resolved, b: &Resolved) -> Option<Resolved> {
    if !a.same_book(b) {
        return None;
    }
    let (a_start, a_end) = a.bounds();
    let (b_start, b_end) = b.bounds();
    let touching = (a_start <= b_start && b_start <= a_end)
        || (a_start <= b_end && b_end <= a_end)
        || (b_start <= a_start && a_end <= b_end)
        || a_end + 1 == b_start
        || b_end + 1 == a_start;
    touching.then(|| {
        Resolved::from_indices(
            Arc::clone(a.book()),
            a_start.min(b_start),
            a_end.max(b_end),
        )
    })
}

/// What remains of `span` once every cut is removed, in order.
///
/// Cuts from other books are ignored. The pieces share `span`'s book.
pub fn subtract(span: &Resolved, cuts: &[Resolved]) -> Vec<Resolved> {
    let mut pieces = vec![span.bounds()];
    for cut in cuts.iter().filter(|c| c.same_book(span)) {
        let (cut_start, cut_end) = cut.bounds();
        pieces = pieces
            .into_iter()
            .flat_map(|(start, end)| {
                if cut_end < start || end < cut_start {
                    return vec![(start, end)];
                }
                let mut kept = Vec::with_capacity(2);
                if start < cut_start {
                    kept.push((start, cut_start - 1));
                }
                if cut_end < end {
                    kept.push((cut_end + 1, end));
                }
                kept
            })
            .collect();
    }
    pieces
        .into_iter()
        .map(|(start, end)| Resolved::from_indices(Arc::clone(span.book()), start, end))
        .collect()
}

/// Remove the verses of `span` from `book`, which may already have lost
/// other verses.
fn splice(book: &mut Book, span: &Resolved) -> Result<(), FilterError> {
    let missing = |verse| FilterError::MissingVerse {
        book: book.name().to_string(),
        verse,
    };
    let verses = book.verses();
    let start = verses
        .iter()
        .position(|v| *v == span.first())
        .ok_or_else(|| missing(span.first()))?;
    let end = verses[start..]
        .iter()
        .position(|v| *v == span.last())
        .map(|offset| start + offset)
        .ok_or_else(|| missing(span.last()))?;
    book.verses_mut().drain(start..=end);
    Ok(())
}

impl Canon {
    /// A copy of this canon without the cited verses.
    ///
    /// Exclusions are resolved against this canon. Books left empty are
    /// dropped, and each category member is cut down to what remains of it
    /// (possibly several pieces, possibly nothing).
    pub fn filtered<S: AsRef<str>>(
        &self,
        exclude: &[S],
        options: &ResolveOptions<'_>,
    ) -> Result<Canon, FilterError> {
        let mut spans = Vec::new();
        for citation in exclude {
            let citation = citation.as_ref();
            let resolved =
                self.resolve_str(citation, options)
                    .map_err(|source| FilterError::Exclusion {
                        citation: citation.to_string(),
                        source,
                    })?;
            spans.extend(resolved);
        }
        let cuts = merge_spans(spans);
        debug!(
            exclusions = exclude.len(),
            merged = cuts.len(),
            "merged exclusion spans"
        );

        let mut books = Vec::with_capacity(self.books().len());
        for original in self.books() {
            let mine: Vec<&Resolved> = cuts
                .iter()
                .filter(|c| c.book().name() == original.name())
                .collect();
            if mine.is_empty() {
                books.push(Arc::clone(original));
                continue;
            }
            let mut book = Book::clone(original);
            for cut in mine {
                splice(&mut book, cut)?;
            }
            if book.is_empty() {
                debug!(book = book.name(), "dropped empty book");
            } else {
                books.push(Arc::new(book));
            }
        }

        let categories = self.repair_categories(&cuts)?;
        Ok(Canon::from_parts(self.name().to_string(), books, categories))
    }

    /// Re-render every category member minus `cuts`.
    fn repair_categories(
        &self,
        cuts: &[Resolved],
    ) -> Result<BTreeMap<String, Vec<String>>, FilterError> {
        let formatter = Formatter::new(CitationStyle::Canonical);
        let exact = ResolveOptions::default();
        let mut repaired = BTreeMap::new();
        for (category, members) in self.categories() {
            let mut kept = Vec::with_capacity(members.len());
            for member in members {
                let spans =
                    self.resolve_str(member, &exact)
                        .map_err(|source| FilterError::Category {
                            category: category.clone(),
                            member: member.clone(),
                            source,
                        })?;
                for span in &spans {
                    let pieces = subtract(span, cuts);
                    if pieces.len() != 1 || pieces[0] != *span {
                        debug!(
                            category = category.as_str(),
                            member = member.as_str(),
                            pieces = pieces.len(),
                            "repaired category member"
                        );
                    }
                    kept.extend(pieces.iter().map(|piece| formatter.format_one(piece)));
                }
            }
            repaired.insert(category.clone(), kept);
        }
        Ok(repaired)
    }
}
