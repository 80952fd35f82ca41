//! Prefix trie over normalized book spellings.
//!
//! Every node passed while inserting a spelling records the book, so a
//! lookup that stops anywhere along a spelling finds it. Ties are broken by:
//!
//! 1. a spelling equal to the whole query beats a mere prefix match;
//! 2. plain books beat numbered ones ("I" is Isaiah, not I Samuel).
//!
//! Anything still tied is reported as ambiguous.

use super::{normalize, standard_table, BookAbbreviation};
use crate::error::LookupError;
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

#[derive(Debug, Clone, Default)]
struct TrieNode {
    children: BTreeMap<char, TrieNode>,
    /// Indexes into `AbbrTrie::entries`
    books: BTreeSet<usize>,
}

/// Abbreviation table plus its prefix index, built eagerly.
#[derive(Debug, Clone)]
pub struct AbbrTrie {
    entries: Vec<BookAbbreviation>,
    /// Normalized spellings per entry, for the exact-match rule
    exact: Vec<BTreeSet<String>>,
    root: TrieNode,
}

impl AbbrTrie {
    pub fn new(entries: Vec<BookAbbreviation>) -> Self {
        let mut trie = Self {
            exact: Vec::with_capacity(entries.len()),
            entries: Vec::new(),
            root: TrieNode::default(),
        };
        let mut nodes = 0;
        for (index, entry) in entries.iter().enumerate() {
            let spellings: BTreeSet<String> = entry
                .spellings()
                .iter()
                .map(|s| normalize(s))
                .filter(|s| !s.is_empty())
                .collect();
            for spelling in &spellings {
                nodes += trie.insert(spelling, index);
            }
            trie.exact.push(spellings);
        }
        trie.entries = entries;
        debug!(books = trie.entries.len(), nodes, "built abbreviation trie");
        trie
    }

    /// Trie over [`standard_table`]
    pub fn standard() -> Self {
        Self::new(standard_table())
    }

    /// Insert a normalized spelling, returning how many nodes were created
    fn insert(&mut self, spelling: &str, index: usize) -> usize {
        let mut created = 0;
        let mut node = &mut self.root;
        for c in spelling.chars() {
            node = node.children.entry(c).or_insert_with(|| {
                created += 1;
                TrieNode::default()
            });
            node.books.insert(index);
        }
        created
    }

    pub fn entries(&self) -> &[BookAbbreviation] {
        &self.entries
    }

    /// Entry for an exact canonical book name
    pub fn abbreviation(&self, name: &str) -> Option<&BookAbbreviation> {
        self.entries.iter().find(|e| e.name == name)
    }

    /// Books matching `query` after the tie-break rules.
    ///
    /// Empty when nothing matches; more than one entry when the query is
    /// ambiguous.
    pub fn get(&self, query: &str) -> Vec<&BookAbbreviation> {
        let key = normalize(query);
        if key.is_empty() {
            return Vec::new();
        }

        let mut node = &self.root;
        for c in key.chars() {
            match node.children.get(&c) {
                Some(child) => node = child,
                None => return Vec::new(),
            }
        }

        let mut found: Vec<usize> = node.books.iter().copied().collect();
        if found.len() > 1 {
            let exact: Vec<usize> = found
                .iter()
                .copied()
                .filter(|&i| self.exact[i].contains(&key))
                .collect();
            if !exact.is_empty() {
                found = exact;
            }
        }
        if found.len() > 1 {
            let plain: Vec<usize> = found
                .iter()
                .copied()
                .filter(|&i| self.entries[i].ordinal == 0)
                .collect();
            if !plain.is_empty() && plain.len() < found.len() {
                found = plain;
            }
        }

        found.into_iter().map(|i| &self.entries[i]).collect()
    }

    /// Canonical name of the single book matching `query`.
    pub fn book_name(&self, query: &str) -> Result<&str, LookupError> {
        let found = self.get(query);
        match found.as_slice() {
            [] => Err(LookupError::NotFound(query.to_string())),
            [only] => Ok(&only.name),
            many => {
                let mut candidates: Vec<String> = many.iter().map(|e| e.name.clone()).collect();
                candidates.sort();
                Err(LookupError::MultipleMatch {
                    query: query.to_string(),
                    candidates,
                })
            }
        }
    }
}
