//! # Pericope core
//!
//! Anchors parsed scripture citations to a canon and works with the
//! result:
//!
//! - [`Canon`] and [`Book`]: the ordered verse list every range is measured
//!   against, with the 66-book canon built in ([`Canon::canonical`]).
//! - [`AbbrTrie`]: matches abbreviated book names ("Jn", "1 Sam.", "Ps").
//! - [`Canon::resolve`]: turns a parsed [`Reference`] into [`Resolved`] spans.
//! - [`Canon::filtered`]: a copy of the canon with citations removed and
//!   categories cut down to match.
//! - [`Formatter`]: renders spans back to text in several styles.
//! - [`random`]: picks a random passage, optionally weighted by category.
//!
//! ```rust
//! use pericope_core::{AbbrTrie, Canon, CitationStyle, Formatter, ResolveOptions};
//!
//! let canon = Canon::canonical();
//! let trie = AbbrTrie::standard();
//! let spans = canon.resolve_str("Jn 3:16-18", &ResolveOptions::with_abbreviations(&trie))?;
//! let text = Formatter::new(CitationStyle::Abbreviated)
//!     .with_abbreviations(&trie)
//!     .format(&spans);
//! assert_eq!(text, "John 3:16-18");
//! # Ok::<(), pericope_core::ResolveError>(())
//! ```

pub mod abbreviations;
pub mod canon;
pub mod error;
pub mod filter;
pub mod format;
pub mod random;
pub mod resolve;

pub use abbreviations::{AbbrTrie, BookAbbreviation};
pub use canon::{Book, Canon};
pub use error::{FilterError, LookupError, RandomError, ResolveError, ResolveResult};
pub use filter::{merge_spans, subtract};
pub use format::{CitationStyle, Formatter};
pub use random::RandomOptions;
pub use resolve::{ResolveOptions, Resolved};

pub use pericope_parser::{parse, Following, ParseError, Reference, ValidationError, Verse};
