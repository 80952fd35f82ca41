//! Book name abbreviations
//!
//! The static table lists, for each book, its display forms and every
//! spelling a reader might type. [`AbbrTrie`] indexes those spellings for
//! prefix lookup and applies the disambiguation rules.

mod table;
mod trie;

pub use table::standard_table;
pub use trie::AbbrTrie;

use serde::{Deserialize, Serialize};

/// Display forms and accepted spellings for one book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookAbbreviation {
    /// Canonical book name, e.g. "1 Samuel"
    pub name: String,
    /// Preferred abbreviation, e.g. "1 Sam."
    pub preferred: String,
    /// Name used when citing inside one chapter, e.g. "Psalm"
    #[serde(default)]
    pub singular: Option<String>,
    /// 1, 2 or 3 for numbered books, 0 otherwise
    #[serde(default)]
    pub ordinal: u8,
    /// Accepted spellings. For numbered books these omit the number;
    /// [`BookAbbreviation::spellings`] adds every ordinal prefix.
    #[serde(default)]
    pub accepts: Vec<String>,
}

impl BookAbbreviation {
    pub fn new(name: &str, preferred: &str, accepts: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            preferred: preferred.to_string(),
            singular: None,
            ordinal: 0,
            accepts: accepts.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn with_singular(mut self, singular: &str) -> Self {
        self.singular = Some(singular.to_string());
        self
    }

    pub fn with_ordinal(mut self, ordinal: u8) -> Self {
        self.ordinal = ordinal;
        self
    }

    /// Name to show for a citation confined to one chapter
    pub fn singular_name(&self) -> &str {
        self.singular.as_deref().unwrap_or(&self.name)
    }

    /// Every spelling that identifies this book, as written (not
    /// normalized): the name, the preferred form and each accepted form.
    pub fn spellings(&self) -> Vec<String> {
        let mut spellings = vec![self.name.clone(), self.preferred.clone()];
        spellings.extend(self.singular.iter().cloned());
        if self.ordinal == 0 {
            spellings.extend(self.accepts.iter().cloned());
        } else {
            for prefix in ordinal_prefixes(self.ordinal) {
                for base in &self.accepts {
                    spellings.push(format!("{} {}", prefix, base));
                }
            }
        }
        spellings
    }
}

fn ordinal_prefixes(ordinal: u8) -> &'static [&'static str] {
    match ordinal {
        1 => &["1", "I", "1st", "First"],
        2 => &["2", "II", "2nd", "Second"],
        3 => &["3", "III", "3rd", "Third"],
        _ => &[],
    }
}

/// Lowercase and drop everything but letters and digits.
pub fn normalize(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("1 Sam."), "1sam");
        assert_eq!(normalize("Song of  Songs"), "songofsongs");
        assert_eq!(normalize(" . "), "");
    }

    #[test]
    fn test_ordinal_spellings() {
        let abbr = BookAbbreviation::new("2 Kings", "2 Kgs.", &["Kings", "Kgs"]).with_ordinal(2);
        let spellings = abbr.spellings();
        assert!(spellings.contains(&"2 Kings".to_string()));
        assert!(spellings.contains(&"II Kgs".to_string()));
        assert!(spellings.contains(&"Second Kings".to_string()));
        assert!(!spellings.contains(&"Kings".to_string()));
    }

    #[test]
    fn test_singular_name() {
        let psalms = BookAbbreviation::new("Psalms", "Ps.", &["Ps"]).with_singular("Psalm");
        assert_eq!(psalms.singular_name(), "Psalm");
        let john = BookAbbreviation::new("John", "John", &["Jn"]);
        assert_eq!(john.singular_name(), "John");
    }
}
