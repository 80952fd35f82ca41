//! Configuration sections

use crate::loader::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Top-level configuration. Every section falls back to its defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PericopeConfig {
    /// Citation rendering
    pub format: FormatConfig,
    /// Random passage selection
    pub random: RandomConfig,
    /// Citations removed from the working canon
    pub filter: FilterConfig,
    /// Log output
    pub logging: LoggingConfig,
}

impl PericopeConfig {
    /// Check cross-field constraints that serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.random.validate()
    }
}

/// How book names are displayed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CitationStyle {
    /// Full book name: "Genesis 1:1"
    #[default]
    #[serde(rename = "canonical")]
    Canonical,
    /// Preferred abbreviation: "Gen. 1:1"
    #[serde(rename = "abbr")]
    Abbreviated,
    /// First two letters: "Ge 1:1"
    #[serde(rename = "2letter")]
    TwoLetter,
    /// First two letters and a period: "Ge. 1:1"
    #[serde(rename = "2letter.")]
    TwoLetterDot,
    /// First three letters: "Gen 1:1"
    #[serde(rename = "3letter")]
    ThreeLetter,
    /// First three letters and a period: "Gen. 1:1"
    #[serde(rename = "3letter.")]
    ThreeLetterDot,
}

impl CitationStyle {
    /// Every style, in documentation order
    pub const ALL: [CitationStyle; 6] = [
        Self::Canonical,
        Self::Abbreviated,
        Self::TwoLetter,
        Self::TwoLetterDot,
        Self::ThreeLetter,
        Self::ThreeLetterDot,
    ];

    /// Name used in configuration files
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Canonical => "canonical",
            Self::Abbreviated => "abbr",
            Self::TwoLetter => "2letter",
            Self::TwoLetterDot => "2letter.",
            Self::ThreeLetter => "3letter",
            Self::ThreeLetterDot => "3letter.",
        }
    }
}

impl fmt::Display for CitationStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CitationStyle {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|style| style.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ConfigError::InvalidValue {
                field: "format.style".to_string(),
                value: s.to_string(),
            })
    }
}

/// Citation rendering options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatConfig {
    /// Display style for book names
    pub style: CitationStyle,
    /// Use the singular book name ("Psalm 23") for citations inside one
    /// chapter when the style shows full names
    pub singular: bool,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            style: CitationStyle::Canonical,
            singular: true,
        }
    }
}

/// Random passage bounds
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RandomConfig {
    /// Shortest passage, in verses
    pub min_verses: usize,
    /// Longest passage, in verses
    pub max_verses: usize,
    /// Draw from this category instead of the whole canon
    pub category: Option<String>,
}

impl Default for RandomConfig {
    fn default() -> Self {
        Self {
            min_verses: 1,
            max_verses: 5,
            category: None,
        }
    }
}

impl RandomConfig {
    /// Reject empty or inverted passage bounds
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_verses == 0 {
            return Err(ConfigError::InvalidValue {
                field: "random.min_verses".to_string(),
                value: "0 (must be at least 1)".to_string(),
            });
        }
        if self.min_verses > self.max_verses {
            return Err(ConfigError::InvalidValue {
                field: "random.max_verses".to_string(),
                value: format!(
                    "{} (below min_verses {})",
                    self.max_verses, self.min_verses
                ),
            });
        }
        Ok(())
    }
}

/// Default exclusions
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Citations to remove, e.g. `["Song of Solomon", "Psalms 109"]`
    pub exclude: Vec<String>,
}

/// Log verbosity
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// No logging output
    Off,
    /// Error messages only
    Error,
    /// Warnings and errors
    #[default]
    Warn,
    /// Informational messages
    Info,
    /// Debug messages
    Debug,
    /// Trace-level messages (most verbose)
    Trace,
}

impl LogLevel {
    /// Directive text understood by `EnvFilter`
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}

/// Log output options
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default level for every target
    pub level: LogLevel,
    /// Extra comma-separated `EnvFilter` directives, e.g. `pericope_core=trace`
    pub directives: Option<String>,
}
