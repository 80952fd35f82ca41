//! Loading configuration from TOML and YAML

use crate::config::PericopeConfig;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        /// File that failed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// TOML syntax or schema error
    #[cfg(feature = "toml")]
    #[error("invalid TOML config: {0}")]
    Toml(#[from] toml::de::Error),

    /// YAML syntax or schema error
    #[cfg(feature = "yaml")]
    #[error("invalid YAML config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// File extension does not name a supported format
    #[error("unsupported config format {0:?}, expected .toml, .yaml or .yml")]
    UnsupportedFormat(String),

    /// A field parsed but its value is not allowed
    #[error("invalid value for {field}: {value}")]
    InvalidValue {
        /// Dotted field path, e.g. `random.min_verses`
        field: String,
        /// Offending value
        value: String,
    },

    /// The global tracing subscriber could not be installed
    #[error("failed to initialise logging: {0}")]
    Logging(String),
}

/// Serialization format of a config source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// `.toml`
    Toml,
    /// `.yaml` or `.yml`
    Yaml,
}

impl ConfigFormat {
    /// Pick the format from a file extension
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();
        match ext.as_str() {
            "toml" => Ok(Self::Toml),
            "yaml" | "yml" => Ok(Self::Yaml),
            _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Reads and validates [`PericopeConfig`] values.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Parse and validate configuration text
    pub fn load_from_str(text: &str, format: ConfigFormat) -> Result<PericopeConfig, ConfigError> {
        let config: PericopeConfig = match format {
            #[cfg(feature = "toml")]
            ConfigFormat::Toml => toml::from_str(text)?,
            #[cfg(feature = "yaml")]
            ConfigFormat::Yaml => serde_yaml::from_str(text)?,
            #[allow(unreachable_patterns)]
            other => return Err(ConfigError::UnsupportedFormat(format!("{:?}", other))),
        };
        config.validate()?;
        Ok(config)
    }

    /// Parse TOML configuration
    pub fn from_toml_str(text: &str) -> Result<PericopeConfig, ConfigError> {
        Self::load_from_str(text, ConfigFormat::Toml)
    }

    /// Parse YAML configuration
    pub fn from_yaml_str(text: &str) -> Result<PericopeConfig, ConfigError> {
        Self::load_from_str(text, ConfigFormat::Yaml)
    }

    /// Load a file, choosing the format by extension
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<PericopeConfig, ConfigError> {
        let path = path.as_ref();
        let format = ConfigFormat::from_path(path)?;
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::load_from_str(&text, format)?;
        debug!(path = %path.display(), ?format, "loaded config");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CitationStyle, LogLevel};

    #[test]
    fn test_empty_toml_is_default() {
        let config = ConfigLoader::from_toml_str("").unwrap();
        assert_eq!(config, PericopeConfig::default());
    }

    #[test]
    fn test_partial_sections() {
        let config = ConfigLoader::from_toml_str(
            r#"
            [format]
            style = "3letter."

            [logging]
            level = "debug"
            "#,
        )
        .unwrap();
        assert_eq!(config.format.style, CitationStyle::ThreeLetterDot);
        assert!(config.format.singular);
        assert_eq!(config.logging.level, LogLevel::Debug);
        assert_eq!(config.random.max_verses, 5);
    }

    #[test]
    fn test_validation_runs_on_load() {
        let err = ConfigLoader::from_yaml_str("random:\n  min_verses: 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(ConfigFormat::from_path(Path::new("a.TOML")).unwrap(), ConfigFormat::Toml);
        assert_eq!(ConfigFormat::from_path(Path::new("a.yml")).unwrap(), ConfigFormat::Yaml);
        assert!(matches!(
            ConfigFormat::from_path(Path::new("a.json")),
            Err(ConfigError::UnsupportedFormat(_))
        ));
    }
}
