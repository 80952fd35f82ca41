//! Tracing subscriber setup

use crate::config::LoggingConfig;
use crate::loader::ConfigError;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;

/// Build the event filter for `config`: the base level plus any extra
/// directives.
pub fn env_filter(config: &LoggingConfig) -> Result<EnvFilter, ConfigError> {
    let mut filter = EnvFilter::new(config.level.as_str());
    let extra = config.directives.as_deref().unwrap_or_default();
    for part in extra.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        let directive: Directive = part.parse().map_err(|e| ConfigError::InvalidValue {
            field: "logging.directives".to_string(),
            value: format!("{part} ({e})"),
        })?;
        filter = filter.add_directive(directive);
    }
    Ok(filter)
}

/// Install a global `fmt` subscriber writing to stderr.
///
/// Fails with [`ConfigError::Logging`] if a global subscriber is already set.
pub fn init_logging(config: &LoggingConfig) -> Result<(), ConfigError> {
    let filter = env_filter(config)?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init()
        .map_err(|e| ConfigError::Logging(e.to_string()))
}
