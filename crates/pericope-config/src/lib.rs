//! # Pericope configuration
//!
//! Serde configuration for the pericope crates: citation style, random
//! passage bounds, default exclusions and logging. Loaded from TOML or YAML,
//! validated once, then handed to `pericope-core` by reference.
//!
//! ```rust,no_run
//! use pericope_config::{init_logging, ConfigLoader};
//!
//! let config = ConfigLoader::load_from_file("pericope.toml")?;
//! init_logging(&config.logging)?;
//! # Ok::<(), pericope_config::ConfigError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod config;
mod loader;
mod logging;

pub use config::*;
pub use loader::*;
pub use logging::*;
