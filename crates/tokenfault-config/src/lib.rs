//! Logging configuration for tokenfault hosts.
//!
//! Provides TOML-based configuration with:
//! - A `[logging]` section (filter, console format, optional rolling file)
//! - Environment overrides (`TOKENFAULT_LOG`, `TOKENFAULT_LOG_FORMAT`)
//! - Config directory discovery (`TOKENFAULT_CONFIG_DIR`, then the platform default)
//! - Installation of the global `tracing` subscriber

pub mod discovery;
pub mod error;
pub mod logging;
pub mod types;

pub use discovery::{
    CONFIG_DIR_ENV, load_config, load_config_file, load_config_from, load_config_from_with,
    load_config_with, xdg_config_dir, xdg_config_dir_from, xdg_config_path, xdg_config_path_from,
};
pub use error::{ConfigError, Result};
pub use logging::{BoxedLayer, LoggingGuard, build_layers, init_tracing};
pub use types::*;
