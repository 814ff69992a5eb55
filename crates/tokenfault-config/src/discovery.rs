//! Config file discovery and loading.

use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};
use crate::types::TokenfaultConfig;

const APP_NAME: &str = "tokenfault";

const USER_CONFIG_FILE: &str = "config.toml";

/// Environment variable to override the config directory.
///
/// When set, this takes precedence over the platform default.
pub const CONFIG_DIR_ENV: &str = "TOKENFAULT_CONFIG_DIR";

/// Get the config directory for tokenfault.
///
/// Checks `TOKENFAULT_CONFIG_DIR` first, then falls back to the platform
/// default (`~/.config/tokenfault` on Linux).
pub fn xdg_config_dir() -> Option<PathBuf> {
    xdg_config_dir_from(env_lookup)
}

/// [`xdg_config_dir`] with `lookup` in place of the process environment.
pub fn xdg_config_dir_from<F>(lookup: F) -> Option<PathBuf>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(dir) = lookup(CONFIG_DIR_ENV)
        && !dir.is_empty()
    {
        return Some(PathBuf::from(dir));
    }
    dirs::config_dir().map(|d| d.join(APP_NAME))
}

/// Get the path of the user config file.
pub fn xdg_config_path() -> Option<PathBuf> {
    xdg_config_path_from(env_lookup)
}

/// [`xdg_config_path`] with `lookup` in place of the process environment.
pub fn xdg_config_path_from<F>(lookup: F) -> Option<PathBuf>
where
    F: Fn(&str) -> Option<String>,
{
    xdg_config_dir_from(lookup).map(|d| d.join(USER_CONFIG_FILE))
}

/// Load a single config file.
pub fn load_config_file(path: &Path) -> Result<TokenfaultConfig> {
    let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
        path: path.display().to_string(),
        source: e,
    })?;
    TokenfaultConfig::from_toml(&contents)
}

/// Load configuration from `path` if it exists, else defaults, then apply
/// environment overrides.
pub fn load_config_from(path: &Path) -> Result<TokenfaultConfig> {
    load_config_from_with(path, env_lookup)
}

/// [`load_config_from`] with `lookup` in place of the process environment.
pub fn load_config_from_with<F>(path: &Path, lookup: F) -> Result<TokenfaultConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = if path.is_file() {
        load_config_file(path)?
    } else {
        TokenfaultConfig::default()
    };
    config.logging.apply_env_overrides_from(lookup)?;
    Ok(config)
}

/// Load the user configuration from the discovered config path.
pub fn load_config() -> Result<TokenfaultConfig> {
    load_config_with(env_lookup)
}

/// [`load_config`] with `lookup` in place of the process environment.
pub fn load_config_with<F>(lookup: F) -> Result<TokenfaultConfig>
where
    F: Fn(&str) -> Option<String>,
{
    match xdg_config_path_from(&lookup) {
        Some(path) => load_config_from_with(&path, lookup),
        None => {
            let mut config = TokenfaultConfig::default();
            config.logging.apply_env_overrides_from(lookup)?;
            Ok(config)
        }
    }
}

fn env_lookup(key: &str) -> Option<String> {
    std::env::var(key).ok()
}
