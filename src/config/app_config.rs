use std::env;
use std::path::{Path, PathBuf};

use unicode_width::UnicodeWidthStr;

use super::Config;
use crate::error::ConfigError;

pub const DEFAULT_CONFIG_FILE: &str = "liveness.yml";

pub struct AppConfig {
    pub config: Config,
    pub config_file: PathBuf,
    pub max_group_width: usize,
}

/// Load the liveness configuration named by the environment.
/// Variables from a `.env` file in the working directory are loaded first if the file exists,
/// then the `CONFIG_FILE` variable selects the YAML document (`liveness.yml` when unset).
pub fn load_config() -> Result<AppConfig, ConfigError> {
    match env_file(dotenvy::dotenv()) {
        Ok(Some(path)) => log::info!("Loaded environment from {}", path.display()),
        Ok(None) => {}
        Err(e) => log::warn!("Failed to load .env file: {e}"),
    }

    let config_file =
        env::var("CONFIG_FILE").unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());

    load_config_from(config_file)
}

/// A missing `.env` file is not an error, any other failure to load one is.
fn env_file(result: Result<PathBuf, dotenvy::Error>) -> Result<Option<PathBuf>, dotenvy::Error> {
    match result {
        Ok(path) => Ok(Some(path)),
        Err(e) if e.not_found() => Ok(None),
        Err(e) => Err(e),
    }
}

/// Load the liveness configuration from a YAML file.
pub fn load_config_from(path: impl AsRef<Path>) -> Result<AppConfig, ConfigError> {
    let path = path.as_ref();
    log::info!("Loading liveness configuration from {}", path.display());

    let config_str = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let config = parse_config(&config_str).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    for (name, group) in &config {
        if group.targets().is_empty() {
            log::warn!("Liveness group '{name}' has no targets");
        }
    }

    let max_group_width = config
        .keys()
        .map(|name| UnicodeWidthStr::width(name.as_str()))
        .max()
        .unwrap_or(10);

    Ok(AppConfig {
        config,
        config_file: path.to_path_buf(),
        max_group_width,
    })
}

pub fn parse_config(config_str: &str) -> Result<Config, serde_yaml::Error> {
    serde_yaml::from_str(config_str)
}
