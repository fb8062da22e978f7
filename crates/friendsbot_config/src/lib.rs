use std::fs;
use once_cell::sync::OnceCell;
use thiserror::Error;
use crate::config::FriendsbotConfig;

static GLOBAL_CONFIG: OnceCell<FriendsbotConfig> = OnceCell::new();

pub mod config;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("don't call `load_config()` more than once")]
    AlreadyLoaded,
}

pub fn load_config(path: &str) -> Result<&'static FriendsbotConfig, ConfigError> {
    let cfg_str = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_string(),
        source,
    })?;
    let config: FriendsbotConfig = toml::from_str(&cfg_str)?;

    GLOBAL_CONFIG
        .set(config)
        .map_err(|_| ConfigError::AlreadyLoaded)?;
    Ok(get_config())
}

pub fn get_config() -> &'static FriendsbotConfig {
    GLOBAL_CONFIG
        .get()
        .expect("called `get_config()` before config was initialized")
}
