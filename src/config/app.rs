// src/config/app.rs
use super::defaults::*;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tracing::warn;

use crate::consts::{CONFIG_PATH_ENV, DEFAULT_CONFIG_FILE, HASH_COST_ENV};
use crate::error::Result;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub hashing: Hashing,
    pub response: Response,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Hashing {
    pub cost: u32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Response {
    pub success_message: String,
}

impl Default for Hashing {
    fn default() -> Self {
        default_hashing()
    }
}

impl Default for Response {
    fn default() -> Self {
        default_response()
    }
}

static CONFIG: OnceLock<Config> = OnceLock::new();

/// Parse a TOML config file; missing fields take the built-in defaults
pub fn load_from(path: impl AsRef<Path>) -> Result<Config> {
    let content = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Build a config the way the global loader does, without caching it
///
/// `config_path` is the explicitly requested file; `None` means the
/// conventional `request-helper.toml`, which may be absent silently. A
/// missing explicit file or an unparsable file falls back to the built-in
/// defaults with a warning. Env overrides are applied last.
pub fn resolve(config_path: Option<&Path>) -> Config {
    let path = config_path.unwrap_or(Path::new(DEFAULT_CONFIG_FILE));

    let mut conf = if path.exists() {
        load_from(path).unwrap_or_else(|e| {
            warn!(path = %path.display(), error = %e, "unreadable config, using built-in defaults");
            Config::default()
        })
    } else {
        if config_path.is_some() {
            warn!(path = %path.display(), "config file not found, using built-in defaults");
        }
        Config::default()
    };

    apply_env_overrides(&mut conf);
    conf
}

/// Global config, loaded once. Falls back to defaults if missing or invalid
pub fn load() -> &'static Config {
    CONFIG.get_or_init(|| {
        let config_path = std::env::var_os(CONFIG_PATH_ENV).map(PathBuf::from);
        resolve(config_path.as_deref())
    })
}

fn apply_env_overrides(conf: &mut Config) {
    if let Ok(raw) = std::env::var(HASH_COST_ENV) {
        match raw.trim().parse() {
            Ok(cost) => conf.hashing.cost = cost,
            Err(_) => warn!(value = %raw, "ignoring non-numeric {HASH_COST_ENV}"),
        }
    }
}
