mod types;

pub use types::*;

use crate::{Error, Result};
use std::env;
use tracing::debug;

const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Where configuration comes from before any file is read.
#[derive(Debug, Clone)]
pub struct ConfigSources {
    /// Path named by `CONFIG_PATH`; a missing file here is an error.
    pub explicit_path: Option<String>,
    /// Path tried when none is named; a missing file here means defaults.
    pub default_path: String,
    /// `TRANSLATOR_API_URL`, replacing `api.base_url`.
    pub base_url_override: Option<String>,
}

impl ConfigSources {
    pub fn from_env() -> Self {
        Self {
            explicit_path: env::var("CONFIG_PATH").ok(),
            default_path: DEFAULT_CONFIG_PATH.to_string(),
            base_url_override: env::var("TRANSLATOR_API_URL").ok(),
        }
    }
}

pub async fn load() -> Result<Config> {
    load_with(ConfigSources::from_env()).await
}

pub async fn load_with(sources: ConfigSources) -> Result<Config> {
    let is_explicit = sources.explicit_path.is_some();
    let config_path = sources.explicit_path.unwrap_or(sources.default_path);

    let mut config = match load_from(&config_path).await {
        Ok(config) => config,
        Err(Error::Io(e)) if e.kind() == std::io::ErrorKind::NotFound && !is_explicit => {
            debug!("No {} found, using built-in defaults", config_path);
            Config::default()
        }
        Err(e) => return Err(e),
    };

    if let Some(base_url) = sources.base_url_override {
        debug!("API base URL overridden from environment");
        config.api.base_url = base_url;
    }

    validate(&config)?;
    Ok(config)
}

/// Checks that a log level string names a tracing level.
pub fn validate_log_level(level: &str) -> Result<()> {
    level
        .parse::<tracing_subscriber::filter::LevelFilter>()
        .map_err(|_| {
            Error::config(format!(
                "Invalid log level: '{}'. Valid levels: error, warn, info, debug, trace",
                level
            ))
        })?;
    Ok(())
}

pub async fn load_from(config_path: &str) -> Result<Config> {
    debug!("Loading configuration from: {}", config_path);

    let config_str = tokio::fs::read_to_string(config_path).await?;
    let config = parse(&config_str)?;
    validate(&config)?;

    Ok(config)
}

pub fn parse(config_str: &str) -> Result<Config> {
    // An empty document deserializes to unit, not to an empty mapping.
    if config_str.trim().is_empty() {
        return Ok(Config::default());
    }
    Ok(serde_yaml::from_str(config_str)?)
}

fn validate(config: &Config) -> Result<()> {
    let base_url = config.api.base_url.trim();
    if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
        return Err(Error::config(format!(
            "api.base_url must be an http(s) URL, got '{}'",
            config.api.base_url
        )));
    }
    Ok(())
}
