// src/config.rs

use crate::constants::*;
use crate::errors::{ChatError, ChatResult};
use serde::{Deserialize, Serialize};
use std::{env, fs, path::Path, path::PathBuf, time::Duration};

/// Which of the two configured addresses the client connects to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuntimeEnv {
    Development,
    #[default]
    Production,
}

impl RuntimeEnv {
    /// Only the exact name `development` selects development.
    pub fn from_name(name: &str) -> Self {
        if name.trim().eq_ignore_ascii_case("development") {
            RuntimeEnv::Development
        } else {
            RuntimeEnv::Production
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub environment: RuntimeEnv,
    pub ws_url_dev: Option<String>,
    pub ws_url_prod: Option<String>,
    pub log_level: String,
    pub tick_rate_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: RuntimeEnv::default(),
            ws_url_dev: None,
            ws_url_prod: None,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            tick_rate_ms: DEFAULT_TICK_RATE_MS,
        }
    }
}

impl Config {
    /// Builds the configuration from an optional JSON file and an environment
    /// lookup. Environment values win over the file.
    pub fn from_sources<F>(file: Option<&Path>, lookup: F) -> ChatResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match file {
            Some(path) if path.exists() => {
                let config_str = fs::read_to_string(path).map_err(|e| {
                    ChatError::config_error(format!(
                        "Failed to read config file {}: {}",
                        path.display(),
                        e
                    ))
                })?;
                serde_json::from_str::<Config>(&config_str)?
            }
            _ => Config::default(),
        };

        if let Some(name) = lookup(ENV_RUNTIME) {
            config.environment = RuntimeEnv::from_name(&name);
        }
        if let Some(url) = lookup(ENV_WS_URL_DEV) {
            config.ws_url_dev = Some(url);
        }
        if let Some(url) = lookup(ENV_WS_URL_PROD) {
            config.ws_url_prod = Some(url);
        }
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            config.log_level = level;
        }
        if let Some(rate) = lookup(ENV_TICK_RATE_MS) {
            config.tick_rate_ms = rate.trim().parse().map_err(|_| {
                ChatError::config_error(format!("{} must be a number, got {:?}", ENV_TICK_RATE_MS, rate))
            })?;
        }

        validate_config(&config)?;
        Ok(config)
    }

    /// The address for the active environment.
    pub fn ws_url(&self) -> ChatResult<&str> {
        let (url, var) = match self.environment {
            RuntimeEnv::Development => (self.ws_url_dev.as_deref(), ENV_WS_URL_DEV),
            RuntimeEnv::Production => (self.ws_url_prod.as_deref(), ENV_WS_URL_PROD),
        };

        let url = url
            .map(str::trim)
            .filter(|u| !u.is_empty())
            .ok_or_else(|| {
                ChatError::config_error(format!(
                    "No WebSocket address configured for {:?} (set {})",
                    self.environment, var
                ))
            })?;

        if !(url.starts_with("ws://") || url.starts_with("wss://")) {
            return Err(ChatError::config_error(format!(
                "WebSocket address must start with ws:// or wss://, got {}",
                url
            )));
        }

        Ok(url)
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }
}

/// Loads `.env`, the user config file and the process environment.
pub fn load_config() -> ChatResult<Config> {
    dotenv::dotenv().ok();
    let path = get_config_path();
    Config::from_sources(path.as_deref(), |key| env::var(key).ok())
}

fn get_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| {
        home.join(".config")
            .join(APP_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    })
}

fn validate_config(config: &Config) -> ChatResult<()> {
    if config.log_level.trim().is_empty() {
        return Err(ChatError::config_error("log_level must not be empty"));
    }

    if config.tick_rate_ms == 0 {
        return Err(ChatError::config_error("tick_rate_ms must be greater than 0"));
    }

    Ok(())
}
