use crate::model::ConfigError;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ReplyDelayConfig {
    pub min: u64,
    pub max: u64,
}

impl Default for ReplyDelayConfig {
    fn default() -> Self {
        Self { min: 600, max: 1200 }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub assistant_name: String,
    /// Rule catalog JSON; the built-in catalog is used when unset.
    pub catalog_path: Option<String>,
    pub reply_delay_ms: ReplyDelayConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            assistant_name: "Tour Assistant".to_string(),
            catalog_path: None,
            reply_delay_ms: ReplyDelayConfig::default(),
        }
    }
}

pub fn parse_config(content: &str) -> Result<AppConfig, ConfigError> {
    let config: AppConfig = serde_json::from_str(content)?;
    let delay = config.reply_delay_ms;
    if delay.min > delay.max {
        return Err(ConfigError::InvalidDelay { min: delay.min, max: delay.max });
    }
    Ok(config)
}

/// Reads the config file. A missing file means defaults.
pub fn load_config(path: &str) -> Result<AppConfig, ConfigError> {
    if !Path::new(path).exists() {
        info!("No config at {}, using defaults", path);
        return Ok(AppConfig::default());
    }
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_string(),
        source,
    })?;
    parse_config(&content)
}
