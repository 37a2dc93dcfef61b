use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::error::{PostboxError, Result};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_API_BASE_URL: &str = "https://jsonplaceholder.typicode.com";
const DEFAULT_DEBOUNCE_MS: u64 = 500;

/// Configuration for postbox, stored in config.json
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PostboxConfig {
    /// Base URL of the remote posts collection
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Quiescence window for debounced search, in milliseconds
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_debounce_ms() -> u64 {
    DEFAULT_DEBOUNCE_MS
}

impl Default for PostboxConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            debounce_ms: DEFAULT_DEBOUNCE_MS,
        }
    }
}

impl PostboxConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(PostboxError::Io)?;
        let config: PostboxConfig =
            serde_json::from_str(&content).map_err(PostboxError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(PostboxError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(PostboxError::Serialization)?;
        fs::write(config_path, content).map_err(PostboxError::Io)?;
        Ok(())
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    /// Set the base URL (normalizes away a trailing slash)
    pub fn set_api_base_url(&mut self, url: &str) {
        self.api_base_url = url.trim_end_matches('/').to_string();
    }

    pub fn set_debounce_ms(&mut self, ms: u64) {
        self.debounce_ms = ms;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = PostboxConfig::default();
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.debounce(), Duration::from_millis(500));
    }

    #[test]
    fn set_base_url_strips_trailing_slash() {
        let mut config = PostboxConfig::default();
        config.set_api_base_url("http://localhost:3000/");
        assert_eq!(config.api_base_url, "http://localhost:3000");
    }

    #[test]
    fn load_missing_config_gives_defaults() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = PostboxConfig::load(temp_dir.path()).unwrap();
        assert_eq!(config, PostboxConfig::default());
    }

    #[test]
    fn save_and_load_roundtrip() {
        let temp_dir = tempfile::tempdir().unwrap();

        let mut config = PostboxConfig::default();
        config.set_api_base_url("http://localhost:3000");
        config.set_debounce_ms(250);
        config.save(temp_dir.path()).unwrap();

        let loaded = PostboxConfig::load(temp_dir.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn partial_config_fills_in_defaults() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(
            temp_dir.path().join(CONFIG_FILENAME),
            r#"{"api_base_url": "http://localhost:3000"}"#,
        )
        .unwrap();

        let config = PostboxConfig::load(temp_dir.path()).unwrap();
        assert_eq!(config.api_base_url, "http://localhost:3000");
        assert_eq!(config.debounce_ms, DEFAULT_DEBOUNCE_MS);
    }
}
