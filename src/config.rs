use crate::error::ConfigError;
use anyhow::{anyhow, Result};
use reqwest::Url;
use serde::Deserializer;
use serde_derive::Deserialize;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Deserialize, Debug)]
pub struct AppConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl AppConfig {
    pub fn log_level(&self) -> tracing::Level {
        tracing::Level::from_str(self.log_level.as_str()).unwrap_or(tracing::Level::INFO)
    }
}

pub(crate) fn load_app_config() -> Result<AppConfig> {
    match envy::from_env::<AppConfig>() {
        Ok(config) => Ok(config),
        Err(err) => {
            Err(anyhow!(ConfigError::env_parse(err)).context("Failed to load AppConfig"))
        }
    }
}

fn default_uri() -> String {
    "http://127.0.0.1:8181".to_string()
}

fn default_timeout() -> Duration {
    Duration::from_secs(5)
}

// Accepts humantime durations such as "5s", "1500ms" or "1m".
fn deserialize_duration<'de, D>(deserializer: D) -> std::result::Result<Duration, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = <String as serde::Deserialize>::deserialize(deserializer)?;
    humantime::parse_duration(raw.trim()).map_err(serde::de::Error::custom)
}

#[derive(Deserialize)]
pub struct TautulliConfig {
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_uri")]
    pub uri: String,
    #[serde(default)]
    pub ssl_verify: bool,
    #[serde(
        default = "default_timeout",
        deserialize_with = "deserialize_duration"
    )]
    pub timeout: Duration,
}

impl TautulliConfig {
    /// Builds the `get_activity` endpoint URL, including the API key.
    pub fn activity_url(&self) -> Result<Url, ConfigError> {
        let base = format!("{}/api/v2", self.uri.trim_end_matches('/'));
        let mut url =
            Url::parse(&base).map_err(|e| ConfigError::invalid("TAUTULLI_URI", e.to_string()))?;
        url.query_pairs_mut()
            .append_pair("apikey", &self.api_key)
            .append_pair("cmd", "get_activity");
        Ok(url)
    }
}

// Keeps the API key out of logs.
impl fmt::Debug for TautulliConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TautulliConfig")
            .field("api_key", &"<redacted>")
            .field("uri", &self.uri)
            .field("ssl_verify", &self.ssl_verify)
            .field("timeout", &self.timeout)
            .finish()
    }
}

pub(crate) fn load_tautulli_config() -> Result<TautulliConfig> {
    let config = match envy::prefixed("TAUTULLI_").from_env::<TautulliConfig>() {
        Ok(config) => config,
        Err(err) => {
            return Err(anyhow!(ConfigError::env_parse(err)).context("Failed to load TautulliConfig"))
        }
    };
    if config.api_key.trim().is_empty() {
        return Err(anyhow!(ConfigError::missing("TAUTULLI_API_KEY")));
    }
    Ok(config)
}

fn default_serve_port() -> u16 {
    9487
}

#[derive(Deserialize, Debug)]
pub struct ServerConfig {
    #[serde(default = "default_serve_port")]
    pub serve_port: u16,
}

pub fn load_server_config() -> Result<ServerConfig> {
    match envy::from_env::<ServerConfig>() {
        Ok(config) => Ok(config),
        Err(err) => {
            Err(anyhow!(ConfigError::env_parse(err)).context("Failed to load ServerConfig"))
        }
    }
}
