//! Configuration loading for Spacebio.
//! Reads spacebio.toml from the current directory or the path in SPACEBIO_CONFIG,
//! then applies per-environment overrides from the process environment.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub endpoints: EndpointConfig,
    #[serde(default)]
    pub loader: LoaderConfig,
    #[serde(default)]
    pub dashboard: DashboardConfig,
    #[serde(default)]
    pub qa: QaConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String { "127.0.0.1".to_string() }
fn default_port() -> u16    { 3001 }

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: default_host(), port: default_port() }
    }
}

/// Base URLs of the two external services.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointConfig {
    #[serde(default = "default_base_url")]
    pub articles_base_url: String,
    #[serde(default = "default_base_url")]
    pub ask_base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_base_url()     -> String { "http://localhost:80/api".to_string() }
fn default_timeout_secs() -> u64    { 30 }

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            articles_base_url: default_base_url(),
            ask_base_url: default_base_url(),
            request_timeout_secs: default_timeout_secs(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoaderConfig {
    #[serde(default = "default_page_size")]
    pub page_size: u32,
    /// Seed for the fallback generator. Unset means a fresh seed per load.
    #[serde(default)]
    pub fallback_seed: Option<u64>,
}

fn default_page_size() -> u32 { 100 }

/// Largest page the articles endpoint will serve.
pub const MAX_PAGE_SIZE: u32 = 100;

impl Default for LoaderConfig {
    fn default() -> Self {
        Self { page_size: default_page_size(), fallback_seed: None }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default = "default_explore_limit")]
    pub explore_limit: usize,
    #[serde(default = "default_top_topics")]
    pub top_topics: usize,
}

fn default_explore_limit() -> usize { 50 }
fn default_top_topics()    -> usize { 6 }

impl Default for DashboardConfig {
    fn default() -> Self {
        Self { explore_limit: default_explore_limit(), top_topics: default_top_topics() }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QaConfig {
    #[serde(default = "default_top_k")]
    pub default_top_k: u32,
    #[serde(default = "default_max_top_k")]
    pub max_top_k: u32,
}

fn default_top_k()     -> u32 { 5 }
fn default_max_top_k() -> u32 { 20 }

impl Default for QaConfig {
    fn default() -> Self {
        Self { default_top_k: default_top_k(), max_top_k: default_max_top_k() }
    }
}

mod tests;

impl Config {
    /// Load configuration from spacebio.toml.
    /// Checks SPACEBIO_CONFIG env var first, then current directory.
    /// A missing file is not an error: every field has a default.
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var("SPACEBIO_CONFIG")
            .unwrap_or_else(|_| "spacebio.toml".to_string());

        let mut config = if Path::new(&path).exists() {
            let content = std::fs::read_to_string(&path)
                .map_err(|source| ConfigError::Io { path: path.clone(), source })?;
            Self::from_toml(&content)?
        } else {
            Self::default()
        };

        config.apply_env_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Applies SPACEBIO_ARTICLES_URL, SPACEBIO_ASK_URL and SPACEBIO_PORT.
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("SPACEBIO_ARTICLES_URL") {
            self.endpoints.articles_base_url = url;
        }
        if let Some(url) = lookup("SPACEBIO_ASK_URL") {
            self.endpoints.ask_base_url = url;
        }
        if let Some(port) = lookup("SPACEBIO_PORT") {
            self.server.port = port
                .parse()
                .map_err(|_| ConfigError::Invalid(format!("SPACEBIO_PORT is not a port: {}", port)))?;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("endpoints.articles_base_url", &self.endpoints.articles_base_url),
            ("endpoints.ask_base_url", &self.endpoints.ask_base_url),
        ] {
            let parsed = url::Url::parse(value)
                .map_err(|e| ConfigError::Invalid(format!("{} = {:?}: {}", name, value, e)))?;
            if !matches!(parsed.scheme(), "http" | "https") {
                return Err(ConfigError::Invalid(format!("{} must be http(s): {}", name, value)));
            }
        }

        if self.loader.page_size == 0 || self.loader.page_size > MAX_PAGE_SIZE {
            return Err(ConfigError::Invalid(format!(
                "loader.page_size must be within 1..={}, got {}",
                MAX_PAGE_SIZE, self.loader.page_size
            )));
        }

        if self.qa.max_top_k == 0 || self.qa.default_top_k == 0 || self.qa.default_top_k > self.qa.max_top_k {
            return Err(ConfigError::Invalid(format!(
                "qa.default_top_k ({}) must be between 1 and qa.max_top_k ({})",
                self.qa.default_top_k, self.qa.max_top_k
            )));
        }

        Ok(())
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
