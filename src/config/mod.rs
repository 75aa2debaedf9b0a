use crate::constants::{
    DEFAULT_BASE_RESOURCE_URL, DEFAULT_HTTP_TIMEOUT_SECONDS, DEFAULT_TRAINING_START_UTC, env_vars,
};
use crate::error::AppError;
use serde::Deserialize;
use std::fmt;
use std::path::Path;
use tokio::fs;

pub mod paths;
pub mod validation;

use paths::{get_config_path, get_log_dir_path};
use validation::validate_config;

/// OAuth1 credentials and endpoint for the Hattrick CHPP API.
///
/// Built once at startup and handed to [`crate::hattrick::HattrickClient`];
/// the client never reads the environment itself.
#[derive(Clone, Deserialize, PartialEq, Eq)]
pub struct HattrickConfig {
    #[serde(default)]
    pub consumer_key: String,
    #[serde(default)]
    pub consumer_secret: String,
    #[serde(default)]
    pub access_token: String,
    #[serde(default)]
    pub access_token_secret: String,
    /// Endpoint that relative paths are appended to, e.g.
    /// `https://chpp.hattrick.org/chppxml.ashx`.
    #[serde(default = "default_base_resource_url")]
    pub base_resource_url: String,
}

impl Default for HattrickConfig {
    fn default() -> Self {
        Self {
            consumer_key: String::new(),
            consumer_secret: String::new(),
            access_token: String::new(),
            access_token_secret: String::new(),
            base_resource_url: default_base_resource_url(),
        }
    }
}

impl fmt::Debug for HattrickConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HattrickConfig")
            .field("consumer_key", &self.consumer_key)
            .field("consumer_secret", &mask_secret(&self.consumer_secret))
            .field("access_token", &mask_secret(&self.access_token))
            .field("access_token_secret", &mask_secret(&self.access_token_secret))
            .field("base_resource_url", &self.base_resource_url)
            .finish()
    }
}

/// Configuration structure for the application.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub hattrick: HattrickConfig,
    /// Weekly training update time in UTC, `HH:MM:SS`.
    #[serde(default = "default_training_start")]
    pub training_start_utc: String,
    /// HTTP timeout in seconds for API requests. Defaults to 30 seconds if not specified.
    #[serde(default = "default_http_timeout")]
    pub http_timeout_seconds: u64,
    /// Path to the log file. If not specified, logs will be written to a default location.
    #[serde(default)]
    pub log_file_path: Option<String>,
}

fn default_base_resource_url() -> String {
    DEFAULT_BASE_RESOURCE_URL.to_string()
}

fn default_training_start() -> String {
    DEFAULT_TRAINING_START_UTC.to_string()
}

fn default_http_timeout() -> u64 {
    DEFAULT_HTTP_TIMEOUT_SECONDS
}

impl Default for Config {
    fn default() -> Self {
        Config {
            hattrick: HattrickConfig::default(),
            training_start_utc: default_training_start(),
            http_timeout_seconds: default_http_timeout(),
            log_file_path: None,
        }
    }
}

/// Shows the first four characters of a secret.
pub fn mask_secret(secret: &str) -> String {
    if secret.is_empty() {
        return String::new();
    }
    let visible: String = secret.chars().take(4).collect();
    format!("{visible}****")
}

impl Config {
    /// Loads configuration from the default config file location, then
    /// applies environment variable overrides and validates the result.
    ///
    /// A missing config file is not an error: the process environment alone
    /// can carry every setting.
    ///
    /// # Environment Variables
    /// - `CONSUMER_KEY`, `CONSUMER_SECRET` - OAuth consumer credentials
    /// - `OAUTH1_TOKEN`, `OAUTH1_TOKEN_SECRET` - OAuth access token
    /// - `BASE_RESOURCE_URL` - CHPP endpoint
    /// - `START_TIME_TRAINING_UTC` - training update time, `HH:MM:SS`
    /// - `HATTRICK_HTTP_TIMEOUT` - HTTP timeout in seconds
    /// - `HATTRICK_LOG_FILE` - log file path
    pub async fn load() -> Result<Self, AppError> {
        let config = Self::load_unvalidated().await?;
        config.validate()?;
        Ok(config)
    }

    /// Same as [`Config::load`] without the final validation, for callers
    /// that only need part of the settings (e.g. no credentials).
    pub async fn load_unvalidated() -> Result<Self, AppError> {
        let config_path = get_config_path();

        let mut config = if Path::new(&config_path).exists() {
            Self::load_from_path(&config_path).await?
        } else {
            Config::default()
        };

        config.apply_overrides(|name| std::env::var(name).ok());
        Ok(config)
    }

    /// Builds the configuration from defaults and the process environment only.
    pub fn from_env() -> Result<Self, AppError> {
        let mut config = Config::default();
        config.apply_overrides(|name| std::env::var(name).ok());
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a file path without env overrides or validation.
    pub async fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Overrides fields with values returned by `lookup` for each known
    /// environment variable name.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let targets = [
            (env_vars::CONSUMER_KEY, &mut self.hattrick.consumer_key),
            (env_vars::CONSUMER_SECRET, &mut self.hattrick.consumer_secret),
            (env_vars::ACCESS_TOKEN, &mut self.hattrick.access_token),
            (env_vars::ACCESS_TOKEN_SECRET, &mut self.hattrick.access_token_secret),
            (env_vars::BASE_RESOURCE_URL, &mut self.hattrick.base_resource_url),
            (env_vars::TRAINING_START_UTC, &mut self.training_start_utc),
        ];
        for (name, field) in targets {
            if let Some(value) = lookup(name) {
                *field = value;
            }
        }

        if let Some(log_file_path) = lookup(env_vars::LOG_FILE) {
            self.log_file_path = Some(log_file_path);
        }

        if let Some(timeout) = lookup(env_vars::HTTP_TIMEOUT).and_then(|s| s.parse::<u64>().ok()) {
            self.http_timeout_seconds = timeout;
        }
    }

    /// Validates the configuration settings
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(self)
    }

    pub fn get_config_path() -> String {
        paths::get_config_path()
    }

    pub fn get_log_dir_path() -> String {
        paths::get_log_dir_path()
    }

    /// Displays current configuration settings to stdout with secrets masked.
    pub fn display(&self) {
        let config_path = get_config_path();
        let log_dir = get_log_dir_path();
        let exists = Path::new(&config_path).exists();

        println!("\nCurrent Configuration");
        println!("────────────────────────────────────");
        println!("Config Location:");
        if exists {
            println!("{config_path}");
        } else {
            println!("{config_path} (not present, using environment)");
        }
        println!("────────────────────────────────────");
        println!("Base Resource URL:");
        println!("{}", self.hattrick.base_resource_url);
        println!("────────────────────────────────────");
        println!("Consumer Key:");
        println!("{}", self.hattrick.consumer_key);
        println!("Consumer Secret:");
        println!("{}", mask_secret(&self.hattrick.consumer_secret));
        println!("Access Token:");
        println!("{}", mask_secret(&self.hattrick.access_token));
        println!("Access Token Secret:");
        println!("{}", mask_secret(&self.hattrick.access_token_secret));
        println!("────────────────────────────────────");
        println!("Training Start (UTC):");
        println!("{}", self.training_start_utc);
        println!("────────────────────────────────────");
        println!("HTTP Timeout:");
        println!("{} seconds", self.http_timeout_seconds);
        println!("────────────────────────────────────");
        println!("Log File Location:");
        if let Some(custom_path) = &self.log_file_path {
            println!("{custom_path}");
        } else {
            println!("{log_dir}/hattrick_bridge.log");
            println!("(Default location)");
        }
    }
}
