//! Configuration module for chipcast-relay.
//!
//! Handles loading configuration from the TOML file and the X credentials
//! from environment variables.

pub mod file;

use crate::config::file::{FileConfig, NetworkSection};
use alloy_primitives::Address;
use chipcast_core::config::{NetworkConfig, StatusConfig};
use chipcast_core::events::NetworkTarget;
use chipcast_sdk::oauth::OAuthCredentials;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use url::Url;

pub const TWITTER_CONSUMER_KEY: &str = "TWITTER_CONSUMER_KEY";
pub const TWITTER_CONSUMER_SECRET: &str = "TWITTER_CONSUMER_SECRET";
pub const TWITTER_ACCESS_TOKEN_KEY: &str = "TWITTER_ACCESS_TOKEN_KEY";
pub const TWITTER_ACCESS_TOKEN_SECRET: &str = "TWITTER_ACCESS_TOKEN_SECRET";

/// Errors that can occur during configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("validation error: {0}")]
    ValidationError(String),

    #[error("{0} environment variable not set")]
    MissingCredential(&'static str),
}

/// Loaded configuration result containing all parts.
#[derive(Debug)]
pub struct LoadedConfig {
    pub status: StatusConfig,
    pub networks: Vec<NetworkConfig>,
}

/// Configuration loader that handles the complete loading process.
pub struct ConfigLoader {
    config_path: PathBuf,
}

impl ConfigLoader {
    /// Create a new config loader.
    pub fn new(config_path: impl AsRef<Path>) -> Self {
        Self {
            config_path: config_path.as_ref().to_path_buf(),
        }
    }

    /// Read, parse and validate the configuration file.
    pub fn load(&self) -> Result<LoadedConfig, ConfigError> {
        let config_content = std::fs::read_to_string(&self.config_path)?;
        load_from_str(&config_content)
    }
}

/// Parse and validate configuration from TOML text.
pub fn load_from_str(content: &str) -> Result<LoadedConfig, ConfigError> {
    let file_config: FileConfig = toml::from_str(content)?;
    build_loaded_config(file_config)
}

fn build_loaded_config(file_config: FileConfig) -> Result<LoadedConfig, ConfigError> {
    if file_config.networks.is_empty() {
        return Err(ConfigError::ValidationError(
            "at least one [[networks]] entry is required".to_string(),
        ));
    }

    let mut labels = HashSet::new();
    let mut networks = Vec::with_capacity(file_config.networks.len());
    for section in file_config.networks {
        if !labels.insert(section.label.clone()) {
            return Err(ConfigError::ValidationError(format!(
                "duplicate network label {:?}",
                section.label
            )));
        }
        networks.push(convert_network(section)?);
    }

    Ok(LoadedConfig {
        status: StatusConfig {
            hashtags: file_config.status.hashtags,
        },
        networks,
    })
}

fn convert_network(n: NetworkSection) -> Result<NetworkConfig, ConfigError> {
    let invalid = |what: &str, detail: String| {
        ConfigError::ValidationError(format!("network {:?}: {what}: {detail}", n.label))
    };

    if n.label.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "network label must not be empty".to_string(),
        ));
    }
    let rpc_url = Url::parse(&n.rpc_url).map_err(|e| invalid("invalid rpc_url", e.to_string()))?;
    let contract_address = n
        .contract_address
        .parse::<Address>()
        .map_err(|e| invalid("invalid contract_address", e.to_string()))?;
    Url::parse(&n.explorer_tx_url)
        .map_err(|e| invalid("invalid explorer_tx_url", e.to_string()))?;
    if n.poll_interval_secs == 0 {
        return Err(invalid("poll_interval_secs", "must be positive".to_string()));
    }
    if n.max_block_range == 0 {
        return Err(invalid("max_block_range", "must be positive".to_string()));
    }

    let target = if n.secondary {
        NetworkTarget::secondary(n.label.clone())
    } else {
        NetworkTarget::primary(n.label.clone())
    };

    Ok(NetworkConfig {
        target,
        rpc_url,
        contract_address,
        explorer_tx_url: n.explorer_tx_url,
        poll_interval: Duration::from_secs(n.poll_interval_secs),
        max_block_range: n.max_block_range,
    })
}

/// Read the X credentials from the environment.
pub fn get_twitter_credentials() -> Result<OAuthCredentials, ConfigError> {
    credentials_from(|key| std::env::var(key).ok())
}

fn credentials_from(lookup: impl Fn(&str) -> Option<String>) -> Result<OAuthCredentials, ConfigError> {
    let require = |key: &'static str| {
        lookup(key)
            .filter(|value| !value.is_empty())
            .ok_or(ConfigError::MissingCredential(key))
    };

    Ok(OAuthCredentials {
        consumer_key: require(TWITTER_CONSUMER_KEY)?,
        consumer_secret: require(TWITTER_CONSUMER_SECRET)?,
        access_token: require(TWITTER_ACCESS_TOKEN_KEY)?,
        access_token_secret: require(TWITTER_ACCESS_TOKEN_SECRET)?,
    })
}
