//! Network configuration.
//!
//! The bundled built-in network list ships with the application and is
//! immutable at runtime. Deployments can replace it with a JSON networks
//! file; records are validated before any of them reach the registry.

use std::collections::HashSet;
use std::fs;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{ApiVersion, NetworkModel};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required field: {0}")]
    MissingField(String),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Duplicate network name: {0}")]
    DuplicateName(String),
    #[error("Invalid network {name}: {reason}")]
    InvalidNetwork { name: String, reason: String },
}

/// A single network entry in a networks file.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NetworkFileConfig {
    pub name: String,
    pub symbol: String,
    pub token: String,
    pub server: String,
    pub api_version: ApiVersion,
}

impl From<NetworkFileConfig> for NetworkModel {
    fn from(config: NetworkFileConfig) -> Self {
        NetworkModel {
            id: None,
            name: config.name,
            symbol: config.symbol,
            token: config.token,
            server: config.server,
            api_version: config.api_version,
            fee_statistics: Vec::new(),
            is_custom: false,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct NetworksFileConfig {
    pub networks: Vec<NetworkFileConfig>,
}

impl NetworksFileConfig {
    fn validate_name_uniqueness(networks: &[NetworkFileConfig]) -> Result<(), ConfigError> {
        let mut seen_names = HashSet::new();
        for network in networks {
            if !seen_names.insert(&network.name) {
                return Err(ConfigError::DuplicateName(network.name.clone()));
            }
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.networks.is_empty() {
            return Err(ConfigError::MissingField("networks".into()));
        }
        Self::validate_name_uniqueness(&self.networks)?;

        for network in &self.networks {
            let model = NetworkModel::from(network.clone());
            model.validate().map_err(|e| ConfigError::InvalidNetwork {
                name: network.name.clone(),
                reason: e.to_string(),
            })?;
        }
        Ok(())
    }
}

/// Loads and validates a networks file, returning the built-in records it
/// defines.
pub fn load_networks_file(path: &str) -> Result<Vec<NetworkModel>, ConfigError> {
    let contents = fs::read_to_string(path)?;
    let config: NetworksFileConfig = serde_json::from_str(&contents)?;
    config.validate()?;
    Ok(config.networks.into_iter().map(NetworkModel::from).collect())
}

static BUNDLED_NETWORKS: Lazy<Vec<NetworkModel>> = Lazy::new(|| {
    vec![
        NetworkModel {
            id: None,
            name: "ark.mainnet".into(),
            symbol: "\u{466}".into(),
            token: "ARK".into(),
            server: "https://wallet.ark.io/api".into(),
            api_version: ApiVersion::V2,
            fee_statistics: Vec::new(),
            is_custom: false,
        },
        NetworkModel {
            id: None,
            name: "ark.devnet".into(),
            symbol: "D\u{466}".into(),
            token: "DARK".into(),
            server: "https://dwallet.ark.io/api".into(),
            api_version: ApiVersion::V2,
            fee_statistics: Vec::new(),
            is_custom: false,
        },
    ]
});

/// The network definitions shipped with the application.
pub fn bundled_networks() -> Vec<NetworkModel> {
    BUNDLED_NETWORKS.clone()
}
