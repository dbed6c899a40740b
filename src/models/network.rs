//! Network record model.
//!
//! A [`NetworkModel`] describes a single blockchain network known to the
//! wallet: either one of the bundled built-in definitions or a user-added
//! custom network. Records are serialized with the wallet's persisted JSON
//! field names (camelCase).

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::MAX_NETWORK_ID_LENGTH;
use crate::models::{NetworkError, TransactionTypeFees};

/// Node API version of a network. Fee-statistics detail is a v2-only
/// capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum ApiVersion {
    V1,
    V2,
}

impl TryFrom<u8> for ApiVersion {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(ApiVersion::V1),
            2 => Ok(ApiVersion::V2),
            other => Err(format!("Unsupported api version: {}", other)),
        }
    }
}

impl From<ApiVersion> for u8 {
    fn from(value: ApiVersion) -> Self {
        match value {
            ApiVersion::V1 => 1,
            ApiVersion::V2 => 2,
        }
    }
}

impl std::fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "v{}", u8::from(*self))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkModel {
    /// Stable identifier. Required and unique for custom networks; built-in
    /// networks are identified by `name`/`symbol` and carry no id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Display name, unique across the registry.
    pub name: String,
    pub symbol: String,
    pub token: String,
    /// Base URL of the network's node API.
    pub server: String,
    pub api_version: ApiVersion,
    /// One entry per transaction type. Empty until the first successful
    /// fee-statistics refresh.
    #[serde(default)]
    pub fee_statistics: Vec<TransactionTypeFees>,
    #[serde(default)]
    pub is_custom: bool,
}

impl NetworkModel {
    /// Creates a custom network record with a generated id and no fee
    /// statistics yet.
    pub fn new_custom(
        name: impl Into<String>,
        symbol: impl Into<String>,
        token: impl Into<String>,
        server: impl Into<String>,
        api_version: ApiVersion,
    ) -> Self {
        Self {
            id: Some(Uuid::new_v4().to_string()),
            name: name.into(),
            symbol: symbol.into(),
            token: token.into(),
            server: server.into(),
            api_version,
            fee_statistics: Vec::new(),
            is_custom: true,
        }
    }

    /// Returns the fee list recorded for `transaction_type`, if any.
    pub fn fee_statistics_for(&self, transaction_type: u32) -> Option<&[u64]> {
        self.fee_statistics
            .iter()
            .find(|entry| entry.transaction_type == transaction_type)
            .map(|entry| entry.fees.as_slice())
    }

    pub fn validate(&self) -> Result<(), NetworkError> {
        if self.name.is_empty() {
            return Err(NetworkError::InvalidNetwork("network name".into()));
        }
        if self.symbol.is_empty() {
            return Err(NetworkError::InvalidNetwork("network symbol".into()));
        }
        if self.token.is_empty() {
            return Err(NetworkError::InvalidNetwork("network token".into()));
        }
        reqwest::Url::parse(&self.server).map_err(|_| {
            NetworkError::InvalidNetwork(format!("invalid server url: {}", self.server))
        })?;
        if self.is_custom {
            match &self.id {
                None => return Err(NetworkError::InvalidNetwork("custom network id".into())),
                Some(id) if id.is_empty() => {
                    return Err(NetworkError::InvalidNetwork("custom network id".into()));
                }
                Some(id) if id.len() > MAX_NETWORK_ID_LENGTH => {
                    return Err(NetworkError::InvalidNetwork(format!(
                        "network id exceeds {} characters: {}",
                        MAX_NETWORK_ID_LENGTH, id
                    )));
                }
                Some(_) => {}
            }
        }
        Ok(())
    }
}
