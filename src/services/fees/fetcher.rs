//! Fee-statistics fetching.
//!
//! This module provides the remote-fetch boundary for per-network fee
//! guidance and its HTTP implementation against the node API. v2 nodes
//! expose per-transaction-type statistics; v1 nodes only publish the static
//! fee table, which is mapped onto the same shape.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use crate::constants::{
    DEFAULT_FEE_STATISTICS_DAYS, DEFAULT_HTTP_CLIENT_CONNECT_TIMEOUT_SECONDS,
    DEFAULT_HTTP_CLIENT_TIMEOUT_SECONDS, NODE_FEES_PATH_V1, NODE_FEES_PATH_V2,
};
use crate::models::{ApiVersion, FeeFetchError, TransactionTypeFees};

#[cfg(test)]
use mockall::automock;

/// Named fee fields of the v1 fee table, in transaction-type order.
const V1_TRANSACTION_TYPES: [(&str, u32); 5] = [
    ("send", 0),
    ("secondsignature", 1),
    ("delegate", 2),
    ("vote", 3),
    ("multisignature", 4),
];

#[cfg_attr(test, automock)]
#[async_trait]
pub trait FeeStatisticsFetcher: Send + Sync {
    /// Fetches the current fee statistics from a network's node.
    async fn fetch_fee_statistics(
        &self,
        server: &str,
        api_version: ApiVersion,
    ) -> Result<Vec<TransactionTypeFees>, FeeFetchError>;
}

#[derive(Debug, Deserialize)]
struct V2FeesResponse {
    data: Vec<TransactionTypeFees>,
}

#[derive(Debug, Deserialize)]
struct V1FeesResponse {
    fees: HashMap<String, u64>,
}

#[derive(Debug, Clone)]
pub struct HttpFeeStatisticsFetcher {
    client: reqwest::Client,
    statistics_days: u32,
}

impl HttpFeeStatisticsFetcher {
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(
                DEFAULT_HTTP_CLIENT_CONNECT_TIMEOUT_SECONDS,
            ))
            .timeout(Duration::from_secs(DEFAULT_HTTP_CLIENT_TIMEOUT_SECONDS))
            .build()
            .expect("Failed to build fee statistics HTTP client");
        Self {
            client,
            statistics_days: DEFAULT_FEE_STATISTICS_DAYS,
        }
    }

    async fn fetch_body(&self, url: &str) -> Result<String, FeeFetchError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FeeFetchError::UnexpectedStatus(status.as_u16()));
        }
        Ok(response.text().await?)
    }

    async fn fetch_v2(&self, base: &str) -> Result<Vec<TransactionTypeFees>, FeeFetchError> {
        let url = format!("{}/{}?days={}", base, NODE_FEES_PATH_V2, self.statistics_days);
        let body = self.fetch_body(&url).await?;
        let parsed: V2FeesResponse = serde_json::from_str(&body)
            .map_err(|e| FeeFetchError::UnexpectedPayload(e.to_string()))?;
        Ok(parsed.data)
    }

    async fn fetch_v1(&self, base: &str) -> Result<Vec<TransactionTypeFees>, FeeFetchError> {
        let url = format!("{}/{}", base, NODE_FEES_PATH_V1);
        let body = self.fetch_body(&url).await?;
        let parsed: V1FeesResponse = serde_json::from_str(&body)
            .map_err(|e| FeeFetchError::UnexpectedPayload(e.to_string()))?;

        let statistics = V1_TRANSACTION_TYPES
            .iter()
            .filter_map(|(field, transaction_type)| {
                parsed.fees.get(*field).map(|fee| TransactionTypeFees {
                    transaction_type: *transaction_type,
                    fees: vec![*fee],
                })
            })
            .collect();
        Ok(statistics)
    }
}

impl Default for HttpFeeStatisticsFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FeeStatisticsFetcher for HttpFeeStatisticsFetcher {
    async fn fetch_fee_statistics(
        &self,
        server: &str,
        api_version: ApiVersion,
    ) -> Result<Vec<TransactionTypeFees>, FeeFetchError> {
        let base = server.trim_end_matches('/');
        match api_version {
            ApiVersion::V2 => self.fetch_v2(base).await,
            ApiVersion::V1 => self.fetch_v1(base).await,
        }
    }
}
