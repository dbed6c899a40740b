//! Fee-statistics synchronization.
//!
//! The synchronizer refreshes per-network fee data against the registry's
//! current set. Fetches run concurrently over an immutable snapshot and
//! each network's outcome is tracked explicitly; the refreshed snapshot is
//! committed back in a single atomic replacement, so readers never observe
//! a half-refreshed set.

use std::sync::Arc;
use std::time::Duration;

use futures::future::join_all;
use log::{debug, warn};

use crate::registry::NetworkRegistry;
use crate::services::FeeStatisticsFetcher;

/// Outcome of one network's refresh attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RefreshOutcome {
    Updated,
    /// Fetch succeeded but returned no statistics; previous data stands.
    Unchanged,
    /// Fetch failed; previous data stands.
    Failed,
}

/// Per-batch refresh report, keyed by network name.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct RefreshSummary {
    pub updated: Vec<String>,
    pub unchanged: Vec<String>,
    pub failed: Vec<String>,
}

pub struct FeeSynchronizer {
    registry: Arc<NetworkRegistry>,
    fetcher: Arc<dyn FeeStatisticsFetcher>,
}

impl FeeSynchronizer {
    pub fn new(registry: Arc<NetworkRegistry>, fetcher: Arc<dyn FeeStatisticsFetcher>) -> Self {
        Self { registry, fetcher }
    }

    /// Refreshes fee statistics for every known network.
    ///
    /// One network's failure never aborts the batch: that network keeps its
    /// last known-good statistics. The whole refreshed set is committed in
    /// one replacement after all fetches settle.
    pub async fn refresh_all(&self) -> RefreshSummary {
        let mut snapshot = self.registry.all().await;

        let fetches = snapshot.iter().map(|network| {
            let fetcher = Arc::clone(&self.fetcher);
            let server = network.server.clone();
            let api_version = network.api_version;
            async move { fetcher.fetch_fee_statistics(&server, api_version).await }
        });
        let results = join_all(fetches).await;

        let mut summary = RefreshSummary::default();
        for (network, result) in snapshot.iter_mut().zip(results) {
            let outcome = match result {
                Ok(statistics) if !statistics.is_empty() => {
                    network.fee_statistics = statistics;
                    RefreshOutcome::Updated
                }
                Ok(_) => RefreshOutcome::Unchanged,
                Err(e) => {
                    warn!(
                        "fee statistics refresh failed for {}: {}",
                        network.name, e
                    );
                    RefreshOutcome::Failed
                }
            };
            let bucket = match outcome {
                RefreshOutcome::Updated => &mut summary.updated,
                RefreshOutcome::Unchanged => &mut summary.unchanged,
                RefreshOutcome::Failed => &mut summary.failed,
            };
            bucket.push(network.name.clone());
        }

        self.registry.replace_all(snapshot).await;
        summary
    }

    /// Periodic refresh loop. Ticks immediately, then every `period`; runs
    /// until the owning task is dropped or aborted.
    pub async fn run(&self, period: Duration) {
        let mut ticker = tokio::time::interval(period);
        loop {
            ticker.tick().await;
            let summary = self.refresh_all().await;
            debug!(
                "fee refresh tick: {} updated, {} unchanged, {} failed",
                summary.updated.len(),
                summary.unchanged.len(),
                summary.failed.len()
            );
        }
    }
}
