use thiserror::Error;

/// Per-network failures raised by the fee-statistics fetcher. The
/// synchronizer isolates these: a failed network keeps its previous
/// statistics and never aborts the batch.
#[derive(Debug, Error)]
pub enum FeeFetchError {
    #[error("Fee statistics request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Fee statistics endpoint returned status {0}")]
    UnexpectedStatus(u16),

    #[error("Malformed fee statistics payload: {0}")]
    UnexpectedPayload(String),
}
