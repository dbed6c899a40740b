//! Per-transaction-type fee statistics payload.

use serde::{Deserialize, Serialize};

/// Fee guidance for a single transaction type, as fetched from a network's
/// node API. The wire and persisted form is `{ "type": 0, "fees": [...] }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionTypeFees {
    #[serde(rename = "type")]
    pub transaction_type: u32,
    pub fees: Vec<u64>,
}
