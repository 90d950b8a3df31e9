//! Statistics payload shapes as produced by the analytics backend.

use serde::{Deserialize, Serialize};

use crate::models::contract::ContractSummary;

/// Aggregated contract statistics for the dashboard overview.
///
/// The backend may send a partial payload; every field defaults, so a missing
/// value deserializes to zero/empty rather than to an absent state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContractStats {
    pub total_contracts: u64,
    pub analyzed_contracts: u64,
    pub pending_contracts: u64,
    pub high_risk_clauses: u64,
    pub average_risk_score: f64,
    pub recent_contracts: Vec<ContractSummary>,
    pub risk_distribution: Vec<RiskBucket>,
}

/// One risk category's magnitude as supplied by the backend.
///
/// Zero-value buckets are legitimate and are never filtered downstream.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RiskBucket {
    pub label: String,
    pub value: f64,
}

/// Chart-ready point, a 1:1 structural projection of [`RiskBucket`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskSeriesPoint {
    pub label: String,
    pub value: f64,
}
