//! Contract summary records for the recent-contracts feed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One entry in the recent-contracts feed.
///
/// Pass-through data for the host renderer: the view model only counts these,
/// it never inspects individual fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContractSummary {
    pub id: String,
    pub name: String,
    pub status: Option<String>,
    pub risk_score: Option<f64>,
    pub created_date: Option<DateTime<Utc>>,
}
