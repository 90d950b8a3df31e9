//! Statistics source: the analytics service seam and its HTTP client.

use std::time::Duration;

use reqwest::Client;

use crate::config::DashboardConfig;
use crate::errors::StatsError;
use crate::models::contract::ContractSummary;
use crate::models::stats::ContractStats;

/// External statistics/query service consumed by the dashboard.
///
/// Implementations are infallible to construct and fallible to call; the
/// dashboard issues one `contract_stats` call per mount.
#[allow(async_fn_in_trait)]
pub trait StatsSource {
    /// Fetch the aggregated contract statistics.
    async fn contract_stats(&self) -> Result<ContractStats, StatsError>;

    /// Fetch the raw contract list. Exposed for host components; the core
    /// dashboard flow does not consume it.
    async fn contracts(&self) -> Result<Vec<ContractSummary>, StatsError>;
}

/// Reqwest-backed [`StatsSource`] against the analytics service JSON API.
#[derive(Debug, Clone)]
pub struct HttpStatsSource {
    client: Client,
    base_url: String,
}

impl HttpStatsSource {
    pub fn new(config: &DashboardConfig) -> Result<Self, StatsError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;
        Ok(Self {
            client,
            base_url: config.stats_api_url.trim_end_matches('/').to_string(),
        })
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T, StatsError> {
        let url = format!("{}{}", self.base_url, path);
        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(StatsError::Service(format!(
                "{} returned {}",
                path,
                response.status()
            )));
        }
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

impl StatsSource for HttpStatsSource {
    async fn contract_stats(&self) -> Result<ContractStats, StatsError> {
        self.get_json("/contracts/stats").await
    }

    async fn contracts(&self) -> Result<Vec<ContractSummary>, StatsError> {
        self.get_json("/contracts").await
    }
}
