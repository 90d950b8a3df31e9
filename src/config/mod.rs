use std::env;

/// Dashboard configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    pub stats_api_url: String,
    pub request_timeout_secs: u64,
}

impl DashboardConfig {
    pub fn from_env() -> Result<Self, env::VarError> {
        Ok(Self {
            stats_api_url: env::var("STATS_API_URL")?,
            request_timeout_secs: env::var("STATS_REQUEST_TIMEOUT_SECS")
                .unwrap_or_else(|_| "30".to_string())
                .parse()
                .unwrap_or(30),
        })
    }
}
