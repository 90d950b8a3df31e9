//! Error types for the statistics fetch path.
//!
//! Failures never escape the dashboard instance: the fetch binding converts
//! any [`StatsError`] into a user-facing notification plus a diagnostic log
//! entry, and the instance stays interactive.

/// Error raised by a statistics source.
#[derive(Debug, thiserror::Error)]
pub enum StatsError {
    #[error("Stats request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Stats payload decode failed: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Stats service error: {0}")]
    Service(String),
}

impl StatsError {
    /// Check if this error came from the HTTP transport.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}
