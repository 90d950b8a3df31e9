//! Reactive view state backing the dashboard display.
//!
//! [`ViewStore`] is the single mutation path: one store per dashboard
//! instance, created at mount and dropped at teardown. Every mutation is
//! published through a [`watch`] channel so the render boundary observes
//! state changes without manual invalidation.

use tokio::sync::watch;

use crate::models::contract::ContractSummary;
use crate::models::stats::{ContractStats, RiskSeriesPoint};
use crate::services::chart;

/// Mutable display state consumed by the host renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pub is_loading: bool,
    pub selected_tab: String,
    pub contract_stats: ContractStats,
    pub recent_contracts: Vec<ContractSummary>,
    pub risk_chart_data: Vec<RiskSeriesPoint>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            is_loading: true,
            selected_tab: "overview".to_string(),
            contract_stats: ContractStats::default(),
            recent_contracts: Vec::new(),
            risk_chart_data: Vec::new(),
        }
    }
}

impl ViewState {
    pub fn total_contracts(&self) -> u64 {
        self.contract_stats.total_contracts
    }

    pub fn analyzed_contracts(&self) -> u64 {
        self.contract_stats.analyzed_contracts
    }

    pub fn pending_contracts(&self) -> u64 {
        self.contract_stats.pending_contracts
    }

    pub fn high_risk_clauses(&self) -> u64 {
        self.contract_stats.high_risk_clauses
    }

    pub fn average_risk_score(&self) -> f64 {
        self.contract_stats.average_risk_score
    }

    pub fn has_recent_contracts(&self) -> bool {
        !self.recent_contracts.is_empty()
    }

    pub fn has_risk_data(&self) -> bool {
        !self.risk_chart_data.is_empty()
    }
}

/// Single-owner reactive wrapper around [`ViewState`].
#[derive(Debug)]
pub struct ViewStore {
    tx: watch::Sender<ViewState>,
}

impl ViewStore {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(ViewState::default());
        Self { tx }
    }

    /// Current state, cloned out of the channel.
    pub fn snapshot(&self) -> ViewState {
        self.tx.borrow().clone()
    }

    /// Subscribe at the render boundary. The receiver observes every
    /// mutation applied through this store.
    pub fn subscribe(&self) -> watch::Receiver<ViewState> {
        self.tx.subscribe()
    }

    /// Success path of a statistics fetch: store the snapshot, mirror the
    /// recent-contracts feed, derive the chart series and clear the loading
    /// flag. Missing payload sequences arrive already defaulted to empty.
    pub fn apply_stats(&self, payload: ContractStats) {
        self.tx.send_modify(|state| {
            state.recent_contracts = payload.recent_contracts.clone();
            state.risk_chart_data = chart::risk_series(&payload.risk_distribution);
            state.contract_stats = payload;
            state.is_loading = false;
        });
    }

    pub fn set_loading(&self, loading: bool) {
        self.tx.send_modify(|state| state.is_loading = loading);
    }

    /// Store the tab value verbatim. No closed set of tabs is enforced;
    /// unrecognized values are accepted and kept.
    pub fn select_tab(&self, tab: impl Into<String>) {
        let tab = tab.into();
        self.tx.send_modify(|state| state.selected_tab = tab);
    }
}

impl Default for ViewStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::stats::RiskBucket;

    #[test]
    fn initial_state_is_loading_on_overview() {
        let state = ViewState::default();
        assert!(state.is_loading);
        assert_eq!(state.selected_tab, "overview");
        assert!(state.recent_contracts.is_empty());
        assert!(state.risk_chart_data.is_empty());
    }

    #[test]
    fn numeric_accessors_default_to_zero() {
        let state = ViewState::default();
        assert_eq!(state.total_contracts(), 0);
        assert_eq!(state.analyzed_contracts(), 0);
        assert_eq!(state.pending_contracts(), 0);
        assert_eq!(state.high_risk_clauses(), 0);
        assert_eq!(state.average_risk_score(), 0.0);
    }

    #[test]
    fn has_flags_track_sequence_emptiness() {
        let store = ViewStore::new();
        assert!(!store.snapshot().has_recent_contracts());
        assert!(!store.snapshot().has_risk_data());

        store.apply_stats(ContractStats {
            recent_contracts: vec![ContractSummary::default()],
            risk_distribution: vec![RiskBucket {
                label: "Low".to_string(),
                value: 1.0,
            }],
            ..ContractStats::default()
        });

        let state = store.snapshot();
        assert!(state.has_recent_contracts());
        assert!(state.has_risk_data());
    }

    #[test]
    fn apply_stats_derives_chart_and_clears_loading() {
        let store = ViewStore::new();
        store.apply_stats(ContractStats {
            total_contracts: 10,
            risk_distribution: vec![
                RiskBucket {
                    label: "Low".to_string(),
                    value: 5.0,
                },
                RiskBucket {
                    label: "High".to_string(),
                    value: 2.0,
                },
            ],
            ..ContractStats::default()
        });

        let state = store.snapshot();
        assert!(!state.is_loading);
        assert_eq!(state.total_contracts(), 10);
        assert_eq!(state.risk_chart_data.len(), 2);
        assert_eq!(state.risk_chart_data[0].label, "Low");
        assert_eq!(state.risk_chart_data[1].value, 2.0);
    }

    #[test]
    fn unrecognized_tab_value_is_stored_verbatim() {
        let store = ViewStore::new();
        store.select_tab("definitely-not-a-tab");
        assert_eq!(store.snapshot().selected_tab, "definitely-not-a-tab");
    }

    #[test]
    fn subscribers_observe_mutations() {
        tokio_test::block_on(async {
            let store = ViewStore::new();
            let mut rx = store.subscribe();
            assert!(!rx.has_changed().unwrap());

            store.set_loading(false);
            assert!(rx.has_changed().unwrap());
            assert!(!rx.borrow_and_update().is_loading);

            store.select_tab("risks");
            rx.changed().await.unwrap();
            assert_eq!(rx.borrow().selected_tab, "risks");
        });
    }
}
