//! Dashboard instance: wires the statistics fetch, quick actions and tab
//! selection into the reactive view state.
//!
//! One instance per mounted dashboard. All state transitions run on the
//! single event-loop task that drives the instance; the only suspension
//! point is the statistics fetch, and user interactions (tab switches,
//! quick actions) are accepted while it is in flight.

use tokio::sync::watch;

use crate::navigation::{NavRequest, Navigator, QuickAction};
use crate::notify::{Notification, NotificationSink};
use crate::services::stats::StatsSource;
use crate::state::{ViewState, ViewStore};

/// The dashboard view model, generic over its three external collaborators.
pub struct Dashboard<S, N, K> {
    store: ViewStore,
    stats: S,
    navigator: N,
    notifications: K,
}

impl<S, N, K> Dashboard<S, N, K>
where
    S: StatsSource,
    N: Navigator,
    K: NotificationSink,
{
    /// Create an instance. State starts loading with the overview tab
    /// selected; call [`mount`](Self::mount) to issue the stats fetch.
    pub fn new(stats: S, navigator: N, notifications: K) -> Self {
        Self {
            store: ViewStore::new(),
            stats,
            navigator,
            notifications,
        }
    }

    /// Issue the one statistics fetch for this instance and route its
    /// resolution into the view state.
    pub async fn mount(&self) {
        self.load().await;
    }

    /// Explicit re-fetch on user request: raises the loading flag first.
    pub async fn refresh(&self) {
        self.store.set_loading(true);
        self.load().await;
    }

    async fn load(&self) {
        match self.stats.contract_stats().await {
            Ok(payload) => {
                tracing::debug!(
                    total = payload.total_contracts,
                    buckets = payload.risk_distribution.len(),
                    "Applying contract statistics"
                );
                self.store.apply_stats(payload);
            }
            Err(error) => {
                tracing::error!(error = %error, "Failed to load contract stats");
                self.notifications
                    .notify(Notification::error("Failed to load contract statistics"));
                // The loading flag stays raised after a failed fetch,
                // matching the shipped dashboard. See DESIGN.md.
            }
        }
    }

    /// Store the tab value from the tab control verbatim.
    pub fn select_tab(&self, tab: impl Into<String>) {
        self.store.select_tab(tab);
    }

    /// Route a quick-action id to its navigation target. A recognized id
    /// emits exactly one request; anything else is ignored without signal.
    pub fn quick_action(&self, id: &str) {
        if let Some(action) = QuickAction::from_id(id) {
            let request = NavRequest::object_page(action.target());
            tracing::debug!(action = id, object = %request.attributes.object_api_name, "Navigating");
            self.navigator.navigate(request);
        }
    }

    /// Current view state snapshot.
    pub fn state(&self) -> ViewState {
        self.store.snapshot()
    }

    /// Subscribe to state changes at the render boundary.
    pub fn subscribe(&self) -> watch::Receiver<ViewState> {
        self.store.subscribe()
    }
}
