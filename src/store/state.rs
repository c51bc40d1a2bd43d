//! State shared by the store modules

use crate::core::entity::Data;
use crate::core::query::{Filters, Pagination};
use crate::core::selector::{FilteredView, select_filtered};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle of a store module: `Idle → Loading → {Succeeded, Failed}`, re-entrant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadState {
    Idle,
    Loading,
    Succeeded,
    Failed,
}

/// Bookkeeping for requests in flight
///
/// `latest_fetch` is the ticket of the most recently issued fetch; a fetch
/// completing with an older ticket is stale.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct RequestTracker {
    in_flight: usize,
    latest_fetch: u64,
    outcome: Option<bool>,
}

impl RequestTracker {
    /// Register a request; fetches also receive a ticket
    pub(crate) fn start(&mut self) {
        self.in_flight += 1;
    }

    pub(crate) fn start_fetch(&mut self) -> u64 {
        self.start();
        self.latest_fetch += 1;
        self.latest_fetch
    }

    pub(crate) fn is_current(&self, ticket: u64) -> bool {
        ticket == self.latest_fetch
    }

    /// Register the completion of a request that was applied to the state
    pub(crate) fn finish(&mut self, succeeded: bool) {
        self.release();
        self.outcome = Some(succeeded);
    }

    /// Register the completion of a request whose result was discarded
    pub(crate) fn release(&mut self) {
        self.in_flight = self.in_flight.saturating_sub(1);
    }

    pub(crate) fn loading(&self) -> bool {
        self.in_flight > 0
    }

    pub(crate) fn phase(&self) -> LoadState {
        if self.loading() {
            return LoadState::Loading;
        }
        match self.outcome {
            None => LoadState::Idle,
            Some(true) => LoadState::Succeeded,
            Some(false) => LoadState::Failed,
        }
    }
}

/// Consistent copy of an entity store module's state
#[derive(Debug, Clone)]
pub struct StoreSnapshot<T> {
    pub items: Vec<T>,
    pub loading: bool,
    pub error: Option<String>,
    pub search_term: String,
    pub filters: Filters,
    pub pagination: Pagination,
    pub last_updated: Option<DateTime<Utc>>,
    pub phase: LoadState,
}

impl<T: Data> FilteredView<T> for StoreSnapshot<T> {
    fn filtered_items(&self) -> Vec<T> {
        select_filtered(&self.items, &self.search_term, &self.filters)
            .into_iter()
            .cloned()
            .collect()
    }
}

impl<T> StoreSnapshot<T> {
    /// Whether a search term or an active filter narrows the view
    pub fn is_narrowed(&self) -> bool {
        !self.search_term.is_empty() || self.filters.active().next().is_some()
    }
}

/// Consistent copy of a single-document module's state
#[derive(Debug, Clone)]
pub struct ResourceSnapshot<R> {
    pub value: R,
    pub loading: bool,
    pub error: Option<String>,
    pub last_updated: Option<DateTime<Utc>>,
    pub phase: LoadState,
}
