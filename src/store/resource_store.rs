//! Store module for a single read-only document

use crate::core::error::DeskResult;
use crate::core::service::ResourceService;
use crate::store::state::{LoadState, RequestTracker, ResourceSnapshot};
use chrono::{DateTime, Utc};
use std::sync::{Arc, PoisonError, RwLock};
use tokio::sync::watch;

struct DocumentState<R> {
    value: R,
    error: Option<String>,
    last_updated: Option<DateTime<Utc>>,
    requests: RequestTracker,
}

/// Store module for documents such as chart data or the weekly schedule
///
/// Same loading and error semantics as [`EntityStore`](crate::store::EntityStore);
/// the value is replaced wholesale on success.
pub struct ResourceStore<R> {
    name: &'static str,
    service: Arc<dyn ResourceService<R>>,
    state: Arc<RwLock<DocumentState<R>>>,
    changes: Arc<watch::Sender<u64>>,
}

impl<R> Clone for ResourceStore<R> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            service: Arc::clone(&self.service),
            state: Arc::clone(&self.state),
            changes: Arc::clone(&self.changes),
        }
    }
}

impl<R: Clone + Default + Send + Sync + 'static> ResourceStore<R> {
    /// Create a store holding `R::default()` until the first fetch
    pub fn new(name: &'static str, service: Arc<dyn ResourceService<R>>) -> Self {
        let (changes, _) = watch::channel(0);
        Self {
            name,
            service,
            state: Arc::new(RwLock::new(DocumentState {
                value: R::default(),
                error: None,
                last_updated: None,
                requests: RequestTracker::default(),
            })),
            changes: Arc::new(changes),
        }
    }

    fn read<T>(&self, f: impl FnOnce(&DocumentState<R>) -> T) -> T {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        f(&state)
    }

    fn write<T>(&self, f: impl FnOnce(&mut DocumentState<R>) -> T) -> T {
        let result = {
            let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
            f(&mut state)
        };
        self.changes.send_modify(|revision| *revision += 1);
        result
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Fetch the document; stale responses are returned but not applied
    pub async fn fetch(&self) -> DeskResult<R> {
        let ticket = self.write(|s| {
            s.error = None;
            s.requests.start_fetch()
        });
        tracing::debug!(resource = self.name, ticket, "fetching document");

        let result = self.service.fetch().await;

        self.write(|s| {
            if !s.requests.is_current(ticket) {
                tracing::debug!(resource = self.name, ticket, "discarding stale fetch result");
                s.requests.release();
                return;
            }
            match &result {
                Ok(value) => {
                    s.value = value.clone();
                    s.last_updated = Some(Utc::now());
                    s.requests.finish(true);
                }
                Err(err) => {
                    s.error = Some(err.to_string());
                    s.requests.finish(false);
                }
            }
        });

        Ok(result?)
    }

    pub fn clear_error(&self) {
        self.write(|s| s.error = None);
    }

    pub fn value(&self) -> R {
        self.read(|s| s.value.clone())
    }

    pub fn loading(&self) -> bool {
        self.read(|s| s.requests.loading())
    }

    pub fn error(&self) -> Option<String> {
        self.read(|s| s.error.clone())
    }

    pub fn phase(&self) -> LoadState {
        self.read(|s| s.requests.phase())
    }

    pub fn snapshot(&self) -> ResourceSnapshot<R> {
        self.read(|s| ResourceSnapshot {
            value: s.value.clone(),
            loading: s.requests.loading(),
            error: s.error.clone(),
            last_updated: s.last_updated,
            phase: s.requests.phase(),
        })
    }

    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.changes.subscribe()
    }
}
