//! Store module for a REST collection
//!
//! One `EntityStore` exists per collection (users, vendors, orders, ...).
//! It owns the collection, the loading flag, the last error and the
//! search/filter state, and is mutated only through its own operations.
//!
//! # Example
//!
//! ```rust,ignore
//! let users = EntityStore::new(Arc::new(RestDataService::<User>::new(client)));
//!
//! users.fetch_all(&QueryParams::new()).await?;
//! users.set_filters(Filters::from_pairs([("status", "active")]));
//!
//! for user in users.filtered_items() {
//!     println!("{}", user.name);
//! }
//! ```

use crate::core::entity::{Data, EntityId};
use crate::core::error::{ApiError, DeskResult, FieldValidationError, ValidationError};
use crate::core::query::{Filters, Pagination, PaginationUpdate, QueryParams, RecordPatch};
use crate::core::selector::{FilteredView, select_filtered};
use crate::core::service::DataService;
use crate::core::validation::validate_draft;
use crate::store::state::{LoadState, RequestTracker, StoreSnapshot};
use crate::view::{DeleteRequest, ListView};
use chrono::{DateTime, Utc};
use std::sync::{Arc, PoisonError, RwLock};
use tokio::sync::watch;

struct ModuleState<T> {
    items: Vec<T>,
    error: Option<String>,
    search_term: String,
    filters: Filters,
    pagination: Pagination,
    last_updated: Option<DateTime<Utc>>,
    requests: RequestTracker,
}

impl<T> Default for ModuleState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            error: None,
            search_term: String::new(),
            filters: Filters::new(),
            pagination: Pagination::default(),
            last_updated: None,
            requests: RequestTracker::default(),
        }
    }
}

impl<T> ModuleState<T> {
    /// A new request clears the previous error
    fn begin(&mut self) {
        self.requests.start();
        self.error = None;
    }

    fn fail(&mut self, err: &ApiError) {
        self.error = Some(err.to_string());
        self.requests.finish(false);
    }
}

/// Store module for the collection of entities of type `T`
///
/// Clones share the same state. The state lock is only held for synchronous
/// transitions, never across a request.
pub struct EntityStore<T: Data> {
    service: Arc<dyn DataService<T>>,
    state: Arc<RwLock<ModuleState<T>>>,
    changes: Arc<watch::Sender<u64>>,
}

impl<T: Data> Clone for EntityStore<T> {
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
            state: Arc::clone(&self.state),
            changes: Arc::clone(&self.changes),
        }
    }
}

impl<T: Data> EntityStore<T> {
    /// Create an empty, idle store over a backend service
    pub fn new(service: Arc<dyn DataService<T>>) -> Self {
        let (changes, _) = watch::channel(0);
        Self {
            service,
            state: Arc::new(RwLock::new(ModuleState::default())),
            changes: Arc::new(changes),
        }
    }

    fn read<R>(&self, f: impl FnOnce(&ModuleState<T>) -> R) -> R {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        f(&state)
    }

    /// Apply a transition and notify subscribers
    fn write<R>(&self, f: impl FnOnce(&mut ModuleState<T>) -> R) -> R {
        let result = {
            let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
            f(&mut state)
        };
        self.changes.send_modify(|revision| *revision += 1);
        result
    }

    // === Asynchronous operations ===

    /// Fetch the collection and replace `items` wholesale
    ///
    /// The decoded records are returned to the caller even when a newer
    /// fetch has been issued meanwhile; in that case they are not applied.
    pub async fn fetch_all(&self, params: &QueryParams) -> DeskResult<Vec<T>> {
        let ticket = self.write(|s| {
            s.error = None;
            s.requests.start_fetch()
        });
        tracing::debug!(resource = T::resource_name(), ticket, "fetching collection");

        let result = self.service.list(params).await;

        self.write(|s| {
            if !s.requests.is_current(ticket) {
                tracing::debug!(
                    resource = T::resource_name(),
                    ticket,
                    "discarding stale fetch result"
                );
                s.requests.release();
                return;
            }
            match &result {
                Ok(items) => {
                    s.items = items.clone();
                    s.pagination.total = items.len();
                    s.last_updated = Some(Utc::now());
                    s.requests.finish(true);
                }
                Err(err) => s.fail(err),
            }
        });

        Ok(result?)
    }

    /// Validate and create a record; the server copy is appended to `items`
    ///
    /// A draft failing validation is rejected before any request and
    /// leaves the state untouched.
    pub async fn create(&self, draft: &T::Draft) -> DeskResult<T> {
        if let Err(err) = validate_draft(draft) {
            tracing::debug!(resource = T::resource_name(), error = %err, "draft rejected");
            return Err(err.into());
        }

        self.write(ModuleState::begin);
        let result = self.service.create(draft).await;

        self.write(|s| match &result {
            Ok(record) => {
                s.items.push(record.clone());
                s.requests.finish(true);
            }
            Err(err) => s.fail(err),
        });

        Ok(result?)
    }

    /// Update a record and replace the entry with the same id
    ///
    /// A record held in `items` is merged with `patch` and sent whole with
    /// `PUT`. Records that are not loaded are sent the patch alone with
    /// `PATCH`, and the collection is left as is. A patch that does not fit
    /// the record's schema is rejected before any request is made.
    pub async fn update(&self, id: &EntityId, patch: &RecordPatch) -> DeskResult<T> {
        let held = self.find(id);
        let replacement = match &held {
            Some(record) => match patch.apply_to(record) {
                Ok(merged) => Some(merged),
                Err(e) => {
                    tracing::debug!(resource = T::resource_name(), %id, error = %e, "patch rejected");
                    return Err(ValidationError::FieldErrors(vec![FieldValidationError {
                        field: "patch".to_string(),
                        message: e.to_string(),
                    }])
                    .into());
                }
            },
            None => None,
        };

        self.write(ModuleState::begin);
        let result = match &replacement {
            Some(record) => self.service.update(id, record).await,
            None => self.service.patch(id, patch).await,
        };

        self.write(|s| match &result {
            Ok(record) => {
                if let Some(slot) = s.items.iter_mut().find(|item| &item.id() == id) {
                    *slot = record.clone();
                }
                s.requests.finish(true);
            }
            Err(err) => s.fail(err),
        });

        Ok(result?)
    }

    /// Delete a record and remove it from `items`
    pub async fn delete(&self, id: &EntityId) -> DeskResult<()> {
        self.write(ModuleState::begin);
        let result = self.service.delete(id).await;

        self.write(|s| match &result {
            Ok(()) => {
                s.items.retain(|item| &item.id() != id);
                s.requests.finish(true);
            }
            Err(err) => s.fail(err),
        });

        Ok(result?)
    }

    /// Start a confirmation-gated deletion
    pub fn request_delete(&self, id: EntityId) -> DeleteRequest<T> {
        DeleteRequest::new(self.clone(), id)
    }

    // === Local state ===

    pub fn set_search_term(&self, term: impl Into<String>) {
        let term = term.into();
        self.write(|s| s.search_term = term);
    }

    /// Merge `partial` into the current filters
    pub fn set_filters(&self, partial: Filters) {
        self.write(|s| s.filters.merge(partial));
    }

    /// Reset filters and the search term
    pub fn clear_filters(&self) {
        self.write(|s| {
            s.filters.clear();
            s.search_term.clear();
        });
    }

    pub fn clear_error(&self) {
        self.write(|s| s.error = None);
    }

    pub fn set_pagination(&self, update: PaginationUpdate) {
        self.write(|s| s.pagination.apply(update));
    }

    // === Accessors ===

    pub fn snapshot(&self) -> StoreSnapshot<T> {
        self.read(|s| StoreSnapshot {
            items: s.items.clone(),
            loading: s.requests.loading(),
            error: s.error.clone(),
            search_term: s.search_term.clone(),
            filters: s.filters.clone(),
            pagination: s.pagination,
            last_updated: s.last_updated,
            phase: s.requests.phase(),
        })
    }

    pub fn items(&self) -> Vec<T> {
        self.read(|s| s.items.clone())
    }

    /// Look up a record by id
    pub fn find(&self, id: &EntityId) -> Option<T> {
        self.read(|s| s.items.iter().find(|item| &item.id() == id).cloned())
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

    /// What a list-backed view of this module renders right now
    pub fn view(&self) -> ListView<T> {
        ListView::resolve(&self.snapshot())
    }

    /// Receiver whose revision counter changes on every state transition
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.changes.subscribe()
    }
}

impl<T: Data> FilteredView<T> for EntityStore<T> {
    fn filtered_items(&self) -> Vec<T> {
        self.read(|s| {
            select_filtered(&s.items, &s.search_term, &s.filters)
                .into_iter()
                .cloned()
                .collect()
        })
    }
}
