//! Presentation contract for list-backed views
//!
//! A view renders exactly one of: a loading indicator, a dismissible error,
//! an empty state, or the populated list. Destructive actions go through a
//! [`DeleteRequest`] that must be confirmed before anything is sent.

use crate::core::entity::{Data, EntityId};
use crate::core::error::DeskResult;
use crate::core::selector::FilteredView;
use crate::core::status::{AlertLevel, Priority, Status, Tone};
use crate::store::state::{ResourceSnapshot, StoreSnapshot};
use crate::store::EntityStore;

/// What a list-backed view renders
#[derive(Debug, Clone, PartialEq)]
pub enum ListView<T> {
    /// A request is in flight and there is nothing to show yet
    Loading,

    /// The last operation failed; dismissing calls `clear_error` on the store
    Error { message: String },

    /// Nothing to show; `narrowed` is set when search or filters hide records
    Empty { narrowed: bool },

    Populated(Vec<T>),
}

impl<T: Data> ListView<T> {
    pub fn resolve(snapshot: &StoreSnapshot<T>) -> Self {
        if snapshot.loading && snapshot.items.is_empty() {
            return ListView::Loading;
        }
        if let Some(message) = &snapshot.error {
            return ListView::Error {
                message: message.clone(),
            };
        }

        let visible = snapshot.filtered_items();
        if visible.is_empty() {
            if snapshot.loading {
                return ListView::Loading;
            }
            return ListView::Empty {
                narrowed: snapshot.is_narrowed(),
            };
        }
        ListView::Populated(visible)
    }

    /// Empty-state message, e.g. `No customers found`
    pub fn empty_message(narrowed: bool) -> String {
        let noun = T::resource_name_singular();
        if narrowed {
            format!("No {noun}s match the current search or filters")
        } else {
            format!("No {noun}s found")
        }
    }
}

/// What a single-document view renders
#[derive(Debug, Clone, PartialEq)]
pub enum DocumentView<R> {
    Loading,
    Error { message: String },
    Ready(R),
}

impl<R: Clone> DocumentView<R> {
    /// Loading wins only until the first successful fetch
    pub fn resolve(snapshot: &ResourceSnapshot<R>) -> Self {
        if snapshot.loading && snapshot.last_updated.is_none() {
            return DocumentView::Loading;
        }
        match &snapshot.error {
            Some(message) => DocumentView::Error {
                message: message.clone(),
            },
            None => DocumentView::Ready(snapshot.value.clone()),
        }
    }
}

/// A status, priority or alert badge
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    pub label: String,
    pub tone: Tone,
}

impl Badge {
    pub fn status(status: Status) -> Self {
        Self {
            label: title_case(status.as_str()),
            tone: status.tone(),
        }
    }

    pub fn priority(priority: Priority) -> Self {
        Self {
            label: title_case(priority.as_str()),
            tone: priority.tone(),
        }
    }

    pub fn alert(level: AlertLevel) -> Self {
        Self {
            label: title_case(level.as_str()),
            tone: level.tone(),
        }
    }
}

/// `in-transit` → `In Transit`
fn title_case(raw: &str) -> String {
    raw.split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// A deletion waiting for the user's confirmation
///
/// Dropping or cancelling the request sends nothing.
#[must_use = "a delete request does nothing until confirmed"]
pub struct DeleteRequest<T: Data> {
    store: EntityStore<T>,
    id: EntityId,
}

impl<T: Data> DeleteRequest<T> {
    pub(crate) fn new(store: EntityStore<T>, id: EntityId) -> Self {
        Self { store, id }
    }

    pub fn id(&self) -> &EntityId {
        &self.id
    }

    /// Confirmation prompt, e.g. `Are you sure you want to delete this customer?`
    pub fn prompt(&self) -> String {
        format!(
            "Are you sure you want to delete this {}?",
            T::resource_name_singular()
        )
    }

    /// Dispatch the deletion
    pub async fn confirm(self) -> DeskResult<()> {
        self.store.delete(&self.id).await
    }

    pub fn cancel(self) {
        tracing::debug!(
            resource = T::resource_name(),
            id = %self.id,
            "deletion cancelled"
        );
    }
}
