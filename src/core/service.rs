//! Service traits for collection and single-document backends

use crate::core::entity::{Entity, EntityId};
use crate::core::error::ApiError;
use crate::core::query::{QueryParams, RecordPatch};
use async_trait::async_trait;

/// Service trait for a REST collection of entities
///
/// Implementations perform exactly one attempt per call and report every
/// failure as an [`ApiError`]. Store modules are agnostic to whether the
/// records come from HTTP or from memory.
#[async_trait]
pub trait DataService<T: Entity>: Send + Sync {
    /// List the collection, optionally narrowed by query parameters
    async fn list(&self, params: &QueryParams) -> Result<Vec<T>, ApiError>;

    /// Create a record; the returned record carries the server-assigned id
    async fn create(&self, draft: &T::Draft) -> Result<T, ApiError>;

    /// Replace a record with `PUT`; `record` is the complete new copy
    async fn update(&self, id: &EntityId, record: &T) -> Result<T, ApiError>;

    /// Change only the fields set in `patch` with `PATCH`
    async fn patch(&self, id: &EntityId, patch: &RecordPatch) -> Result<T, ApiError>;

    /// Delete a record
    async fn delete(&self, id: &EntityId) -> Result<(), ApiError>;
}

/// Service trait for a read-only document (chart data, weekly schedule, ...)
#[async_trait]
pub trait ResourceService<R>: Send + Sync {
    /// Fetch the whole document
    async fn fetch(&self) -> Result<R, ApiError>;
}
