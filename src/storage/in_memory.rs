//! In-memory implementation of the service traits for testing and development
//!
//! Behaves like the JSON mock backend the dashboard is developed against:
//! integer ids are assigned on create, `update` replaces the stored record
//! while `patch` merges the sent fields into it, and deleting an unknown id
//! is accepted.

use crate::core::entity::{Entity, EntityId};
use crate::core::error::{ApiError, ApiErrorCause, Operation};
use crate::core::query::{QueryParams, RecordPatch};
use crate::core::service::{DataService, ResourceService};
use async_trait::async_trait;
use serde_json::Value;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, RwLock};

/// In-memory collection service
///
/// Records keep insertion order. Uses RwLock for thread-safe access.
#[derive(Clone)]
pub struct InMemoryDataService<T> {
    records: Arc<RwLock<Vec<T>>>,
    next_id: Arc<AtomicUsize>,
    pending_failure: Arc<Mutex<Option<ApiErrorCause>>>,
    calls: Arc<AtomicUsize>,
}

impl<T: Entity> InMemoryDataService<T> {
    /// Create an empty collection
    pub fn new() -> Self {
        Self::with_records(Vec::new())
    }

    /// Create a collection seeded with records
    ///
    /// New ids continue after the largest numeric id present.
    pub fn with_records(records: Vec<T>) -> Self {
        let max_id = records
            .iter()
            .filter_map(|r| match r.id() {
                EntityId::Number(n) => usize::try_from(n).ok(),
                EntityId::Text(_) => None,
            })
            .max()
            .unwrap_or(0);

        Self {
            records: Arc::new(RwLock::new(records)),
            next_id: Arc::new(AtomicUsize::new(max_id + 1)),
            pending_failure: Arc::new(Mutex::new(None)),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Make the next call fail with `cause`
    pub fn fail_next(&self, cause: ApiErrorCause) {
        if let Ok(mut pending) = self.pending_failure.lock() {
            *pending = Some(cause);
        }
    }

    /// Number of calls served so far, failed ones included
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Current contents of the collection
    pub fn records(&self) -> Vec<T> {
        self.records
            .read()
            .map(|records| records.clone())
            .unwrap_or_default()
    }

    fn begin(&self, operation: Operation, path: &str) -> Result<(), ApiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let injected = self
            .pending_failure
            .lock()
            .ok()
            .and_then(|mut pending| pending.take());
        match injected {
            Some(cause) => Err(ApiError::new(operation, path, cause)),
            None => Ok(()),
        }
    }
}

impl<T: Entity> Default for InMemoryDataService<T> {
    fn default() -> Self {
        Self::new()
    }
}

fn lock_error(operation: Operation, path: &str, e: impl std::fmt::Display) -> ApiError {
    ApiError::new(
        operation,
        path,
        ApiErrorCause::Transport(format!("Failed to acquire lock: {}", e)),
    )
}

fn not_found(operation: Operation, path: &str) -> ApiError {
    ApiError::new(
        operation,
        path,
        ApiErrorCause::Status {
            status: 404,
            body: "Not Found".to_string(),
        },
    )
}

fn decode<T: Entity>(operation: Operation, path: &str, value: Value) -> Result<T, ApiError> {
    serde_json::from_value(value)
        .map_err(|e| ApiError::new(operation, path, ApiErrorCause::Decode(e.to_string())))
}

fn encode(operation: Operation, path: &str, value: impl serde::Serialize) -> Result<Value, ApiError> {
    serde_json::to_value(value)
        .map_err(|e| ApiError::new(operation, path, ApiErrorCause::Decode(e.to_string())))
}

/// Query parameters match when the record's field renders to the same text
fn matches_params(record: &Value, params: &QueryParams) -> bool {
    params.iter().all(|(key, expected)| match record.get(key) {
        Some(Value::String(s)) => s == expected,
        Some(Value::Null) | None => false,
        Some(other) => other.to_string() == expected,
    })
}

#[async_trait]
impl<T: Entity> DataService<T> for InMemoryDataService<T> {
    async fn list(&self, params: &QueryParams) -> Result<Vec<T>, ApiError> {
        let path = T::collection_path();
        self.begin(Operation::Fetch, &path)?;

        let records = self
            .records
            .read()
            .map_err(|e| lock_error(Operation::Fetch, &path, e))?;

        if params.is_empty() {
            return Ok(records.clone());
        }

        let mut matched = Vec::new();
        for record in records.iter() {
            let value = encode(Operation::Fetch, &path, record)?;
            if matches_params(&value, params) {
                matched.push(record.clone());
            }
        }
        Ok(matched)
    }

    async fn create(&self, draft: &T::Draft) -> Result<T, ApiError> {
        let path = T::collection_path();
        self.begin(Operation::Create, &path)?;

        let mut value = encode(Operation::Create, &path, draft)?;
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        match value.as_object_mut() {
            Some(fields) => {
                fields.insert("id".to_string(), Value::from(id));
            }
            None => {
                return Err(ApiError::new(
                    Operation::Create,
                    &path,
                    ApiErrorCause::Status {
                        status: 400,
                        body: "expected a JSON object".to_string(),
                    },
                ));
            }
        }
        let record: T = decode(Operation::Create, &path, value)?;

        self.records
            .write()
            .map_err(|e| lock_error(Operation::Create, &path, e))?
            .push(record.clone());

        Ok(record)
    }

    async fn update(&self, id: &EntityId, record: &T) -> Result<T, ApiError> {
        let path = T::item_path(id);
        self.begin(Operation::Update, &path)?;

        let mut value = encode(Operation::Update, &path, record)?;
        if let Some(fields) = value.as_object_mut() {
            fields.insert("id".to_string(), encode(Operation::Update, &path, id)?);
        }
        let replacement: T = decode(Operation::Update, &path, value)?;

        let mut records = self
            .records
            .write()
            .map_err(|e| lock_error(Operation::Update, &path, e))?;
        let slot = records
            .iter_mut()
            .find(|r| &r.id() == id)
            .ok_or_else(|| not_found(Operation::Update, &path))?;
        *slot = replacement.clone();

        Ok(replacement)
    }

    async fn patch(&self, id: &EntityId, patch: &RecordPatch) -> Result<T, ApiError> {
        let path = T::item_path(id);
        self.begin(Operation::Patch, &path)?;

        let mut records = self
            .records
            .write()
            .map_err(|e| lock_error(Operation::Patch, &path, e))?;

        let slot = records
            .iter_mut()
            .find(|r| &r.id() == id)
            .ok_or_else(|| not_found(Operation::Patch, &path))?;

        let patched = patch
            .apply_to(&*slot)
            .map_err(|e| ApiError::new(Operation::Patch, &path, ApiErrorCause::Decode(e.to_string())))?;
        *slot = patched.clone();

        Ok(patched)
    }

    async fn delete(&self, id: &EntityId) -> Result<(), ApiError> {
        let path = T::item_path(id);
        self.begin(Operation::Delete, &path)?;

        self.records
            .write()
            .map_err(|e| lock_error(Operation::Delete, &path, e))?
            .retain(|r| &r.id() != id);

        Ok(())
    }
}

/// In-memory single document (chart data, weekly schedule, ...)
#[derive(Clone)]
pub struct StaticResource<R> {
    path: String,
    value: Arc<RwLock<R>>,
    pending_failure: Arc<Mutex<Option<ApiErrorCause>>>,
}

impl<R: Clone + Send + Sync + 'static> StaticResource<R> {
    pub fn new(path: impl Into<String>, value: R) -> Self {
        Self {
            path: path.into(),
            value: Arc::new(RwLock::new(value)),
            pending_failure: Arc::new(Mutex::new(None)),
        }
    }

    /// Replace the served document
    pub fn set(&self, value: R) {
        if let Ok(mut current) = self.value.write() {
            *current = value;
        }
    }

    /// Make the next fetch fail with `cause`
    pub fn fail_next(&self, cause: ApiErrorCause) {
        if let Ok(mut pending) = self.pending_failure.lock() {
            *pending = Some(cause);
        }
    }
}

#[async_trait]
impl<R: Clone + Send + Sync + 'static> ResourceService<R> for StaticResource<R> {
    async fn fetch(&self) -> Result<R, ApiError> {
        let injected = self
            .pending_failure
            .lock()
            .ok()
            .and_then(|mut pending| pending.take());
        if let Some(cause) = injected {
            return Err(ApiError::new(Operation::Fetch, &self.path, cause));
        }

        self.value
            .read()
            .map(|value| value.clone())
            .map_err(|e| lock_error(Operation::Fetch, &self.path, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Status;
    use crate::entities::{Order, User, UserDraft};
    use serde_json::json;

    fn user(id: i64, name: &str, status: &str) -> User {
        serde_json::from_value(json!({
            "id": id, "name": name, "email": format!("{}@example.com", id),
            "region": "NY", "status": status
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn test_create_assigns_next_id() {
        let service = InMemoryDataService::with_records(vec![user(1, "A", "active"), user(5, "B", "active")]);

        let created = service
            .create(&UserDraft::new("Ada", "ada@example.com", "LA"))
            .await
            .unwrap();

        assert_eq!(created.id, EntityId::from(6));
        assert_eq!(created.last_order, "N/A");
        assert_eq!(service.records().len(), 3);
    }

    #[tokio::test]
    async fn test_update_replaces_whole_record() {
        let service = InMemoryDataService::with_records(vec![user(2, "Emily", "active")]);
        let mut replacement = user(7, "Emily Johnson", "inactive");
        replacement.orders = 12;

        let updated = service.update(&EntityId::from(2), &replacement).await.unwrap();

        assert_eq!(updated.id, EntityId::from(2));
        assert_eq!(updated.name, "Emily Johnson");
        assert_eq!(updated.orders, 12);
        assert_eq!(service.records(), vec![updated]);
    }

    #[tokio::test]
    async fn test_patch_merges_fields() {
        let service = InMemoryDataService::with_records(vec![user(2, "Emily", "active")]);

        let patched = service
            .patch(&EntityId::from(2), &RecordPatch::new().set("status", "inactive"))
            .await
            .unwrap();

        assert_eq!(patched.status, Status::Inactive);
        assert_eq!(patched.name, "Emily");
        assert_eq!(service.records()[0].status, Status::Inactive);
    }

    #[tokio::test]
    async fn test_patch_with_mistyped_value_keeps_record() {
        let service = InMemoryDataService::with_records(vec![user(2, "Emily", "active")]);

        let err = service
            .patch(&EntityId::from(2), &RecordPatch::new().set("orders", "many"))
            .await
            .unwrap_err();

        assert!(matches!(err.cause, ApiErrorCause::Decode(_)));
        assert_eq!(service.records()[0].orders, 0);
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_404() {
        let service: InMemoryDataService<User> = InMemoryDataService::new();
        let err = service
            .update(&EntityId::from(9), &user(9, "Ghost", "active"))
            .await
            .unwrap_err();
        assert_eq!(err.status(), Some(404));
        assert_eq!(err.path, "/users/9");

        let err = service
            .patch(&EntityId::from(9), &RecordPatch::new())
            .await
            .unwrap_err();
        assert_eq!(err.status(), Some(404));
    }

    #[tokio::test]
    async fn test_delete_unknown_id_is_accepted() {
        let service = InMemoryDataService::with_records(vec![user(1, "A", "active")]);
        service.delete(&EntityId::from(42)).await.unwrap();
        assert_eq!(service.records().len(), 1);
    }

    #[tokio::test]
    async fn test_list_with_params() {
        let service = InMemoryDataService::with_records(vec![
            user(1, "A", "active"),
            user(2, "B", "pending"),
        ]);
        let params = QueryParams::new().with("status", "pending");

        let listed = service.list(&params).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].name, "B");
    }

    #[tokio::test]
    async fn test_injected_failure_is_consumed() {
        let service: InMemoryDataService<Order> = InMemoryDataService::new();
        service.fail_next(ApiErrorCause::Status {
            status: 500,
            body: String::new(),
        });

        let err = service.list(&QueryParams::new()).await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "Failed to fetch data from /orders: server responded with status 500"
        );
        assert!(service.list(&QueryParams::new()).await.is_ok());
        assert_eq!(service.calls(), 2);
    }

    #[tokio::test]
    async fn test_static_resource() {
        let resource = StaticResource::new("/weeklySchedule", vec![1, 2, 3]);
        assert_eq!(resource.fetch().await.unwrap(), vec![1, 2, 3]);

        resource.fail_next(ApiErrorCause::Transport("connection refused".to_string()));
        assert!(resource.fetch().await.is_err());

        resource.set(vec![4]);
        assert_eq!(resource.fetch().await.unwrap(), vec![4]);
    }
}
