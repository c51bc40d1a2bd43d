//! REST-backed implementations of the service traits

use crate::client::{ApiClient, Endpoint};
use crate::core::entity::{Entity, EntityId};
use crate::core::error::ApiError;
use crate::core::query::{QueryParams, RecordPatch};
use crate::core::service::{DataService, ResourceService};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::marker::PhantomData;

/// A REST collection (`/{resource_name}`) of entities of type `T`
pub struct RestDataService<T> {
    client: ApiClient,
    _marker: PhantomData<fn() -> T>,
}

impl<T> RestDataService<T> {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            _marker: PhantomData,
        }
    }
}

impl<T> Clone for RestDataService<T> {
    fn clone(&self) -> Self {
        Self::new(self.client.clone())
    }
}

#[async_trait]
impl<T: Entity> DataService<T> for RestDataService<T> {
    async fn list(&self, params: &QueryParams) -> Result<Vec<T>, ApiError> {
        self.client.get(&T::collection_path(), params).await
    }

    async fn create(&self, draft: &T::Draft) -> Result<T, ApiError> {
        self.client.post(&T::collection_path(), draft).await
    }

    async fn update(&self, id: &EntityId, record: &T) -> Result<T, ApiError> {
        self.client.put(&T::item_path(id), record).await
    }

    async fn patch(&self, id: &EntityId, patch: &RecordPatch) -> Result<T, ApiError> {
        self.client.patch(&T::item_path(id), patch).await
    }

    async fn delete(&self, id: &EntityId) -> Result<(), ApiError> {
        self.client.delete(&T::item_path(id)).await
    }
}

/// A read-only REST document such as `/platformPerformance`
pub struct RestResource<R> {
    client: ApiClient,
    endpoint: Endpoint,
    _marker: PhantomData<fn() -> R>,
}

impl<R> RestResource<R> {
    pub fn new(client: ApiClient, endpoint: Endpoint) -> Self {
        Self {
            client,
            endpoint,
            _marker: PhantomData,
        }
    }

    pub fn endpoint(&self) -> Endpoint {
        self.endpoint
    }
}

#[async_trait]
impl<R: DeserializeOwned + Send + Sync + 'static> ResourceService<R> for RestResource<R> {
    async fn fetch(&self) -> Result<R, ApiError> {
        self.client
            .get(self.endpoint.path(), &QueryParams::new())
            .await
    }
}
