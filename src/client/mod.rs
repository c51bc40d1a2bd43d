//! HTTP client for the dashboard's REST backend
//!
//! Every call is a single attempt against `base_url + path` with the
//! configured timeout. Failures of any kind come back as an [`ApiError`]
//! naming the operation, the path and the cause.

pub mod endpoints;
pub mod rest;

pub use endpoints::Endpoint;
pub use rest::{RestDataService, RestResource};

use crate::config::ClientConfig;
use crate::core::error::{ApiError, ApiErrorCause, ConfigError, Operation};
use crate::core::query::QueryParams;
use reqwest::{Client, RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// API client shared by every store module
///
/// Cloning is cheap: the underlying connection pool is reference counted and
/// the configuration is read-only after construction.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    timeout_ms: u64,
}

impl ApiClient {
    /// Create a client from its configuration
    pub fn new(config: &ClientConfig) -> Result<Self, ConfigError> {
        let http = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| ConfigError::InvalidValue {
                field: "api".to_string(),
                message: format!("failed to build HTTP client: {e}"),
            })?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            timeout_ms: config.timeout_ms,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET path?params`, decoding the response body
    pub async fn get<R: DeserializeOwned>(
        &self,
        path: &str,
        params: &QueryParams,
    ) -> Result<R, ApiError> {
        let mut request = self.http.get(self.url(path));
        if !params.is_empty() {
            request = request.query(params);
        }
        let response = self.execute(Operation::Fetch, path, request).await?;
        self.decode(Operation::Fetch, path, response).await
    }

    /// `POST path` with a JSON body; returns the created record
    pub async fn post<B, R>(&self, path: &str, body: &B) -> Result<R, ApiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let request = self.http.post(self.url(path)).json(body);
        let response = self.execute(Operation::Create, path, request).await?;
        self.decode(Operation::Create, path, response).await
    }

    /// `PUT path` with a JSON body; returns the updated record
    pub async fn put<B, R>(&self, path: &str, body: &B) -> Result<R, ApiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let request = self.http.put(self.url(path)).json(body);
        let response = self.execute(Operation::Update, path, request).await?;
        self.decode(Operation::Update, path, response).await
    }

    /// `PATCH path` with a JSON body; returns the patched record
    pub async fn patch<B, R>(&self, path: &str, body: &B) -> Result<R, ApiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let request = self.http.patch(self.url(path)).json(body);
        let response = self.execute(Operation::Patch, path, request).await?;
        self.decode(Operation::Patch, path, response).await
    }

    /// `DELETE path`; the response body is discarded
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let request = self.http.delete(self.url(path));
        self.execute(Operation::Delete, path, request).await?;
        Ok(())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn execute(
        &self,
        operation: Operation,
        path: &str,
        request: RequestBuilder,
    ) -> Result<Response, ApiError> {
        tracing::debug!(method = operation.method(), path, "sending request");

        let response = request
            .send()
            .await
            .map_err(|e| self.fail(operation, path, self.transport_cause(&e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(self.fail(
                operation,
                path,
                ApiErrorCause::Status {
                    status: status.as_u16(),
                    body,
                },
            ));
        }

        tracing::debug!(
            method = operation.method(),
            path,
            status = status.as_u16(),
            "received response"
        );
        Ok(response)
    }

    async fn decode<R: DeserializeOwned>(
        &self,
        operation: Operation,
        path: &str,
        response: Response,
    ) -> Result<R, ApiError> {
        let bytes = response
            .bytes()
            .await
            .map_err(|e| self.fail(operation, path, self.transport_cause(&e)))?;

        serde_json::from_slice(&bytes)
            .map_err(|e| self.fail(operation, path, ApiErrorCause::Decode(e.to_string())))
    }

    fn transport_cause(&self, err: &reqwest::Error) -> ApiErrorCause {
        if err.is_timeout() {
            ApiErrorCause::Timeout {
                timeout_ms: self.timeout_ms,
            }
        } else {
            ApiErrorCause::Transport(err.to_string())
        }
    }

    fn fail(&self, operation: Operation, path: &str, cause: ApiErrorCause) -> ApiError {
        let err = ApiError::new(operation, path, cause);
        tracing::warn!(
            method = operation.method(),
            path,
            error_code = err.error_code(),
            error = %err,
            "request failed"
        );
        err
    }
}
