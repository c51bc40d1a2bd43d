//! Typed error handling for the dashboard data layer
//!
//! Every failure crossing the HTTP boundary is normalized into a single
//! [`ApiError`] kind. Store modules never branch on the cause: they record
//! the rendered message and hand the error back to the caller.
//!
//! # Error Categories
//!
//! - [`ApiError`]: transport, timeout, non-2xx and decoding failures
//! - [`ValidationError`]: client-side draft validation, raised before any request
//! - [`ConfigError`]: configuration loading and validation
//!
//! # Example
//!
//! ```rust,ignore
//! match dashboard.users.create(&draft).await {
//!     Ok(user) => println!("created {}", user.id),
//!     Err(DeskError::Validation(e)) => println!("fix the form: {}", e),
//!     Err(e) => eprintln!("request failed: {}", e),
//! }
//! ```

use std::fmt;

// =============================================================================
// Top-level error
// =============================================================================

/// The main error type for the data layer
#[derive(Debug)]
pub enum DeskError {
    /// A REST call failed
    Api(ApiError),

    /// A draft failed client-side validation; no request was issued
    Validation(ValidationError),

    /// Configuration could not be loaded or is invalid
    Config(ConfigError),

    /// Internal error (should not happen in normal operation)
    Internal(String),
}

impl fmt::Display for DeskError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeskError::Api(e) => write!(f, "{}", e),
            DeskError::Validation(e) => write!(f, "{}", e),
            DeskError::Config(e) => write!(f, "{}", e),
            DeskError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for DeskError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DeskError::Api(e) => Some(e),
            DeskError::Validation(e) => Some(e),
            DeskError::Config(e) => Some(e),
            DeskError::Internal(_) => None,
        }
    }
}

impl DeskError {
    /// Get the error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            DeskError::Api(e) => e.error_code(),
            DeskError::Validation(_) => "VALIDATION_ERROR",
            DeskError::Config(_) => "CONFIG_ERROR",
            DeskError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Returns the API error if this failure came from a REST call
    pub fn as_api(&self) -> Option<&ApiError> {
        match self {
            DeskError::Api(e) => Some(e),
            _ => None,
        }
    }
}

// =============================================================================
// API Errors
// =============================================================================

/// The HTTP operation an [`ApiError`] originated from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Fetch,
    Create,
    Update,
    Patch,
    Delete,
}

impl Operation {
    /// Phrase used when rendering the error message
    fn phrase(self) -> &'static str {
        match self {
            Operation::Fetch => "fetch data from",
            Operation::Create => "create data at",
            Operation::Update => "update data at",
            Operation::Patch => "patch data at",
            Operation::Delete => "delete data at",
        }
    }

    /// HTTP method name
    pub fn method(self) -> &'static str {
        match self {
            Operation::Fetch => "GET",
            Operation::Create => "POST",
            Operation::Update => "PUT",
            Operation::Patch => "PATCH",
            Operation::Delete => "DELETE",
        }
    }
}

/// Underlying reason an API call failed
#[derive(Debug, Clone, PartialEq)]
pub enum ApiErrorCause {
    /// No response was received (connection refused, DNS, TLS, ...)
    Transport(String),

    /// The request exceeded the configured timeout
    Timeout { timeout_ms: u64 },

    /// The server answered with a non-2xx status
    Status { status: u16, body: String },

    /// The response body did not match the expected record shape
    Decode(String),
}

impl fmt::Display for ApiErrorCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiErrorCause::Transport(msg) => write!(f, "{}", msg),
            ApiErrorCause::Timeout { timeout_ms } => {
                write!(f, "request timed out after {} ms", timeout_ms)
            }
            ApiErrorCause::Status { status, body } if body.is_empty() => {
                write!(f, "server responded with status {}", status)
            }
            ApiErrorCause::Status { status, body } => {
                write!(f, "server responded with status {}: {}", status, body)
            }
            ApiErrorCause::Decode(msg) => write!(f, "invalid response body: {}", msg),
        }
    }
}

/// Uniform error raised by the API client
///
/// The rendered message always names the operation, the path and the cause,
/// e.g. `Failed to fetch data from /users: server responded with status 500`.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiError {
    pub operation: Operation,
    pub path: String,
    pub cause: ApiErrorCause,
}

impl ApiError {
    pub fn new(operation: Operation, path: impl Into<String>, cause: ApiErrorCause) -> Self {
        Self {
            operation,
            path: path.into(),
            cause,
        }
    }

    /// HTTP status of the response, when one was received
    pub fn status(&self) -> Option<u16> {
        match &self.cause {
            ApiErrorCause::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self.cause {
            ApiErrorCause::Transport(_) => "API_TRANSPORT_ERROR",
            ApiErrorCause::Timeout { .. } => "API_TIMEOUT",
            ApiErrorCause::Status { .. } => "API_STATUS_ERROR",
            ApiErrorCause::Decode(_) => "API_DECODE_ERROR",
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Failed to {} {}: {}",
            self.operation.phrase(),
            self.path,
            self.cause
        )
    }
}

impl std::error::Error for ApiError {}

impl From<ApiError> for DeskError {
    fn from(err: ApiError) -> Self {
        DeskError::Api(err)
    }
}

// =============================================================================
// Validation Errors
// =============================================================================

/// Errors raised when a draft fails client-side validation
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// One or more fields are missing or malformed
    FieldErrors(Vec<FieldValidationError>),
}

/// A single field validation error
#[derive(Debug, Clone, PartialEq)]
pub struct FieldValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    /// Field names that failed validation, in reporting order
    pub fn fields(&self) -> Vec<&str> {
        match self {
            ValidationError::FieldErrors(errors) => {
                errors.iter().map(|e| e.field.as_str()).collect()
            }
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::FieldErrors(errors) => {
                let details: Vec<String> = errors
                    .iter()
                    .map(|e| format!("{}: {}", e.field, e.message))
                    .collect();
                write!(f, "Validation failed: {}", details.join(", "))
            }
        }
    }
}

impl std::error::Error for ValidationError {}

impl From<ValidationError> for DeskError {
    fn from(err: ValidationError) -> Self {
        DeskError::Validation(err)
    }
}

// =============================================================================
// Configuration Errors
// =============================================================================

/// Errors related to configuration loading and validation
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Configuration file not found: {path}")]
    FileNotFound { path: String },

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {message}")]
    Parse { message: String },

    /// A configuration value is out of range or malformed
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },
}

impl From<ConfigError> for DeskError {
    fn from(err: ConfigError) -> Self {
        DeskError::Config(err)
    }
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::Parse {
            message: err.to_string(),
        }
    }
}

// =============================================================================
// Result type alias
// =============================================================================

/// A specialized Result type for data-layer operations
pub type DeskResult<T> = Result<T, DeskError>;
