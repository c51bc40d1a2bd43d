//! Core module containing fundamental traits and types for the data layer

pub mod entity;
pub mod error;
pub mod field;
pub mod query;
pub mod selector;
pub mod service;
pub mod status;
pub mod validation;

pub use entity::{Data, Entity, EntityId};
pub use error::{
    ApiError, ApiErrorCause, ConfigError, DeskError, DeskResult, FieldValidationError, Operation,
    ValidationError,
};
pub use field::{FieldValue, IntoFieldValue};
pub use query::{Filters, Pagination, PaginationUpdate, QueryParams, RecordPatch};
pub use selector::{FilteredView, select_filtered};
pub use service::{DataService, ResourceService};
pub use status::{AlertLevel, Icon, Priority, Status, Tone};
