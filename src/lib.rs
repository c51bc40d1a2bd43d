//! # Courier Console
//!
//! Client-side data layer of the delivery platform's admin dashboard.
//!
//! ## Features
//!
//! - **Typed records**: customers, vendors, delivery partners, orders, payouts,
//!   shifts, zones, alerts, stats, quick actions and support tickets
//! - **Store modules**: one per collection, with loading/error state, search
//!   term and filters, and change notifications
//! - **Derived views**: pure search and filter selectors over a collection
//! - **Uniform errors**: every failed REST call names its operation, path and cause
//! - **Configuration-Based**: base URL and timeout from YAML or the environment
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use courier::prelude::*;
//!
//! let config = DeskConfig::default_config().with_env_overrides()?;
//! let dashboard = Dashboard::from_config(&config)?;
//!
//! dashboard.users.fetch_all(&QueryParams::new()).await?;
//! dashboard.users.set_search_term("john");
//!
//! match dashboard.users.view() {
//!     ListView::Populated(users) => println!("{} customers", users.len()),
//!     ListView::Empty { .. } => println!("{}", ListView::<User>::empty_message(false)),
//!     ListView::Error { message } => eprintln!("{}", message),
//!     ListView::Loading => {}
//! }
//! ```

pub mod client;
pub mod config;
pub mod core;
pub mod dashboard;
pub mod entities;
pub mod storage;
pub mod store;
pub mod telemetry;
pub mod view;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core Traits ===
    pub use crate::core::{
        entity::{Data, Entity, EntityId},
        field::{FieldValue, IntoFieldValue},
        selector::{FilteredView, select_filtered},
        service::{DataService, ResourceService},
    };

    // === Core Types ===
    pub use crate::core::{
        AlertLevel, ApiError, ApiErrorCause, DeskError, DeskResult, Filters, Icon, Pagination,
        PaginationUpdate, Priority, QueryParams, RecordPatch, Status, Tone, ValidationError,
    };

    // === Macros ===
    pub use crate::impl_record;

    // === Records ===
    pub use crate::entities::{
        Alert, ChartData, ChartSeries, DeliveryPartner, DeliveryPartnerDraft, DeliveryZone,
        IssueType, Order, OrderDraft, Payout, QuickAction, ScheduleDay, Shift, StatCard,
        SupportSummary, SupportTicket, User, UserDraft, Vendor, VendorCompliance, VendorDraft,
    };

    // === Client & Storage ===
    pub use crate::client::{ApiClient, Endpoint, RestDataService, RestResource};
    pub use crate::storage::{InMemoryDataService, StaticResource};

    // === Stores & Views ===
    pub use crate::dashboard::{Dashboard, RefreshReport, SupportStores};
    pub use crate::store::{EntityStore, LoadState, ResourceStore, StoreSnapshot};
    pub use crate::view::{Badge, DeleteRequest, DocumentView, ListView};

    // === Config ===
    pub use crate::config::{ClientConfig, DeskConfig, LoggingConfig};
    pub use crate::telemetry::init_tracing;

    // === External dependencies ===
    pub use async_trait::async_trait;
    pub use serde::{Deserialize, Serialize};
}
