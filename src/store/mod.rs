//! Store modules: client-side state for every dashboard collection and document

pub mod entity_store;
pub mod resource_store;
pub mod state;

pub use entity_store::EntityStore;
pub use resource_store::ResourceStore;
pub use state::{LoadState, ResourceSnapshot, StoreSnapshot};
