//! `farmdesk-inventory` — inventory access layer.
//!
//! Translates between the application's record shape and the store's wire
//! shape, and aggregates partial failures from batch operations into a single
//! outcome per call. Stateless beyond the injected store handle; no caching.

pub mod farm;
pub mod record;
pub mod service;

pub use farm::{FarmDirectory, FarmService};
pub use record::{InventoryDraft, InventoryRecord};
pub use service::InventoryService;
