//! `farmdesk-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod error;
pub mod farm;
pub mod id;
pub mod units;

pub use error::{InventoryError, InventoryResult};
pub use farm::{FarmRef, FarmSummary};
pub use id::RecordId;
pub use units::{UNIT_OPTIONS, UnitOption, is_known_unit};
