//! Farm references.
//!
//! The store returns foreign keys in expanded form (`{Id, Name}`) on reads but
//! expects a bare integer on writes. The expanded shape lives here; write-side
//! payload shaping keeps the integer.

use serde::{Deserialize, Serialize};

use crate::id::RecordId;

/// Expanded farm reference as returned by relational expansion on reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FarmRef {
    #[serde(rename = "Id")]
    pub id: RecordId,
    #[serde(rename = "Name")]
    pub name: String,
}

/// A farm choice offered by the farm-listing collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FarmSummary {
    #[serde(rename = "Id")]
    pub id: RecordId,
    #[serde(rename = "Name")]
    pub name: String,
}
