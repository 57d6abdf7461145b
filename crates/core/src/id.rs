//! Strongly-typed identifiers used across the domain.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::InventoryError;

/// Identifier of a record in the remote store.
///
/// Assigned by the store on create; the client never invents one. On update
/// the client echoes it back as a bare integer.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(i64);

impl RecordId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl core::fmt::Display for RecordId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<i64> for RecordId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<RecordId> for i64 {
    fn from(value: RecordId) -> Self {
        value.0
    }
}

impl FromStr for RecordId {
    type Err = InventoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s
            .trim()
            .parse::<i64>()
            .map_err(|e| InventoryError::local_validation("id", format!("RecordId: {e}")))?;
        Ok(Self(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_from_trimmed_string() {
        let id: RecordId = " 42 ".parse().unwrap();
        assert_eq!(id, RecordId::new(42));
    }

    #[test]
    fn rejects_non_numeric() {
        let err = "seven".parse::<RecordId>().unwrap_err();
        match err {
            InventoryError::LocalValidation { .. } => {}
            other => panic!("expected LocalValidation, got {other:?}"),
        }
    }
}
