//! Typed inventory records and the boundary translation to/from wire maps.

use farmdesk_core::{FarmRef, InventoryError, InventoryResult, RecordId};
use farmdesk_store::WireRecord;
use serde::{Deserialize, Deserializer, Serialize};

fn null_to_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// An inventory record as read from the store.
///
/// `farm` is the read-side *expanded* reference (`{Id, Name}`); writes never
/// send this shape, only a bare integer (see [`InventoryDraft`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryRecord {
    #[serde(rename = "Id")]
    pub id: RecordId,
    /// Mirrors the item name unless explicitly overridden; default sort key.
    #[serde(rename = "Name", default, deserialize_with = "null_to_default")]
    pub display_name: String,
    #[serde(rename = "item_name_c", default, deserialize_with = "null_to_default")]
    pub item_name: String,
    #[serde(rename = "quantity_c", default, deserialize_with = "null_to_default")]
    pub quantity: i64,
    #[serde(rename = "unit_of_measure_c", default, deserialize_with = "null_to_default")]
    pub unit_of_measure: String,
    #[serde(rename = "farm_id_c", default)]
    pub farm: Option<FarmRef>,
    /// ISO date string; absent means "no expiration".
    #[serde(rename = "expiration_date_c", default)]
    pub expiration_date: Option<String>,
    /// Comma-separated free-text labels.
    #[serde(rename = "Tags", default, deserialize_with = "null_to_default")]
    pub tags: String,
}

impl InventoryRecord {
    /// Translate one wire record into the typed shape.
    pub fn from_wire(record: WireRecord) -> InventoryResult<Self> {
        serde_json::from_value(serde_json::Value::Object(record))
            .map_err(|e| InventoryError::request_failed(format!("malformed record: {e}")))
    }
}

/// Editable fields of one record, normalized by the form.
///
/// This is the *write side*: `farm_id` is always a bare integer, never the
/// expanded reference the store hands back on reads.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InventoryDraft {
    /// Defaults to `item_name` when not explicitly overridden.
    pub display_name: Option<String>,
    pub item_name: String,
    /// Missing quantity is coerced to 0 on write.
    pub quantity: Option<i64>,
    pub unit_of_measure: String,
    pub farm_id: i64,
    pub expiration_date: Option<String>,
    pub tags: String,
}

impl InventoryDraft {
    /// Build the write payload: exactly the recognized editable fields,
    /// nothing else.
    pub fn to_wire(&self) -> WireRecord {
        let mut record = WireRecord::new();
        let name = self
            .display_name
            .clone()
            .unwrap_or_else(|| self.item_name.clone());
        record.insert("Name".into(), name.into());
        record.insert("item_name_c".into(), self.item_name.clone().into());
        record.insert("quantity_c".into(), self.quantity.unwrap_or(0).into());
        record.insert(
            "unit_of_measure_c".into(),
            self.unit_of_measure.clone().into(),
        );
        record.insert("farm_id_c".into(), self.farm_id.into());
        if let Some(date) = &self.expiration_date {
            record.insert("expiration_date_c".into(), date.clone().into());
        }
        record.insert("Tags".into(), self.tags.clone().into());
        record
    }

    /// Write payload for an update: the editable fields plus the integer `Id`.
    pub fn to_wire_with_id(&self, id: RecordId) -> WireRecord {
        let mut record = self.to_wire();
        record.insert("Id".into(), id.as_i64().into());
        record
    }
}
