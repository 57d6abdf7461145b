//! The inventory access layer.

use std::sync::Arc;

use farmdesk_core::{InventoryError, InventoryResult, RecordId};
use farmdesk_store::{
    DeleteRequest, DeleteResult, FetchParams, FieldSpec, GetParams, OrderBy, RecordStore,
    StoreError, WriteRequest, WriteResult,
};

use crate::record::{InventoryDraft, InventoryRecord};

const TABLE: &str = "inventory_c";

/// Field projection requested on every read.
const READ_FIELDS: [&str; 8] = [
    "Id",
    "Name",
    "item_name_c",
    "quantity_c",
    "unit_of_measure_c",
    "farm_id_c",
    "expiration_date_c",
    "Tags",
];

/// CRUD proxy for the `inventory_c` table.
///
/// Stateless beyond the injected store handle; every call is a fresh round
/// trip (no caching, the caller reloads after mutations).
pub struct InventoryService {
    store: Arc<dyn RecordStore>,
}

impl InventoryService {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    fn read_projection() -> Vec<FieldSpec> {
        READ_FIELDS.iter().copied().map(FieldSpec::named).collect()
    }

    /// All records, ascending by display name.
    pub async fn list_all(&self) -> InventoryResult<Vec<InventoryRecord>> {
        let params = FetchParams {
            fields: Self::read_projection(),
            order_by: Some(vec![OrderBy::ascending("Name")]),
        };

        let response = self
            .store
            .fetch_records(TABLE, params)
            .await
            .map_err(|e| transport_error("fetch inventory", e))?;

        if !response.success {
            return Err(envelope_error("fetch inventory", response.message));
        }

        response
            .data
            .unwrap_or_default()
            .into_iter()
            .map(InventoryRecord::from_wire)
            .collect()
    }

    /// One record by identifier.
    pub async fn get_by_id(&self, id: RecordId) -> InventoryResult<InventoryRecord> {
        let params = GetParams {
            fields: Self::read_projection(),
        };

        let response = self
            .store
            .get_record_by_id(TABLE, id, params)
            .await
            .map_err(|e| transport_error("fetch inventory record", e))?;

        if !response.success {
            let message = response.message.unwrap_or_default();
            if message.to_lowercase().contains("not found") {
                tracing::warn!(%id, "inventory record not found");
                return Err(InventoryError::not_found());
            }
            return Err(envelope_error("fetch inventory record", Some(message)));
        }

        match response.data {
            Some(record) => InventoryRecord::from_wire(record),
            None => {
                tracing::warn!(%id, "inventory record not found");
                Err(InventoryError::not_found())
            }
        }
    }

    /// Create as a one-element batch; the contract supports larger batches.
    pub async fn create(&self, draft: &InventoryDraft) -> InventoryResult<Vec<InventoryRecord>> {
        let request = WriteRequest {
            records: vec![draft.to_wire()],
        };

        let response = self
            .store
            .create_records(TABLE, request)
            .await
            .map_err(|e| transport_error("create inventory", e))?;

        if !response.success {
            return Err(envelope_error("create inventory", response.message));
        }

        let results = response.results.unwrap_or_default();
        if let Some(err) = first_write_failure("create inventory", &results) {
            return Err(err);
        }
        successful_payloads(results)
    }

    /// Update with the identifier embedded as an integer in the record.
    pub async fn update(
        &self,
        id: RecordId,
        draft: &InventoryDraft,
    ) -> InventoryResult<Vec<InventoryRecord>> {
        let request = WriteRequest {
            records: vec![draft.to_wire_with_id(id)],
        };

        let response = self
            .store
            .update_records(TABLE, request)
            .await
            .map_err(|e| transport_error("update inventory", e))?;

        if !response.success {
            return Err(envelope_error("update inventory", response.message));
        }

        let results = response.results.unwrap_or_default();
        if let Some(err) = first_write_failure("update inventory", &results) {
            return Err(err);
        }
        successful_payloads(results)
    }

    /// Delete one record.
    pub async fn delete_one(&self, id: RecordId) -> InventoryResult<bool> {
        self.delete(&[id]).await
    }

    /// Delete a batch of records.
    ///
    /// Identifiers are deduplicated first (first occurrence wins); the success
    /// comparison uses the deduplicated count. Returns `true` only when every
    /// requested deletion succeeded. A failure carrying a message errors
    /// instead, even though other deletions in the batch already took effect
    /// (non-atomic batch semantics).
    pub async fn delete(&self, ids: &[RecordId]) -> InventoryResult<bool> {
        let mut record_ids: Vec<i64> = Vec::with_capacity(ids.len());
        for id in ids {
            let raw = id.as_i64();
            if !record_ids.contains(&raw) {
                record_ids.push(raw);
            }
        }
        let requested = record_ids.len();

        let response = self
            .store
            .delete_records(TABLE, DeleteRequest { record_ids })
            .await
            .map_err(|e| transport_error("delete inventory", e))?;

        if !response.success {
            return Err(envelope_error("delete inventory", response.message));
        }

        let results = response.results.unwrap_or_default();
        let (succeeded, failed): (Vec<&DeleteResult>, Vec<&DeleteResult>) =
            results.iter().partition(|r| r.success);

        if !failed.is_empty() {
            tracing::error!(
                failed = failed.len(),
                requested,
                "failed to delete inventory records"
            );
            if let Some(message) = failed.iter().find_map(|r| r.message.as_deref()) {
                return Err(InventoryError::request_failed(message));
            }
        }

        Ok(succeeded.len() == requested)
    }
}

fn transport_error(op: &str, err: StoreError) -> InventoryError {
    tracing::error!(error = %err, "{op} request failed");
    InventoryError::request_failed(err.to_string())
}

fn envelope_error(op: &str, message: Option<String>) -> InventoryError {
    let message = message.unwrap_or_else(|| "unspecified store failure".to_string());
    tracing::error!(%message, "{op} rejected by store");
    InventoryError::request_failed(message)
}

/// First-failure-wins aggregation for batch writes.
///
/// Surfaces the first field-level error of the first failed record in
/// submission order; a failed record without field errors contributes its
/// message instead; a failed record with neither is skipped in favor of the
/// next. A batch with any failure always errors, even when other records in
/// it succeeded.
fn first_write_failure(op: &str, results: &[WriteResult]) -> Option<InventoryError> {
    let failed: Vec<&WriteResult> = results.iter().filter(|r| !r.success).collect();
    if failed.is_empty() {
        return None;
    }

    tracing::error!(failed = failed.len(), "{op} reported per-record failures");

    for record in &failed {
        if let Some(first) = record.errors.as_ref().and_then(|errs| errs.first()) {
            return Some(InventoryError::field_validation(
                &first.field_label,
                &first.message,
            ));
        }
        if let Some(message) = &record.message {
            return Some(InventoryError::request_failed(message));
        }
    }

    Some(InventoryError::request_failed(
        "batch operation failed without detail",
    ))
}

fn successful_payloads(results: Vec<WriteResult>) -> InventoryResult<Vec<InventoryRecord>> {
    results
        .into_iter()
        .filter(|r| r.success)
        .filter_map(|r| r.data)
        .map(InventoryRecord::from_wire)
        .collect()
}
