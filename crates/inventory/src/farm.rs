//! Farm-listing collaborator.
//!
//! The inventory form only needs the farm choices; the trait keeps that
//! dependency narrow and lets tests inject a canned list.

use std::sync::Arc;

use farmdesk_core::{FarmSummary, InventoryError, InventoryResult};
use farmdesk_store::{FetchParams, FieldSpec, OrderBy, RecordStore};

const FARM_TABLE: &str = "farm_c";

/// Read access to the farm catalogue.
#[async_trait::async_trait]
pub trait FarmDirectory: Send + Sync {
    /// All farms, ordered by name.
    async fn get_all(&self) -> InventoryResult<Vec<FarmSummary>>;
}

/// Store-backed farm directory.
pub struct FarmService {
    store: Arc<dyn RecordStore>,
}

impl FarmService {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }
}

#[async_trait::async_trait]
impl FarmDirectory for FarmService {
    async fn get_all(&self) -> InventoryResult<Vec<FarmSummary>> {
        let params = FetchParams {
            fields: vec![FieldSpec::named("Id"), FieldSpec::named("Name")],
            order_by: Some(vec![OrderBy::ascending("Name")]),
        };

        let response = self
            .store
            .fetch_records(FARM_TABLE, params)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "fetch farms request failed");
                InventoryError::request_failed(e.to_string())
            })?;

        if !response.success {
            let message = response
                .message
                .unwrap_or_else(|| "unspecified store failure".to_string());
            tracing::error!(%message, "fetch farms rejected by store");
            return Err(InventoryError::request_failed(message));
        }

        response
            .data
            .unwrap_or_default()
            .into_iter()
            .map(|record| {
                serde_json::from_value(serde_json::Value::Object(record))
                    .map_err(|e| InventoryError::request_failed(format!("malformed farm: {e}")))
            })
            .collect()
    }
}
