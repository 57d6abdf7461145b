//! Farmdesk entry point: wire the composition root and show the inventory.

use std::sync::Arc;

use anyhow::bail;
use chrono::Utc;
use farmdesk_app::{InventoryWorkflow, StdoutConfirm, TracingNotifier, render_row};
use farmdesk_inventory::{FarmService, InventoryService};
use farmdesk_store::{HttpRecordStore, RecordStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    farmdesk_observability::init();

    let store_url =
        std::env::var("FARMDESK_STORE_URL").unwrap_or_else(|_| "http://localhost:8080".to_string());

    let store: Arc<dyn RecordStore> = match std::env::var("FARMDESK_STORE_TOKEN") {
        Ok(token) => {
            tracing::info!("connecting to record store with token");
            Arc::new(HttpRecordStore::with_token(store_url, token))
        }
        Err(_) => {
            tracing::info!("connecting to record store without token");
            Arc::new(HttpRecordStore::new(store_url))
        }
    };

    let service = InventoryService::new(store.clone());
    let farms = Arc::new(FarmService::new(store));

    let mut workflow = InventoryWorkflow::new(
        service,
        farms,
        Arc::new(TracingNotifier),
        Arc::new(StdoutConfirm),
    );

    workflow.load().await;
    if let Some(message) = workflow.load_error() {
        bail!("{message}");
    }

    let today = Utc::now().date_naive();
    for record in workflow.filtered_items() {
        let row = render_row(record, today);
        println!(
            "{:<30} {:<12} {:<20} {:<14} [{}]",
            row.item_label,
            row.quantity_display,
            row.farm_display,
            row.expiration_display,
            row.status.text()
        );
    }

    Ok(())
}
