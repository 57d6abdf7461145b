//! The inventory workflow controller.
//!
//! Orchestrates load → filter → edit/create → submit → reload cycles. Owns
//! the in-memory list, the search term, and the form session. The displayed
//! list is always the latest confirmed server state: every successful
//! mutation triggers an unconditional full reload.

use std::sync::Arc;

use farmdesk_core::RecordId;
use farmdesk_inventory::{FarmDirectory, InventoryRecord, InventoryService};

use crate::form::InventoryForm;
use crate::notify::{ConfirmDelete, Notifier};

/// Why the list area is empty, so the view can pick the right affordance.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum EmptyState {
    /// Nothing in the table yet; show the "add first item" action.
    NoItems,
    /// Items exist but none match the current search term.
    NoMatches,
}

/// An open form: create mode when `editing` is none.
#[derive(Debug)]
pub struct FormSession {
    pub form: InventoryForm,
    editing: Option<InventoryRecord>,
    submitting: bool,
}

impl FormSession {
    pub fn editing(&self) -> Option<&InventoryRecord> {
        self.editing.as_ref()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }
}

pub struct InventoryWorkflow {
    service: InventoryService,
    farms: Arc<dyn FarmDirectory>,
    notifier: Arc<dyn Notifier>,
    confirm: Arc<dyn ConfirmDelete>,
    items: Vec<InventoryRecord>,
    search_term: String,
    list_loading: bool,
    load_error: Option<String>,
    form: Option<FormSession>,
}

impl InventoryWorkflow {
    pub fn new(
        service: InventoryService,
        farms: Arc<dyn FarmDirectory>,
        notifier: Arc<dyn Notifier>,
        confirm: Arc<dyn ConfirmDelete>,
    ) -> Self {
        Self {
            service,
            farms,
            notifier,
            confirm,
            items: Vec::new(),
            search_term: String::new(),
            list_loading: false,
            load_error: None,
            form: None,
        }
    }

    /// Reload the full list from the store.
    ///
    /// A load issued while one is pending is a no-op. On failure the user
    /// sees a generic message; the underlying error is logged only.
    pub async fn load(&mut self) {
        if self.list_loading {
            tracing::debug!("list load already in progress, ignoring");
            return;
        }
        self.list_loading = true;
        self.load_error = None;

        match self.service.list_all().await {
            Ok(items) => {
                self.items = items;
            }
            Err(e) => {
                tracing::error!(error = %e, "error loading inventory");
                self.load_error = Some("Failed to load inventory".to_string());
            }
        }

        self.list_loading = false;
    }

    pub fn is_loading(&self) -> bool {
        self.list_loading
    }

    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    pub fn items(&self) -> &[InventoryRecord] {
        &self.items
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Pure client-side re-filter; no server round-trip.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// The loaded list filtered by the current search term.
    ///
    /// Case-insensitive substring match against display name, item name,
    /// farm name, and unit of measure. An empty term returns the full list,
    /// order preserved.
    pub fn filtered_items(&self) -> Vec<&InventoryRecord> {
        if self.search_term.trim().is_empty() {
            return self.items.iter().collect();
        }

        let needle = self.search_term.to_lowercase();
        self.items
            .iter()
            .filter(|item| {
                item.display_name.to_lowercase().contains(&needle)
                    || item.item_name.to_lowercase().contains(&needle)
                    || item
                        .farm
                        .as_ref()
                        .is_some_and(|f| f.name.to_lowercase().contains(&needle))
                    || item.unit_of_measure.to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// Which empty-state to show, when the filtered list is empty.
    pub fn empty_state(&self) -> Option<EmptyState> {
        if !self.filtered_items().is_empty() {
            return None;
        }
        if self.items.is_empty() {
            Some(EmptyState::NoItems)
        } else {
            Some(EmptyState::NoMatches)
        }
    }

    pub fn form(&self) -> Option<&FormSession> {
        self.form.as_ref()
    }

    pub fn form_mut(&mut self) -> Option<&mut FormSession> {
        self.form.as_mut()
    }

    /// Open the form in create mode.
    pub async fn open_create(&mut self) {
        let form = InventoryForm::open(self.farms.as_ref(), None).await;
        self.form = Some(FormSession {
            form,
            editing: None,
            submitting: false,
        });
    }

    /// Open the form in edit mode, pre-filled from the record.
    pub async fn open_edit(&mut self, record: InventoryRecord) {
        let form = InventoryForm::open(self.farms.as_ref(), Some(&record)).await;
        self.form = Some(FormSession {
            form,
            editing: Some(record),
            submitting: false,
        });
    }

    /// Close the form without a network call.
    pub fn cancel_form(&mut self) {
        self.form = None;
    }

    /// Validate and submit the open form.
    ///
    /// Local validation failures stay inline and never reach the network. On
    /// success the form closes, a notification fires once, and the list
    /// reloads. On failure the form stays open so the user can retry.
    pub async fn submit_form(&mut self) {
        let Some(session) = self.form.as_mut() else {
            return;
        };
        if session.submitting {
            tracing::debug!("form submit already in progress, ignoring");
            return;
        }
        let Some(draft) = session.form.submit() else {
            return;
        };
        session.submitting = true;
        let editing_id = session.editing.as_ref().map(|r| r.id);

        let result = match editing_id {
            Some(id) => self
                .service
                .update(id, &draft)
                .await
                .map(|_| "Inventory item updated successfully"),
            None => self
                .service
                .create(&draft)
                .await
                .map(|_| "Inventory item created successfully"),
        };

        match result {
            Ok(message) => {
                self.notifier.success(message);
                self.form = None;
                self.load().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "error saving inventory item");
                self.notifier.error(if editing_id.is_some() {
                    "Failed to update inventory item"
                } else {
                    "Failed to create inventory item"
                });
                if let Some(session) = self.form.as_mut() {
                    session.submitting = false;
                }
            }
        }
    }

    /// Delete records after an explicit confirmation.
    ///
    /// A declined confirmation issues no call. A partial batch failure shows
    /// one generic notification and leaves the list as-is; the committed
    /// deletions become visible on the next reload.
    pub async fn delete(&mut self, ids: &[RecordId]) {
        if self.list_loading || ids.is_empty() {
            return;
        }

        let prompt = match ids {
            [id] => {
                let label = self
                    .items
                    .iter()
                    .find(|r| r.id == *id)
                    .map(|r| {
                        if r.item_name.is_empty() {
                            r.display_name.clone()
                        } else {
                            r.item_name.clone()
                        }
                    })
                    .unwrap_or_else(|| id.to_string());
                format!("Are you sure you want to delete \"{label}\"?")
            }
            many => format!("Are you sure you want to delete {} items?", many.len()),
        };

        if !self.confirm.confirm(&prompt) {
            return;
        }

        match self.service.delete(ids).await {
            Ok(true) => {
                self.notifier.success("Inventory item deleted successfully");
                self.load().await;
            }
            Ok(false) => {
                tracing::error!("inventory delete did not remove every requested record");
                self.notifier.error("Failed to delete inventory item");
            }
            Err(e) => {
                tracing::error!(error = %e, "error deleting inventory item");
                self.notifier.error("Failed to delete inventory item");
            }
        }
    }
}
