//! The inventory form: collect, validate locally, normalize, hand off.

use std::collections::BTreeMap;

use farmdesk_core::{FarmSummary, UNIT_OPTIONS, UnitOption};
use farmdesk_inventory::{FarmDirectory, InventoryDraft, InventoryRecord};

/// An editable form field, used to key inline validation errors.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum FormField {
    ItemName,
    Quantity,
    UnitOfMeasure,
    Farm,
    ExpirationDate,
    Tags,
}

/// Form state for one record: raw field strings plus per-field errors.
///
/// All rules are evaluated together on submit; every violation is recorded
/// before any is reported. Nothing here touches the network except the farm
/// choices loaded at construction.
#[derive(Debug, Clone, Default)]
pub struct InventoryForm {
    pub item_name: String,
    pub quantity: String,
    pub unit_of_measure: String,
    pub farm_id: String,
    pub expiration_date: String,
    pub tags: String,
    farms: Vec<FarmSummary>,
    errors: BTreeMap<FormField, String>,
}

impl InventoryForm {
    /// Open the form, loading farm choices from the directory.
    ///
    /// A failure to load farms degrades to an empty choice set rather than
    /// blocking the form. When `editing` is given, all fields are pre-filled
    /// from the record, translating the expanded farm reference back to a
    /// bare identifier.
    pub async fn open(directory: &dyn FarmDirectory, editing: Option<&InventoryRecord>) -> Self {
        let farms = match directory.get_all().await {
            Ok(farms) => farms,
            Err(e) => {
                tracing::warn!(error = %e, "failed to load farms for inventory form");
                Vec::new()
            }
        };

        let mut form = Self {
            farms,
            ..Self::default()
        };

        if let Some(record) = editing {
            form.item_name = record.item_name.clone();
            form.quantity = record.quantity.to_string();
            form.unit_of_measure = record.unit_of_measure.clone();
            form.farm_id = record
                .farm
                .as_ref()
                .map(|f| f.id.to_string())
                .unwrap_or_default();
            form.expiration_date = record.expiration_date.clone().unwrap_or_default();
            form.tags = record.tags.clone();
        }

        form
    }

    /// Farm choices for the selection control.
    pub fn farms(&self) -> &[FarmSummary] {
        &self.farms
    }

    /// Unit choices for the selection control.
    pub fn unit_options(&self) -> &'static [UnitOption] {
        UNIT_OPTIONS
    }

    /// Update one field, clearing its inline error.
    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::ItemName => self.item_name = value,
            FormField::Quantity => self.quantity = value,
            FormField::UnitOfMeasure => self.unit_of_measure = value,
            FormField::Farm => self.farm_id = value,
            FormField::ExpirationDate => self.expiration_date = value,
            FormField::Tags => self.tags = value,
        }
        self.errors.remove(&field);
    }

    /// Inline error for one field, if any.
    pub fn error(&self, field: FormField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn errors(&self) -> &BTreeMap<FormField, String> {
        &self.errors
    }

    fn parsed_quantity(&self) -> Option<f64> {
        self.quantity.trim().parse::<f64>().ok()
    }

    fn parsed_farm_id(&self) -> Option<i64> {
        self.farm_id.trim().parse::<i64>().ok()
    }

    /// Evaluate all rules together; record every violation.
    pub fn validate(&mut self) -> bool {
        let mut errors = BTreeMap::new();

        if self.item_name.trim().is_empty() {
            errors.insert(FormField::ItemName, "Item name is required".to_string());
        }

        match self.parsed_quantity() {
            Some(q) if q > 0.0 => {}
            _ => {
                errors.insert(
                    FormField::Quantity,
                    "Quantity must be greater than 0".to_string(),
                );
            }
        }

        if self.unit_of_measure.trim().is_empty() {
            errors.insert(
                FormField::UnitOfMeasure,
                "Unit of measure is required".to_string(),
            );
        }

        if self.parsed_farm_id().is_none() {
            errors.insert(FormField::Farm, "Farm selection is required".to_string());
        }

        self.errors = errors;
        self.errors.is_empty()
    }

    /// Validate and, on success, build the normalized write payload.
    ///
    /// The display name mirrors the item name; quantity and farm id are
    /// parsed to integers. Returns `None` when validation failed, leaving the
    /// inline errors set.
    pub fn submit(&mut self) -> Option<InventoryDraft> {
        if !self.validate() {
            return None;
        }

        let item_name = self.item_name.trim().to_string();
        let expiration = self.expiration_date.trim();

        Some(InventoryDraft {
            display_name: Some(item_name.clone()),
            item_name,
            quantity: self.parsed_quantity().map(|q| q as i64),
            unit_of_measure: self.unit_of_measure.trim().to_string(),
            // Validation guarantees the parse; 0 is unreachable.
            farm_id: self.parsed_farm_id().unwrap_or(0),
            expiration_date: if expiration.is_empty() {
                None
            } else {
                Some(expiration.to_string())
            },
            tags: self.tags.clone(),
        })
    }
}
