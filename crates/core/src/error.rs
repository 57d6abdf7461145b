//! Shared error model for the inventory module.

use thiserror::Error;

/// Result type used across the inventory layers.
pub type InventoryResult<T> = Result<T, InventoryError>;

/// Normalized error surfaced by the access layer and the form.
///
/// Keep this focused on four cases: store failures, server-side field
/// rejections, missing records, and local form-rule violations. Transport
/// details are folded into `RequestFailed` before they reach a caller.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InventoryError {
    /// The store answered with a failure envelope (or the transport failed).
    #[error("request failed: {0}")]
    RequestFailed(String),

    /// The store rejected one or more submitted field values.
    #[error("{field_label}: {message}")]
    FieldValidation { field_label: String, message: String },

    /// A lookup by identifier returned nothing.
    #[error("record not found")]
    NotFound,

    /// A form-side rule violation; never reaches the network.
    #[error("{field}: {message}")]
    LocalValidation { field: String, message: String },
}

impl InventoryError {
    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self::RequestFailed(msg.into())
    }

    pub fn field_validation(field_label: impl Into<String>, message: impl Into<String>) -> Self {
        Self::FieldValidation {
            field_label: field_label.into(),
            message: message.into(),
        }
    }

    pub fn local_validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::LocalValidation {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }
}
