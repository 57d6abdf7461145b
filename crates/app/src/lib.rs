//! `farmdesk-app` — the inventory screen, headless.
//!
//! This crate owns the workflow controller (list state, search filter, form
//! visibility), the form model with local validation, and the pure row
//! renderer. The actual widget toolkit, toast surface, and confirmation
//! dialog are external collaborators injected as traits.

pub mod form;
pub mod notify;
pub mod row;
pub mod workflow;

pub use form::{FormField, InventoryForm};
pub use notify::{ConfirmDelete, Notifier, StdoutConfirm, TracingNotifier};
pub use row::{
    BadgeVariant, EXPIRING_SOON_WINDOW_DAYS, ExpirationStatus, RowView, classify_expiration,
    render_row,
};
pub use workflow::{EmptyState, FormSession, InventoryWorkflow};
