//! User-notification collaborators.
//!
//! The real UI surfaces toasts and a modal confirm dialog; this crate only
//! depends on the two narrow traits so the workflow stays testable.

use std::io::{BufRead, Write};

/// Toast-style notification sink.
pub trait Notifier: Send + Sync {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}

/// Synchronous yes/no confirmation before destructive actions.
pub trait ConfirmDelete: Send + Sync {
    fn confirm(&self, prompt: &str) -> bool;
}

/// Notifier that writes to the log instead of a toast surface.
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn success(&self, message: &str) {
        tracing::info!("{message}");
    }

    fn error(&self, message: &str) {
        tracing::warn!("{message}");
    }
}

/// Terminal confirmation prompt for the smoke binary.
pub struct StdoutConfirm;

impl ConfirmDelete for StdoutConfirm {
    fn confirm(&self, prompt: &str) -> bool {
        print!("{prompt} [y/N] ");
        if std::io::stdout().flush().is_err() {
            return false;
        }
        let mut answer = String::new();
        if std::io::stdin().lock().read_line(&mut answer).is_err() {
            return false;
        }
        matches!(answer.trim(), "y" | "Y" | "yes")
    }
}
