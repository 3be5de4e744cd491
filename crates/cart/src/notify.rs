//! User-facing notification seam.
//!
//! Cart operations never panic and never return errors to the UI layer;
//! outcomes surface as transient notifications (toasts). The trait keeps
//! the store testable: production wires in [`TracingNotifier`], tests
//! inject a recorder.

/// Sink for user-facing notifications.
pub trait Notifier {
    /// A confirmation (e.g., "Item added to cart").
    fn success(&self, message: &str);

    /// A user-input problem (e.g., mutating with no signed-in user).
    fn warning(&self, message: &str);

    /// A failed remote operation the user must retry manually.
    fn error(&self, message: &str);
}

/// Notifier that logs through `tracing`.
///
/// Hosts embedding the store replace this with a real toast channel.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn success(&self, message: &str) {
        tracing::info!(notification = "success", "{message}");
    }

    fn warning(&self, message: &str) {
        tracing::warn!(notification = "warning", "{message}");
    }

    fn error(&self, message: &str) {
        tracing::error!(notification = "error", "{message}");
    }
}
