//! Notifier port for report delivery.

use async_trait::async_trait;

use crate::error::NotifyError;

/// Delivers a formatted report to an operator channel.
///
/// Implementations bind their credentials and timeout at construction and
/// perform exactly one delivery attempt per call. Retry policy belongs to the
/// caller.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Deliver `message`.
    ///
    /// # Errors
    ///
    /// Returns [`NotifyError::Transport`] on network failure or timeout and
    /// [`NotifyError::DeliveryRejected`] when the service answers non-2xx.
    async fn send(&self, message: &str) -> Result<(), NotifyError>;
}
