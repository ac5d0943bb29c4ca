//! Alert delivery.
//!
//! The due-loan check renders a [`loans::Notification`] and hands it to a
//! [`Notifier`], which delivers it to whoever watches the library.

/// Notifier held in process memory.
pub mod memory;

/// Notifier publishing to an SNS topic.
pub mod sns;

pub use memory::MemoryNotifier;
pub use sns::SnsNotifier;

use crate::{Result, loans};

/// Delivery of rendered alerts.
#[async_trait::async_trait]
pub trait Notifier: Send + Sync {
    /// Deliver `notification` once.
    async fn publish(&self, notification: &loans::Notification) -> Result<()>;
}
