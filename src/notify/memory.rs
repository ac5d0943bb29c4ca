use crate::{Error, Result, loans, notify};

use std::sync::RwLock;

/// [`notify::Notifier`] that keeps every published alert in memory.
#[derive(Debug, Default)]
pub struct MemoryNotifier {
    sent: RwLock<Vec<loans::Notification>>,
}

impl MemoryNotifier {
    /// Notifier with nothing published yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Alerts published so far, oldest first.
    pub fn sent(&self) -> Vec<loans::Notification> {
        self.sent
            .read()
            .map(|sent| sent.clone())
            .unwrap_or_default()
    }
}

#[async_trait::async_trait]
impl notify::Notifier for MemoryNotifier {
    async fn publish(&self, notification: &loans::Notification) -> Result<()> {
        self.sent
            .write()
            .map_err(|_| Error::Notify("alert log lock poisoned".to_string()))?
            .push(notification.clone());
        Ok(())
    }
}
