use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

impl NotificationKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            NotificationKind::Success => "alert alert-success position-fixed",
            NotificationKind::Error => "alert alert-danger position-fixed",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

/// Transient, non-blocking notifications. Each entry removes itself after
/// the TTL through a deferred task.
#[derive(Clone)]
pub struct Notifier {
    entries: Arc<Mutex<Vec<(u64, Notification)>>>,
    next_id: Arc<AtomicU64>,
    ttl: Duration,
}

impl Notifier {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: Arc::new(Mutex::new(Vec::new())),
            next_id: Arc::new(AtomicU64::new(0)),
            ttl,
        }
    }

    pub fn push(&self, kind: NotificationKind, message: impl Into<String>) {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let notification = Notification {
            kind,
            message: message.into(),
        };
        self.entries.lock().unwrap().push((id, notification));

        let entries = Arc::clone(&self.entries);
        let ttl = self.ttl;
        tokio::spawn(async move {
            tokio::time::sleep(ttl).await;
            entries.lock().unwrap().retain(|(entry_id, _)| *entry_id != id);
        });
    }

    pub fn active(&self) -> Vec<Notification> {
        self.entries
            .lock()
            .unwrap()
            .iter()
            .map(|(_, notification)| notification.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn notifications_expire_after_the_ttl() {
        let notifier = Notifier::new(Duration::from_secs(3));
        notifier.push(NotificationKind::Success, "Producto creado exitosamente");
        assert_eq!(notifier.active().len(), 1);

        tokio::time::sleep(Duration::from_millis(3100)).await;
        assert!(notifier.active().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn newer_notifications_outlive_older_ones() {
        let notifier = Notifier::new(Duration::from_secs(3));
        notifier.push(NotificationKind::Error, "Error de conexión");

        tokio::time::sleep(Duration::from_secs(2)).await;
        notifier.push(NotificationKind::Success, "ok");

        tokio::time::sleep(Duration::from_millis(1500)).await;
        let active = notifier.active();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].message, "ok");
    }
}
