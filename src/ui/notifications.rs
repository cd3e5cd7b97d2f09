use std::fmt;
use std::time::Duration;

use tokio::sync::{mpsc, oneshot};

/// Severity of a transient notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotificationKind::Success => write!(f, "success"),
            NotificationKind::Error => write!(f, "error"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

/// A notification waiting to be shown
///
/// The presenter calls `dismiss` once the user has seen it. Dropping it
/// without dismissing counts as dismissed.
#[derive(Debug)]
pub struct PendingNotification {
    notification: Notification,
    dismissed: oneshot::Sender<()>,
}

impl PendingNotification {
    pub fn notification(&self) -> &Notification {
        &self.notification
    }

    pub fn dismiss(self) {
        // The view may have stopped waiting already
        let _ = self.dismissed.send(());
    }
}

pub type NotificationReceiver = mpsc::UnboundedReceiver<PendingNotification>;

/// How a raised notification stopped blocking the view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settled {
    Dismissed,
    TimedOut,
}

/// Returned by `Notifier::notify`; resolves when the notification is dismissed
/// or its display timeout elapses, whichever comes first
#[derive(Debug)]
pub struct NotificationHandle {
    dismissed: oneshot::Receiver<()>,
    timeout: Duration,
}

impl NotificationHandle {
    pub async fn settled(self) -> Settled {
        match tokio::time::timeout(self.timeout, self.dismissed).await {
            Ok(_) => Settled::Dismissed,
            Err(_) => Settled::TimedOut,
        }
    }
}

/// Sending side of the notification channel, shared by all views
#[derive(Debug, Clone)]
pub struct Notifier {
    sender: mpsc::UnboundedSender<PendingNotification>,
    timeout: Duration,
}

impl Notifier {
    /// Create a notifier and the receiver a presenter reads from
    pub fn channel(timeout: Duration) -> (Notifier, NotificationReceiver) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Notifier { sender, timeout }, receiver)
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn success(&self, message: impl Into<String>) -> NotificationHandle {
        self.notify(NotificationKind::Success, message)
    }

    pub fn error(&self, message: impl Into<String>) -> NotificationHandle {
        self.notify(NotificationKind::Error, message)
    }

    /// Raise a notification
    ///
    /// If no presenter is listening the handle settles immediately.
    pub fn notify(&self, kind: NotificationKind, message: impl Into<String>) -> NotificationHandle {
        let notification = Notification {
            kind,
            message: message.into(),
        };
        let (dismissed_tx, dismissed_rx) = oneshot::channel();

        tracing::debug!("Notification ({}): {}", kind, notification.message);

        if let Err(e) = self.sender.send(PendingNotification {
            notification,
            dismissed: dismissed_tx,
        }) {
            tracing::debug!("No presenter for notification: {}", e.0.notification.message);
        }

        NotificationHandle {
            dismissed: dismissed_rx,
            timeout: self.timeout,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_dismiss_settles_handle() {
        let (notifier, mut receiver) = Notifier::channel(Duration::from_secs(60));

        let handle = notifier.success("Item added successfully");
        let pending = receiver.recv().await.unwrap();
        assert_eq!(pending.notification().kind, NotificationKind::Success);
        assert_eq!(pending.notification().message, "Item added successfully");
        pending.dismiss();

        assert_eq!(handle.settled().await, Settled::Dismissed);
    }

    #[tokio::test(start_paused = true)]
    async fn test_timeout_settles_handle_without_dismissal() {
        let (notifier, mut receiver) = Notifier::channel(Duration::from_millis(3000));

        let handle = notifier.error("Failed to add item");
        let _pending = receiver.recv().await.unwrap();

        assert_eq!(handle.settled().await, Settled::TimedOut);
    }

    #[tokio::test]
    async fn test_dropped_receiver_settles_immediately() {
        let (notifier, receiver) = Notifier::channel(Duration::from_secs(60));
        drop(receiver);

        let handle = notifier.success("Item deleted successfully");

        assert_eq!(handle.settled().await, Settled::Dismissed);
    }
}
