// ── Transient notifications ──
//
// A single notification slot. Publishing replaces whatever is shown and
// restarts the visibility window; the slot clears itself when the window
// elapses unless something newer has been published meanwhile.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use arc_swap::ArcSwap;
use chrono::{DateTime, Utc};
use serde::Serialize;
use strum::Display;
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Notification flavor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Success,
    Error,
}

/// A transient status message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    /// Monotonic publish order; identifies this notification.
    pub seq: u64,
    pub message: String,
    pub kind: NotificationKind,
    pub issued_at: DateTime<Utc>,
}

impl Notification {
    pub fn is_error(&self) -> bool {
        self.kind == NotificationKind::Error
    }
}

/// Handle to the notification slot. Cheap to clone.
#[derive(Clone)]
pub struct Notifier {
    inner: Arc<NotifierInner>,
}

struct NotifierInner {
    slot: watch::Sender<Option<Notification>>,
    seq: AtomicU64,
    /// Highest seq ever shown. Only touched under the slot's write lock.
    published: AtomicU64,
    /// Cancels the expiry timer of the notification currently shown.
    expiry: ArcSwap<CancellationToken>,
    ttl: Duration,
}

impl Notifier {
    pub fn new(ttl: Duration) -> Self {
        let (slot, _) = watch::channel(None);
        Self {
            inner: Arc::new(NotifierInner {
                slot,
                seq: AtomicU64::new(0),
                published: AtomicU64::new(0),
                expiry: ArcSwap::from_pointee(CancellationToken::new()),
                ttl,
            }),
        }
    }

    /// Publish a notification, replacing the current one.
    ///
    /// Concurrent publishers race for the slot; the highest seq wins and
    /// an older one that arrives late is dropped. Must be called inside
    /// a Tokio runtime for the notification to expire on its own;
    /// outside one it stays until replaced or dismissed.
    pub fn notify(&self, message: impl Into<String>, kind: NotificationKind) -> Notification {
        let notification = Notification {
            seq: self.inner.seq.fetch_add(1, Ordering::SeqCst) + 1,
            message: message.into(),
            kind,
            issued_at: Utc::now(),
        };
        debug!(seq = notification.seq, %kind, message = %notification.message, "notification");
        self.publish(&notification);
        notification
    }

    pub fn success(&self, message: impl Into<String>) -> Notification {
        self.notify(message, NotificationKind::Success)
    }

    pub fn error(&self, message: impl Into<String>) -> Notification {
        self.notify(message, NotificationKind::Error)
    }

    /// The notification currently shown, if any.
    pub fn current(&self) -> Option<Notification> {
        self.inner.slot.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<Option<Notification>> {
        self.inner.slot.subscribe()
    }

    /// Clear the slot immediately.
    pub fn dismiss(&self) {
        self.inner.slot.send_if_modified(|slot| {
            self.inner.expiry.load().cancel();
            slot.take().is_some()
        });
    }

    pub fn ttl(&self) -> Duration {
        self.inner.ttl
    }

    /// Show `notification` unless something newer was already shown.
    ///
    /// The seq check, the timer hand-over and the slot write happen under
    /// one write lock, so the slot and the live timer always agree.
    fn publish(&self, notification: &Notification) -> bool {
        let inner = &self.inner;
        inner.slot.send_if_modified(|slot| {
            if notification.seq <= inner.published.load(Ordering::SeqCst) {
                debug!(seq = notification.seq, "superseded before shown; dropped");
                return false;
            }
            inner.published.store(notification.seq, Ordering::SeqCst);

            let token = CancellationToken::new();
            inner.expiry.swap(Arc::new(token.clone())).cancel();
            *slot = Some(notification.clone());
            self.schedule_expiry(notification.seq, token);
            true
        })
    }

    fn schedule_expiry(&self, seq: u64, token: CancellationToken) {
        let Ok(handle) = tokio::runtime::Handle::try_current() else {
            debug!(seq, "no runtime; notification will not expire");
            return;
        };

        let inner = Arc::clone(&self.inner);
        handle.spawn(async move {
            tokio::select! {
                biased;
                () = token.cancelled() => {}
                () = tokio::time::sleep(inner.ttl) => {
                    inner.slot.send_if_modified(|slot| {
                        if slot.as_ref().is_some_and(|n| n.seq == seq) {
                            *slot = None;
                            true
                        } else {
                            false
                        }
                    });
                }
            }
        });
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_NOTIFICATION_TTL)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const TTL: Duration = Duration::from_secs(3);

    /// Let spawned expiry tasks observe the advanced clock.
    async fn settle() {
        for _ in 0..4 {
            tokio::task::yield_now().await;
        }
    }

    #[tokio::test(start_paused = true)]
    async fn notification_expires_after_ttl() {
        let notifier = Notifier::new(TTL);
        notifier.success("Barber created");
        assert_eq!(notifier.current().unwrap().message, "Barber created");

        tokio::time::sleep(Duration::from_millis(2_900)).await;
        settle().await;
        assert!(notifier.current().is_some());

        tokio::time::sleep(Duration::from_millis(200)).await;
        settle().await;
        assert!(notifier.current().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn newer_notification_replaces_and_restarts_window() {
        let notifier = Notifier::new(TTL);
        notifier.success("first");

        tokio::time::sleep(Duration::from_secs(2)).await;
        notifier.error("second");

        // Past the first notification's window but inside the second's.
        tokio::time::sleep(Duration::from_secs(2)).await;
        settle().await;
        let shown = notifier.current().unwrap();
        assert_eq!(shown.message, "second");
        assert!(shown.is_error());

        tokio::time::sleep(Duration::from_millis(1_100)).await;
        settle().await;
        assert!(notifier.current().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn dismiss_clears_immediately() {
        let notifier = Notifier::new(TTL);
        notifier.error("Failed to load barbers");
        notifier.dismiss();
        assert!(notifier.current().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn sequence_numbers_increase() {
        let notifier = Notifier::new(TTL);
        let a = notifier.success("a");
        let b = notifier.success("b");
        assert!(b.seq > a.seq);
        assert_eq!(notifier.current().unwrap().seq, b.seq);
    }

    #[test]
    fn without_runtime_notification_persists() {
        let notifier = Notifier::new(TTL);
        notifier.success("kept");
        assert_eq!(notifier.current().unwrap().message, "kept");
        assert_eq!(notifier.ttl(), TTL);
    }

    fn with_seq(seq: u64, message: &str) -> Notification {
        Notification {
            seq,
            message: message.into(),
            kind: NotificationKind::Success,
            issued_at: Utc::now(),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn late_older_notification_is_dropped() {
        let notifier = Notifier::new(TTL);
        assert!(notifier.publish(&with_seq(2, "newer")));
        assert!(!notifier.publish(&with_seq(1, "older")));
        assert_eq!(notifier.current().unwrap().message, "newer");

        tokio::time::sleep(Duration::from_millis(3_100)).await;
        settle().await;
        assert!(notifier.current().is_none());

        // Still rejected once the slot is empty again.
        assert!(!notifier.publish(&with_seq(1, "older")));
        assert!(notifier.current().is_none());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_publishers_always_expire() {
        const SHORT: Duration = Duration::from_millis(20);

        for round in 0..50 {
            let notifier = Notifier::new(SHORT);
            let publishers: Vec<_> = (0..8)
                .map(|task| {
                    let notifier = notifier.clone();
                    tokio::spawn(async move {
                        for i in 0..50 {
                            notifier.success(format!("{task}-{i}"));
                            if i % 10 == 0 {
                                tokio::task::yield_now().await;
                            }
                        }
                    })
                })
                .collect();
            for publisher in publishers {
                publisher.await.unwrap();
            }

            tokio::time::sleep(SHORT * 4).await;
            let stuck = notifier.current();
            assert!(stuck.is_none(), "round {round}: never expired: {stuck:?}");
        }
    }
}
