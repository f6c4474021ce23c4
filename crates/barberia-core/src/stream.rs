// ── Collection subscriptions ──
//
// Subscribers only ever observe whole-collection replacements: a reload
// swaps the entire list at once, so a snapshot is never half old, half new.

use std::sync::Arc;

use tokio::sync::watch;
use tokio_stream::wrappers::WatchStream;

/// An immutable view of one collection.
pub type Snapshot<T> = Arc<Vec<Arc<T>>>;

/// A subscription to one collection of the [`DataStore`](crate::DataStore).
pub struct EntityStream<T> {
    rx: watch::Receiver<Snapshot<T>>,
}

impl<T: Send + Sync + 'static> EntityStream<T> {
    pub(crate) fn new(rx: watch::Receiver<Snapshot<T>>) -> Self {
        Self { rx }
    }

    /// The newest snapshot. Marks it as seen.
    pub fn snapshot(&mut self) -> Snapshot<T> {
        Arc::clone(&self.rx.borrow_and_update())
    }

    /// Whether a replacement landed since the last [`snapshot`](Self::snapshot).
    pub fn has_changed(&self) -> bool {
        self.rx.has_changed().unwrap_or(false)
    }

    /// Wait for the next replacement.
    ///
    /// `None` once the store is gone.
    pub async fn next_snapshot(&mut self) -> Option<Snapshot<T>> {
        self.rx.changed().await.ok()?;
        Some(self.snapshot())
    }

    /// Yields the current snapshot first, then one per replacement.
    pub fn into_stream(self) -> WatchStream<Snapshot<T>> {
        WatchStream::new(self.rx)
    }
}
