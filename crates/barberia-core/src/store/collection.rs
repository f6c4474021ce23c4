// ── Snapshot collection ──
//
// One entity list held as an immutable snapshot. The list is only ever
// replaced wholesale; subscribers see every replacement.

use std::sync::Arc;

use tokio::sync::watch;

use crate::model::{Appointment, Barber, Client, EntityId};
use crate::stream::Snapshot;

/// Entities that carry a server-assigned id.
pub(crate) trait Identified {
    fn entity_id(&self) -> &EntityId;
}

impl Identified for Barber {
    fn entity_id(&self) -> &EntityId {
        &self.id
    }
}

impl Identified for Client {
    fn entity_id(&self) -> &EntityId {
        &self.id
    }
}

impl Identified for Appointment {
    fn entity_id(&self) -> &EntityId {
        &self.id
    }
}

/// A reactive, replace-only list of a single entity type.
pub(crate) struct SnapshotCollection<T: Send + Sync + 'static> {
    snapshot: watch::Sender<Snapshot<T>>,
}

impl<T: Send + Sync + 'static> SnapshotCollection<T> {
    pub(crate) fn new() -> Self {
        let (snapshot, _) = watch::channel(Arc::new(Vec::new()));
        Self { snapshot }
    }

    /// Swap in a new list. Order is preserved as given.
    pub(crate) fn replace(&self, items: Vec<T>) {
        let values: Vec<Arc<T>> = items.into_iter().map(Arc::new).collect();
        // `send_modify` updates unconditionally, even with zero receivers.
        self.snapshot.send_modify(|snap| *snap = Arc::new(values));
    }

    /// Get the current snapshot (cheap `Arc` clone).
    pub(crate) fn snapshot(&self) -> Snapshot<T> {
        self.snapshot.borrow().clone()
    }

    pub(crate) fn subscribe(&self) -> watch::Receiver<Snapshot<T>> {
        self.snapshot.subscribe()
    }

    pub(crate) fn clear(&self) {
        self.replace(Vec::new());
    }

    pub(crate) fn len(&self) -> usize {
        self.snapshot.borrow().len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.snapshot.borrow().is_empty()
    }
}

impl<T: Identified + Send + Sync + 'static> SnapshotCollection<T> {
    /// Linear lookup; collections are small and replaced wholesale.
    pub(crate) fn get_by_id(&self, id: &EntityId) -> Option<Arc<T>> {
        self.snapshot
            .borrow()
            .iter()
            .find(|item| item.entity_id() == id)
            .cloned()
    }
}
