// ── Central data store ──
//
// Holds the three booking collections plus reload bookkeeping.
// Every replacement is broadcast to subscribers via `watch` channels.

use std::sync::Arc;
use std::sync::atomic::AtomicU64;

use chrono::{DateTime, Utc};
use serde::Serialize;
use strum::Display;
use tokio::sync::watch;

use super::collection::SnapshotCollection;
use crate::model::{Appointment, Barber, Client, EntityId};
use crate::stream::{EntityStream, Snapshot};

/// Where the store is in its reload cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, Serialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum LoadState {
    /// Nothing requested yet.
    #[default]
    Idle,
    /// A reload is in flight.
    Loading,
    /// At least one reload has been applied.
    Loaded,
}

/// Reactive store for barbers, clients and appointments.
///
/// Collections start empty and are only replaced wholesale by a full
/// reload. Readers get cheap `Arc` snapshots and never observe a
/// half-applied reload of a single collection.
pub struct DataStore {
    pub(crate) barbers: SnapshotCollection<Barber>,
    pub(crate) clients: SnapshotCollection<Client>,
    pub(crate) appointments: SnapshotCollection<Appointment>,
    pub(crate) load_state: watch::Sender<LoadState>,
    /// Ticket of the most recently started reload.
    pub(crate) generation: AtomicU64,
    pub(crate) last_full_refresh: watch::Sender<Option<DateTime<Utc>>>,
}

impl DataStore {
    pub fn new() -> Self {
        let (load_state, _) = watch::channel(LoadState::Idle);
        let (last_full_refresh, _) = watch::channel(None);

        Self {
            barbers: SnapshotCollection::new(),
            clients: SnapshotCollection::new(),
            appointments: SnapshotCollection::new(),
            load_state,
            generation: AtomicU64::new(0),
            last_full_refresh,
        }
    }

    // ── Snapshot accessors ───────────────────────────────────────────

    pub fn barbers_snapshot(&self) -> Snapshot<Barber> {
        self.barbers.snapshot()
    }

    pub fn clients_snapshot(&self) -> Snapshot<Client> {
        self.clients.snapshot()
    }

    pub fn appointments_snapshot(&self) -> Snapshot<Appointment> {
        self.appointments.snapshot()
    }

    // ── Single-entity lookups ────────────────────────────────────────

    pub fn barber_by_id(&self, id: &EntityId) -> Option<Arc<Barber>> {
        self.barbers.get_by_id(id)
    }

    pub fn client_by_id(&self, id: &EntityId) -> Option<Arc<Client>> {
        self.clients.get_by_id(id)
    }

    pub fn appointment_by_id(&self, id: &EntityId) -> Option<Arc<Appointment>> {
        self.appointments.get_by_id(id)
    }

    // ── Count accessors ──────────────────────────────────────────────

    pub fn barber_count(&self) -> usize {
        self.barbers.len()
    }

    pub fn client_count(&self) -> usize {
        self.clients.len()
    }

    pub fn appointment_count(&self) -> usize {
        self.appointments.len()
    }

    /// `true` when all three collections are empty.
    pub fn is_empty(&self) -> bool {
        self.barbers.is_empty() && self.clients.is_empty() && self.appointments.is_empty()
    }

    // ── Subscriptions ────────────────────────────────────────────────

    pub fn subscribe_barbers(&self) -> EntityStream<Barber> {
        EntityStream::new(self.barbers.subscribe())
    }

    pub fn subscribe_clients(&self) -> EntityStream<Client> {
        EntityStream::new(self.clients.subscribe())
    }

    pub fn subscribe_appointments(&self) -> EntityStream<Appointment> {
        EntityStream::new(self.appointments.subscribe())
    }

    pub fn subscribe_load_state(&self) -> watch::Receiver<LoadState> {
        self.load_state.subscribe()
    }

    // ── Metadata ─────────────────────────────────────────────────────

    pub fn load_state(&self) -> LoadState {
        *self.load_state.borrow()
    }

    pub fn last_full_refresh(&self) -> Option<DateTime<Utc>> {
        *self.last_full_refresh.borrow()
    }

    /// How long ago the last full refresh occurred, or `None` if never refreshed.
    pub fn data_age(&self) -> Option<chrono::Duration> {
        self.last_full_refresh().map(|t| Utc::now() - t)
    }
}

impl Default for DataStore {
    fn default() -> Self {
        Self::new()
    }
}
