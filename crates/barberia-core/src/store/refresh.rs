// ── Full reload application ──
//
// A reload fetches all three collections and swaps them in together.
// Each reload takes a ticket up front; only the newest ticket may apply
// its results, so a slow, older reload cannot overwrite newer data.

use std::sync::atomic::Ordering;

use chrono::Utc;

use super::{DataStore, LoadState};
use crate::model::{Appointment, Barber, Client};

/// Ordering token handed out by [`DataStore::begin_reload`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ReloadTicket(pub(crate) u64);

impl ReloadTicket {
    pub fn generation(self) -> u64 {
        self.0
    }
}

/// The fetched result of one full reload.
#[derive(Debug, Default)]
pub struct StoreSnapshot {
    pub barbers: Vec<Barber>,
    pub clients: Vec<Client>,
    pub appointments: Vec<Appointment>,
}

impl DataStore {
    /// Mark a reload as started and issue its ticket.
    pub(crate) fn begin_reload(&self) -> ReloadTicket {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.load_state.send_replace(LoadState::Loading);
        ReloadTicket(generation)
    }

    /// Whether `ticket` is still the newest reload.
    pub(crate) fn is_current(&self, ticket: ReloadTicket) -> bool {
        self.generation.load(Ordering::SeqCst) == ticket.0
    }

    /// Replace all collections with `snapshot`.
    ///
    /// Returns `false` (and changes nothing) when a newer reload has been
    /// started since `ticket` was issued.
    pub(crate) fn apply_snapshot(&self, ticket: ReloadTicket, snapshot: StoreSnapshot) -> bool {
        if !self.is_current(ticket) {
            tracing::debug!(
                ticket = ticket.0,
                latest = self.generation.load(Ordering::SeqCst),
                "discarding stale reload"
            );
            return false;
        }

        self.barbers.replace(snapshot.barbers);
        self.clients.replace(snapshot.clients);
        self.appointments.replace(snapshot.appointments);

        self.last_full_refresh.send_replace(Some(Utc::now()));
        self.load_state.send_replace(LoadState::Loaded);
        true
    }
}
