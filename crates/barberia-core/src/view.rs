// ── Display projections ──
//
// Read-only derivations of store snapshots for presentation: ordering,
// filtering, formatting and the dashboard counters.

use std::cmp::Ordering;
use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

use crate::model::{Appointment, Barber, EntityId};
use crate::store::DataStore;

/// Shown in place of a missing client or barber name.
pub const UNKNOWN_PARTY: &str = "Unknown";

const DATE_FORMAT: &str = "%d/%m/%Y";
const TIME_FORMAT: &str = "%H:%M";
const MISSING: &str = "-";

/// Appointments newest first. Appointments without a readable start go last.
pub fn appointments_by_start_desc(appointments: &[Arc<Appointment>]) -> Vec<Arc<Appointment>> {
    let mut sorted = appointments.to_vec();
    sorted.sort_by(|a, b| match (a.start, b.start) {
        (Some(x), Some(y)) => y.cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
    sorted
}

/// Barbers currently accepting bookings.
pub fn active_barbers(barbers: &[Arc<Barber>]) -> Vec<Arc<Barber>> {
    barbers.iter().filter(|b| b.active).cloned().collect()
}

fn format_or_missing(value: Option<NaiveDateTime>, fmt: &str) -> String {
    value.map_or_else(|| MISSING.to_owned(), |v| v.format(fmt).to_string())
}

/// One appointment formatted for a table or list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppointmentRow {
    pub id: EntityId,
    pub client: String,
    pub barber: String,
    /// `dd/mm/yyyy`
    pub date: String,
    /// `HH:MM`
    pub start: String,
    /// `HH:MM`
    pub end: String,
    pub status: String,
}

impl From<&Appointment> for AppointmentRow {
    fn from(a: &Appointment) -> Self {
        Self {
            id: a.id.clone(),
            client: a.client_name.clone().unwrap_or_else(|| UNKNOWN_PARTY.into()),
            barber: a.barber_name.clone().unwrap_or_else(|| UNKNOWN_PARTY.into()),
            date: format_or_missing(a.start, DATE_FORMAT),
            start: format_or_missing(a.start, TIME_FORMAT),
            end: format_or_missing(a.end, TIME_FORMAT),
            status: a
                .status
                .map_or_else(|| MISSING.to_owned(), |s| s.to_string()),
        }
    }
}

/// Dashboard counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DashboardSummary {
    pub active_barbers: usize,
    pub clients: usize,
    /// Appointments starting on the given day.
    pub appointments_today: usize,
    pub appointments_total: usize,
}

impl DashboardSummary {
    /// Summarize the store as of `today` (the caller's local date).
    pub fn from_store(store: &DataStore, today: NaiveDate) -> Self {
        let barbers = store.barbers_snapshot();
        let appointments = store.appointments_snapshot();

        Self {
            active_barbers: barbers.iter().filter(|b| b.active).count(),
            clients: store.client_count(),
            appointments_today: appointments
                .iter()
                .filter(|a| a.start.is_some_and(|s| s.date() == today))
                .count(),
            appointments_total: appointments.len(),
        }
    }
}
