use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use strum::Display;

use super::EntityId;

/// Lifecycle state reported by the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum AppointmentStatus {
    Scheduled,
    Cancelled,
    Completed,
    Unknown,
}

impl AppointmentStatus {
    /// Map the server's `estado` value. Unrecognized values become `Unknown`.
    pub fn from_wire(raw: &str) -> Self {
        match raw.trim().to_ascii_uppercase().as_str() {
            "AGENDADA" => Self::Scheduled,
            "CANCELADA" => Self::Cancelled,
            "COMPLETADA" => Self::Completed,
            _ => Self::Unknown,
        }
    }
}

/// A booked appointment.
///
/// Timestamps are local wall-clock times with no zone attached. A
/// timestamp the server sent in an unreadable shape is `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: EntityId,
    pub start: Option<NaiveDateTime>,
    pub end: Option<NaiveDateTime>,
    pub client_id: Option<EntityId>,
    pub client_name: Option<String>,
    pub barber_id: Option<EntityId>,
    pub barber_name: Option<String>,
    pub status: Option<AppointmentStatus>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_from_wire() {
        assert_eq!(AppointmentStatus::from_wire("AGENDADA"), AppointmentStatus::Scheduled);
        assert_eq!(AppointmentStatus::from_wire("cancelada"), AppointmentStatus::Cancelled);
        assert_eq!(AppointmentStatus::from_wire("COMPLETADA"), AppointmentStatus::Completed);
        assert_eq!(AppointmentStatus::from_wire("NO_SHOW"), AppointmentStatus::Unknown);
    }

    #[test]
    fn status_display() {
        assert_eq!(AppointmentStatus::Scheduled.to_string(), "scheduled");
    }
}
