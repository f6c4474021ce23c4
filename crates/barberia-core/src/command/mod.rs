// ── Command API ──
//
// All write operations flow through a unified `Command` enum. The
// controller routes each variant to its API call and, on success,
// triggers a full reload.

pub mod forms;
pub mod requests;

use crate::controller::ReloadReport;
use crate::model::EntityId;
use crate::notify::Notification;

pub use requests::{
    AddScheduleRequest, CreateAppointmentRequest, CreateBarberRequest, CreateClientRequest,
};

/// All possible write operations against the booking service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    CreateBarber(CreateBarberRequest),
    AddSchedule {
        barber_id: EntityId,
        entry: AddScheduleRequest,
    },
    CreateClient(CreateClientRequest),
    CreateAppointment(CreateAppointmentRequest),
    DeleteAppointment {
        id: EntityId,
        reason: Option<String>,
    },
}

impl Command {
    /// Notification text shown after the command succeeds.
    pub fn success_message(&self) -> &'static str {
        match self {
            Self::CreateBarber(_) => "Barber created",
            Self::AddSchedule { .. } => "Schedule added",
            Self::CreateClient(_) => "Client registered",
            Self::CreateAppointment(_) => "Appointment booked",
            Self::DeleteAppointment { .. } => "Appointment deleted",
        }
    }

    /// Notification text shown when the command fails.
    ///
    /// Every rejection of a client registration is reported as a
    /// duplicate; the server does not say which field collided.
    pub fn failure_message(&self, err: &barberia_api::Error) -> &'static str {
        match self {
            Self::CreateBarber(_) => "Failed to create barber",
            Self::AddSchedule { .. } => "Failed to add schedule",
            Self::CreateClient(_) if err.status().is_some() => {
                "Document or phone already registered"
            }
            Self::CreateClient(_) => "Failed to register client",
            Self::CreateAppointment(_) => "Failed to book appointment",
            Self::DeleteAppointment { .. } => "Failed to delete appointment",
        }
    }

    /// The existing record a command addresses, as `(entity type, id)`.
    /// Creates address nothing yet and return `None`.
    pub fn target(&self) -> Option<(&'static str, String)> {
        match self {
            Self::AddSchedule { barber_id, .. } => Some(("barber", barber_id.to_string())),
            Self::DeleteAppointment { id, .. } => Some(("appointment", id.to_string())),
            Self::CreateBarber(_) | Self::CreateClient(_) | Self::CreateAppointment(_) => None,
        }
    }
}

/// Outcome of a successfully executed command.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// The success notification published for the write.
    pub notification: Notification,
    /// The reload that followed the write.
    pub reload: ReloadReport,
}
