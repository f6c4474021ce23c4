// ── Typed request structs for Command payloads ──
//
// These are validated, domain-typed payloads. Forms produce them; the
// controller converts them into wire bodies at the API boundary.

use barberia_api::models::{NewAppointment, NewBarber, NewClient, NewScheduleEntry, ResourceId};
use serde::{Deserialize, Serialize};

use crate::model::{DayOfWeek, EntityId};

// ── Barber ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateBarberRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specialty: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl From<&CreateBarberRequest> for NewBarber {
    fn from(req: &CreateBarberRequest) -> Self {
        Self {
            nombre: req.name.clone(),
            especialidad: req.specialty.clone().unwrap_or_default(),
            telefono: req.phone.clone().unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddScheduleRequest {
    pub day: DayOfWeek,
    /// `HH:MM`
    pub start_time: String,
    /// `HH:MM`
    pub end_time: String,
}

impl From<&AddScheduleRequest> for NewScheduleEntry {
    fn from(req: &AddScheduleRequest) -> Self {
        Self {
            dia_semana: req.day.number(),
            hora_inicio: req.start_time.clone(),
            hora_fin: req.end_time.clone(),
        }
    }
}

// ── Client ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateClientRequest {
    pub name: String,
    pub document: String,
    pub phone: String,
}

impl From<&CreateClientRequest> for NewClient {
    fn from(req: &CreateClientRequest) -> Self {
        Self {
            nombre: req.name.clone(),
            documento: req.document.clone(),
            telefono: req.phone.clone(),
        }
    }
}

// ── Appointment ────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateAppointmentRequest {
    pub client_id: EntityId,
    pub barber_id: EntityId,
    /// Local `YYYY-MM-DDTHH:MM:SS`, no zone.
    pub start: String,
    pub end: String,
}

impl From<&CreateAppointmentRequest> for NewAppointment {
    fn from(req: &CreateAppointmentRequest) -> Self {
        Self {
            cliente_id: ResourceId::from(&req.client_id),
            barbero_id: ResourceId::from(&req.barber_id),
            fecha_hora_inicio: req.start.clone(),
            fecha_hora_fin: req.end.clone(),
        }
    }
}
