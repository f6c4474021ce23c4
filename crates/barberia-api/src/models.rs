// Wire types for the booking API
//
// Field names are the server's JSON contract (Spanish, camelCase) and
// must not change. Response types are lenient: every field the server
// might omit has a default so a sparse record never fails a whole list.

use std::fmt;

use serde::{Deserialize, Serialize};

// ── Identifiers ─────────────────────────────────────────────────────

/// Server-assigned identifier as it appears on the wire.
///
/// The reference server emits numeric ids; string ids are accepted so
/// the client keeps working against servers that use opaque keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResourceId {
    Number(i64),
    Text(String),
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "{s}"),
        }
    }
}

// ── Responses ───────────────────────────────────────────────────────

/// Barber record from `GET /barberos`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarberEntry {
    pub id: ResourceId,
    #[serde(default)]
    pub nombre: String,
    #[serde(default)]
    pub especialidad: Option<String>,
    #[serde(default)]
    pub telefono: Option<String>,
    #[serde(default)]
    pub activo: bool,
}

/// Client record from `GET /clientes`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientEntry {
    pub id: ResourceId,
    #[serde(default)]
    pub nombre: String,
    #[serde(default)]
    pub documento: String,
    #[serde(default)]
    pub telefono: String,
}

/// Embedded `cliente` / `barbero` object inside an appointment.
///
/// Only the name is used for display; the rest of the embedded record
/// is ignored.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PartyRef {
    #[serde(default)]
    pub id: Option<ResourceId>,
    #[serde(default)]
    pub nombre: Option<String>,
}

/// Appointment record from `GET /citas`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentEntry {
    pub id: ResourceId,
    /// Local date-time without zone, e.g. `2025-03-14T10:00:00`.
    #[serde(default)]
    pub fecha_hora_inicio: Option<String>,
    #[serde(default)]
    pub fecha_hora_fin: Option<String>,
    #[serde(default)]
    pub cliente: Option<PartyRef>,
    #[serde(default)]
    pub barbero: Option<PartyRef>,
    /// `AGENDADA`, `CANCELADA` or `COMPLETADA`.
    #[serde(default)]
    pub estado: Option<String>,
}

// ── Requests ────────────────────────────────────────────────────────

/// Body for `POST /barberos`. All three fields are always sent; an
/// unset specialty or phone goes out as `""`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewBarber {
    pub nombre: String,
    pub especialidad: String,
    pub telefono: String,
}

/// Body for `POST /clientes`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewClient {
    pub nombre: String,
    pub documento: String,
    pub telefono: String,
}

/// Body for `POST /citas`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAppointment {
    pub cliente_id: ResourceId,
    pub barbero_id: ResourceId,
    pub fecha_hora_inicio: String,
    pub fecha_hora_fin: String,
}

/// Body for `POST /barberos/{id}/horarios`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewScheduleEntry {
    /// 1 = Monday … 7 = Sunday.
    pub dia_semana: u8,
    /// `HH:MM`
    pub hora_inicio: String,
    /// `HH:MM`
    pub hora_fin: String,
}
