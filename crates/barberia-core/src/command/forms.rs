// ── Operator input forms ──
//
// Plain structs holding raw operator input. Validation runs before any
// network call and yields a ready-to-run `Command`. After a successful
// create the controller resets the form to its defaults.

use serde::{Deserialize, Serialize};

use super::Command;
use super::requests::{
    AddScheduleRequest, CreateAppointmentRequest, CreateBarberRequest, CreateClientRequest,
};
use crate::error::CoreError;
use crate::model::{DayOfWeek, EntityId};

pub(crate) const NAME_REQUIRED: &str = "Name is required";
pub(crate) const ALL_FIELDS_REQUIRED: &str = "All fields are required";

/// Default working-hours window offered for a new schedule entry.
pub const DEFAULT_SCHEDULE_START: &str = "09:00";
pub const DEFAULT_SCHEDULE_END: &str = "18:00";

/// A form the controller can submit.
pub trait Form {
    /// Check required fields and build the command to run.
    fn validate(&self) -> Result<Command, CoreError>;

    /// Restore the form's defaults.
    fn reset(&mut self);
}

fn filled(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

fn require_all(values: &[&str]) -> Result<(), CoreError> {
    if values.iter().all(|v| !v.trim().is_empty()) {
        Ok(())
    } else {
        Err(CoreError::validation(ALL_FIELDS_REQUIRED))
    }
}

/// Combine a `YYYY-MM-DD` date and `HH:MM` time into a local timestamp.
pub(crate) fn local_timestamp(date: &str, time: &str) -> String {
    format!("{}T{}:00", date.trim(), time.trim())
}

// ── Barber ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BarberForm {
    pub name: String,
    pub specialty: String,
    pub phone: String,
}

impl Form for BarberForm {
    fn validate(&self) -> Result<Command, CoreError> {
        let name = filled(&self.name).ok_or_else(|| CoreError::validation(NAME_REQUIRED))?;
        Ok(Command::CreateBarber(CreateBarberRequest {
            name,
            specialty: filled(&self.specialty),
            phone: filled(&self.phone),
        }))
    }

    fn reset(&mut self) {
        *self = Self::default();
    }
}

// ── Client ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientForm {
    pub name: String,
    pub document: String,
    pub phone: String,
}

impl Form for ClientForm {
    fn validate(&self) -> Result<Command, CoreError> {
        require_all(&[&self.name, &self.document, &self.phone])?;
        Ok(Command::CreateClient(CreateClientRequest {
            name: self.name.trim().to_owned(),
            document: self.document.trim().to_owned(),
            phone: self.phone.trim().to_owned(),
        }))
    }

    fn reset(&mut self) {
        *self = Self::default();
    }
}

// ── Appointment ──────────────────────────────────────────────────────

/// Booking input. `date` is `YYYY-MM-DD`, times are `HH:MM`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppointmentForm {
    pub client_id: String,
    pub barber_id: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
}

impl Form for AppointmentForm {
    fn validate(&self) -> Result<Command, CoreError> {
        require_all(&[
            &self.client_id,
            &self.barber_id,
            &self.date,
            &self.start_time,
            &self.end_time,
        ])?;
        Ok(Command::CreateAppointment(CreateAppointmentRequest {
            client_id: EntityId::from(self.client_id.as_str()),
            barber_id: EntityId::from(self.barber_id.as_str()),
            start: local_timestamp(&self.date, &self.start_time),
            end: local_timestamp(&self.date, &self.end_time),
        }))
    }

    fn reset(&mut self) {
        *self = Self::default();
    }
}

// ── Schedule ─────────────────────────────────────────────────────────

/// Working-hours entry for one barber. Start and end are not compared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleForm {
    pub barber_id: EntityId,
    pub day: DayOfWeek,
    pub start_time: String,
    pub end_time: String,
}

impl ScheduleForm {
    pub fn new(barber_id: EntityId) -> Self {
        Self {
            barber_id,
            day: DayOfWeek::default(),
            start_time: DEFAULT_SCHEDULE_START.to_owned(),
            end_time: DEFAULT_SCHEDULE_END.to_owned(),
        }
    }
}

impl Form for ScheduleForm {
    fn validate(&self) -> Result<Command, CoreError> {
        Ok(Command::AddSchedule {
            barber_id: self.barber_id.clone(),
            entry: AddScheduleRequest {
                day: self.day,
                start_time: self.start_time.trim().to_owned(),
                end_time: self.end_time.trim().to_owned(),
            },
        })
    }

    /// Keeps the barber; the form stays open for the next entry.
    fn reset(&mut self) {
        *self = Self::new(self.barber_id.clone());
    }
}
