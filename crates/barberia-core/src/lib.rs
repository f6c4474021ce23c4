// barberia-core: Snapshot data layer between barberia-api and consumers (CLI).

pub mod command;
pub mod config;
pub mod controller;
pub mod convert;
pub mod error;
pub mod model;
pub mod notify;
pub mod store;
pub mod stream;
pub mod view;

// ── Primary re-exports ──────────────────────────────────────────────
pub use command::forms::{AppointmentForm, BarberForm, ClientForm, Form, ScheduleForm};
pub use command::{Command, CommandResult};
pub use config::{ServiceConfig, TlsVerification};
pub use controller::{Collection, Confirm, Controller, DeleteOutcome, ReloadReport, View};
pub use error::CoreError;
pub use notify::{Notification, NotificationKind, Notifier};
pub use store::{DataStore, LoadState};
pub use stream::{EntityStream, Snapshot};

// Re-export model types at the crate root for ergonomics.
pub use model::{Appointment, AppointmentStatus, Barber, Client, DayOfWeek, EntityId};
