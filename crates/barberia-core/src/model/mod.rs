// ── Domain model ──
//
// Client-side projections of the server's resources. The server owns
// persistence; these types are rebuilt from scratch on every reload.

mod appointment;
mod barber;
mod client;
mod entity_id;
mod schedule;

pub use appointment::{Appointment, AppointmentStatus};
pub use barber::Barber;
pub use client::Client;
pub use entity_id::EntityId;
pub use schedule::DayOfWeek;
