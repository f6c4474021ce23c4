//! `barberia appointments ...`

use std::sync::Arc;

use tabled::Tabled;

use barberia_core::view::{AppointmentRow, appointments_by_start_desc};
use barberia_core::{Appointment, AppointmentForm, Controller, DeleteOutcome, EntityId};

use crate::cli::AppointmentsCommand;
use crate::error::CliError;
use crate::output::Printer;

use super::util::{self, TerminalConfirm};

#[derive(Tabled)]
struct AppointmentTableRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Client")]
    client: String,
    #[tabled(rename = "Barber")]
    barber: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Start")]
    start: String,
    #[tabled(rename = "End")]
    end: String,
    #[tabled(rename = "Status")]
    status: String,
}

fn row(appointment: &Arc<Appointment>) -> AppointmentTableRow {
    let AppointmentRow {
        id,
        client,
        barber,
        date,
        start,
        end,
        status,
    } = AppointmentRow::from(appointment.as_ref());
    AppointmentTableRow {
        id: id.to_string(),
        client,
        barber,
        date,
        start,
        end,
        status,
    }
}

pub async fn handle(
    controller: &Controller,
    cmd: AppointmentsCommand,
    yes: bool,
    out: &Printer,
) -> Result<(), CliError> {
    match cmd {
        AppointmentsCommand::List => {
            util::load(controller, out).await;
            let newest_first = appointments_by_start_desc(&controller.appointments_snapshot());
            out.list(&newest_first, row, |a| a.id.to_string())
        }
        AppointmentsCommand::Book {
            client,
            barber,
            date,
            start,
            end,
        } => {
            let mut form = AppointmentForm {
                client_id: client,
                barber_id: barber,
                date,
                start_time: start,
                end_time: end,
            };
            let result = controller.submit(&mut form).await;
            util::finish(controller, result, out)
        }
        AppointmentsCommand::Delete { id, reason } => {
            let id = EntityId::from(id);
            let outcome = controller
                .delete_appointment(&id, reason, &TerminalConfirm { yes })
                .await;
            match outcome {
                Ok(DeleteOutcome::Declined) => {
                    out.note(&format!("Cancelled; appointment {id} was not deleted"));
                    Ok(())
                }
                Ok(DeleteOutcome::Deleted(done)) => util::finish(controller, Ok(done), out),
                Err(e) => util::finish(controller, Err(e), out),
            }
        }
    }
}
