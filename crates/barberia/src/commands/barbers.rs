//! `barberia barbers ...`

use std::sync::Arc;

use tabled::Tabled;

use barberia_core::view::active_barbers;
use barberia_core::{Barber, BarberForm, Controller, DayOfWeek, EntityId, ScheduleForm};

use crate::cli::BarbersCommand;
use crate::error::CliError;
use crate::output::Printer;

use super::util;

#[derive(Tabled)]
struct BarberRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Specialty")]
    specialty: String,
    #[tabled(rename = "Phone")]
    phone: String,
    #[tabled(rename = "Active")]
    active: &'static str,
}

fn row(barber: &Arc<Barber>) -> BarberRow {
    BarberRow {
        id: barber.id.to_string(),
        name: barber.name.clone(),
        specialty: barber.specialty.clone().unwrap_or_else(|| "-".into()),
        phone: barber.phone.clone().unwrap_or_else(|| "-".into()),
        active: if barber.active { "yes" } else { "no" },
    }
}

pub async fn handle(
    controller: &Controller,
    cmd: BarbersCommand,
    out: &Printer,
) -> Result<(), CliError> {
    match cmd {
        BarbersCommand::List { active } => list(controller, active, out).await,
        BarbersCommand::Create {
            name,
            specialty,
            phone,
        } => {
            let mut form = BarberForm {
                name,
                specialty,
                phone,
            };
            let result = controller.submit(&mut form).await;
            util::finish(controller, result, out)
        }
        BarbersCommand::Schedule {
            barber,
            day,
            start,
            end,
        } => schedule(controller, EntityId::from(barber), day, start, end, out).await,
    }
}

async fn list(controller: &Controller, only_active: bool, out: &Printer) -> Result<(), CliError> {
    util::load(controller, out).await;
    let all = controller.barbers_snapshot();
    let shown = if only_active {
        active_barbers(&all)
    } else {
        all.to_vec()
    };
    out.list(&shown, row, |b| b.id.to_string())
}

async fn schedule(
    controller: &Controller,
    barber: EntityId,
    day: DayOfWeek,
    start: String,
    end: String,
    out: &Printer,
) -> Result<(), CliError> {
    let mut form = ScheduleForm::new(barber);
    form.day = day;
    form.start_time = start;
    form.end_time = end;
    let result = controller.submit(&mut form).await;
    util::finish(controller, result, out)
}
