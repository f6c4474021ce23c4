//! `barberia dashboard`

use chrono::Local;

use barberia_core::Controller;
use barberia_core::view::DashboardSummary;

use crate::error::CliError;
use crate::output::Printer;

use super::util;

fn detail(s: &DashboardSummary) -> String {
    format!(
        "Active barbers      {}\nClients             {}\nAppointments today  {}\nAppointments total  {}",
        s.active_barbers, s.clients, s.appointments_today, s.appointments_total
    )
}

pub async fn handle(controller: &Controller, out: &Printer) -> Result<(), CliError> {
    util::load(controller, out).await;
    let summary = DashboardSummary::from_store(controller.store(), Local::now().date_naive());
    out.item(&summary, detail, |s| s.appointments_today.to_string())
}
