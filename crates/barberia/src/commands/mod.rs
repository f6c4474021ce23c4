//! Subcommand handlers. Each one loads or writes through the `Controller`
//! and reports through a shared `Printer`.

pub mod appointments;
pub mod barbers;
pub mod clients;
pub mod config_cmd;
pub mod dashboard;
pub mod ping;
pub mod util;

use barberia_core::Controller;

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;
use crate::output::Printer;

/// Run a command that talks to the booking service.
pub async fn dispatch(
    cmd: Command,
    controller: &Controller,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let out = Printer::new(global);
    match cmd {
        Command::Dashboard => dashboard::handle(controller, &out).await,
        Command::Barbers(args) => barbers::handle(controller, args.command, &out).await,
        Command::Clients(args) => clients::handle(controller, args.command, &out).await,
        Command::Appointments(args) => {
            appointments::handle(controller, args.command, global.yes, &out).await
        }
        Command::Ping => ping::handle(controller, &out).await,
        // Handled in main without a controller
        Command::Config(_) | Command::Completions(_) => Ok(()),
    }
}
