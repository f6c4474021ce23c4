//! `barberia ping`

use barberia_core::Controller;

use crate::error::CliError;
use crate::output::Printer;

pub async fn handle(controller: &Controller, out: &Printer) -> Result<(), CliError> {
    let answer = controller.ping().await?;
    tracing::info!(api_url = %controller.config().api_url, "service answered");
    out.data(answer.trim());
    Ok(())
}
