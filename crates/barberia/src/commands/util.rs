//! Helpers shared by the handlers.

use barberia_core::{
    CommandResult, Confirm, Controller, CoreError, Notification, NotificationKind,
};

use crate::error::CliError;
use crate::output::Printer;

/// Asks on the terminal unless `--yes` was given.
///
/// A prompt that cannot be shown (no TTY) counts as "no".
pub struct TerminalConfirm {
    pub yes: bool,
}

impl Confirm for TerminalConfirm {
    fn confirm(&self, prompt: &str) -> bool {
        self.yes
            || dialoguer::Confirm::new()
                .with_prompt(prompt)
                .default(false)
                .interact()
                .unwrap_or_else(|e| {
                    tracing::warn!(error = %e, "cannot prompt; treating as declined");
                    false
                })
    }
}

/// Reload everything, printing one error line per collection that failed.
pub async fn load(controller: &Controller, out: &Printer) {
    let report = controller.reload_all().await;
    for collection in report.failed {
        out.notice(collection.load_error_message(), NotificationKind::Error);
    }
}

/// Report a write.
///
/// On failure the error carries the message of the notification the
/// controller published, so the terminal shows the same text.
pub fn finish(
    controller: &Controller,
    result: Result<CommandResult, CoreError>,
    out: &Printer,
) -> Result<(), CliError> {
    let done = result.map_err(|err| {
        match controller.notification().filter(Notification::is_error) {
            Some(shown) => CliError::action(shown.message, err),
            None => err.into(),
        }
    })?;

    out.notification(&done.notification);
    for collection in done.reload.failed {
        out.notice(collection.load_error_message(), NotificationKind::Error);
    }
    Ok(())
}
