//! Terminal output.
//!
//! Data goes to stdout in the `--output` format. Notices and
//! notifications go to stderr so a piped `-o json` stays parseable.

use std::io::{self, IsTerminal, Write};

use owo_colors::OwoColorize;
use serde::Serialize;
use tabled::{Table, Tabled, settings::Style};

use barberia_core::{Notification, NotificationKind};

use crate::cli::{ColorMode, GlobalOpts, OutputFormat};
use crate::error::CliError;

fn color_enabled(mode: &ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => io::stderr().is_terminal() && std::env::var_os("NO_COLOR").is_none(),
    }
}

/// Writes command results and status lines according to the global flags.
pub struct Printer {
    format: OutputFormat,
    quiet: bool,
    color: bool,
}

impl Printer {
    pub fn new(global: &GlobalOpts) -> Self {
        Self {
            format: global.output.clone(),
            quiet: global.quiet,
            color: color_enabled(&global.color),
        }
    }

    /// Print a collection. `row` builds the table view, `key` the plain one.
    pub fn list<T, R>(
        &self,
        items: &[T],
        row: impl Fn(&T) -> R,
        key: impl Fn(&T) -> String,
    ) -> Result<(), CliError>
    where
        T: Serialize,
        R: Tabled,
    {
        let text = match self.format {
            OutputFormat::Table => Table::new(items.iter().map(row))
                .with(Style::rounded())
                .to_string(),
            OutputFormat::Plain => items.iter().map(key).collect::<Vec<_>>().join("\n"),
            _ => self.structured(items)?,
        };
        self.data(&text);
        Ok(())
    }

    /// Print one record. `detail` builds the human view, `key` the plain one.
    pub fn item<T: Serialize>(
        &self,
        item: &T,
        detail: impl FnOnce(&T) -> String,
        key: impl FnOnce(&T) -> String,
    ) -> Result<(), CliError> {
        let text = match self.format {
            OutputFormat::Table => detail(item),
            OutputFormat::Plain => key(item),
            _ => self.structured(item)?,
        };
        self.data(&text);
        Ok(())
    }

    /// Raw text to stdout.
    pub fn data(&self, text: &str) {
        if self.quiet || text.is_empty() {
            return;
        }
        let _ = writeln!(io::stdout().lock(), "{text}");
    }

    /// Informational line on stderr; suppressed by `--quiet`.
    pub fn note(&self, text: &str) {
        if !self.quiet {
            let _ = writeln!(io::stderr().lock(), "{text}");
        }
    }

    pub fn notification(&self, notification: &Notification) {
        self.notice(&notification.message, notification.kind);
    }

    /// Success or error line on stderr. Errors survive `--quiet`.
    pub fn notice(&self, message: &str, kind: NotificationKind) {
        let mut stderr = io::stderr().lock();
        let _ = match kind {
            NotificationKind::Error if self.color => {
                writeln!(stderr, "{}", format!("✗ {message}").red())
            }
            NotificationKind::Error => writeln!(stderr, "✗ {message}"),
            NotificationKind::Success if self.quiet => Ok(()),
            NotificationKind::Success if self.color => {
                writeln!(stderr, "{}", format!("✓ {message}").green())
            }
            NotificationKind::Success => writeln!(stderr, "✓ {message}"),
        };
    }

    fn structured<T: Serialize + ?Sized>(&self, value: &T) -> Result<String, CliError> {
        let rendered = match self.format {
            OutputFormat::Yaml => serde_yaml::to_string(value).map_err(|e| e.to_string()),
            OutputFormat::JsonCompact => serde_json::to_string(value).map_err(|e| e.to_string()),
            _ => serde_json::to_string_pretty(value).map_err(|e| e.to_string()),
        };
        rendered.map_err(CliError::Render)
    }
}
