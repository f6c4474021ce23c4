//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` variants into user-facing errors with actionable help text.

use miette::Diagnostic;
use thiserror::Error;

use barberia_config::ConfigError;
use barberia_core::CoreError;

/// Process exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const NOT_FOUND: i32 = 4;
    pub const CONFLICT: i32 = 6;
    pub const CONNECTION: i32 = 7;
    pub const TIMEOUT: i32 = 8;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────
    #[error("Could not reach the booking service at {url}")]
    #[diagnostic(
        code(barberia::connection_failed),
        help(
            "Check that the booking service is running.\n\
             Override the address with --api-url or configure a profile: barberia config init"
        )
    )]
    ConnectionFailed {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Request to the booking service timed out")]
    #[diagnostic(
        code(barberia::timeout),
        help("Increase the limit with --timeout or check the service's health: barberia ping")
    )]
    Timeout,

    // ── Resources ────────────────────────────────────────────────────
    #[error("{resource_type} '{identifier}' not found")]
    #[diagnostic(code(barberia::not_found))]
    NotFound {
        resource_type: String,
        identifier: String,
        #[help]
        hint: Option<String>,
    },

    // ── Rejected writes ──────────────────────────────────────────────
    /// A write the service refused, or a form that failed validation.
    /// `message` is the notification the operator would have seen.
    #[error("{message}")]
    #[diagnostic(code(barberia::action_failed))]
    ActionFailed {
        message: String,
        #[source]
        source: CoreError,
    },

    // ── API ──────────────────────────────────────────────────────────
    #[error("API error: {message}")]
    #[diagnostic(code(barberia::api_error))]
    ApiError { message: String },

    // ── Validation ───────────────────────────────────────────────────
    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(barberia::validation))]
    Validation { field: String, reason: String },

    // ── Configuration ────────────────────────────────────────────────
    #[error("Profile '{name}' not found in configuration")]
    #[diagnostic(
        code(barberia::profile_not_found),
        help(
            "Available profiles: {available}\n\
             Create one with: barberia config init"
        )
    )]
    ProfileNotFound { name: String, available: String },

    #[error(transparent)]
    #[diagnostic(code(barberia::config))]
    Config(#[from] ConfigError),

    // ── Interactive ──────────────────────────────────────────────────
    #[error("Prompt failed: {0}")]
    #[diagnostic(
        code(barberia::prompt),
        help("Use --yes (-y) to skip confirmation in non-interactive contexts.")
    )]
    Prompt(String),

    // ── IO / Serialization ────────────────────────────────────────────
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Failed to render output: {0}")]
    #[diagnostic(code(barberia::render))]
    Render(String),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } => exit_code::CONNECTION,
            Self::Timeout => exit_code::TIMEOUT,
            Self::NotFound { .. } => exit_code::NOT_FOUND,
            Self::Validation { .. } | Self::ProfileNotFound { .. } => exit_code::USAGE,
            Self::ActionFailed { source, .. } => core_exit_code(source),
            _ => exit_code::GENERAL,
        }
    }

    /// Wrap a failed write, labelled with the notification it produced.
    pub fn action(message: impl Into<String>, source: CoreError) -> Self {
        Self::ActionFailed {
            message: message.into(),
            source,
        }
    }
}

fn core_exit_code(err: &CoreError) -> i32 {
    match err {
        CoreError::ConnectionFailed { .. } => exit_code::CONNECTION,
        CoreError::Timeout => exit_code::TIMEOUT,
        CoreError::NotFound { .. } => exit_code::NOT_FOUND,
        CoreError::Conflict { .. } => exit_code::CONFLICT,
        CoreError::ValidationFailed { .. } => exit_code::USAGE,
        _ => exit_code::GENERAL,
    }
}

// ── CoreError → CliError mapping ─────────────────────────────────────

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ConnectionFailed { url, reason } => CliError::ConnectionFailed {
                url,
                source: reason.into(),
            },

            CoreError::Timeout => CliError::Timeout,

            CoreError::NotFound {
                entity_type,
                identifier,
            } => CliError::NotFound {
                hint: list_command(&entity_type)
                    .map(|cmd| format!("Run: barberia {cmd} to see what exists")),
                resource_type: entity_type,
                identifier,
            },

            CoreError::ValidationFailed { message } => CliError::Validation {
                field: "input".into(),
                reason: message,
            },

            CoreError::Config { message } => CliError::Validation {
                field: "configuration".into(),
                reason: message,
            },

            e @ (CoreError::Conflict { .. } | CoreError::Rejected { .. }) => {
                CliError::action(e.to_string(), e)
            }

            CoreError::Api { message, .. } | CoreError::Internal(message) => {
                CliError::ApiError { message }
            }
        }
    }
}

/// The listing subcommand for an entity type, when the CLI has one.
fn list_command(entity_type: &str) -> Option<&'static str> {
    match entity_type {
        "appointment" => Some("appointments list"),
        "barber" => Some("barbers list"),
        "client" => Some("clients list"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_exit_code_follows_cause() {
        let conflict = CliError::action(
            "Document or phone already registered",
            CoreError::Conflict {
                message: String::new(),
            },
        );
        assert_eq!(conflict.exit_code(), exit_code::CONFLICT);
        assert_eq!(conflict.to_string(), "Document or phone already registered");

        let invalid = CliError::action(
            "Name is required",
            CoreError::ValidationFailed {
                message: "Name is required".into(),
            },
        );
        assert_eq!(invalid.exit_code(), exit_code::USAGE);
    }

    #[test]
    fn core_errors_map_to_exit_codes() {
        assert_eq!(CliError::from(CoreError::Timeout).exit_code(), exit_code::TIMEOUT);
        let refused = CliError::from(CoreError::ConnectionFailed {
            url: "http://127.0.0.1:9/api".into(),
            reason: "refused".into(),
        });
        assert_eq!(refused.exit_code(), exit_code::CONNECTION);
        assert_eq!(CliError::from(CoreError::Internal("x".into())).exit_code(), exit_code::GENERAL);
    }

    #[test]
    fn not_found_hint_points_at_a_real_subcommand() {
        let known = CliError::from(CoreError::NotFound {
            entity_type: "appointment".into(),
            identifier: "8".into(),
        });
        assert_eq!(known.exit_code(), exit_code::NOT_FOUND);
        assert_eq!(
            known.help().map(|h| h.to_string()).as_deref(),
            Some("Run: barberia appointments list to see what exists")
        );

        let unknown = CliError::from(CoreError::NotFound {
            entity_type: "resource".into(),
            identifier: String::new(),
        });
        assert_eq!(unknown.exit_code(), exit_code::NOT_FOUND);
        assert!(unknown.help().is_none());
    }
}
