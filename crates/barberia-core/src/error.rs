// ── Core error types ──
//
// User-facing errors from barberia-core. Consumers never see reqwest
// errors or JSON parse failures directly; the `From<barberia_api::Error>`
// impl translates transport-layer errors into domain variants.

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Connection errors ────────────────────────────────────────────
    #[error("Cannot reach booking service at {url}: {reason}")]
    ConnectionFailed { url: String, reason: String },

    #[error("Request to booking service timed out")]
    Timeout,

    // ── Data errors ──────────────────────────────────────────────────
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: String,
        identifier: String,
    },

    // ── Operation errors ─────────────────────────────────────────────
    #[error("Rejected as duplicate: {message}")]
    Conflict { message: String },

    #[error("Rejected by server (HTTP {status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("Validation failed: {message}")]
    ValidationFailed { message: String },

    // ── API errors (wrapped, not exposed raw) ────────────────────────
    #[error("API error: {message}")]
    Api {
        message: String,
        /// HTTP status code (if applicable).
        status: Option<u16>,
    },

    // ── Configuration errors ─────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    // ── Internal errors ──────────────────────────────────────────────
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Self::ValidationFailed {
            message: message.into(),
        }
    }
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<barberia_api::Error> for CoreError {
    fn from(err: barberia_api::Error) -> Self {
        match err {
            barberia_api::Error::Transport(ref e) => {
                if e.is_timeout() {
                    CoreError::Timeout
                } else if e.is_connect() {
                    CoreError::ConnectionFailed {
                        url: e
                            .url()
                            .map_or_else(|| "<unknown>".into(), ToString::to_string),
                        reason: e.to_string(),
                    }
                } else {
                    CoreError::Api {
                        message: e.to_string(),
                        status: e.status().map(|s| s.as_u16()),
                    }
                }
            }
            barberia_api::Error::InvalidUrl(e) => CoreError::Config {
                message: format!("Invalid URL: {e}"),
            },
            barberia_api::Error::Tls(msg) => CoreError::ConnectionFailed {
                url: String::new(),
                reason: format!("TLS error: {msg}"),
            },
            barberia_api::Error::Status { status: 404, body } => CoreError::NotFound {
                entity_type: "resource".into(),
                identifier: body,
            },
            barberia_api::Error::Status { status: 409, body } => {
                CoreError::Conflict { message: body }
            }
            barberia_api::Error::Status { status, body } if (400..500).contains(&status) => {
                CoreError::Rejected {
                    status,
                    message: body,
                }
            }
            barberia_api::Error::Status { status, body } => CoreError::Api {
                message: body,
                status: Some(status),
            },
            e @ barberia_api::Error::UnexpectedPayload { .. } => CoreError::Api {
                message: e.to_string(),
                status: None,
            },
            barberia_api::Error::Deserialization { message, body: _ } => {
                CoreError::Internal(format!("Deserialization error: {message}"))
            }
        }
    }
}
