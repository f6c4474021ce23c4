use thiserror::Error;

/// Top-level error type for the `barberia-api` crate.
///
/// Covers transport failures, rejected writes and malformed payloads.
/// `barberia-core` maps these into user-facing diagnostics and decides
/// which of them degrade to an empty collection.
#[derive(Debug, Error)]
pub enum Error {
    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// TLS setup or certificate error.
    #[error("TLS error: {0}")]
    Tls(String),

    // ── Server responses ────────────────────────────────────────────
    /// Non-2xx response. The body is kept verbatim for diagnostics;
    /// it is never parsed into a structured error.
    #[error("Server responded with HTTP {status}")]
    Status { status: u16, body: String },

    // ── Data ────────────────────────────────────────────────────────
    /// A list endpoint answered 2xx with something other than a JSON array.
    #[error("Unexpected payload from /{resource}: expected a JSON array")]
    UnexpectedPayload { resource: &'static str, body: String },

    /// JSON deserialization failed, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },
}

impl Error {
    /// HTTP status code, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Returns `true` if the server rejected the write as a duplicate.
    pub fn is_conflict(&self) -> bool {
        self.status() == Some(409)
    }

    /// Returns `true` if this is a "not found" error.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Returns `true` if the request never produced a usable response.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Transport(e) => e.is_timeout() || e.is_connect(),
            Self::Status { status, .. } => *status >= 500,
            _ => false,
        }
    }

    /// Raw response body captured alongside the error, if any.
    pub fn body(&self) -> Option<&str> {
        match self {
            Self::Status { body, .. }
            | Self::UnexpectedPayload { body, .. }
            | Self::Deserialization { body, .. } => Some(body),
            _ => None,
        }
    }
}
