// ── Runtime service configuration ──
//
// These types describe *how* to reach the booking service. They never
// touch disk: the CLI builds a `ServiceConfig` (usually through
// barberia-config) and hands it in.

use std::time::Duration;

use url::Url;

/// Default API root of a locally running booking server.
pub const DEFAULT_API_URL: &str = "http://localhost:8080/api";

/// How long a notification stays visible.
pub const DEFAULT_NOTIFICATION_TTL: Duration = Duration::from_secs(3);

/// TLS verification strategy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TlsVerification {
    /// System CA store (strict).
    #[default]
    SystemDefaults,
    /// Custom CA certificate file.
    CustomCa(std::path::PathBuf),
    /// Skip verification (self-signed development servers).
    DangerAcceptInvalid,
}

/// Configuration for talking to one booking service.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// API root including its path prefix (e.g. `http://localhost:8080/api`).
    pub api_url: Url,
    /// TLS verification strategy.
    pub tls: TlsVerification,
    /// Request timeout. `None` leaves requests unbounded.
    pub timeout: Option<Duration>,
    /// Visibility window of each notification.
    pub notification_ttl: Duration,
}

impl ServiceConfig {
    /// Config for `api_url` with every other setting at its default.
    pub fn new(api_url: Url) -> Self {
        Self {
            api_url,
            tls: TlsVerification::default(),
            timeout: None,
            notification_ttl: DEFAULT_NOTIFICATION_TTL,
        }
    }

    pub(crate) fn transport(&self) -> barberia_api::TransportConfig {
        let tls = match &self.tls {
            TlsVerification::SystemDefaults => barberia_api::TlsMode::System,
            TlsVerification::CustomCa(path) => barberia_api::TlsMode::CustomCa(path.clone()),
            TlsVerification::DangerAcceptInvalid => barberia_api::TlsMode::DangerAcceptInvalid,
        };
        barberia_api::TransportConfig {
            tls,
            timeout: self.timeout,
        }
    }
}
