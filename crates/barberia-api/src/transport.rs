// ── HTTP transport ──
//
// Builds the single `reqwest::Client` used for every request to the
// booking service: trust roots, optional request timeout, user agent.

use std::path::{Path, PathBuf};
use std::time::Duration;

use reqwest::ClientBuilder;

use crate::error::Error;

const USER_AGENT: &str = concat!("barberia/", env!("CARGO_PKG_VERSION"));

/// Which certificates the client trusts.
#[derive(Debug, Clone, Default)]
pub enum TlsMode {
    #[default]
    System,
    /// Trust an extra PEM-encoded CA on top of the system roots.
    CustomCa(PathBuf),
    /// Trust anything. Development servers only.
    DangerAcceptInvalid,
}

/// Connection settings for the booking service.
///
/// No timeout by default: a hung request stays pending until the server
/// or the OS gives up.
#[derive(Debug, Clone, Default)]
pub struct TransportConfig {
    pub tls: TlsMode,
    pub timeout: Option<Duration>,
}

impl TransportConfig {
    pub fn with_timeout(self, timeout: Duration) -> Self {
        Self {
            timeout: Some(timeout),
            ..self
        }
    }

    pub fn build_client(&self) -> Result<reqwest::Client, Error> {
        let builder = reqwest::Client::builder().user_agent(USER_AGENT);
        let builder = match self.timeout {
            Some(timeout) => builder.timeout(timeout),
            None => builder,
        };

        trust(builder, &self.tls)?
            .build()
            .map_err(|e| Error::Tls(format!("cannot build HTTP client: {e}")))
    }
}

fn trust(builder: ClientBuilder, mode: &TlsMode) -> Result<ClientBuilder, Error> {
    Ok(match mode {
        TlsMode::System => builder,
        TlsMode::CustomCa(path) => builder.add_root_certificate(read_ca(path)?),
        TlsMode::DangerAcceptInvalid => builder.danger_accept_invalid_certs(true),
    })
}

fn read_ca(path: &Path) -> Result<reqwest::Certificate, Error> {
    let pem = std::fs::read(path)
        .map_err(|e| Error::Tls(format!("cannot read CA file {}: {e}", path.display())))?;
    reqwest::Certificate::from_pem(&pem)
        .map_err(|e| Error::Tls(format!("{} is not a PEM certificate: {e}", path.display())))
}
