// Booking API HTTP client
//
// Wraps `reqwest::Client` with base-path URL construction, status
// checking and list-payload validation. Endpoint modules (barbers,
// clients, appointments) are implemented as inherent methods in
// separate files to keep this module focused on transport mechanics.

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

use crate::error::Error;
use crate::transport::TransportConfig;

/// Raw HTTP client for the booking service.
///
/// Strict: every failure is returned as an [`Error`]. Callers that want
/// fail-soft behavior (empty list on any failure) layer it on top.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    /// Create a new client from a `TransportConfig`.
    ///
    /// `base_url` is the API root including its path prefix, e.g.
    /// `http://localhost:8080/api`.
    pub fn new(base_url: Url, transport: &TransportConfig) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Ok(Self { http, base_url })
    }

    /// Create a client with a pre-built `reqwest::Client`.
    pub fn with_client(http: reqwest::Client, base_url: Url) -> Self {
        Self { http, base_url }
    }

    /// Parse `base_url` and wrap an existing `reqwest::Client`.
    pub fn from_reqwest(base_url: &str, http: reqwest::Client) -> Result<Self, Error> {
        Ok(Self::with_client(http, Url::parse(base_url)?))
    }

    /// The API root URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // ── URL builders ─────────────────────────────────────────────────

    /// Build `{base}/{path}`, preserving any path prefix on the base.
    pub(crate) fn url(&self, path: &str) -> Result<Url, Error> {
        let full = format!(
            "{}/{}",
            self.base_url.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        );
        Ok(Url::parse(&full)?)
    }

    // ── Request helpers ──────────────────────────────────────────────

    /// GET a list endpoint and insist on a JSON array.
    pub(crate) async fn get_list<T: DeserializeOwned>(
        &self,
        url: Url,
        resource: &'static str,
    ) -> Result<Vec<T>, Error> {
        debug!("GET {}", url);

        let resp = self.http.get(url).send().await.map_err(Error::Transport)?;
        let resp = ensure_success(resp).await?;
        let body = resp.text().await.map_err(Error::Transport)?;

        let value: serde_json::Value =
            serde_json::from_str(&body).map_err(|e| Error::Deserialization {
                message: e.to_string(),
                body: body.clone(),
            })?;

        if !value.is_array() {
            warn!(resource, body = %body, "list endpoint returned a non-array payload");
            return Err(Error::UnexpectedPayload { resource, body });
        }

        serde_json::from_value(value).map_err(|e| Error::Deserialization {
            message: e.to_string(),
            body,
        })
    }

    /// GET an endpoint that answers with plain text.
    pub(crate) async fn get_text(&self, url: Url) -> Result<String, Error> {
        debug!("GET {}", url);

        let resp = self.http.get(url).send().await.map_err(Error::Transport)?;
        let resp = ensure_success(resp).await?;
        resp.text().await.map_err(Error::Transport)
    }

    /// POST a JSON body. Any response body on success is discarded.
    pub(crate) async fn post(&self, url: Url, body: &impl Serialize) -> Result<(), Error> {
        debug!("POST {}", url);

        let resp = self
            .http
            .post(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .json(body)
            .send()
            .await
            .map_err(Error::Transport)?;

        ensure_success(resp).await.map(drop)
    }

    /// Send a DELETE request.
    pub(crate) async fn delete(&self, url: Url) -> Result<(), Error> {
        debug!("DELETE {}", url);

        let resp = self.http.delete(url).send().await.map_err(Error::Transport)?;

        ensure_success(resp).await.map(drop)
    }
}

/// Pass 2xx responses through; capture status and body text otherwise.
async fn ensure_success(resp: reqwest::Response) -> Result<reqwest::Response, Error> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let url = resp.url().clone();
    let body = resp.text().await.unwrap_or_default();
    warn!(%url, status = status.as_u16(), body = %body, "request rejected by server");

    Err(Error::Status {
        status: status.as_u16(),
        body,
    })
}
