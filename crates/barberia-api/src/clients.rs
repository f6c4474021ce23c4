// Client (customer) endpoints

use tracing::debug;

use crate::client::ApiClient;
use crate::error::Error;
use crate::models::{ClientEntry, NewClient};

const RESOURCE: &str = "clientes";

impl ApiClient {
    /// List all registered clients.
    ///
    /// `GET /clientes`
    pub async fn list_clients(&self) -> Result<Vec<ClientEntry>, Error> {
        let url = self.url(RESOURCE)?;
        debug!("listing clients");
        self.get_list(url, RESOURCE).await
    }

    /// Register a client. The server rejects duplicate `documento` or
    /// `telefono` values with a non-2xx status.
    ///
    /// `POST /clientes` with `{nombre, documento, telefono}`
    pub async fn create_client(&self, client: &NewClient) -> Result<(), Error> {
        let url = self.url(RESOURCE)?;
        debug!(documento = %client.documento, "registering client");
        self.post(url, client).await
    }

    /// Liveness check. Returns the server's plain-text answer.
    ///
    /// `GET /clientes/ping`
    pub async fn ping(&self) -> Result<String, Error> {
        let url = self.url(&format!("{RESOURCE}/ping"))?;
        self.get_text(url).await
    }
}
