// Appointment endpoints

use tracing::debug;

use crate::client::ApiClient;
use crate::error::Error;
use crate::models::{AppointmentEntry, NewAppointment, ResourceId};

const RESOURCE: &str = "citas";

impl ApiClient {
    /// List all appointments, each embedding its `cliente` and `barbero`.
    ///
    /// `GET /citas`
    pub async fn list_appointments(&self) -> Result<Vec<AppointmentEntry>, Error> {
        let url = self.url(RESOURCE)?;
        debug!("listing appointments");
        self.get_list(url, RESOURCE).await
    }

    /// Book an appointment.
    ///
    /// `POST /citas` with `{clienteId, barberoId, fechaHoraInicio, fechaHoraFin}`
    pub async fn create_appointment(&self, appointment: &NewAppointment) -> Result<(), Error> {
        let url = self.url(RESOURCE)?;
        debug!(
            cliente = %appointment.cliente_id,
            barbero = %appointment.barbero_id,
            inicio = %appointment.fecha_hora_inicio,
            "booking appointment"
        );
        self.post(url, appointment).await
    }

    /// Delete (cancel) an appointment.
    ///
    /// `DELETE /citas/{id}`, with `?motivo=` when a reason is given.
    pub async fn delete_appointment(
        &self,
        id: &ResourceId,
        reason: Option<&str>,
    ) -> Result<(), Error> {
        let mut url = self.url(&format!("{RESOURCE}/{id}"))?;
        if let Some(reason) = reason {
            url.query_pairs_mut().append_pair("motivo", reason);
        }
        debug!(%id, "deleting appointment");
        self.delete(url).await
    }
}
